//! # Display Labels
//!
//! Maps backend enum codes to the French display labels the storefront
//! shows. The backend sends `"CHIEN"` / `"TEST_RAPIDE"` style codes;
//! fixture data already carries human labels. Unknown values pass
//! through unchanged so a new backend category degrades to showing its
//! raw code instead of breaking the page.

/// Returns the display label for an animal category code.
///
/// ```rust
/// use vetshop_core::labels::category_label;
///
/// assert_eq!(category_label("CHIEN"), "Chien");
/// assert_eq!(category_label("Chat"), "Chat"); // already a label
/// ```
pub fn category_label(category: &str) -> String {
    match category {
        "CHIEN" => "Chien".to_string(),
        "CHAT" => "Chat".to_string(),
        other => other.to_string(),
    }
}

/// Returns the display label for a product type code.
pub fn sub_category_label(sub_category: &str) -> String {
    match sub_category {
        "ALIMENT" => "Aliment".to_string(),
        "COMPLEMENT" => "Complément".to_string(),
        "TEST_RAPIDE" => "Test rapide".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_labels() {
        assert_eq!(category_label("CHIEN"), "Chien");
        assert_eq!(category_label("CHAT"), "Chat");
        assert_eq!(sub_category_label("ALIMENT"), "Aliment");
        assert_eq!(sub_category_label("COMPLEMENT"), "Complément");
        assert_eq!(sub_category_label("TEST_RAPIDE"), "Test rapide");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        assert_eq!(category_label("Lapin"), "Lapin");
        assert_eq!(sub_category_label("Jouet"), "Jouet");
    }
}
