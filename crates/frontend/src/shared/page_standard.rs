//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_tickets--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part matches the `domain/aNNN_*` directory of the page, so the
//! id copied from the DOM inspector leads straight to the source.

/// List of records with search, filters and a form modal.
pub const PAGE_CAT_LIST: &str = "list";

/// Dashboard with summary cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Account / profile page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_users--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_users"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_users--detail"));
    }
}
