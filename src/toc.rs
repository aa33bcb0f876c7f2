//! GitHub-flavored markdown anchor/slug generation for the reference index.

/// Generate a table-of-contents list item linking to a heading.
pub fn render_toc_item(title: &str) -> String {
    format!("* [{}](#{})", title, github_slug(title))
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - keep alphanumerics, spaces, hyphens and underscores; strip everything else
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("date picker"), "date-picker");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(github_slug("tabs.config"), "tabsconfig");
    }

    #[test]
    fn slug_keeps_underscores() {
        assert_eq!(github_slug("modal_service"), "modal_service");
        assert_eq!(render_toc_item("modal_service"), "* [modal_service](#modal_service)");
    }

    #[test]
    fn slug_keeps_hyphens() {
        assert_eq!(github_slug("drop-down"), "drop-down");
    }

    #[test]
    fn slug_uppercase() {
        assert_eq!(github_slug("TypeAhead"), "typeahead");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("date-picker"), "* [date-picker](#date-picker)");
    }
}
