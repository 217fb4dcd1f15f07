//! Site navigation links and active-link matching.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/menu", label: "Menu" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/contact", label: "Contact" },
];

/// Whether `href` should be highlighted for the current location.
///
/// `current` may carry a query string or fragment. The root link only matches
/// the root itself; other links match their own path and anything beneath it.
pub fn is_active_path(href: &str, current: &str) -> bool {
    let path = current
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let path = if path.is_empty() { "/" } else { path };

    if href == "/" {
        return path == "/";
    }
    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only_exact() {
        assert!(is_active_path("/", "/"));
        assert!(is_active_path("/", ""));
        assert!(!is_active_path("/", "/menu"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_active_path("/menu", "/menu"));
        assert!(is_active_path("/menu", "/menu/3"));
        assert!(is_active_path("/menu", "/menu?category=cookies"));
        assert!(!is_active_path("/menu", "/menus"));
        assert!(!is_active_path("/about", "/contact"));
    }
}
