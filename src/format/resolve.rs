//! Scheme allow-list and relative→absolute url resolution

/// Url prefixes exempt from relative-path resolution
const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Whether a url carries an allowed scheme
pub fn is_scheme_allowed(url: &str) -> bool {
    ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// The embedding application's current absolute location.
///
/// Needed only when a produced url is not scheme-allowed and has to be
/// resolved against the running application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationContext {
    /// Scheme and authority, e.g. `https://host:5601`
    pub origin: String,
    /// Path of the current page, e.g. `/app/discover`
    pub pathname: String,
    /// Path the application is mounted under, if any
    pub base_path: Option<String>,
}

impl LocationContext {
    pub fn new(
        origin: impl Into<String>,
        pathname: impl Into<String>,
        base_path: Option<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            pathname: pathname.into(),
            base_path,
        }
    }

    /// Prefix that turns a relative url into an absolute one against this
    /// location.
    ///
    /// The rules are ordered and mutually exclusive, first match wins. The
    /// ordering is load-bearing: a fragment url could otherwise be swallowed
    /// by a permissive base path.
    ///
    /// Supported url shapes: `#/discover`, `/base/app/discover`,
    /// `../app/discover`. Bare relative paths like `app/discover` resolve to
    /// the app mount like any other unrecognized shape.
    pub fn prefix_for(&self, url: &str) -> String {
        if url.starts_with('#') {
            // fragment-only navigation within the current page
            format!("{}{}", self.origin, self.pathname)
        } else if url.starts_with(self.base_path().unwrap_or("/")) {
            // already absolute under the app root
            self.origin.clone()
        } else {
            // assumed relative to the app mount point
            format!(
                "{}{}/app/",
                self.origin,
                self.base_path().unwrap_or_default()
            )
        }
    }

    // An empty base path carries no information; treat it like an absent one
    fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> LocationContext {
        LocationContext::new("http://h", "/app/search", Some("/base".to_string()))
    }

    #[test]
    fn test_allowed_schemes() {
        assert!(is_scheme_allowed("https://a.com"));
        assert!(is_scheme_allowed("http://a.com"));
        assert!(!is_scheme_allowed("ftp://a.com"));
        assert!(!is_scheme_allowed("/relative"));
        assert!(!is_scheme_allowed("javascript:alert(1)"));
    }

    #[test]
    fn test_scheme_must_be_a_prefix() {
        assert!(!is_scheme_allowed("see https://a.com"));
    }

    #[test]
    fn test_fragment_url_resolves_against_current_page() {
        assert_eq!(context().prefix_for("#/discover"), "http://h/app/search");
    }

    #[test]
    fn test_base_path_url_needs_only_origin() {
        assert_eq!(context().prefix_for("/base/app/search"), "http://h");
    }

    #[test]
    fn test_other_urls_resolve_to_app_mount() {
        assert_eq!(context().prefix_for("../app/search"), "http://h/base/app/");
        assert_eq!(context().prefix_for("app/search"), "http://h/base/app/");
    }

    #[test]
    fn test_fragment_wins_over_permissive_base_path() {
        // with a `#` base path, rule order decides: the fragment rule fires
        // before the base-path rule could match
        let ctx = LocationContext::new("http://h", "/page", Some("#".to_string()));
        assert_eq!(ctx.prefix_for("#/discover"), "http://h/page");
    }

    #[test]
    fn test_absent_base_path_defaults_to_slash() {
        let ctx = LocationContext::new("http://h", "/page", None);
        assert_eq!(ctx.prefix_for("/app/search"), "http://h");
        // and contributes nothing to the mount-point prefix
        assert_eq!(ctx.prefix_for("../app/search"), "http://h/app/");
    }

    #[test]
    fn test_empty_base_path_behaves_like_absent() {
        let ctx = LocationContext::new("http://h", "/page", Some(String::new()));
        // an empty prefix would otherwise match every url
        assert_eq!(ctx.prefix_for("../app/search"), "http://h/app/");
        assert_eq!(ctx.prefix_for("/app/search"), "http://h");
    }
}
