// Canonical URLs - derive absolute and path-only URLs from a single base case

use crate::config;
use crate::error::{AppError, AppResult};

/// The single base case a model supplies: either the path component or a
/// fully-qualified URL. The trait derives whichever half is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// Path-only, e.g. `/ideas/1/`
    Path(String),
    /// Fully qualified, e.g. `https://example.com/ideas/1/`
    Absolute(String),
}

/// Canonical URL resolution for a persisted model.
///
/// Implementors override [`CanonicalUrl::url_source`] with one of the two
/// variants; both accessors are derived from it. A model that overrides
/// nothing gets a `NotImplemented` error from either accessor instead of
/// unbounded recursion.
pub trait CanonicalUrl {
    /// Base case supplied by the concrete model
    fn url_source(&self) -> AppResult<UrlSource> {
        Err(AppError::NotImplemented(
            "url_source is not overridden for this model".to_string(),
        ))
    }

    /// Path-only component of the canonical URL
    fn get_url_path(&self) -> AppResult<String> {
        match self.url_source()? {
            UrlSource::Path(path) => Ok(path),
            UrlSource::Absolute(url) => Ok(strip_origin(&url)),
        }
    }

    /// Fully-qualified canonical URL
    fn get_absolute_url(&self) -> AppResult<String> {
        match self.url_source()? {
            UrlSource::Absolute(url) => Ok(url),
            UrlSource::Path(path) => {
                Ok(format!("{}{}", config::get().site.website_url, path))
            }
        }
    }
}

/// Strip scheme and host from an absolute URL, keeping path, query and
/// fragment. A value without a scheme is returned unchanged.
fn strip_origin(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let after_scheme = &url[scheme_end + 3..];
            match after_scheme.find('/') {
                Some(path_start) => after_scheme[path_start..].to_string(),
                None => "/".to_string(),
            }
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PathOnly;

    impl CanonicalUrl for PathOnly {
        fn url_source(&self) -> AppResult<UrlSource> {
            Ok(UrlSource::Path("/ideas/1/".to_string()))
        }
    }

    struct AbsoluteOnly;

    impl CanonicalUrl for AbsoluteOnly {
        fn url_source(&self) -> AppResult<UrlSource> {
            Ok(UrlSource::Absolute(
                "https://example.com/ideas/1/?page=2#top".to_string(),
            ))
        }
    }

    struct NoOverride;

    impl CanonicalUrl for NoOverride {}

    #[test]
    fn test_path_base_case_derives_absolute_url() {
        let entity = PathOnly;
        let expected = format!("{}/ideas/1/", crate::config::get().site.website_url);
        assert_eq!(entity.get_absolute_url().unwrap(), expected);
        assert_eq!(entity.get_url_path().unwrap(), "/ideas/1/");
    }

    #[test]
    fn test_absolute_base_case_derives_path() {
        let entity = AbsoluteOnly;
        assert_eq!(entity.get_url_path().unwrap(), "/ideas/1/?page=2#top");
        assert_eq!(
            entity.get_absolute_url().unwrap(),
            "https://example.com/ideas/1/?page=2#top"
        );
    }

    #[test]
    fn test_no_override_fails_with_not_implemented() {
        let entity = NoOverride;
        assert!(matches!(
            entity.get_url_path(),
            Err(AppError::NotImplemented(_))
        ));
        assert!(matches!(
            entity.get_absolute_url(),
            Err(AppError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_strip_origin_without_path() {
        assert_eq!(strip_origin("https://example.com"), "/");
        assert_eq!(strip_origin("/already/a/path"), "/already/a/path");
    }
}
