// Meta Tags - SEO fields rendered as HTML <meta> fragments

use serde::{Deserialize, Serialize};

use crate::framework::schema::{FieldDefinition, FieldType, FieldValidator};

/// Maximum length of each meta attribute
pub const META_MAX_LEN: usize = 255;

/// Descriptive SEO fields mixed into a model.
///
/// Each attribute is optional; rendering a blank attribute produces an
/// empty string rather than an empty tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaTags {
    pub meta_keywords: Option<String>,
    pub meta_description: Option<String>,
    pub meta_author: Option<String>,
    pub meta_copyright: Option<String>,
}

impl MetaTags {
    /// Render one `<meta>` tag, or an empty string for blank content.
    /// Both the name and the content are escaped for embedding in HTML.
    pub fn render_field(name: &str, content: Option<&str>) -> String {
        match content {
            Some(content) if !content.trim().is_empty() => format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ),
            _ => String::new(),
        }
    }

    pub fn get_meta_keywords(&self) -> String {
        Self::render_field("keywords", self.meta_keywords.as_deref())
    }

    pub fn get_meta_description(&self) -> String {
        Self::render_field("description", self.meta_description.as_deref())
    }

    pub fn get_meta_author(&self) -> String {
        Self::render_field("author", self.meta_author.as_deref())
    }

    pub fn get_meta_copyright(&self) -> String {
        Self::render_field("copyright", self.meta_copyright.as_deref())
    }

    /// All four tags in fixed order, non-empty fragments joined by newlines.
    /// An instance with every attribute blank renders as an empty string.
    pub fn get_meta_tags(&self) -> String {
        let fragments = [
            self.get_meta_keywords(),
            self.get_meta_description(),
            self.get_meta_author(),
            self.get_meta_copyright(),
        ];
        fragments
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Validation problems: any attribute over the length cap
    pub fn validate(&self) -> Vec<String> {
        let attributes = [
            ("meta_keywords", &self.meta_keywords),
            ("meta_description", &self.meta_description),
            ("meta_author", &self.meta_author),
            ("meta_copyright", &self.meta_copyright),
        ];

        attributes
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(value) if value.len() > META_MAX_LEN => Some(format!(
                    "{} must be at most {} characters",
                    name, META_MAX_LEN
                )),
                _ => None,
            })
            .collect()
    }

    /// Schema fragment contributed by this mixin
    pub fn fields() -> Vec<FieldDefinition> {
        ["meta_keywords", "meta_description", "meta_author", "meta_copyright"]
            .into_iter()
            .map(|name| {
                FieldDefinition::new(name, FieldType::String)
                    .optional()
                    .validate(FieldValidator::MaxLength(META_MAX_LEN))
            })
            .collect()
    }
}

/// Escape a string for embedding in HTML attribute or text positions
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_instance_renders_empty() {
        let tags = MetaTags::default();
        assert_eq!(tags.get_meta_tags(), "");
    }

    #[test]
    fn test_keywords_only_renders_one_fragment() {
        let tags = MetaTags {
            meta_keywords: Some("a,b".to_string()),
            ..Default::default()
        };
        let rendered = tags.get_meta_tags();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("a,b"));
        assert_eq!(rendered, r#"<meta name="keywords" content="a,b">"#);
    }

    #[test]
    fn test_aggregate_uses_the_author_renderer() {
        let tags = MetaTags {
            meta_author: Some("Ada <ada@example.com>".to_string()),
            ..Default::default()
        };
        // The author line must be the rendered (escaped) tag, not the raw value
        assert_eq!(tags.get_meta_tags(), tags.get_meta_author());
        assert!(tags.get_meta_tags().contains("&lt;ada@example.com&gt;"));
    }

    #[test]
    fn test_fragments_join_in_fixed_order() {
        let tags = MetaTags {
            meta_keywords: Some("rust".to_string()),
            meta_copyright: Some("© 2026".to_string()),
            ..Default::default()
        };
        let rendered = tags.get_meta_tags();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("keywords"));
        assert!(lines[1].contains("copyright"));
    }

    #[test]
    fn test_content_is_escaped() {
        let rendered = MetaTags::render_field("description", Some(r#"a "quoted" <tag>"#));
        assert_eq!(
            rendered,
            r#"<meta name="description" content="a &quot;quoted&quot; &lt;tag&gt;">"#
        );
    }

    #[test]
    fn test_whitespace_only_content_is_blank() {
        assert_eq!(MetaTags::render_field("keywords", Some("   ")), "");
        assert_eq!(MetaTags::render_field("keywords", None), "");
    }

    #[test]
    fn test_oversized_attribute_fails_validation() {
        let tags = MetaTags {
            meta_description: Some("d".repeat(256)),
            ..Default::default()
        };
        let problems = tags.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("meta_description"));
    }

    #[test]
    fn test_attribute_at_cap_passes_validation() {
        let tags = MetaTags {
            meta_description: Some("d".repeat(255)),
            ..Default::default()
        };
        assert!(tags.validate().is_empty());
    }
}
