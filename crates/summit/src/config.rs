use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::ConfigurationError;

pub const DEFAULT_TITLE: &str = "Project Himalaya";
pub const DEFAULT_DESCRIPTION: &str =
    "A comprehensive framework for AI-human collaborative development";
pub const DEFAULT_URL: &str = "https://projecthimalaya.com";
pub const DEFAULT_REPOSITORY: &str = "CallMeChewy/ProjectHimalaya";
pub const DEFAULT_AUTHOR: &str = "Herbert J. Bowers";
pub const DEFAULT_THEME: &str = "just-the-docs";
pub const DEFAULT_PRIMARY_COLOR: &str = "#4575b4";
pub const DEFAULT_COLOR_SCHEME: &str = "himalaya";

/// A site configuration as it appears in a config document, before validation.
///
/// Every field is optional, absent fields take the documented defaults when converted into a [`SiteConfig`].
///
/// ```yaml
/// title: "Project Himalaya"
/// repository: "CallMeChewy/ProjectHimalaya"
/// primary_color: "#4575b4"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// GitHub repository, in `owner/name` form.
    pub repository: Option<String>,
    pub author: Option<String>,
    pub theme: Option<String>,
    #[serde(alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(alias = "colorScheme")]
    pub color_scheme: Option<String>,
    #[serde(alias = "copyrightYear")]
    pub copyright_year: Option<i32>,
}

impl RawSiteConfig {
    /// Reads a config document from disk.
    ///
    /// `.toml` files are parsed as TOML, everything else as YAML (which also covers JSON documents).
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigurationError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(target: "config", "Loaded configuration from {}", path.display());

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&contents).map_err(|message| ConfigurationError::ParseFailed {
                path: path.to_path_buf(),
                message,
            })
        } else {
            Self::from_yaml_str(&contents).map_err(|message| ConfigurationError::ParseFailed {
                path: path.to_path_buf(),
                message,
            })
        }
    }

    fn from_yaml_str(contents: &str) -> Result<Self, String> {
        // An empty document means "all defaults", serde_yaml would refuse to build a struct out of it.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(contents).map_err(|e| e.to_string())
    }

    fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml_edit::de::from_str(contents).map_err(|e| e.to_string())
    }
}

/// A validated site configuration.
///
/// Construct one from a [`RawSiteConfig`] with [`SiteConfig::try_from`], or use [`SiteConfig::default()`] for the stock Project Himalaya site.
/// Once built, a `SiteConfig` cannot be modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    title: String,
    description: String,
    url: String,
    repository: String,
    author: String,
    theme: String,
    primary_color: String,
    color_scheme: String,
    copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            url: DEFAULT_URL.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            theme: DEFAULT_THEME.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
            copyright_year: None,
        }
    }
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawSiteConfig) -> Result<Self, Self::Error> {
        let title = required("title", raw.title, DEFAULT_TITLE)?;
        let description = required("description", raw.description, DEFAULT_DESCRIPTION)?;
        let url = required("url", raw.url, DEFAULT_URL)?;
        let repository = required("repository", raw.repository, DEFAULT_REPOSITORY)?;
        let author = required("author", raw.author, DEFAULT_AUTHOR)?;
        let theme = required("theme", raw.theme, DEFAULT_THEME)?;
        let primary_color = required("primary_color", raw.primary_color, DEFAULT_PRIMARY_COLOR)?;
        let color_scheme = required("color_scheme", raw.color_scheme, DEFAULT_COLOR_SCHEME)?;

        validate_repository(&repository)?;
        validate_url(&url)?;
        validate_color(&primary_color)?;

        Ok(Self {
            title,
            description,
            url,
            repository,
            author,
            theme,
            primary_color,
            color_scheme,
            copyright_year: raw.copyright_year,
        })
    }
}

impl SiteConfig {
    /// Loads and validates a config document. `None` gives the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        match path {
            Some(path) => RawSiteConfig::from_path(path)?.try_into(),
            None => Ok(Self::default()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn color_scheme(&self) -> &str {
        &self.color_scheme
    }

    pub fn copyright_year(&self) -> Option<i32> {
        self.copyright_year
    }

    /// The owner segment of `repository`, used as the GitHub username.
    pub fn owner(&self) -> &str {
        self.repository
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.repository)
    }

    /// The name segment of `repository`.
    pub fn repo_name(&self) -> &str {
        self.repository
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repository)
    }

    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }

    /// The site's host, e.g. `projecthimalaya.com` for `https://projecthimalaya.com/`.
    pub fn domain(&self) -> &str {
        self.url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(&self.url)
            .trim_end_matches('/')
    }

    /// The `remote_theme` value, themes without an owner are assumed to live in a repository of the same name.
    pub fn remote_theme(&self) -> String {
        if self.theme.contains('/') {
            self.theme.clone()
        } else {
            format!("{}/{}", self.theme, self.theme)
        }
    }

    /// The gem name of the theme, i.e. the theme without its owner.
    pub fn theme_gem(&self) -> &str {
        self.theme
            .rsplit_once('/')
            .map(|(_, gem)| gem)
            .unwrap_or(&self.theme)
    }
}

fn required(
    field: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigurationError> {
    let value = value.unwrap_or_else(|| default.to_string());
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ConfigurationError::MissingField { field });
    }

    // Values end up on single comment lines and in YAML front matter.
    if trimmed.chars().any(char::is_control) {
        return Err(ConfigurationError::MalformedField {
            field,
            value: trimmed.escape_debug().to_string(),
            reason: "cannot contain control characters such as newlines or tabs",
        });
    }

    Ok(trimmed.to_string())
}

fn validate_repository(repository: &str) -> Result<(), ConfigurationError> {
    let malformed = |reason| ConfigurationError::MalformedField {
        field: "repository",
        value: repository.to_string(),
        reason,
    };

    if repository.matches('/').count() != 1 {
        return Err(malformed("expected exactly one `/` separating owner and name"));
    }

    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(()),
        _ => Err(malformed("owner and name cannot be empty")),
    }
}

fn validate_url(url: &str) -> Result<(), ConfigurationError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        return Ok(());
    }

    Err(ConfigurationError::MalformedField {
        field: "url",
        value: url.to_string(),
        reason: "expected an absolute `http://` or `https://` URL",
    })
}

fn validate_color(color: &str) -> Result<(), ConfigurationError> {
    let is_hex = color.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    });

    if is_hex {
        return Ok(());
    }

    Err(ConfigurationError::MalformedField {
        field: "primary_color",
        value: color.to_string(),
        reason: "expected a `#rgb` or `#rrggbb` hex color",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn with_repository(repository: &str) -> RawSiteConfig {
        RawSiteConfig {
            repository: Some(repository.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::try_from(RawSiteConfig::default()).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.owner(), "CallMeChewy");
        assert_eq!(config.repo_name(), "ProjectHimalaya");
        assert_eq!(config.domain(), "projecthimalaya.com");
        assert_eq!(config.remote_theme(), "just-the-docs/just-the-docs");
        assert_eq!(config.theme_gem(), "just-the-docs");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let raw = RawSiteConfig {
            title: Some("   ".to_string()),
            ..Default::default()
        };

        let err = SiteConfig::try_from(raw).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingField { .. }));
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let cases = [
            RawSiteConfig {
                title: Some("Summit\nDocs".into()),
                ..Default::default()
            },
            RawSiteConfig {
                description: Some("line one\r\nline two".into()),
                ..Default::default()
            },
            RawSiteConfig {
                author: Some("Ada\tLovelace".into()),
                ..Default::default()
            },
        ];

        for (raw, field) in cases.into_iter().zip(["title", "description", "author"]) {
            let err = SiteConfig::try_from(raw).unwrap_err();
            assert!(matches!(err, ConfigurationError::MalformedField { .. }), "{}", field);
            assert_eq!(err.field(), Some(field));
        }

        // Surrounding whitespace is trimmed before the check.
        let raw = RawSiteConfig {
            title: Some("  Summit Docs\n".into()),
            ..Default::default()
        };
        assert_eq!(SiteConfig::try_from(raw).unwrap().title(), "Summit Docs");
    }

    #[test]
    fn test_repository_without_separator_is_rejected() {
        let err = SiteConfig::try_from(with_repository("no-separator")).unwrap_err();
        assert_eq!(err.field(), Some("repository"));
        assert!(err.to_string().contains("no-separator"));
    }

    #[test]
    fn test_repository_with_extra_or_empty_segments_is_rejected() {
        for repository in ["a/b/c", "/name", "owner/"] {
            let err = SiteConfig::try_from(with_repository(repository)).unwrap_err();
            assert_eq!(err.field(), Some("repository"), "{}", repository);
        }
    }

    #[test]
    fn test_primary_color_must_be_hex() {
        for color in ["#fff", "#4575B4"] {
            let raw = RawSiteConfig {
                primary_color: Some(color.to_string()),
                ..Default::default()
            };
            assert!(SiteConfig::try_from(raw).is_ok(), "{}", color);
        }

        for color in ["4575b4", "#4575b", "#gggggg", "blue"] {
            let raw = RawSiteConfig {
                primary_color: Some(color.to_string()),
                ..Default::default()
            };
            let err = SiteConfig::try_from(raw).unwrap_err();
            assert_eq!(err.field(), Some("primary_color"), "{}", color);
        }
    }

    #[test]
    fn test_url_needs_a_scheme() {
        let raw = RawSiteConfig {
            url: Some("projecthimalaya.com".to_string()),
            ..Default::default()
        };
        assert_eq!(SiteConfig::try_from(raw).unwrap_err().field(), Some("url"));

        let raw = RawSiteConfig {
            url: Some("http://example.org/".to_string()),
            ..Default::default()
        };
        assert_eq!(SiteConfig::try_from(raw).unwrap().domain(), "example.org");
    }

    #[test]
    fn test_theme_with_owner() {
        let raw = RawSiteConfig {
            theme: Some("pages-themes/minimal".to_string()),
            ..Default::default()
        };
        let config = SiteConfig::try_from(raw).unwrap();
        assert_eq!(config.remote_theme(), "pages-themes/minimal");
        assert_eq!(config.theme_gem(), "minimal");
    }

    #[test]
    fn test_load_json_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r##"{"title": "Summit", "repository": "octo/summit", "primaryColor": "#112233"}"##,
        )
        .unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title(), "Summit");
        assert_eq!(config.repository(), "octo/summit");
        assert_eq!(config.primary_color(), "#112233");
        assert_eq!(config.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_load_toml_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            "title = \"Summit\"\nrepository = \"octo/summit\"\ncopyright_year = 2025\n",
        )
        .unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title(), "Summit");
        assert_eq!(config.copyright_year(), Some(2025));
    }

    #[test]
    fn test_load_empty_document_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.yml");
        std::fs::write(&path, "\n").unwrap();

        assert_eq!(SiteConfig::load(Some(&path)).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_unknown_keys_fail_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.yml");
        std::fs::write(&path, "titel: Typo\n").unwrap();

        let err = SiteConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseFailed { .. }));
    }

    #[test]
    fn test_missing_file_fails_to_read() {
        let dir = tempdir().unwrap();
        let err = SiteConfig::load(Some(&dir.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ConfigurationError::ReadFailed { .. }));
    }
}
