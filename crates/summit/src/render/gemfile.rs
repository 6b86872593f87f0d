use super::RenderOptions;
use crate::config::SiteConfig;

/// Renders the `Gemfile` pinning Jekyll, the theme gem and the plugins listed in `_config.yml`.
pub fn render_dependency_manifest(config: &SiteConfig, _options: &RenderOptions) -> String {
    let theme_line = format!(
        "gem {:<21}# Documentation theme",
        format!("\"{}\"", config.theme_gem())
    );

    format!(
        r#"source "https://rubygems.org"

# Jekyll and plugins
gem "jekyll", "~> 4.3.2"
gem "webrick", "~> 1.8"  # Required for Ruby >= 3.0
{theme_line}

# Jekyll plugins
group :jekyll_plugins do
  gem "jekyll-feed", "~> 0.17.0"
  gem "jekyll-seo-tag", "~> 2.8.0"
  gem "jekyll-sitemap", "~> 1.4.0"
  gem "jekyll-redirect-from", "~> 0.16.0"
end

# Windows and JRuby does not include zoneinfo files, so bundle the tzinfo-data gem
# and associated library.
platforms :mingw, :x64_mingw, :mswin, :jruby do
  gem "tzinfo", ">= 1", "< 3"
  gem "tzinfo-data"
end

# Performance-booster for watching directories on Windows
gem "wdm", "~> 0.1.1", :platforms => [:mingw, :x64_mingw, :mswin]

# Lock `http_parser.rb` gem to `v0.6.x` on JRuby builds since newer versions of the gem
# do not have a Java counterpart.
gem "http_parser.rb", "~> 0.6.0", :platforms => [:jruby]
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawSiteConfig;

    #[test]
    fn test_default_theme_gem() {
        let gemfile = render_dependency_manifest(&SiteConfig::default(), &RenderOptions::default());

        assert!(gemfile.starts_with("source \"https://rubygems.org\"\n"));
        assert!(gemfile.contains("gem \"just-the-docs\"      # Documentation theme\n"));
        assert!(gemfile.contains("gem \"jekyll-redirect-from\", \"~> 0.16.0\""));
    }

    #[test]
    fn test_theme_gem_drops_owner() {
        let config = SiteConfig::try_from(RawSiteConfig {
            theme: Some("pages-themes/minimal".into()),
            ..Default::default()
        })
        .unwrap();
        let gemfile = render_dependency_manifest(&config, &RenderOptions::default());

        assert!(gemfile.contains("gem \"minimal\""));
        assert!(!gemfile.contains("just-the-docs"));
    }
}
