use std::collections::BTreeMap;

use serde::Serialize;

use super::{RenderOptions, TIMESTAMP_FORMAT};
use crate::config::SiteConfig;

const PLUGINS: [&str; 4] = [
    "jekyll-feed",
    "jekyll-seo-tag",
    "jekyll-sitemap",
    "jekyll-redirect-from",
];

const COLLECTION_PERMALINK: &str = "/:collection/:path/";

// Field order is the key order of the emitted document.
#[derive(Serialize)]
struct JekyllConfig<'a> {
    title: &'a str,
    description: &'a str,
    baseurl: &'a str,
    url: &'a str,
    github_username: &'a str,
    repository: &'a str,
    markdown: &'a str,
    remote_theme: String,
    plugins: &'a [&'a str],
    color_scheme: &'a str,
    search_enabled: bool,
    search: SearchOptions,
    aux_links: BTreeMap<String, Vec<String>>,
    footer_content: String,
    collections: Collections,
    defaults: Vec<FrontMatterDefault>,
    back_to_top: bool,
    back_to_top_text: &'a str,
    ga_tracking: &'a str,
    ga_tracking_anonymize_ip: bool,
}

#[derive(Serialize)]
struct SearchOptions {
    heading_level: u8,
    previews: u8,
    preview_words_before: u8,
    preview_words_after: u8,
    tokenizer_separator: &'static str,
    rel_url: bool,
    button: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heading_level: 3,
            previews: 3,
            preview_words_before: 5,
            preview_words_after: 10,
            tokenizer_separator: r"/[\s/]+/",
            rel_url: true,
            button: false,
        }
    }
}

#[derive(Serialize)]
struct Collection {
    permalink: &'static str,
    output: bool,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            permalink: COLLECTION_PERMALINK,
            output: true,
        }
    }
}

#[derive(Serialize, Default)]
struct Collections {
    docs: Collection,
    components: Collection,
    standards: Collection,
}

#[derive(Serialize)]
struct FrontMatterDefault {
    scope: Scope,
    values: ScopeValues,
}

#[derive(Serialize)]
struct Scope {
    path: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ScopeValues {
    layout: &'static str,
    nav_order: u8,
}

fn front_matter_defaults() -> Vec<FrontMatterDefault> {
    ["docs", "components", "standards", "pages"]
        .into_iter()
        .zip(1..)
        .map(|(kind, nav_order)| FrontMatterDefault {
            scope: Scope { path: "", kind },
            values: ScopeValues {
                layout: "default",
                nav_order,
            },
        })
        .collect()
}

fn footer_content(config: &SiteConfig, options: &RenderOptions) -> String {
    match options.copyright_year(config) {
        Some(year) => format!(
            "Copyright &copy; {} {}. Distributed under an MIT license.",
            year,
            config.author()
        ),
        None => format!(
            "Copyright &copy; {}. Distributed under an MIT license.",
            config.author()
        ),
    }
}

/// Renders Jekyll's `_config.yml`.
///
/// The document starts with a fixed comment header (plus a `# Generated:` line when timestamps are enabled),
/// followed by the settings in a fixed, non-alphabetical key order.
pub fn render_site_config(
    config: &SiteConfig,
    options: &RenderOptions,
) -> Result<String, serde_yaml::Error> {
    let mut aux_links = BTreeMap::new();
    aux_links.insert(
        format!("{} on GitHub", config.title()),
        vec![format!("//github.com/{}", config.repository())],
    );

    let document = JekyllConfig {
        title: config.title(),
        description: config.description(),
        baseurl: "",
        url: config.url(),
        github_username: config.owner(),
        repository: config.repository(),
        markdown: "kramdown",
        remote_theme: config.remote_theme(),
        plugins: &PLUGINS,
        color_scheme: config.color_scheme(),
        search_enabled: true,
        search: SearchOptions::default(),
        aux_links,
        footer_content: footer_content(config, options),
        collections: Collections::default(),
        defaults: front_matter_defaults(),
        back_to_top: true,
        back_to_top_text: "Back to top",
        ga_tracking: "",
        ga_tracking_anonymize_ip: true,
    };

    let mut output = String::from("# _config.yml\n");
    output.push_str(&format!(
        "# Jekyll configuration for {} website\n",
        config.title()
    ));
    if let Some(timestamp) = options.timestamp() {
        output.push_str(&format!(
            "# Generated: {}\n",
            timestamp.format(TIMESTAMP_FORMAT)
        ));
    }
    output.push_str("\n# Site settings\n");
    output.push_str(&serde_yaml::to_string(&document)?);

    Ok(output)
}
