//! Rendering of the site's text artifacts.
//!
//! Every renderer takes the [`SiteConfig`] and [`RenderOptions`] it needs as arguments, nothing is read from ambient state.
//! With timestamps disabled (the default), rendering the same configuration twice produces byte-identical output.
use chrono::{DateTime, Datelike, Local};
use tracing::debug;

use crate::{
    artifact::{Artifact, ArtifactKind},
    config::SiteConfig,
};

mod gemfile;
mod pages;
mod site_config;
mod theme;
mod workflow;

pub use gemfile::render_dependency_manifest;
pub use pages::{render_homepage, render_launch_post, render_not_found_page};
pub use site_config::render_site_config;
pub use theme::render_color_scheme;
pub use workflow::render_pipeline;

/// Human-readable timestamp format used in generated headers and manifests.
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y  %I:%M%p";

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Whether to stamp outputs with the generation time. Default: `false`
    ///
    /// Stamped outputs change on every run, which makes them noisy to keep in version control.
    pub include_timestamp: bool,
    /// The time to stamp with. Default: `None`, meaning the current local time.
    pub generated_at: Option<DateTime<Local>>,
}

impl RenderOptions {
    /// Returns the timestamp to embed in outputs, if timestamps are enabled.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        if !self.include_timestamp {
            return None;
        }

        Some(self.generated_at.unwrap_or_else(Local::now))
    }

    /// Freezes the generation time, so that every artifact of a run carries the same one.
    pub fn resolved(&self) -> Self {
        Self {
            include_timestamp: self.include_timestamp,
            generated_at: self.timestamp(),
        }
    }

    pub(crate) fn copyright_year(&self, config: &SiteConfig) -> Option<i32> {
        config
            .copyright_year()
            .or_else(|| self.timestamp().map(|t| t.year()))
    }
}

/// Renders a single artifact.
pub fn render_artifact(
    kind: ArtifactKind,
    config: &SiteConfig,
    options: &RenderOptions,
) -> Result<Artifact, serde_yaml::Error> {
    let contents = match kind {
        ArtifactKind::SiteConfig => render_site_config(config, options)?,
        ArtifactKind::DependencyManifest => render_dependency_manifest(config, options),
        ArtifactKind::Pipeline => render_pipeline(config, options),
        ArtifactKind::Homepage => render_homepage(config, options)?,
        ArtifactKind::NotFoundPage => render_not_found_page(config, options),
    };

    debug!(target: "render", "Rendered {} ({} bytes)", kind.file_name(), contents.len());

    Ok(Artifact::new(kind, contents))
}

/// Renders every artifact, in [`ArtifactKind::ALL`] order.
pub fn render_all(
    config: &SiteConfig,
    options: &RenderOptions,
) -> Result<Vec<Artifact>, serde_yaml::Error> {
    let options = options.resolved();

    ArtifactKind::ALL
        .into_iter()
        .map(|kind| render_artifact(kind, config, &options))
        .collect()
}
