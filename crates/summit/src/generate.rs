use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::SiteConfig,
    errors::{IoError, SummitError},
    render::{RenderOptions, TIMESTAMP_FORMAT, render_all},
    write::{write_artifacts, write_file},
};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Options for a generation run. Should be passed to [`generate()`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the artifacts are written to. Default: `artifacts`
    pub output_dir: PathBuf,
    pub render: RenderOptions,
    /// Whether to write `manifest.json` next to the artifacts. Default: `true`
    ///
    /// `summit setup` uses the manifest to find which artifacts to install.
    pub write_manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: "artifacts".into(),
            render: RenderOptions::default(),
            write_manifest: true,
        }
    }
}

/// The list of generated files, written as `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub files: Vec<String>,
}

impl FileManifest {
    /// Reads `manifest.json` from `dir`, returns `None` if there is none.
    pub fn read(dir: &Path) -> Result<Option<Self>, SummitError> {
        let path = dir.join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|source| IoError::ReadFailed { path, source })?;

        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Metadata returned by [`generate()`] after a successful run.
#[derive(Debug)]
pub struct GenerateOutput {
    pub artifacts: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Renders every artifact for `config` and writes them to `options.output_dir`.
pub fn generate(config: &SiteConfig, options: &GenerateOptions) -> Result<GenerateOutput, SummitError> {
    let render_options = options.render.resolved();
    let timestamp = render_options.timestamp();

    info!(target: "generate", "Generating configuration files for {}", config.title());
    if let Some(timestamp) = timestamp {
        info!(target: "generate", "Timestamp: {}", timestamp.format(TIMESTAMP_FORMAT));
    }
    info!(target: "generate", "Output directory: {}", options.output_dir.display());

    let artifacts = render_all(config, &render_options)?;
    let written = write_artifacts(&artifacts, &options.output_dir)?;

    let manifest = if options.write_manifest {
        let manifest = FileManifest {
            timestamp: timestamp.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            date: timestamp.map(|t| t.format("%Y-%m-%d").to_string()),
            files: artifacts.iter().map(|a| a.name.clone()).collect(),
        };

        let path = options.output_dir.join(MANIFEST_FILE_NAME);
        write_file(&path, &manifest.to_json()?)?;
        info!(target: "generate", "Manifest saved to {}", path.display());

        Some(path)
    } else {
        None
    };

    info!(target: "generate", "Generated {} files", written.len());

    Ok(GenerateOutput {
        artifacts: written,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawSiteConfig;
    use chrono::{Local, TimeZone};
    use tempfile::tempdir;

    fn options(output_dir: &Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generates_all_artifacts_and_manifest() {
        let dir = tempdir().unwrap();
        let output = generate(&SiteConfig::default(), &options(dir.path())).unwrap();

        assert_eq!(output.artifacts.len(), 5);
        for name in ["_config.yml", "Gemfile", "github-workflow.yml", "index.md", "404.md"] {
            assert!(dir.path().join(name).is_file(), "{}", name);
        }

        let manifest = FileManifest::read(dir.path()).unwrap().unwrap();
        assert_eq!(
            manifest.files,
            ["_config.yml", "Gemfile", "github-workflow.yml", "index.md", "404.md"]
        );
        assert_eq!(manifest.timestamp, None);
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let config = SiteConfig::default();

        generate(&config, &options(first.path())).unwrap();
        generate(&config, &options(second.path())).unwrap();

        for name in ["_config.yml", "Gemfile", "github-workflow.yml", "index.md", "404.md", MANIFEST_FILE_NAME] {
            assert_eq!(
                std::fs::read(first.path().join(name)).unwrap(),
                std::fs::read(second.path().join(name)).unwrap(),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_manifest_is_stamped_when_enabled() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            output_dir: dir.path().to_path_buf(),
            render: RenderOptions {
                include_timestamp: true,
                generated_at: Some(Local.with_ymd_and_hms(2025, 3, 28, 15, 45, 0).unwrap()),
            },
            write_manifest: true,
        };

        generate(&SiteConfig::default(), &options).unwrap();

        let manifest = FileManifest::read(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.timestamp.as_deref(), Some("March 28, 2025  03:45PM"));
        assert_eq!(manifest.date.as_deref(), Some("2025-03-28"));
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("artifacts");

        let run = || -> Result<GenerateOutput, SummitError> {
            let config = SiteConfig::try_from(RawSiteConfig {
                title: Some(String::new()),
                ..Default::default()
            })?;
            generate(&config, &options(&output_dir))
        };

        let err = run().unwrap_err();
        assert!(matches!(
            err,
            SummitError::Configuration(ref e) if e.field() == Some("title")
        ));
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_manifest_can_be_skipped() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            write_manifest: false,
            ..options(dir.path())
        };

        let output = generate(&SiteConfig::default(), &options).unwrap();
        assert!(output.manifest.is_none());
        assert!(FileManifest::read(dir.path()).unwrap().is_none());
    }
}
