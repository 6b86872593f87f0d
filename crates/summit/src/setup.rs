use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    artifact::ArtifactKind,
    config::SiteConfig,
    errors::{IoError, SummitError},
    generate::FileManifest,
    render::{RenderOptions, render_all, render_color_scheme, render_launch_post},
    write::{ensure_dir, write_file},
};

/// Directories of a just-the-docs site, relative to `docs/`.
const SITE_DIRECTORIES: [&str; 15] = [
    "",
    "_components",
    "_docs",
    "_docs/overview",
    "_docs/process",
    "_docs/status",
    "_includes",
    "_layouts",
    "_posts",
    "_sass/color_schemes",
    "_standards",
    "assets",
    "assets/css",
    "assets/images",
    "assets/js",
];

/// Options for installing a site into a repository. Should be passed to [`setup()`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Root of the repository the site is installed into. Default: `.`
    pub base_dir: PathBuf,
    /// Directory holding previously generated artifacts and their `manifest.json`. Default: `artifacts`
    ///
    /// If it has no manifest, artifacts are rendered on the fly instead.
    pub artifacts_dir: PathBuf,
    /// Date of the sample launch post. Default: `None`, meaning today.
    pub post_date: Option<NaiveDate>,
    /// Render options used when artifacts are rendered on the fly.
    pub render: RenderOptions,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            base_dir: ".".into(),
            artifacts_dir: "artifacts".into(),
            post_date: None,
            render: RenderOptions::default(),
        }
    }
}

impl SetupOptions {
    pub fn docs_dir(&self) -> PathBuf {
        self.base_dir.join("docs")
    }

    pub fn workflows_dir(&self) -> PathBuf {
        self.base_dir.join(".github").join("workflows")
    }
}

/// Metadata returned by [`setup()`] after a successful run.
#[derive(Debug, Default)]
pub struct SetupOutput {
    pub directories: Vec<PathBuf>,
    /// Files written into the repository, artifacts first.
    pub installed: Vec<PathBuf>,
    /// Artifacts listed in the manifest that could not be installed, either because they are missing from the
    /// artifacts directory or have no known destination.
    pub missing: Vec<String>,
}

/// Installs the site into `options.base_dir`: directory structure, artifacts, `CNAME`, color scheme and a launch post.
pub fn setup(config: &SiteConfig, options: &SetupOptions) -> Result<SetupOutput, SummitError> {
    info!(target: "setup", "Setting up {} website in {}", config.title(), options.base_dir.display());

    let mut output = SetupOutput {
        directories: create_directory_structure(options)?,
        ..Default::default()
    };

    install_artifacts(config, options, &mut output)?;

    let docs_dir = options.docs_dir();

    let cname = docs_dir.join("CNAME");
    write_file(&cname, config.domain())?;
    info!(target: "setup", "Created {}", cname.display());
    output.installed.push(cname);

    let color_scheme = docs_dir
        .join("_sass")
        .join("color_schemes")
        .join(format!("{}.scss", config.color_scheme()));
    write_file(&color_scheme, &render_color_scheme(config))?;
    info!(target: "setup", "Created {}", color_scheme.display());
    output.installed.push(color_scheme);

    let date = options
        .post_date
        .unwrap_or_else(|| Local::now().date_naive());
    let post = docs_dir
        .join("_posts")
        .join(format!("{}-website-launch.md", date.format("%Y-%m-%d")));
    write_file(&post, &render_launch_post(config, date)?)?;
    info!(target: "setup", "Created {}", post.display());
    output.installed.push(post);

    Ok(output)
}

fn create_directory_structure(options: &SetupOptions) -> Result<Vec<PathBuf>, IoError> {
    let docs_dir = options.docs_dir();

    let directories: Vec<PathBuf> = SITE_DIRECTORIES
        .iter()
        .map(|dir| docs_dir.join(dir))
        .chain(std::iter::once(options.workflows_dir()))
        .collect();

    for dir in &directories {
        ensure_dir(dir)?;
    }

    info!(target: "setup", "Created {} directories", directories.len());

    Ok(directories)
}

fn install_artifacts(
    config: &SiteConfig,
    options: &SetupOptions,
    output: &mut SetupOutput,
) -> Result<(), SummitError> {
    let Some(manifest) = FileManifest::read(&options.artifacts_dir)? else {
        info!(
            target: "setup",
            "No manifest in {}, rendering artifacts directly",
            options.artifacts_dir.display()
        );

        for artifact in render_all(config, &options.render)? {
            let destination = options.base_dir.join(artifact.kind.destination());
            write_file(&destination, &artifact.contents)?;
            info!(target: "setup", "Installed {} -> {}", artifact.name, destination.display());
            output.installed.push(destination);
        }

        return Ok(());
    };

    for name in manifest.files {
        let source = options.artifacts_dir.join(&name);

        let Some(kind) = ArtifactKind::from_file_name(&name) else {
            debug!(target: "setup", "Artifact {} has no known destination, skipping", name);
            output.missing.push(name);
            continue;
        };

        if !source.is_file() {
            debug!(target: "setup", "Artifact {} not found in {}", name, options.artifacts_dir.display());
            output.missing.push(name);
            continue;
        }

        let destination = options.base_dir.join(kind.destination());
        copy_file(&source, &destination)?;
        info!(target: "setup", "Installed {} -> {}", name, destination.display());
        output.installed.push(destination);
    }

    Ok(())
}

fn copy_file(from: &Path, to: &Path) -> Result<(), IoError> {
    if let Some(parent) = to.parent() {
        ensure_dir(parent)?;
    }

    std::fs::copy(from, to).map_err(|source| IoError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    Ok(())
}
