use std::path::{Path, PathBuf};

/// The documents Summit knows how to generate, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Jekyll's `_config.yml`.
    SiteConfig,
    /// The `Gemfile` listing Jekyll, the theme and plugins.
    DependencyManifest,
    /// The GitHub Actions workflow building and deploying the site.
    Pipeline,
    Homepage,
    NotFoundPage,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::SiteConfig,
        ArtifactKind::DependencyManifest,
        ArtifactKind::Pipeline,
        ArtifactKind::Homepage,
        ArtifactKind::NotFoundPage,
    ];

    /// File name used in the artifacts directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::SiteConfig => "_config.yml",
            ArtifactKind::DependencyManifest => "Gemfile",
            ArtifactKind::Pipeline => "github-workflow.yml",
            ArtifactKind::Homepage => "index.md",
            ArtifactKind::NotFoundPage => "404.md",
        }
    }

    /// Where the artifact is installed, relative to the repository root.
    pub fn destination(&self) -> PathBuf {
        match self {
            ArtifactKind::SiteConfig => Path::new("docs").join("_config.yml"),
            ArtifactKind::DependencyManifest => Path::new("docs").join("Gemfile"),
            ArtifactKind::Pipeline => Path::new(".github")
                .join("workflows")
                .join("gh-pages.yml"),
            ArtifactKind::Homepage => Path::new("docs").join("index.md"),
            ArtifactKind::NotFoundPage => Path::new("docs").join("404.md"),
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }
}

/// A rendered document, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub name: String,
    pub contents: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, contents: String) -> Self {
        Self {
            kind,
            name: kind.file_name().to_string(),
            contents,
        }
    }
}
