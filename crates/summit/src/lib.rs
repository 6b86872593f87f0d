//! Summit scaffolds Jekyll documentation sites published through GitHub Pages.
//!
//! A run starts from a [`SiteConfig`], renders a fixed set of [artifacts](artifact::ArtifactKind) (`_config.yml`, `Gemfile`,
//! the GitHub Actions workflow, the homepage and a 404 page), writes them to an output directory, and can then install
//! them into a repository ([`setup()`]) and publish it ([`deploy::Deployer`]).
//!
//! ## Example
//! ```rust,no_run
//! use summit::{GenerateOptions, SiteConfig, generate};
//!
//! fn main() -> Result<(), summit::errors::SummitError> {
//!     let config = SiteConfig::load(Some(std::path::Path::new("site.yml")))?;
//!     let output = generate(&config, &GenerateOptions::default())?;
//!     println!("Generated {} files", output.artifacts.len());
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod render;

mod generate;
mod setup;
mod write;

pub use config::{RawSiteConfig, SiteConfig};
pub use generate::{FileManifest, GenerateOptions, GenerateOutput, MANIFEST_FILE_NAME, generate};
pub use setup::{SetupOptions, SetupOutput, setup};
pub use write::write_artifacts;
