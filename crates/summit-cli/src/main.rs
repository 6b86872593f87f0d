mod deploy;
mod logging;
mod steps;
#[cfg(test)]
mod test_repo;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use summit::{
    GenerateOptions, SetupOptions, SiteConfig, deploy::Deployer, errors::SummitError,
    generate, render::RenderOptions, setup,
};
use tracing::{info, warn};

use deploy::deploy_site;
use logging::init_logging;
use steps::run_step;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Site configuration document (YAML, JSON or TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stamp generated files with the current time.
    #[arg(long, global = true)]
    timestamp: bool,

    /// Only print errors.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site's configuration files
    Generate(GenerateArgs),
    /// Install the site into a repository
    Setup(SetupArgs),
    /// Commit and push the site to trigger a GitHub Pages build
    Deploy(DeployArgs),
    /// Generate, set up and deploy in one go
    All(AllArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Directory the files are generated into
    #[arg(long, default_value = "artifacts")]
    output: PathBuf,
}

#[derive(Args)]
struct SetupArgs {
    /// Root of the repository
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Directory holding generated files
    #[arg(long, default_value = "artifacts")]
    artifacts: PathBuf,
}

#[derive(Args)]
struct DeployArgs {
    /// Root of the repository
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Commit message, defaults to "Update website: <date>"
    #[arg(long)]
    message: Option<String>,

    /// Don't ask for confirmation
    #[arg(long, short)]
    yes: bool,
}

#[derive(Args)]
struct AllArgs {
    /// Root of the repository
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Directory the files are generated into, relative to the repository root
    #[arg(long, default_value = "artifacts")]
    output: PathBuf,

    /// Commit message, defaults to "Update website: <date>"
    #[arg(long)]
    message: Option<String>,

    /// Don't ask for confirmation
    #[arg(long, short)]
    yes: bool,
}

fn run_generate(
    config: &SiteConfig,
    output_dir: &Path,
    render: &RenderOptions,
    quiet: bool,
) -> Result<(), SummitError> {
    let options = GenerateOptions {
        output_dir: output_dir.to_path_buf(),
        render: render.clone(),
        ..Default::default()
    };

    let output = run_step(
        quiet,
        "Generating configuration files",
        |output: &summit::GenerateOutput| format!("Generated {} files", output.artifacts.len()),
        || generate(config, &options),
    )?;

    for path in &output.artifacts {
        info!("Created {}", path.display());
    }

    Ok(())
}

fn run_setup(
    config: &SiteConfig,
    base_dir: &Path,
    artifacts_dir: &Path,
    render: &RenderOptions,
    quiet: bool,
) -> Result<(), SummitError> {
    let options = SetupOptions {
        base_dir: base_dir.to_path_buf(),
        artifacts_dir: artifacts_dir.to_path_buf(),
        render: render.clone(),
        ..Default::default()
    };

    let output = run_step(
        quiet,
        "Setting up website",
        |output: &summit::SetupOutput| format!("Installed {} files", output.installed.len()),
        || setup(config, &options),
    )?;

    if let Some(warning) = missing_artifacts_warning(&output.missing) {
        warn!("{}", warning);
    }

    info!(name: "SKIP_FORMAT", "");
    info!(name: "SKIP_FORMAT", "⛰  {} Next steps:", "Website set up!".bold().green());
    info!(name: "SKIP_FORMAT", "   1. Review the created files and customize them if needed.");
    info!(name: "SKIP_FORMAT", "   2. Configure GitHub Pages to build from GitHub Actions in your repository settings.");
    info!(name: "SKIP_FORMAT", "   3. Point your domain's DNS at GitHub Pages.");
    info!(
        name: "SKIP_FORMAT",
        "   4. Run {} to publish. The site will be available at {}.",
        "summit deploy".bold().bright_blue().underline(),
        config.url().bold().bright_magenta().underline()
    );

    Ok(())
}

fn missing_artifacts_warning(missing: &[String]) -> Option<String> {
    match missing {
        [] => None,
        [name] => Some(format!("Artifact {} was listed in the manifest but not installed", name)),
        names => Some(format!(
            "{} artifacts were listed in the manifest but not installed: {}",
            names.len(),
            names.join(", ")
        )),
    }
}

fn run_deploy(
    repo_dir: &Path,
    message: Option<String>,
    assume_yes: bool,
    quiet: bool,
) -> Result<ExitCode, SummitError> {
    let deployer = Deployer::new(repo_dir, message)?;

    match deploy_site(&deployer, assume_yes, quiet)? {
        true => Ok(ExitCode::SUCCESS),
        false => Ok(ExitCode::FAILURE),
    }
}

fn run(cli: Cli) -> Result<ExitCode, SummitError> {
    let config = SiteConfig::load(cli.config.as_deref())?;
    let render = RenderOptions {
        include_timestamp: cli.timestamp,
        generated_at: None,
    }
    .resolved();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&config, &args.output, &render, cli.quiet)?;
        }
        Commands::Setup(args) => {
            run_setup(&config, &args.base_dir, &args.artifacts, &render, cli.quiet)?;
        }
        Commands::Deploy(args) => {
            return run_deploy(&args.repo, args.message, args.yes, cli.quiet);
        }
        Commands::All(args) => {
            let artifacts_dir = args.base_dir.join(&args.output);
            run_generate(&config, &artifacts_dir, &render, cli.quiet)?;
            run_setup(&config, &args.base_dir, &artifacts_dir, &render, cli.quiet)?;
            return run_deploy(&args.base_dir, args.message, args.yes, cli.quiet);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);

            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  {} {}", "caused by:".dimmed(), cause);
                source = cause.source();
            }

            ExitCode::FAILURE
        }
    }
}
