use colored::Colorize;
use inquire::{
    Confirm,
    ui::{Color, RenderConfig, StyleSheet, Styled},
};
use summit::{
    deploy::{DeployOutcome, Deployer},
    errors::DeployError,
};
use tracing::info;

use crate::steps::run_step;

/// Prompt styling matching the step symbols printed by the spinners.
fn confirm_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("○").with_fg(Color::LightYellow))
        .with_answered_prompt_prefix(Styled::new("●").with_fg(Color::LightGreen))
        .with_canceled_prompt_indicator(Styled::new("cancelled").with_fg(Color::DarkRed))
        .with_help_message(StyleSheet::new().with_fg(Color::DarkGrey))
}

fn confirm(assume_yes: bool, message: &str) -> bool {
    if assume_yes {
        return true;
    }

    // A closed stdin or CTRL+C counts as a refusal.
    Confirm::new(message)
        .with_default(false)
        .with_help_message("use --yes to skip this question")
        .with_render_config(confirm_render_config())
        .prompt()
        .unwrap_or(false)
}

/// Commits and pushes the site. Returns `false` if the user cancelled.
pub fn deploy_site(deployer: &Deployer, assume_yes: bool, quiet: bool) -> Result<bool, DeployError> {
    let branch = deployer.current_branch()?;
    info!("Deploying from {} on branch {}", deployer.repo_dir().display(), branch.bold());

    if branch != "main"
        && !confirm(
            assume_yes,
            "You are not on the main branch, the Pages workflow may not run. Proceed?",
        )
    {
        info!(name: "SKIP_FORMAT", "{}", "Deployment cancelled".yellow());
        return Ok(false);
    }

    if !deployer.has_workflow()
        && !confirm(
            assume_yes,
            "No GitHub Pages workflow found, the site may not be built. Proceed anyway?",
        )
    {
        info!(name: "SKIP_FORMAT", "{}", "Deployment cancelled".yellow());
        return Ok(false);
    }

    let outcome = run_step(
        quiet,
        "Deploying website",
        |outcome| match outcome {
            DeployOutcome::NothingToDeploy => "No changes to deploy".to_string(),
            DeployOutcome::Pushed { .. } => "Pushed website".to_string(),
        },
        || deployer.deploy(),
    )?;

    if let DeployOutcome::Pushed { message } = outcome {
        info!(name: "SKIP_FORMAT", "");
        info!(name: "SKIP_FORMAT", "⛰  {} \"{}\"", "Deployed".bold().green(), message);
        info!(name: "SKIP_FORMAT", "   GitHub Actions will now build the site, follow it in the Actions tab of your repository.");
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_repo::{published_repo, remote_log, run_git};

    #[test]
    fn test_confirmation_is_skipped_with_yes() {
        assert!(confirm(true, "Proceed?"));
    }

    #[test]
    fn test_deploy_site_pushes_then_reports_nothing_to_deploy() {
        let (_dir, repo, remote) = published_repo();
        std::fs::create_dir_all(repo.join("docs")).unwrap();
        std::fs::write(repo.join("docs/index.md"), "# Home\n").unwrap();

        // No workflow is installed, which would prompt without `assume_yes`.
        let deployer = Deployer::new(&repo, Some("Publish docs".into())).unwrap();
        assert!(deploy_site(&deployer, true, true).unwrap());
        assert_eq!(remote_log(&remote), ["Publish docs", "Initial commit"]);

        assert!(deploy_site(&deployer, true, true).unwrap());
        assert_eq!(remote_log(&remote), ["Publish docs", "Initial commit"]);
    }

    #[test]
    fn test_deploy_site_off_main_with_yes() {
        let (_dir, repo, remote) = published_repo();
        run_git(&repo, &["checkout", "-b", "preview"]);
        run_git(&repo, &["push", "-u", "origin", "preview"]);
        std::fs::create_dir_all(repo.join("docs")).unwrap();
        std::fs::write(repo.join("docs/index.md"), "# Preview\n").unwrap();

        let deployer = Deployer::new(&repo, Some("Preview docs".into())).unwrap();
        assert_eq!(deployer.current_branch().unwrap(), "preview");
        assert!(deploy_site(&deployer, true, true).unwrap());

        let subject = run_git(&remote, &["log", "-1", "--format=%s", "preview"]);
        assert_eq!(subject.trim(), "Preview docs");
        assert_eq!(remote_log(&remote), ["Initial commit"]);
    }
}
