//! Checks a `.git-blame-ignore-revs` file. Every entry must be a full commit
//! hash; optionally each one must also exist in the repository and carry a
//! comment matching its subject, and no bot-authored commit may be left out.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use validate_git_blame_ignore_revs::ValidateError;
use validate_git_blame_ignore_revs::builders::reporter::{self, ErrorCode, OutputFormat};
use validate_git_blame_ignore_revs::builders::validator::OptionsValidator;
use validate_git_blame_ignore_revs::core::config::{FileConfig, ValidationOptions};
use validate_git_blame_ignore_revs::core::engine::ValidationEngine;
use validate_git_blame_ignore_revs::utils;

#[derive(Debug, Parser)]
#[command(name = "validate-git-blame-ignore-revs")]
#[command(version, about = "Validate a .git-blame-ignore-revs file")]
struct Cli {
    /// Path to the .git-blame-ignore-revs file
    file_path: PathBuf,

    /// Ensure each commit is in the history of the checked-out branch
    #[arg(long)]
    call_git: bool,

    /// Require each commit line to have one or more comment lines above it
    #[arg(long)]
    strict_comments: bool,

    /// Ensure the comment above each commit matches the first part of the
    /// commit message. Requires --strict-comments and --call-git
    #[arg(long)]
    strict_comments_git: bool,

    /// Ensure all commits authored by pre-commit-ci[bot] are present in the
    /// file. Requires --call-git
    #[arg(long)]
    pre_commit_ci: bool,

    /// TOML file enabling checks or overriding the bot author
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<ValidationOptions> {
        let mut options = ValidationOptions::new(&self.file_path);
        options.call_git = self.call_git;
        options.strict_comments = self.strict_comments;
        options.strict_comments_git = self.strict_comments_git;
        options.pre_commit_ci = self.pre_commit_ci;

        match &self.config {
            Some(path) => Ok(options.merge(&FileConfig::load(path)?)),
            None => Ok(options),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose)?;

    let options = cli.options()?;
    let issues = OptionsValidator::new().validate(&options);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Error: {issue}");
        }
        return Ok(ExitCode::from(2));
    }

    let engine = ValidationEngine::new(options);
    let result = match engine.run() {
        Ok(result) => result,
        Err(e @ ValidateError::FileNotFound { .. }) => {
            println!("{e}");
            return Ok(ExitCode::from(ErrorCode::FileNotFound as u8));
        }
        Err(e) => return Err(e.into()),
    };

    let report = reporter::reporter_for(cli.format).render(&result, engine.options())?;
    print!("{report}");
    if !report.ends_with('\n') {
        println!();
    }

    let code = reporter::exit_code(&result, engine.options());
    Ok(ExitCode::from(code as u8))
}
