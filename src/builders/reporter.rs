use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write;

use crate::core::config::ValidationOptions;
use crate::core::engine::ValidationResult;

/// Bits OR'd together into the process exit status, one per failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    FileNotFound = 0b1,
    SyntaxProblem = 0b10,
    CommitsNotPresent = 0b100,
    MissingComments = 0b1000,
    MissingCommitMessageComments = 0b10000,
    MissingPreCommitCICommits = 0b100000,
}

/// Computes the exit status for a finished run. A collection only counts
/// when its check was requested.
pub fn exit_code(result: &ValidationResult, options: &ValidationOptions) -> i32 {
    let checks = [
        (true, result.errors.is_empty(), ErrorCode::SyntaxProblem),
        (
            options.call_git,
            result.missing_commits.is_empty(),
            ErrorCode::CommitsNotPresent,
        ),
        (
            options.strict_comments,
            result.strict_comment_errors.is_empty(),
            ErrorCode::MissingComments,
        ),
        (
            options.strict_comments_git,
            result.comment_diffs.is_empty(),
            ErrorCode::MissingCommitMessageComments,
        ),
        (
            options.pre_commit_ci,
            result.missing_bot_commits.is_empty(),
            ErrorCode::MissingPreCommitCICommits,
        ),
    ];

    checks
        .into_iter()
        .filter(|(enabled, clean, _)| *enabled && !*clean)
        .fold(0, |code, (_, _, flag)| code | flag as i32)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

pub trait ResultReporter {
    fn render(&self, result: &ValidationResult, options: &ValidationOptions) -> Result<String>;
}

pub fn reporter_for(format: OutputFormat) -> Box<dyn ResultReporter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter),
        OutputFormat::Yaml => Box::new(YamlReporter),
    }
}

/// The human readable report. Sections for checks that were not requested
/// are left out.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultReporter for ConsoleReporter {
    fn render(&self, result: &ValidationResult, options: &ValidationOptions) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "Validation Results:")?;
        writeln!(out, "Valid hashes ({}):", result.valid_hashes.len())?;
        for (line_number, hash) in &result.valid_hashes {
            writeln!(out, "  Line {line_number}: {hash}")?;
        }

        if result.errors.is_empty() {
            writeln!(out, "\nNo errors found!")?;
        } else {
            writeln!(out, "\nErrors ({}):", result.errors.len())?;
            for (line_number, line) in &result.errors {
                writeln!(out, "  Line {line_number}: {line}")?;
            }
        }

        if options.call_git {
            if result.missing_commits.is_empty() {
                writeln!(out, "\nAll commits are present in the Git history!")?;
            } else {
                writeln!(out, "\nMissing commits ({}):", result.missing_commits.len())?;
                for (line_number, commit) in &result.missing_commits {
                    writeln!(out, "  Line {line_number}: {commit}")?;
                }
            }
        }

        if options.strict_comments {
            if result.strict_comment_errors.is_empty() {
                writeln!(out, "\nAll commit lines have comments above them!")?;
            } else {
                writeln!(
                    out,
                    "\nStrict comment errors ({}):",
                    result.strict_comment_errors.len()
                )?;
                for (line_number, line) in &result.strict_comment_errors {
                    writeln!(out, "  Line {line_number}: {line}")?;
                }
            }
        }

        if options.strict_comments_git {
            if result.comment_diffs.is_empty() {
                writeln!(out, "\nAll comments match the corresponding commit messages!")?;
            } else {
                writeln!(out, "\nComment diffs ({}):", result.comment_diffs.len())?;
                for (line_number, (comment, subject)) in &result.comment_diffs {
                    writeln!(out, "  Line {line_number}:")?;
                    writeln!(out, "    Comment: {comment}")?;
                    writeln!(out, "    Commit message: {subject}")?;
                }
            }
        }

        if options.pre_commit_ci {
            if result.missing_bot_commits.is_empty() {
                writeln!(out, "\nAll pre-commit-ci commits are present in the file!")?;
            } else {
                writeln!(
                    out,
                    "\nMissing pre-commit-ci commits ({}):",
                    result.missing_bot_commits.len()
                )?;
                for (hash, subject) in &result.missing_bot_commits {
                    writeln!(out, "  Commit {hash}: {subject}")?;
                }
            }
        }

        Ok(out)
    }
}

pub struct JsonReporter;

impl ResultReporter for JsonReporter {
    fn render(&self, result: &ValidationResult, _options: &ValidationOptions) -> Result<String> {
        serde_json::to_string_pretty(result).context("Failed to serialize to JSON")
    }
}

pub struct YamlReporter;

impl ResultReporter for YamlReporter {
    fn render(&self, result: &ValidationResult, _options: &ValidationOptions) -> Result<String> {
        serde_yaml::to_string(result).context("Failed to serialize to YAML")
    }
}
