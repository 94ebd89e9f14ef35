use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Author of the automated formatting commits audited by `--pre-commit-ci`.
pub const DEFAULT_BOT_AUTHOR: &str = "pre-commit-ci[bot]";

/// Everything one validation run needs to know.
///
/// `strict_comments_git` is only meaningful together with `call_git` and
/// `strict_comments`, and `pre_commit_ci` only with `call_git`. The engine
/// assumes these hold; callers check them with
/// [`OptionsValidator`](crate::builders::validator::OptionsValidator) first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOptions {
    /// Path to the `.git-blame-ignore-revs` file.
    pub file_path: PathBuf,
    /// Ensure each commit is in the history of the checked-out branch.
    pub call_git: bool,
    /// Require each commit line to have one or more comment lines above it.
    pub strict_comments: bool,
    /// Ensure the comment above each commit matches the first part of the
    /// commit message.
    pub strict_comments_git: bool,
    /// Ensure all commits authored by the bot are present in the file.
    pub pre_commit_ci: bool,
    pub bot_author: String,
}

impl ValidationOptions {
    /// Syntax-only validation of `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            call_git: false,
            strict_comments: false,
            strict_comments_git: false,
            pre_commit_ci: false,
            bot_author: DEFAULT_BOT_AUTHOR.to_string(),
        }
    }

    /// True when any check needs to look at the repository per commit.
    pub fn needs_history(&self) -> bool {
        self.call_git || self.strict_comments_git
    }

    /// Switches a check on when the file enables it; the file never turns off
    /// something requested on the command line.
    pub fn merge(mut self, file: &FileConfig) -> Self {
        self.call_git |= file.call_git;
        self.strict_comments |= file.strict_comments;
        self.strict_comments_git |= file.strict_comments_git;
        self.pre_commit_ci |= file.pre_commit_ci;
        if let Some(author) = &file.bot_author {
            self.bot_author = author.clone();
        }
        self
    }
}

/// On-disk form of the options, read from a TOML file passed with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub call_git: bool,
    pub strict_comments: bool,
    pub strict_comments_git: bool,
    pub pre_commit_ci: bool,
    pub bot_author: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content).context("Failed to parse config file")
    }
}
