use crate::core::audit::HistoryAuditor;
use crate::core::classifier::{self, Classification, HashEntries};
use crate::core::config::ValidationOptions;
use crate::core::error::{Result, ValidateError};
use crate::core::git::{Git2Client, HistoryQuery, Unreachable};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Everything found in one validation run. An empty collection means the
/// check passed or was not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid_hashes: HashEntries,
    /// Lines that are neither blank, a comment, nor a commit hash.
    pub errors: HashEntries,
    pub missing_commits: HashEntries,
    pub strict_comment_errors: HashEntries,
    /// Line number -> (comment, commit subject)
    pub comment_diffs: BTreeMap<usize, (String, String)>,
    /// Commit hash -> commit subject
    pub missing_bot_commits: BTreeMap<String, String>,
}

impl ValidationResult {
    fn from_classification(classification: &Classification, options: &ValidationOptions) -> Self {
        let mut result = Self {
            valid_hashes: classification.valid_hashes.clone(),
            errors: classification.syntax_errors.clone(),
            ..Default::default()
        };

        if options.strict_comments {
            result.strict_comment_errors = classification
                .uncommented()
                .map(|(line_number, hash)| (line_number, hash.to_string()))
                .collect();
        }
        result
    }
}

pub struct ValidationEngine {
    options: ValidationOptions,
}

impl ValidationEngine {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates the file, querying the repository that contains it when a
    /// git-backed check is enabled.
    pub fn run(&self) -> Result<ValidationResult> {
        if !self.uses_history() {
            return self.run_with(&Unreachable::new("no git check requested"));
        }

        let dir = repository_dir(&self.options.file_path);
        match Git2Client::discover(dir) {
            Ok(client) => self.run_with(&client),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "no git repository found");
                self.run_with(&Unreachable::new(e.to_string()))
            }
        }
    }

    /// Validates the file against an explicit history source.
    pub fn run_with(&self, history: &dyn HistoryQuery) -> Result<ValidationResult> {
        let path = &self.options.file_path;
        let content = fs::read_to_string(path).map_err(|source| ValidateError::FileNotFound {
            path: path.clone(),
            source,
        })?;

        let result = self.validate_content(&content, history)?;
        tracing::info!(
            file = %path.display(),
            valid = result.valid_hashes.len(),
            errors = result.errors.len(),
            missing = result.missing_commits.len(),
            "validated blame-ignore file"
        );
        Ok(result)
    }

    /// Classifies `content` and audits it. The file path in the options is
    /// not read.
    pub fn validate_content(
        &self,
        content: &str,
        history: &dyn HistoryQuery,
    ) -> Result<ValidationResult> {
        let classification = classifier::classify(content);
        let mut result = ValidationResult::from_classification(&classification, &self.options);

        if self.uses_history() {
            HistoryAuditor::new(history, &self.options).audit(&classification, &mut result)?;
        }
        Ok(result)
    }

    fn uses_history(&self) -> bool {
        self.options.needs_history() || self.options.pre_commit_ci
    }
}

/// Validates the file named in `options` against the repository containing it.
pub fn validate(options: &ValidationOptions) -> Result<ValidationResult> {
    ValidationEngine::new(options.clone()).run()
}

/// Validates the file named in `options` against `history`.
pub fn validate_with(
    options: &ValidationOptions,
    history: &dyn HistoryQuery,
) -> Result<ValidationResult> {
    ValidationEngine::new(options.clone()).run_with(history)
}

/// The directory git is asked about: the one holding the file.
fn repository_dir(file_path: &Path) -> &Path {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
