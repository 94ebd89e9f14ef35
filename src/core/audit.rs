use crate::core::classifier::Classification;
use crate::core::config::ValidationOptions;
use crate::core::engine::ValidationResult;
use crate::core::error::{Result, ValidateError};
use crate::core::git::{BotCommit, HistoryQuery};

/// Cross-references a classified file against repository history.
///
/// Which checks run is decided by the options: the per-commit lookup when
/// `call_git` or `strict_comments_git` is set, the comment/subject comparison
/// when `strict_comments_git` is set, and the bot audit when `pre_commit_ci`
/// is set.
pub struct HistoryAuditor<'a> {
    history: &'a dyn HistoryQuery,
    options: &'a ValidationOptions,
}

impl<'a> HistoryAuditor<'a> {
    pub fn new(history: &'a dyn HistoryQuery, options: &'a ValidationOptions) -> Self {
        Self { history, options }
    }

    pub fn audit(&self, classification: &Classification, result: &mut ValidationResult) -> Result<()> {
        if self.options.needs_history() {
            self.check_existence(classification, result);
        }

        if self.options.pre_commit_ci {
            self.audit_bot_commits(classification, result)?;
        }

        Ok(())
    }

    /// Looks up every listed commit. A failed lookup of any kind counts as
    /// "not in history"; the hash stays syntactically valid either way.
    fn check_existence(&self, classification: &Classification, result: &mut ValidationResult) {
        for (line_number, hash) in &classification.valid_hashes {
            match self.history.get_commit_subject(hash) {
                Ok(subject) => {
                    if self.options.strict_comments_git {
                        let comment = classification.comment_above(*line_number);
                        compare_comment(*line_number, comment, &subject, result);
                    }
                }
                Err(e) => {
                    tracing::debug!(line_number, %hash, error = %e, "commit not found");
                    result.missing_commits.insert(*line_number, hash.clone());
                }
            }
        }
    }

    fn audit_bot_commits(
        &self,
        classification: &Classification,
        result: &mut ValidationResult,
    ) -> Result<()> {
        let author = &self.options.bot_author;
        let commits = self
            .history
            .list_commits_by_author(author)
            .map_err(|source| ValidateError::BotAuditFailed {
                author: author.clone(),
                source,
            })?;
        tracing::debug!(%author, count = commits.len(), "listed bot commits");

        for commit in commits {
            if !classification.contains_hash(&commit.hash) {
                result
                    .missing_bot_commits
                    .insert(commit.hash, commit.subject);
            } else if self.options.strict_comments || self.options.strict_comments_git {
                self.recheck_bot_commit(&commit, classification, result);
            }
        }
        Ok(())
    }

    /// Second look at the lines of a listed bot commit, using only the comment
    /// directly above each line. Anything found here is added on top of what
    /// the earlier checks recorded.
    fn recheck_bot_commit(
        &self,
        commit: &BotCommit,
        classification: &Classification,
        result: &mut ValidationResult,
    ) {
        for line_number in classification.lines_with_hash(&commit.hash) {
            let comment = classification.comment_above(line_number);
            if self.options.strict_comments && comment.is_empty() {
                result
                    .strict_comment_errors
                    .insert(line_number, commit.hash.clone());
            }
            if self.options.strict_comments_git {
                compare_comment(line_number, comment, &commit.subject, result);
            }
        }
    }
}

/// The comment must be a prefix of the subject; an empty comment always is.
fn compare_comment(line_number: usize, comment: &str, subject: &str, result: &mut ValidationResult) {
    if !subject.starts_with(comment) {
        result
            .comment_diffs
            .insert(line_number, (comment.to_string(), subject.to_string()));
    }
}
