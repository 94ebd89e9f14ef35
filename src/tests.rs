#[cfg(test)]
mod tests {
    use crate::core::config::ValidationOptions;
    use crate::core::engine::{ValidationEngine, ValidationResult};
    use crate::core::error::ValidateError;
    use crate::core::git::{BotCommit, HistoryQuery};
    use anyhow::{Result, anyhow};
    use std::collections::HashMap;

    const HASH_A: &str = "1234567890abcdef1234567890abcdef12345678";
    const HASH_B: &str = "abcdef1234567890abcdef1234567890abcdef12";
    const HASH_C: &str = "0123456789012345678901234567890123456789";

    /// In-memory history: known commits by hash, plus the bot's commits.
    #[derive(Default)]
    struct MockHistory {
        subjects: HashMap<String, String>,
        bot_commits: Vec<BotCommit>,
        bot_listing_fails: bool,
    }

    impl MockHistory {
        fn with_commit(mut self, hash: &str, subject: &str) -> Self {
            self.subjects.insert(hash.to_string(), subject.to_string());
            self
        }

        fn with_bot_commit(mut self, hash: &str, subject: &str) -> Self {
            self.bot_commits.push(BotCommit {
                hash: hash.to_string(),
                subject: subject.to_string(),
            });
            self.with_commit(hash, subject)
        }
    }

    impl HistoryQuery for MockHistory {
        fn get_commit_subject(&self, hash: &str) -> Result<String> {
            self.subjects
                .get(hash)
                .cloned()
                .ok_or_else(|| anyhow!("bad object {hash}"))
        }

        fn list_commits_by_author(&self, _author: &str) -> Result<Vec<BotCommit>> {
            if self.bot_listing_fails {
                return Err(anyhow!("not a git repository"));
            }
            Ok(self.bot_commits.clone())
        }
    }

    fn options(call_git: bool, strict: bool, strict_git: bool, bot: bool) -> ValidationOptions {
        let mut options = ValidationOptions::new(".git-blame-ignore-revs");
        options.call_git = call_git;
        options.strict_comments = strict;
        options.strict_comments_git = strict_git;
        options.pre_commit_ci = bot;
        options
    }

    fn run(
        content: &str,
        options: ValidationOptions,
        history: &MockHistory,
    ) -> Result<ValidationResult, ValidateError> {
        ValidationEngine::new(options).validate_content(content, history)
    }

    #[test]
    fn test_commented_hash() {
        let content = format!("# fix\n{HASH_A}\n");
        let result = run(&content, options(false, true, false, false), &MockHistory::default()).unwrap();

        assert_eq!(result.valid_hashes.get(&2).map(String::as_str), Some(HASH_A));
        assert!(result.errors.is_empty());
        assert!(result.strict_comment_errors.is_empty());
    }

    #[test]
    fn test_syntax_error_after_hash() {
        let content = format!("{HASH_A}\nnot_a_hash\n");
        let result = run(&content, options(false, false, false, false), &MockHistory::default()).unwrap();

        assert_eq!(result.valid_hashes.len(), 1);
        assert_eq!(result.valid_hashes[&1], HASH_A);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[&2], "not_a_hash");
    }

    #[test]
    fn test_strict_comments_flags_uncommented_hashes() {
        let content = format!("{HASH_A}\n# second\n{HASH_B}\n{HASH_C}\n");
        let result = run(&content, options(false, true, false, false), &MockHistory::default()).unwrap();

        let flagged: Vec<usize> = result.strict_comment_errors.keys().copied().collect();
        assert_eq!(flagged, vec![1, 4]);
    }

    #[test]
    fn test_strict_comments_off_records_nothing() {
        let content = format!("{HASH_A}\n");
        let result = run(&content, options(false, false, false, false), &MockHistory::default()).unwrap();
        assert!(result.strict_comment_errors.is_empty());
    }

    #[test]
    fn test_no_git_queries_without_call_git() {
        // Nothing is known to the history, but nothing should be asked either.
        let content = format!("# a\n{HASH_A}\n");
        let result = run(&content, options(false, true, false, false), &MockHistory::default()).unwrap();
        assert!(result.missing_commits.is_empty());
    }

    #[test]
    fn test_missing_commit_stays_valid() {
        let content = format!("# present\n{HASH_A}\n# gone\n{HASH_B}\n");
        let history = MockHistory::default().with_commit(HASH_A, "present");
        let result = run(&content, options(true, false, false, false), &history).unwrap();

        assert_eq!(result.valid_hashes.len(), 2);
        assert_eq!(result.missing_commits.len(), 1);
        assert_eq!(result.missing_commits[&4], HASH_B);
    }

    #[test]
    fn test_comment_prefix_of_subject_matches() {
        let content = format!("# fix typo\n{HASH_A}\n");
        let history = MockHistory::default().with_commit(HASH_A, "fix typo in docs");
        let result = run(&content, options(true, true, true, false), &history).unwrap();

        assert!(result.comment_diffs.is_empty());
    }

    #[test]
    fn test_comment_not_matching_subject() {
        let content = format!("# fix typo\n{HASH_A}\n");
        let history = MockHistory::default().with_commit(HASH_A, "typo fixed");
        let result = run(&content, options(true, true, true, false), &history).unwrap();

        assert_eq!(
            result.comment_diffs[&2],
            ("fix typo".to_string(), "typo fixed".to_string())
        );
    }

    #[test]
    fn test_comment_diff_uses_line_directly_above() {
        // The blank line hides the comment from the positional lookup, and an
        // empty comment is a prefix of every subject.
        let content = format!("# unrelated\n\n{HASH_A}\n");
        let history = MockHistory::default().with_commit(HASH_A, "Apply black");
        let result = run(&content, options(true, true, true, false), &history).unwrap();

        assert!(result.comment_diffs.is_empty());
        assert!(result.strict_comment_errors.is_empty());
    }

    #[test]
    fn test_missing_commits_skip_comment_comparison() {
        let content = format!("# whatever\n{HASH_A}\n");
        let result = run(&content, options(true, true, true, false), &MockHistory::default()).unwrap();

        assert_eq!(result.missing_commits.len(), 1);
        assert!(result.comment_diffs.is_empty());
    }

    #[test]
    fn test_missing_bot_commit() {
        let content = format!("# Format\n{HASH_A}\n");
        let history = MockHistory::default()
            .with_commit(HASH_A, "Format")
            .with_bot_commit(HASH_B, "[pre-commit.ci] auto fixes from pre-commit.com hooks");
        let result = run(&content, options(true, false, false, true), &history).unwrap();

        assert_eq!(result.missing_bot_commits.len(), 1);
        assert_eq!(
            result.missing_bot_commits[HASH_B],
            "[pre-commit.ci] auto fixes from pre-commit.com hooks"
        );
        assert!(result.missing_commits.is_empty());
    }

    #[test]
    fn test_listed_bot_commits_are_not_missing() {
        let content = format!("# [pre-commit.ci] auto fixes\n{HASH_B}\n");
        let history = MockHistory::default().with_bot_commit(HASH_B, "[pre-commit.ci] auto fixes");
        let result = run(&content, options(true, true, true, true), &history).unwrap();

        assert!(result.missing_bot_commits.is_empty());
        assert!(result.comment_diffs.is_empty());
        assert!(result.strict_comment_errors.is_empty());
    }

    #[test]
    fn test_bot_recheck_uses_positional_comment() {
        // The running check sees "# auto fixes" across the blank line; the
        // bot recheck only looks directly above and finds nothing.
        let content = format!("# auto fixes\n\n{HASH_B}\n");
        let history = MockHistory::default().with_bot_commit(HASH_B, "auto fixes");
        let result = run(&content, options(true, true, false, true), &history).unwrap();

        assert_eq!(result.strict_comment_errors.len(), 1);
        assert_eq!(result.strict_comment_errors[&3], HASH_B);
    }

    #[test]
    fn test_bot_recheck_covers_duplicate_lines() {
        let content = format!("# wrong\n{HASH_B}\n# also wrong\n{HASH_B}\n");
        let history = MockHistory::default().with_bot_commit(HASH_B, "auto fixes");
        let result = run(&content, options(true, true, true, true), &history).unwrap();

        let lines: Vec<usize> = result.comment_diffs.keys().copied().collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(result.comment_diffs[&4].0, "also wrong");
    }

    #[test]
    fn test_bot_listing_failure_aborts() {
        let content = format!("# Format\n{HASH_A}\n");
        let history = MockHistory {
            bot_listing_fails: true,
            ..MockHistory::default().with_commit(HASH_A, "Format")
        };
        let err = run(&content, options(true, false, false, true), &history).unwrap_err();

        match err {
            ValidateError::BotAuditFailed { author, .. } => assert_eq!(author, "pre-commit-ci[bot]"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_file_produces_empty_result() {
        let history = MockHistory::default();
        let result = run("\n\n   \n", options(true, true, true, true), &history).unwrap();
        assert_eq!(result, ValidationResult::default());
    }
}
