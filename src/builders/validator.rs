use crate::core::config::ValidationOptions;

/// The `OptionsValidator` checks that a combination of switches makes sense
/// before a run is started.
///
/// The engine itself trusts its options, so anything that builds a
/// `ValidationOptions` from user input should pass it through here first.
pub struct OptionsValidator;

impl OptionsValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns one message per violated precondition; empty means usable.
    pub fn validate(&self, options: &ValidationOptions) -> Vec<String> {
        let mut issues = Vec::new();

        if options.strict_comments_git && !(options.strict_comments && options.call_git) {
            issues.push("--strict-comments-git requires --strict-comments and --call-git.".to_string());
        }
        if options.pre_commit_ci && !options.call_git {
            issues.push("--pre-commit-ci requires --call-git.".to_string());
        }
        if options.pre_commit_ci && options.bot_author.trim().is_empty() {
            issues.push("The bot author used by --pre-commit-ci must not be empty.".to_string());
        }

        issues
    }
}

impl Default for OptionsValidator {
    fn default() -> Self {
        Self::new()
    }
}
