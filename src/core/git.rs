use anyhow::{Result, anyhow};
use git2::{Oid, Repository, Sort};
use serde::Serialize;
use std::path::Path;

/// A commit found while walking the history, identified by its full hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotCommit {
    pub hash: String,
    pub subject: String,
}

/// Trait defining the history lookups required by the auditor.
/// This abstraction allows for easier testing and decoupling from specific git implementations.
pub trait HistoryQuery {
    /// Returns the subject line of the commit named by `hash`, or an error if
    /// the repository does not know it.
    fn get_commit_subject(&self, hash: &str) -> Result<String>;

    /// Lists every commit reachable from `HEAD` whose author matches `author`,
    /// newest first.
    fn list_commits_by_author(&self, author: &str) -> Result<Vec<BotCommit>>;
}

/// Concrete implementation of HistoryQuery using the git2 crate.
pub struct Git2Client {
    repo: Repository,
}

impl Git2Client {
    /// Opens the repository containing `path`, searching parent directories
    /// the way `git` itself does.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }
}

impl HistoryQuery for Git2Client {
    fn get_commit_subject(&self, hash: &str) -> Result<String> {
        let oid = Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid)?;
        Ok(commit.summary().unwrap_or_default().to_string())
    }

    fn list_commits_by_author(&self, author: &str) -> Result<Vec<BotCommit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let signature = commit.author();
            let matches = signature.name().is_some_and(|name| name.contains(author))
                || signature.email().is_some_and(|email| email.contains(author));

            if matches {
                commits.push(BotCommit {
                    hash: commit.id().to_string(),
                    subject: commit.summary().unwrap_or_default().to_string(),
                });
            }
        }
        Ok(commits)
    }
}

/// Stands in for a repository that could not be opened. Every lookup fails,
/// so each listed commit is reported missing and a bot audit aborts.
pub struct Unreachable {
    reason: String,
}

impl Unreachable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl HistoryQuery for Unreachable {
    fn get_commit_subject(&self, hash: &str) -> Result<String> {
        Err(anyhow!("cannot look up {hash}: {}", self.reason))
    }

    fn list_commits_by_author(&self, author: &str) -> Result<Vec<BotCommit>> {
        Err(anyhow!("cannot list commits by {author}: {}", self.reason))
    }
}
