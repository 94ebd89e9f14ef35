use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Line number (1-based) to the text found on that line.
pub type HashEntries = BTreeMap<usize, String>;

/// A full, lowercase, 40 character SHA-1 commit hash.
static COMMIT_HASH: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, cannot fail to compile.
    Regex::new(r"^[0-9a-f]{40}$").expect("commit hash pattern is valid")
});

/// What a single non-blank line of a blame-ignore file turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Comment text with the leading `#` characters and whitespace stripped.
    Comment(String),
    ValidHash(String),
    SyntaxError(String),
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            LineKind::Blank
        } else if line.starts_with('#') {
            LineKind::Comment(strip_comment(line).to_string())
        } else if is_commit_hash(line) {
            LineKind::ValidHash(line.to_string())
        } else {
            LineKind::SyntaxError(line.to_string())
        }
    }
}

/// The outcome of the single pass over a blame-ignore file.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub valid_hashes: HashEntries,
    pub syntax_errors: HashEntries,
    /// Hash lines that had at least one comment line somewhere above them
    /// since the previous hash. Blank lines do not break the run.
    pub commented: BTreeSet<usize>,
    /// Every source line, trimmed, in file order.
    lines: Vec<String>,
}

impl Classification {
    /// Hash lines with no comment run above them.
    pub fn uncommented(&self) -> impl Iterator<Item = (usize, &str)> {
        self.valid_hashes
            .iter()
            .filter(|(line_number, _)| !self.commented.contains(*line_number))
            .map(|(line_number, hash)| (*line_number, hash.as_str()))
    }

    /// The comment sitting directly on the line above `line_number`.
    ///
    /// This is a purely positional lookup: a blank or non-comment line above
    /// yields an empty string, as does the first line of the file.
    pub fn comment_above(&self, line_number: usize) -> &str {
        if line_number <= 1 {
            return "";
        }
        match self.lines.get(line_number - 2) {
            Some(previous) if previous.starts_with('#') => strip_comment(previous),
            _ => "",
        }
    }

    /// All lines carrying `hash`. The same commit may be listed twice.
    pub fn lines_with_hash<'a>(&'a self, hash: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.valid_hashes
            .iter()
            .filter(move |(_, listed)| listed.as_str() == hash)
            .map(|(line_number, _)| *line_number)
    }

    pub fn contains_hash(&self, hash: &str) -> bool {
        self.valid_hashes.values().any(|listed| listed == hash)
    }
}

pub fn is_commit_hash(candidate: &str) -> bool {
    COMMIT_HASH.is_match(candidate)
}

fn strip_comment(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim()
}

/// Classifies every line of `content` in one forward pass.
pub fn classify(content: &str) -> Classification {
    let mut classification = Classification {
        lines: content.lines().map(|line| line.trim().to_string()).collect(),
        ..Default::default()
    };

    let mut pending_comment_run = false;
    let mut last_comment: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        match LineKind::of(line) {
            LineKind::Blank => {}
            LineKind::Comment(text) => {
                pending_comment_run = true;
                last_comment = Some(text);
            }
            LineKind::ValidHash(hash) => {
                tracing::debug!(line_number, %hash, comment = ?last_comment, "valid hash");
                if pending_comment_run {
                    classification.commented.insert(line_number);
                }
                classification.valid_hashes.insert(line_number, hash);
                pending_comment_run = false;
                last_comment = None;
            }
            LineKind::SyntaxError(raw) => {
                tracing::debug!(line_number, %raw, "syntax error");
                classification.syntax_errors.insert(line_number, raw);
            }
        }
    }

    classification
}
