// This file is the module declaration file for the `core` module.
// It declares the submodules that make up the validation engine and
// exposes them to the rest of the crate.

// `classifier` module:
// The single forward pass over the file. Every non-blank line becomes a
// comment, a valid commit hash or a syntax error, and each hash line
// remembers whether a comment run came before it.
pub mod classifier;

// `audit` module:
// The optional second pass that asks the repository about each listed
// commit, compares comments with commit subjects and checks that every
// bot-authored commit is listed.
pub mod audit;

// `config` module:
// The options for one run and the TOML file they can be loaded from.
pub mod config;

// `engine` module:
// Ties the two passes together and produces the `ValidationResult`.
pub mod engine;

pub mod error;

// `git` module:
// The `HistoryQuery` trait the auditor talks to, and its `git2` backed
// implementation.
pub mod git;
