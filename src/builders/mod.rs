// This file is the module declaration file for the `builders` module.
// It declares and makes public the pieces that sit between the command line
// and the validation engine.

// `reporter` module:
// Renders a `ValidationResult` as the console report, JSON or YAML, and
// turns it into the process exit status.
pub mod reporter;

// `validator` module:
// Checks that the requested combination of switches is usable before the
// engine is run.
pub mod validator;
