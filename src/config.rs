// ABOUTME: Configuration and constants for the interpreter

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "HyperLambda Lisp Version 0.1.0";
pub const WELCOME_SUBTITLE: &str = "Press Ctrl+C to Exit";
pub const PROMPT: &str = "\u{3bb}> ";
pub const HISTORY_FILE: &str = ".hyperlambda_history";
