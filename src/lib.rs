//! rnt generates ready-to-code Next.js projects.
//! A validated configuration selects dependencies, directories and templates; the
//! generator then scaffolds the base app, installs packages and writes the files.

/// Answer collection from stdin, arguments and interactive prompts
pub mod answers;

/// Built-in template catalog and applicability rules
pub mod catalog;

/// Command-line interface module for the rnt application
pub mod cli;

/// External commands: base scaffold, package installs, tool initialisation
pub mod commands;

/// Validated project configuration
pub mod config;

/// npm package selection
pub mod dependencies;

/// Directory layout of generated projects
pub mod directories;

/// Error types and handling for the rnt application
pub mod error;

/// Staged generation pipeline
pub mod generator;

pub mod logger;

/// Precomputed commands, directories and rendered files for one run
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// Template rendering
pub mod renderer;

/// External process execution
pub mod shell;

/// Filesystem output
pub mod writer;
