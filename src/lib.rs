//! Todox - comment marker checker for JavaScript and TypeScript
//!
//! Todox is a CLI tool and library that finds comment lines starting with
//! markers such as `TODO`, `BUG` or `FIXME`, or, in format mode, checks those
//! lines against per-keyword regular expressions.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment model, line matcher, scanner and the swc front-end
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
