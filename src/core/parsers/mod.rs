//! Source file parsers.
//!
//! - `source`: JS/JSX/TS/TSX parser (uses swc) that yields the file's comment groups

pub mod source;

pub use source::{ParsedSource, parse_source};
