//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `comment`: comment tokens, groups, positions and delimiter stripping
//! - `matcher`: keyword prefix/boundary matching and format validation per line
//! - `scanner`: drives the matcher over a file's comments and renders messages
//! - `parsers`: swc front-end producing comment groups from JS/TS sources
//! - `file_scanner`: source file discovery

pub mod comment;
pub mod file_scanner;
pub mod matcher;
pub mod parsers;
pub mod scanner;

pub use comment::{CommentGroup, CommentToken, Position, PositionResolver, SourceComments, normalize};
pub use matcher::{LineMatcher, MatchMode, MarkerRule};
pub use parsers::{ParsedSource, parse_source};
pub use scanner::{Message, Scanner, scan};
