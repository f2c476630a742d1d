//! A parser for YANG leafref path expressions, producing a schema agnostic
//! abstract syntax tree, following the `path-arg` grammar of RFC 7950 with the
//! addition of a leading `deref()` invocation.
//!
//! ## Parsing paths
//!
//! ```
//! use leafref_path::{NodeIdentifier, PathArgument, PathError, PathSegment};
//!
//! fn main() -> Result<(), PathError> {
//!     let path = PathArgument::new("../if:name")?;
//!
//!     assert_eq!(path.up, 1);
//!     assert_eq!(
//!         path.down,
//!         vec![PathSegment::Node(NodeIdentifier::Prefixed {
//!             prefix: String::from("if"),
//!             name: String::from("name"),
//!         })]
//!     );
//!     assert!(path.deref_down.is_none());
//!     Ok(())
//! }
//! ```
//!
//! An absolute path has `up` set to `-1`. Key predicates are kept in the same
//! sequence as node identifiers, following the node they constrain.
//!
//! ```
//! use leafref_path::{PathError, PathSegment};
//!
//! fn main() -> Result<(), PathError> {
//!     let path = leafref_path::parse("/a[b = current()/../c]/d")?;
//!     println!("{:#?}", path);
//!
//!     assert_eq!(path.up, -1);
//!     assert!(matches!(path.down[1], PathSegment::Predicate(_)));
//!     Ok(())
//! }
//! ```
//!
//! ## Strict RFC 7950 paths
//!
//! `deref()` is an extension. Create a [`Parser`] with [`Env::rfc7950`] to
//! reject it.
//!
//! ```
//! use leafref_path::{Env, Parser};
//!
//! let parser = Parser::new(Env::rfc7950());
//! assert!(parser.parse("deref(../ref)/name").is_err());
//! assert!(parser.parse("deref/name").is_ok());
//! ```
//!
//! Errors carry a line and column. Paths can't span lines, so the line is
//! always 1.
//!
//! ```text
//! syntax error: expected a node identifier, found '/' [L1:C2]
//! ```
pub mod env;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod path;
pub mod token;

pub use env::Env;
pub use errors::PathError;
pub use errors::PathErrorType;
pub use parser::Parser;
pub use path::NodeIdentifier;
pub use path::PathArgument;
pub use path::PathSegment;
pub use path::Predicate;

/// Parse a leafref path with the standard parser, which allows `deref()`.
pub fn parse(expr: &str) -> Result<PathArgument, PathError> {
    PathArgument::new(expr)
}
