use crate::{env::Env, errors::PathError, parser::Parser};

use lazy_static::lazy_static;

lazy_static! {
    static ref PARSER: Parser = Parser::new(Env::standard());
}

/// Tag carried by every [`Predicate`].
pub const PREDICATE: &str = "predicate";

/// A parsed leafref path argument.
///
/// `up` counts the `../` steps of a relative path, or is `-1` for an absolute
/// path. `deref_up` and `deref_down` describe the argument of a leading
/// `deref(...)` invocation; without one, `deref_up` is 0 and `deref_down` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArgument {
    pub up: isize,
    pub down: Vec<PathSegment>,
    pub deref_up: usize,
    pub deref_down: Option<Vec<PathSegment>>,
}

impl PathArgument {
    pub fn new(expr: &str) -> Result<Self, PathError> {
        PARSER.parse(expr)
    }

    pub fn is_absolute(&self) -> bool {
        self.up < 0
    }

    pub fn has_deref(&self) -> bool {
        self.deref_down.is_some()
    }
}

/// One step of a path.
///
/// Predicates are stored in the same sequence as node identifiers and apply
/// to the nearest [`PathSegment::Node`] before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Node(NodeIdentifier),
    Predicate(Predicate),
}

impl PathSegment {
    pub fn as_node(&self) -> Option<&NodeIdentifier> {
        match self {
            PathSegment::Node(node_id) => Some(node_id),
            PathSegment::Predicate(_) => None,
        }
    }

    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            PathSegment::Predicate(predicate) => Some(predicate),
            PathSegment::Node(_) => None,
        }
    }
}

impl From<NodeIdentifier> for PathSegment {
    fn from(node_id: NodeIdentifier) -> Self {
        PathSegment::Node(node_id)
    }
}

impl From<Predicate> for PathSegment {
    fn from(predicate: Predicate) -> Self {
        PathSegment::Predicate(predicate)
    }
}

/// A schema node name, optionally qualified with a module prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeIdentifier {
    Name(String),
    Prefixed { prefix: String, name: String },
}

impl NodeIdentifier {
    pub fn name(&self) -> &str {
        match self {
            NodeIdentifier::Name(name) => name,
            NodeIdentifier::Prefixed { name, .. } => name,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        match self {
            NodeIdentifier::Name(_) => None,
            NodeIdentifier::Prefixed { prefix, .. } => Some(prefix),
        }
    }
}

/// A key predicate, `[node_id = current()/../down]`.
///
/// `up` counts the `../` steps following `current()`, and `down` is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub literal: &'static str,
    pub node_id: NodeIdentifier,
    pub up: usize,
    pub down: Vec<NodeIdentifier>,
}

impl Predicate {
    pub fn new(node_id: NodeIdentifier, up: usize, down: Vec<NodeIdentifier>) -> Self {
        Predicate {
            literal: PREDICATE,
            node_id,
            up,
            down,
        }
    }
}
