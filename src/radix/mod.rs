//! Core radix tree data structure: nodes, insertion and lookup, suggestions, and
//! word list input and output.

/// Errors returned when filling or writing a tree.
pub mod error;
/// The 26-letter alphabet and input normalization.
pub mod letter;
/// Radix tree node with a fragment and one child slot per letter.
pub mod node;
/// Closest-match suggestions.
mod suggest;
/// The tree itself: insertion, lookup, enumeration and text dump.
pub mod tree;
/// Word list loading and tree dumping.
pub mod wordlist;

pub use error::TreeError;
pub use node::{ChildIter, RadixNode};
pub use tree::{build_tree, CompactPrefixTree, Dictionary, Words};
pub use wordlist::{LoadSummary, WordListLoader};
