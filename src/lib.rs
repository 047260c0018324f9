//! # libradix
//!
//! A compressed prefix tree ([radix tree](https://en.wikipedia.org/wiki/Radix_tree))
//! word list for Rust, built to back a spell checker or an autocomplete box.
//!
//! Each node of the tree stores a whole fragment of letters rather than a single
//! letter. A node is split only when a new word leaves its fragment part way
//! through, so long unbranched runs cost one node.
//!
//! ## Features
//!
//! - **Membership and prefix checks** in O(word length)
//! - **Suggestions** for words that are not stored, ranked by how long a prefix they
//!   share with the query
//! - **Case-insensitive**: words are lowercased; the alphabet is `a` to `z`
//! - **Word lists**: load whitespace-separated words from any reader or file, and
//!   write the tree out as an indented listing
//!
//! ## Quick Start
//!
//! ```
//! use libradix::radix::build_tree;
//!
//! let tree = build_tree(["cat", "car", "cart"]).unwrap();
//!
//! assert!(tree.check("car"));
//! assert!(!tree.check("ca"));
//! assert!(tree.check_prefix("ca"));
//!
//! // A stored word suggests only itself.
//! assert_eq!(tree.suggest("cart", 5), ["cart"]);
//! // Otherwise words sharing the longest prefix with the query come first.
//! assert_eq!(tree.suggest("care", 2), ["car", "cart"]);
//! ```
//!
//! ## Loading a Word List
//!
//! ```
//! use libradix::radix::{CompactPrefixTree, WordListLoader};
//!
//! let mut tree = CompactPrefixTree::new();
//! let summary = WordListLoader::new()
//!     .skip_invalid(true)
//!     .load(&mut tree, "bake baked\nbaker's baker\n".as_bytes())
//!     .unwrap();
//! assert_eq!((summary.added, summary.skipped), (3, 1));
//!
//! print!("{tree}");
//! ```

#![warn(missing_docs)]

/// Core radix tree data structure: nodes, tree operations, suggestions and word lists.
pub mod radix;

pub use radix::{build_tree, CompactPrefixTree, Dictionary, RadixNode, TreeError};
