use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use super::error::TreeError;
use super::letter;
use super::node::RadixNode;

/// A word list that can check membership and prefixes, and suggest close matches.
///
/// Words are case-insensitive: every operation lowercases its input first.
pub trait Dictionary {
    /// Adds a word. Returns `Ok(true)` if it was not stored before.
    fn add(&mut self, word: &str) -> Result<bool, TreeError>;

    /// Returns true if `word` is stored.
    fn check(&self, word: &str) -> bool;

    /// Returns true if any stored word starts with `prefix`.
    fn check_prefix(&self, prefix: &str) -> bool;

    /// Returns `[word]` if `word` is stored, otherwise up to `count` stored words that
    /// are as close to it as possible.
    fn suggest(&self, word: &str, count: usize) -> Vec<String>;
}

/// A compressed prefix tree (radix tree) over the letters `a` to `z`.
///
/// Each node holds a fragment of one or more letters, and no two siblings start with
/// the same letter. Words can be added but never removed.
///
/// The tree follows the usual borrowing rules: any number of lookups can share it,
/// but [`add`](Self::add) needs exclusive access.
///
/// # Examples
///
/// ```
/// use libradix::radix::CompactPrefixTree;
///
/// let mut tree = CompactPrefixTree::new();
/// tree.add("care").unwrap();
/// tree.add("Car").unwrap();
///
/// assert!(tree.check("car"));
/// assert!(tree.check("CARE"));
/// assert!(!tree.check("ca"));
/// assert!(tree.check_prefix("ca"));
/// ```
#[derive(Clone)]
pub struct CompactPrefixTree {
    root: RadixNode,
    len: usize,
}

impl Default for CompactPrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactPrefixTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        CompactPrefixTree {
            root: RadixNode::root(),
            len: 0,
        }
    }

    /// Returns the root node. Its fragment is empty and it is never a word.
    pub fn root(&self) -> &RadixNode {
        &self.root
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Adds a word to the tree.
    ///
    /// The word is lowercased first. Returns `Ok(true)` if the word was newly stored
    /// and `Ok(false)` if it was already present, in which case the tree is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyWord`] for the empty string, and
    /// [`TreeError::InvalidLetter`] if the lowercased word holds anything but `a`–`z`.
    pub fn add(&mut self, word: &str) -> Result<bool, TreeError> {
        let normalized = letter::normalize(word).map_err(|letter| TreeError::InvalidLetter {
            word: word.to_string(),
            letter,
        })?;
        if normalized.is_empty() {
            return Err(TreeError::EmptyWord);
        }
        let added = insert(&mut self.root, &normalized);
        if added {
            self.len += 1;
        }
        Ok(added)
    }

    /// Returns true if `word` is stored.
    ///
    /// The empty string and words with characters outside the alphabet are never stored.
    pub fn check(&self, word: &str) -> bool {
        letter::normalize(word)
            .ok()
            .and_then(|word| self.find(&word).map(RadixNode::is_word))
            .unwrap_or(false)
    }

    /// Returns true if some stored word starts with `prefix`.
    ///
    /// The empty prefix matches whenever the tree holds at least one word.
    pub fn check_prefix(&self, prefix: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        letter::normalize(prefix).is_ok_and(|prefix| self.locate(&prefix).is_some())
    }

    /// Returns an iterator over all stored words in alphabetical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libradix::radix::build_tree;
    ///
    /// let tree = build_tree(["cart", "cat", "car"]).unwrap();
    /// let words: Vec<String> = tree.words().collect();
    /// assert_eq!(words, ["car", "cart", "cat"]);
    /// ```
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root, "")
    }

    /// Returns the node where `word` ends exactly on a fragment boundary.
    ///
    /// `word` must already be normalized.
    fn find(&self, word: &str) -> Option<&RadixNode> {
        let mut node = &self.root;
        let mut rest = word;
        while !rest.is_empty() {
            let child = node.child(letter::first_slot(rest)?)?;
            rest = rest.strip_prefix(child.fragment())?;
            node = child;
        }
        Some(node)
    }

    /// Finds the topmost node whose subtree holds exactly the words starting with
    /// `prefix`, along with the letters spelled on the path above that node.
    ///
    /// `prefix` may end part way through the returned node's fragment.
    /// `prefix` must already be normalized.
    pub(crate) fn locate<'t, 'p>(&'t self, prefix: &'p str) -> Option<(&'t RadixNode, &'p str)> {
        let mut node = &self.root;
        let mut above = 0;
        let mut consumed = 0;
        while consumed < prefix.len() {
            let rest = &prefix[consumed..];
            let child = node.child(letter::first_slot(rest)?)?;
            let common = letter::common_prefix_len(child.fragment(), rest);
            if common == child.fragment().len() {
                above = consumed;
                consumed += common;
                node = child;
            } else if common == rest.len() {
                return Some((child, &prefix[..consumed]));
            } else {
                return None;
            }
        }
        Some((node, &prefix[..above]))
    }
}

/// Stores `rest` below `node`, splitting a child if `rest` leaves its fragment part way.
///
/// Returns true if a new word was stored. `rest` must be normalized and non-empty.
fn insert(node: &mut RadixNode, rest: &str) -> bool {
    let index = letter::first_slot(rest).expect("insert: suffix must be a non-empty word");
    let common = match node.child_mut(index) {
        None => {
            node.attach(Box::new(RadixNode::new(rest.to_string(), true)));
            return true;
        }
        Some(child) => {
            let common = letter::common_prefix_len(child.fragment(), rest);
            assert!(
                common > 0,
                "insert: child {:?} sits in the slot for {:?}",
                child.fragment(),
                rest
            );
            if common == child.fragment().len() {
                if common == rest.len() {
                    let added = !child.is_word();
                    child.set_word(true);
                    return added;
                }
                return insert(child, &rest[common..]);
            }
            common
        }
    };
    split_child(node, index, common, rest);
    true
}

/// Puts a new node holding the first `common` letters of the child in slot `index`
/// between `node` and that child, then stores `rest` below the new node.
fn split_child(node: &mut RadixNode, index: usize, common: usize, rest: &str) {
    let mut existing = node
        .take_child(index)
        .expect("split_child: slot must hold the child being split");
    let shared = existing.split_fragment(common);
    trace!(shared = %shared, kept = existing.fragment(), word = rest, "splitting node");

    let mut branch = Box::new(RadixNode::new(shared, false));
    branch.attach(existing);
    if common == rest.len() {
        branch.set_word(true);
    } else {
        insert(&mut branch, &rest[common..]);
    }
    node.attach(branch);
}

/// Builds a tree from an iterator of words.
///
/// The words may come in any order, and duplicates are ignored.
///
/// # Examples
///
/// ```
/// use libradix::radix::build_tree;
///
/// let tree = build_tree(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(tree.check("cake"));
/// assert!(!tree.check("ake"));
/// assert_eq!(tree.len(), 5);
/// ```
pub fn build_tree<W>(words: impl IntoIterator<Item = W>) -> Result<CompactPrefixTree, TreeError>
where
    W: AsRef<str>,
{
    let mut tree = CompactPrefixTree::new();
    for word in words {
        tree.add(word.as_ref())?;
    }
    Ok(tree)
}

impl Dictionary for CompactPrefixTree {
    fn add(&mut self, word: &str) -> Result<bool, TreeError> {
        CompactPrefixTree::add(self, word)
    }

    fn check(&self, word: &str) -> bool {
        CompactPrefixTree::check(self, word)
    }

    fn check_prefix(&self, prefix: &str) -> bool {
        CompactPrefixTree::check_prefix(self, prefix)
    }

    fn suggest(&self, word: &str, count: usize) -> Vec<String> {
        CompactPrefixTree::suggest(self, word, count)
    }
}

/// A pre-order iterator over the words of a subtree.
///
/// Words come out in alphabetical order: a node's own word before the words of its
/// children, and children in letter order.
pub struct Words<'t> {
    // Pending nodes, each with the length of `path` above it.
    stack: SmallVec<[(&'t RadixNode, usize); 32]>,
    path: String,
}

impl<'t> Words<'t> {
    /// Starts at `start`, with `above` spelling the path from the root down to it.
    pub(crate) fn new(start: &'t RadixNode, above: &str) -> Self {
        let mut stack = SmallVec::new();
        stack.push((start, above.len()));
        Words {
            stack,
            path: above.to_string(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, above)) = self.stack.pop() {
            self.path.truncate(above);
            self.path.push_str(node.fragment());

            let here = self.path.len();
            let first = self.stack.len();
            self.stack
                .extend(node.children().map(|(_, child)| (child, here)));
            self.stack[first..].reverse();

            if node.is_word() {
                return Some(self.path.clone());
            }
        }
        None
    }
}

/// Writes one line per node in pre-order, indented two spaces per level, with a `*`
/// after every node that ends a word. The root comes first, on an empty line.
impl fmt::Display for CompactPrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(f, &self.root, 0)
    }
}

fn fmt_node(f: &mut fmt::Formatter<'_>, node: &RadixNode, depth: usize) -> fmt::Result {
    let star = if node.is_word() { "*" } else { "" };
    writeln!(f, "{:indent$}{}{star}", "", node.fragment(), indent = depth * 2)?;
    for (_, child) in node.children() {
        fmt_node(f, child, depth + 1)?;
    }
    Ok(())
}

impl fmt::Debug for CompactPrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactPrefixTree")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tree(words: &[&str]) -> CompactPrefixTree {
        build_tree(words).unwrap()
    }

    fn fragments(node: &RadixNode) -> Vec<(&str, bool)> {
        node.children()
            .map(|(_, child)| (child.fragment(), child.is_word()))
            .collect()
    }

    #[test]
    fn basic_word_lookup() {
        let t = tree(&["bake", "cake", "fake", "lake"]);
        assert!(t.check("bake"));
        assert!(t.check("lake"));
        assert!(!t.check("make"));
        assert!(!t.check("ake"));
        assert!(!t.check("bakes"));
        assert!(!t.check("bak"));
    }

    #[test]
    fn lookup_ignores_case() {
        let t = tree(&["Bake"]);
        assert!(t.check("bake"));
        assert!(t.check("BAKE"));
        assert!(t.check_prefix("BA"));
    }

    #[test]
    fn extension_after_word() {
        let t = tree(&["car", "care"]);
        assert!(t.check("car"));
        assert!(t.check("care"));
        assert!(!t.check("ca"));
        assert!(t.check_prefix("ca"));
    }

    #[test]
    fn prefix_after_word_splits() {
        let t = tree(&["care", "car"]);
        assert!(t.check("car"));
        assert!(t.check("care"));
        assert!(!t.check("ca"));
        assert!(t.check_prefix("ca"));

        assert_eq!(fragments(t.root()), [("car", true)]);
        let car = t.root().get('c').unwrap();
        assert_eq!(fragments(car), [("e", true)]);
    }

    #[test]
    fn divergence_splits_without_word() {
        let t = tree(&["cart", "cat"]);
        assert_eq!(fragments(t.root()), [("ca", false)]);
        let ca = t.root().get('c').unwrap();
        assert_eq!(fragments(ca), [("rt", true), ("t", true)]);
        assert!(!t.check("ca"));
        assert!(!t.check("car"));
        assert!(t.check_prefix("car"));
        assert_eq!(t.node_count(), 4);
    }

    #[test]
    fn split_keeps_the_existing_word_flag() {
        let t = tree(&["ca", "cart", "cat"]);
        let ca = t.root().get('c').unwrap();
        assert_eq!(ca.fragment(), "ca");
        assert!(ca.is_word());
        assert_eq!(fragments(ca), [("rt", true), ("t", true)]);

        let t = tree(&["carton", "cart", "carp"]);
        let car = t.root().get('c').unwrap();
        assert_eq!(car.fragment(), "car");
        assert!(!car.is_word());
        assert_eq!(fragments(car), [("p", true), ("t", true)]);
        let t_node = car.get('t').unwrap();
        assert_eq!(fragments(t_node), [("on", true)]);
    }

    #[test]
    fn add_reports_duplicates() {
        let mut t = CompactPrefixTree::new();
        assert!(t.add("car").unwrap());
        assert!(!t.add("car").unwrap());
        assert!(!t.add("CAR").unwrap());
        assert_eq!(t.len(), 1);
        assert_eq!(t.node_count(), 2);
    }

    #[test]
    fn add_twice_changes_nothing() {
        let once = tree(&["car", "care", "cat"]);
        let twice = tree(&["car", "care", "cat", "care", "car"]);
        assert_eq!(once.root(), twice.root());
        assert_eq!(once.len(), twice.len());
        assert_eq!(once.suggest("cab", 3), twice.suggest("cab", 3));
    }

    #[test]
    fn marking_an_inner_node_counts_as_new() {
        let mut t = tree(&["cart", "cat"]);
        assert!(t.add("ca").unwrap());
        assert!(t.check("ca"));
        assert_eq!(t.len(), 3);
        assert_eq!(t.node_count(), 4);
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut t = CompactPrefixTree::new();
        assert!(matches!(t.add(""), Err(TreeError::EmptyWord)));
        assert!(t.is_empty());
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut t = CompactPrefixTree::new();
        let err = t.add("don't").unwrap_err();
        match err {
            TreeError::InvalidLetter { word, letter } => {
                assert_eq!(word, "don't");
                assert_eq!(letter, '\'');
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(t.add("naïve").is_err());
        assert!(t.is_empty());
        assert!(!t.check("don't"));
    }

    #[test]
    fn empty_tree() {
        let t = CompactPrefixTree::new();
        assert!(!t.check(""));
        assert!(!t.check("a"));
        assert!(!t.check_prefix(""));
        assert!(!t.check_prefix("a"));
        assert_eq!(t.words().count(), 0);
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.to_string(), "\n");
    }

    #[test]
    fn empty_queries() {
        let t = tree(&["a"]);
        assert!(!t.check(""));
        assert!(t.check_prefix(""));
    }

    #[test]
    fn prefix_checks() {
        let t = tree(&["apple", "apply", "banana"]);
        for prefix in ["a", "ap", "app", "appl", "apple", "apply", "b", "banana"] {
            assert!(t.check_prefix(prefix), "{prefix}");
        }
        for prefix in ["apples", "ax", "bananas", "c", "applx", "ap-"] {
            assert!(!t.check_prefix(prefix), "{prefix}");
        }
    }

    #[test]
    fn words_in_alphabetical_order() {
        let t = tree(&["zoo", "cat", "car", "care", "a", "cart"]);
        let words: Vec<String> = t.words().collect();
        assert_eq!(words, ["a", "car", "care", "cart", "cat", "zoo"]);
        assert_eq!(t.len(), words.len());
    }

    #[test]
    fn dump_format() {
        let t = tree(&["cat", "car", "cart", "dog"]);
        let expected = "\n  ca\n    r*\n      t*\n    t*\n  dog*\n";
        assert_eq!(t.to_string(), expected);
    }

    #[test]
    fn debug_shows_sizes() {
        let t = tree(&["cat", "car"]);
        assert_eq!(
            format!("{t:?}"),
            "CompactPrefixTree { len: 2, node_count: 4 }"
        );
    }

    #[test]
    fn tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompactPrefixTree>();
    }

    #[test]
    fn dictionary_trait_delegates() {
        fn fill(dict: &mut impl Dictionary) {
            dict.add("car").unwrap();
            dict.add("cart").unwrap();
        }
        let mut t = CompactPrefixTree::new();
        fill(&mut t);
        let dict: &dyn Dictionary = &t;
        assert!(dict.check("cart"));
        assert!(dict.check_prefix("ca"));
        assert_eq!(dict.suggest("car", 5), ["car"]);
    }
}
