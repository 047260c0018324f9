use super::letter::{self, ALPHABET_LEN};

/// A node in the compressed prefix tree.
///
/// Each node owns a fragment of one or more words and up to [`ALPHABET_LEN`] children,
/// one per first letter of the child's fragment. Concatenating the fragments on the
/// path from the root to a node spells a stored word when [`is_word`](Self::is_word)
/// is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadixNode {
    fragment: String,
    word: bool,
    children: [Option<Box<RadixNode>>; ALPHABET_LEN],
}

impl RadixNode {
    /// Creates the root node, which has an empty fragment and is never a word.
    pub(crate) fn root() -> Self {
        RadixNode::new(String::new(), false)
    }

    /// Creates a childless node.
    ///
    /// # Arguments
    ///
    /// * `fragment` - The letters this node contributes to every word below it
    /// * `word` - Whether the path ending at this node spells a stored word
    pub(crate) fn new(fragment: String, word: bool) -> Self {
        RadixNode {
            fragment,
            word,
            children: [const { None }; ALPHABET_LEN],
        }
    }

    /// The letters this node contributes. Empty only for the root.
    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Returns the child whose fragment starts with `letter`, if any.
    #[inline]
    pub fn get(&self, letter: char) -> Option<&RadixNode> {
        letter::slot(letter).and_then(|index| self.children[index].as_deref())
    }

    /// Returns an iterator over all children of this node, in alphabetical order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.iter().flatten().count()
    }

    /// Returns the number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.subtree_size())
            .sum::<usize>()
    }

    pub(crate) fn set_word(&mut self, word: bool) {
        self.word = word;
    }

    /// Returns the child stored in slot `index`.
    #[inline]
    pub(crate) fn child(&self, index: usize) -> Option<&RadixNode> {
        self.children[index].as_deref()
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut RadixNode> {
        self.children[index].as_deref_mut()
    }

    /// Removes and returns the child stored in slot `index`.
    pub(crate) fn take_child(&mut self, index: usize) -> Option<Box<RadixNode>> {
        self.children[index].take()
    }

    /// Attaches `child` in the slot of its fragment's first letter.
    ///
    /// Panics if the child's fragment is empty or does not start with a letter of the
    /// alphabet, or if that slot is already taken.
    pub(crate) fn attach(&mut self, child: Box<RadixNode>) {
        let index = letter::first_slot(&child.fragment)
            .expect("attach: child fragment must start with a letter");
        assert!(
            self.children[index].is_none(),
            "attach: slot {:?} is already taken",
            letter::letter(index)
        );
        self.children[index] = Some(child);
    }

    /// Cuts the first `len` bytes off the fragment and returns them.
    ///
    /// Panics unless `0 < len < fragment.len()`, since both halves of a split must
    /// stay non-empty.
    pub(crate) fn split_fragment(&mut self, len: usize) -> String {
        assert!(
            len > 0 && len < self.fragment.len(),
            "split_fragment: cannot split {:?} at {len}",
            self.fragment
        );
        let head = self.fragment[..len].to_string();
        self.fragment.drain(..len);
        head
    }
}

/// An iterator over the children of a [`RadixNode`].
#[derive(Clone)]
pub struct ChildIter<'t> {
    node: &'t RadixNode,
    index: usize,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = (char, &'t RadixNode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < ALPHABET_LEN {
            let index = self.index;
            self.index += 1;
            if let Some(child) = self.node.child(index) {
                return Some((letter::letter(index), child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .node
            .children
            .get(self.index..)
            .map_or(0, |rest| rest.iter().flatten().count());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}
