//! Spelling suggestions by shared prefix.
//!
//! Closeness here is structural: a stored word is closer to the query the longer the
//! prefix they share. There is no edit distance involved.

use hashbrown::HashSet;

use super::letter;
use super::tree::{CompactPrefixTree, Words};

impl CompactPrefixTree {
    /// Returns the stored words closest to `word`.
    ///
    /// If `word` is stored, the result is just that word (lowercased) and `count` is
    /// ignored. Otherwise the result holds up to `count` distinct words: first every
    /// word starting with the whole query, then every word starting with the query
    /// minus its last letter, and so on down to the empty query, which matches the
    /// whole tree. Within each step words come in alphabetical order.
    ///
    /// A query holding characters outside `a`–`z` is searched by its letters up to
    /// the first such character.
    ///
    /// # Examples
    ///
    /// ```
    /// use libradix::radix::build_tree;
    ///
    /// let tree = build_tree(["cat", "car", "cart"]).unwrap();
    /// assert_eq!(tree.suggest("car", 3), ["car"]);
    /// assert_eq!(tree.suggest("care", 2), ["car", "cart"]);
    /// assert_eq!(tree.suggest("care", 5), ["car", "cart", "cat"]);
    /// ```
    pub fn suggest(&self, word: &str, count: usize) -> Vec<String> {
        if self.check(word) {
            return vec![word.to_lowercase()];
        }

        let mut suggestions = Suggestions::new(count);
        let query = letter::alphabetic_prefix(word);
        for end in (0..=query.len()).rev() {
            if suggestions.is_full() {
                break;
            }
            if let Some((node, above)) = self.locate(&query[..end]) {
                suggestions.extend(Words::new(node, above));
            }
        }
        suggestions.into_vec()
    }
}

/// Distinct words collected in the order they were found, up to a limit.
struct Suggestions {
    limit: usize,
    found: Vec<String>,
    seen: HashSet<String>,
}

impl Suggestions {
    fn new(limit: usize) -> Self {
        Suggestions {
            limit,
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.limit
    }

    /// Takes words until the limit is reached, skipping ones already found.
    fn extend(&mut self, words: impl Iterator<Item = String>) {
        for word in words {
            if self.is_full() {
                break;
            }
            if !self.seen.contains(&word) {
                self.seen.insert(word.clone());
                self.found.push(word);
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.found
    }
}
