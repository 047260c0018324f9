//! Reading word lists into a tree and writing trees out.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::error::TreeError;
use super::tree::CompactPrefixTree;

/// Counts from one pass over a word list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Words that were not in the tree before.
    pub added: usize,
    /// Words that were already stored.
    pub duplicates: usize,
    /// Tokens that were rejected and skipped.
    pub skipped: usize,
}

/// Reads whitespace-separated words into a [`CompactPrefixTree`].
///
/// Any number of words may share a line. By default lines starting with `#` are
/// comments, and a token that cannot be stored aborts the load.
///
/// # Examples
///
/// ```
/// use libradix::radix::{CompactPrefixTree, WordListLoader};
///
/// let mut tree = CompactPrefixTree::new();
/// let list = "# fruit\napple banana\n  cherry\n";
/// let summary = WordListLoader::new().load(&mut tree, list.as_bytes()).unwrap();
/// assert_eq!(summary.added, 3);
/// assert!(tree.check("banana"));
/// ```
#[derive(Clone, Debug)]
pub struct WordListLoader {
    comment_prefix: Option<char>,
    skip_invalid: bool,
}

impl Default for WordListLoader {
    fn default() -> Self {
        WordListLoader {
            comment_prefix: Some('#'),
            skip_invalid: false,
        }
    }
}

impl WordListLoader {
    /// Creates a loader with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character that starts a comment line, or `None` to read every line.
    pub fn comment_prefix(mut self, prefix: Option<char>) -> Self {
        self.comment_prefix = prefix;
        self
    }

    /// When true, tokens that cannot be stored are logged and counted instead of
    /// failing the load.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Adds every word from `reader` to `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Read`] if reading fails, or the error of the first
    /// rejected token unless [`skip_invalid`](Self::skip_invalid) is set. Words read
    /// before the error stay in the tree.
    pub fn load(
        &self,
        tree: &mut CompactPrefixTree,
        reader: impl BufRead,
    ) -> Result<LoadSummary, TreeError> {
        self.load_from(tree, reader, Path::new("<reader>"))
    }

    /// Adds every word from the file at `path` to `tree`.
    pub fn load_file(
        &self,
        tree: &mut CompactPrefixTree,
        path: impl AsRef<Path>,
    ) -> Result<LoadSummary, TreeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TreeError::read(path, e))?;
        self.load_from(tree, BufReader::new(file), path)
    }

    fn load_from(
        &self,
        tree: &mut CompactPrefixTree,
        mut reader: impl BufRead,
        path: &Path,
    ) -> Result<LoadSummary, TreeError> {
        debug!(path = %path.display(), "loading word list");
        let mut summary = LoadSummary::default();
        let mut lines = 0usize;

        // Reuse one buffer for every line instead of allocating per line.
        let mut buf = String::with_capacity(80);
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Err(e) => return Err(TreeError::read(path, e)),
                _ => {}
            }
            lines += 1;
            if self.is_comment(&buf) {
                continue;
            }
            for token in buf.split_whitespace() {
                match tree.add(token) {
                    Ok(true) => summary.added += 1,
                    Ok(false) => summary.duplicates += 1,
                    Err(e) if self.skip_invalid => {
                        warn!(line = lines, token, error = %e, "skipping word");
                        summary.skipped += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        debug!(
            path = %path.display(),
            lines,
            added = summary.added,
            duplicates = summary.duplicates,
            skipped = summary.skipped,
            "loaded word list"
        );
        Ok(summary)
    }

    /// Returns true if this line is a comment.
    fn is_comment(&self, line: &str) -> bool {
        self.comment_prefix
            .is_some_and(|prefix| line.trim_start().starts_with(prefix))
    }
}

impl CompactPrefixTree {
    /// Creates a tree from a word list file, using the default [`WordListLoader`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libradix::radix::CompactPrefixTree;
    ///
    /// let tree = CompactPrefixTree::from_file("words.txt").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let mut tree = CompactPrefixTree::new();
        WordListLoader::new().load_file(&mut tree, path)?;
        Ok(tree)
    }

    /// Writes the tree to `writer` in its [`Display`](std::fmt::Display) form.
    pub fn write_tree(&self, mut writer: impl Write) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the tree to the file at `path`, replacing its contents.
    ///
    /// Each node takes one line, indented two spaces per level, with a `*` after
    /// nodes that end a word.
    pub fn print_tree(&self, path: impl AsRef<Path>) -> Result<(), TreeError> {
        let path = path.as_ref();
        debug!(path = %path.display(), nodes = self.node_count(), "writing tree");
        File::create(path)
            .and_then(|file| self.write_tree(BufWriter::new(file)))
            .map_err(|e| TreeError::write(path, e))
    }
}
