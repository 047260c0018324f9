//! Example: a tiny spell checker on top of the radix tree.
//!
//! Loads the sample word list, checks a few words and prefixes, suggests
//! corrections for misspellings, and writes the tree out next to the list.
//!
//! Run with: cargo run --example wordlist
//! Set RUST_LOG=debug to see the loader's log lines.

use libradix::radix::{CompactPrefixTree, Dictionary, WordListLoader};
use tracing_subscriber::EnvFilter;

/// Prints a verdict for each word, with suggestions for the ones not found.
fn spell_check(dict: &impl Dictionary, words: &[&str]) {
    for word in words {
        if dict.check(word) {
            println!("  {word}: ok");
        } else {
            println!("  {word}: not found, try {:?}", dict.suggest(word, 3));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = CompactPrefixTree::new();
    let summary = WordListLoader::new()
        .skip_invalid(true)
        .load_file(&mut tree, "data/words.txt")?;
    println!(
        "Loaded {} words ({} duplicates, {} skipped) into {} nodes",
        summary.added,
        summary.duplicates,
        summary.skipped,
        tree.node_count()
    );

    // Word lookup
    println!("\nSpell check:");
    spell_check(&tree, &["bake", "Baker", "bakeing", "catch", "cathc", "zebra"]);

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["ba", "chi", "qu", "bro"] {
        let found = if tree.check_prefix(prefix) { "yes" } else { "no" };
        println!("  {prefix}*: {found}");
    }

    // Words starting with "car"
    let car: Vec<String> = tree.words().filter(|w| w.starts_with("car")).collect();
    println!("\nWords starting with car: {car:?}");

    let out = std::env::temp_dir().join("libradix-tree.txt");
    tree.print_tree(&out)?;
    println!("\nTree written to {}", out.display());

    Ok(())
}
