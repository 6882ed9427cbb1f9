use std::collections::HashMap;

/// A prefix tree over letters. Each node owns its children outright, so the
/// structure is acyclic by construction.
#[derive(Clone, Debug, Default)]
pub struct Trie {
  children: HashMap<char, Trie>,
  is_word: bool,
}

impl Trie {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a word. Re-inserting an existing word changes nothing.
  pub fn insert(&mut self, word: &str) {
    let node = word
      .chars()
      .fold(self, |node, c| node.children.entry(c).or_default());
    node.is_word = true;
  }

  pub fn contains_word(&self, word: &str) -> bool {
    self.traverse(word).is_some_and(|node| node.is_word)
  }

  /// True when some inserted word starts with `prefix`. The empty string is a
  /// prefix of everything.
  pub fn contains_prefix(&self, prefix: &str) -> bool {
    self.traverse(prefix).is_some()
  }

  fn traverse(&self, letters: &str) -> Option<&Trie> {
    letters
      .chars()
      .try_fold(self, |node, c| node.children.get(&c))
  }
}
