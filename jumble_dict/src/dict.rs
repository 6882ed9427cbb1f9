use std::{collections::HashSet, io::BufRead};

use itertools::Itertools;
use once_cell::sync::OnceCell;
use util::error::{JumbleError, JumbleResult};

use crate::trie::Trie;

/// Words shorter than this never count, no matter what the word list says.
pub const MIN_WORD_LENGTH: usize = 3;

/// The game vocabulary: a trie for prefix-pruned search plus the flat set of
/// accepted words. Immutable once built, so shared references may be queried
/// from any thread.
#[derive(Debug)]
pub struct Dictionary {
  trie: Trie,
  words: HashSet<String>,
}

impl Dictionary {
  fn canonicalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
  }

  fn acceptable(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
  }

  /// Builds a dictionary from one entry per item, normalizing case and
  /// dropping entries that are too short or not purely alphabetic.
  pub fn parse_word_list<S>(entries: impl IntoIterator<Item = S>) -> JumbleResult<Self>
  where
    S: AsRef<str>,
  {
    let words: HashSet<String> = entries
      .into_iter()
      .map(|entry| Self::canonicalize_word(entry.as_ref()))
      .filter(|word| Self::acceptable(word))
      .collect();
    if words.is_empty() {
      return Err(
        JumbleError::DictionaryLoad("word list contains no usable words".to_owned()).into(),
      );
    }

    let mut trie = Trie::new();
    for word in &words {
      trie.insert(word);
    }
    Ok(Self { trie, words })
  }

  /// Builds a dictionary from a newline-delimited word list.
  pub fn from_reader(reader: impl BufRead) -> JumbleResult<Self> {
    let lines: Vec<String> = reader
      .lines()
      .try_collect()
      .map_err(|err| JumbleError::DictionaryLoad(format!("failed to read word list: {err}")))?;
    Self::parse_word_list(lines)
  }

  /// True iff `word` is an accepted word of at least the minimum length.
  /// Case-insensitive.
  pub fn is_word(&self, word: &str) -> bool {
    let word = Self::canonicalize_word(word);
    word.chars().count() >= MIN_WORD_LENGTH && self.trie.contains_word(&word)
  }

  /// True iff some accepted word starts with `prefix` ("" always qualifies).
  /// Case-insensitive.
  pub fn is_prefix(&self, prefix: &str) -> bool {
    self.trie.contains_prefix(&Self::canonicalize_word(prefix))
  }

  pub fn all_words(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

/// One-shot holder for the process's dictionary. Loading is idempotent: the
/// first successful load wins and later calls return the existing value.
/// Querying before a load surfaces `DictionaryNotReady` instead of silently
/// answering `false`.
#[derive(Default)]
pub struct DictionaryCell {
  cell: OnceCell<Dictionary>,
}

impl DictionaryCell {
  pub const fn new() -> Self {
    Self { cell: OnceCell::new() }
  }

  /// Runs `loader` unless a dictionary is already present, then returns the
  /// loaded dictionary. A failed load leaves the cell empty for a retry.
  pub fn load_with<F>(&self, loader: F) -> JumbleResult<&Dictionary>
  where
    F: FnOnce() -> JumbleResult<Dictionary>,
  {
    if let Some(dict) = self.cell.get() {
      return Ok(dict);
    }
    let dict = loader()?;
    Ok(self.cell.get_or_init(|| dict))
  }

  pub fn get(&self) -> JumbleResult<&Dictionary> {
    self
      .cell
      .get()
      .ok_or_else(|| JumbleError::DictionaryNotReady.into())
  }

  pub fn is_loaded(&self) -> bool {
    self.cell.get().is_some()
  }
}
