mod dict;
mod trie;

pub use dict::{Dictionary, DictionaryCell, MIN_WORD_LENGTH};
pub use trie::Trie;
