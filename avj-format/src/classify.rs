//! Key classification by type suffix
//!
//! A key classifies when it ends in `<word>_<digits>`, where `<word>` is one of
//! the [`TypeTag`] suffix words and is either the whole remaining key or is
//! preceded by an underscore. Since the words are whole segments and pairwise
//! distinct, at most one tag can match a given key.

use crate::types::TypeTag;

/// A key name paired with the type its suffix encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedKey<'a> {
    /// Original key name
    pub key: &'a str,
    /// Inferred type
    pub tag: TypeTag,
}

impl<'a> ClassifiedKey<'a> {
    /// Classify `key`, returning `None` when no suffix matches
    pub fn new(key: &'a str) -> Option<Self> {
        classify(key).map(|tag| Self { key, tag })
    }
}

/// Determine the type a key name encodes
pub fn classify(key: &str) -> Option<TypeTag> {
    let (rest, digits) = key.rsplit_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let word = match rest.rsplit_once('_') {
        Some((_, word)) => word,
        None => rest,
    };
    TypeTag::from_suffix_word(word)
}
