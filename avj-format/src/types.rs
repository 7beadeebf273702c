//! Type tag and envelope enumerations

use std::fmt;

/// Semantic type inferred from a key's `_<word>_<digits>` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `_bool_N`
    Bool,
    /// `_list_N`
    List,
    /// `_map_N`
    Map,
    /// `_null_N`
    Null,
    /// `_number_N`
    Number,
    /// `_string_N`
    String,
}

impl TypeTag {
    /// Classification table, one entry per tag
    pub const ALL: [TypeTag; 6] = [
        TypeTag::Bool,
        TypeTag::List,
        TypeTag::Map,
        TypeTag::Null,
        TypeTag::Number,
        TypeTag::String,
    ];

    /// Suffix word selecting this tag in a key name
    pub const fn suffix_word(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::List => "list",
            TypeTag::Map => "map",
            TypeTag::Null => "null",
            TypeTag::Number => "number",
            TypeTag::String => "string",
        }
    }

    /// Look up the tag whose suffix word is exactly `word`
    pub fn from_suffix_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.suffix_word() == word)
    }

    /// Envelope a field of this type must carry
    pub const fn envelope(self) -> Envelope {
        match self {
            TypeTag::Bool => Envelope::Bool,
            TypeTag::List => Envelope::List,
            TypeTag::Map => Envelope::Map,
            TypeTag::Null => Envelope::Null,
            TypeTag::Number => Envelope::Number,
            TypeTag::String => Envelope::String,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix_word())
    }
}

/// Envelope tags of the attribute-value wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Envelope {
    /// `{"BOOL": "..."}`
    Bool,
    /// `{"L": [...]}`
    List,
    /// `{"M": {...}}`
    Map,
    /// `{"NULL": "..."}`
    Null,
    /// `{"N": "..."}`
    Number,
    /// `{"S": "..."}`
    String,
}

impl Envelope {
    /// Key used for this envelope on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Envelope::Bool => "BOOL",
            Envelope::List => "L",
            Envelope::Map => "M",
            Envelope::Null => "NULL",
            Envelope::Number => "N",
            Envelope::String => "S",
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
