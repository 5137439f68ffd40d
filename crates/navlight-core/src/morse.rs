use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Code emitted when a key has no table entry: the code for "A"
pub const FALLBACK_CODE: &str = ".-";

/// Dot/dash codes for single characters
///
/// The default table covers A-Z and 0-9. Lookups are case-insensitive;
/// anything that is not a single known character resolves to
/// [`FALLBACK_CODE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorseTable {
    codes: HashMap<char, String>,
}

impl MorseTable {
    pub fn new(codes: HashMap<char, String>) -> Self {
        MorseTable { codes }
    }

    /// A table with no entries; every lookup falls back
    pub fn empty() -> Self {
        MorseTable {
            codes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, character: char, code: impl Into<String>) {
        self.codes.insert(character.to_ascii_uppercase(), code.into());
    }

    pub fn get(&self, character: char) -> Option<&str> {
        self.codes
            .get(&character.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Resolve a group parameter to a dot/dash code
    ///
    /// Only a single-character key can hit the table; empty or longer keys
    /// fall back, matching the "unknown character behaves like A" contract.
    pub fn code(&self, key: &str) -> &str {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(character), None) => self.get(character).unwrap_or(FALLBACK_CODE),
            _ => FALLBACK_CODE,
        }
    }
}

impl Default for MorseTable {
    fn default() -> Self {
        let codes = [
            ('A', ".-"),
            ('B', "-..."),
            ('C', "-.-."),
            ('D', "-.."),
            ('E', "."),
            ('F', "..-."),
            ('G', "--."),
            ('H', "...."),
            ('I', ".."),
            ('J', ".---"),
            ('K', "-.-"),
            ('L', ".-.."),
            ('M', "--"),
            ('N', "-."),
            ('O', "---"),
            ('P', ".--."),
            ('Q', "--.-"),
            ('R', ".-."),
            ('S', "..."),
            ('T', "-"),
            ('U', "..-"),
            ('V', "...-"),
            ('W', ".--"),
            ('X', "-..-"),
            ('Y', "-.--"),
            ('Z', "--.."),
            ('0', "-----"),
            ('1', ".----"),
            ('2', "..---"),
            ('3', "...--"),
            ('4', "....-"),
            ('5', "....."),
            ('6', "-...."),
            ('7', "--..."),
            ('8', "---.."),
            ('9', "----."),
        ]
        .into_iter()
        .map(|(character, code)| (character, code.to_string()))
        .collect();

        MorseTable { codes }
    }
}
