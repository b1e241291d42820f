//! The Morse code table: a static bidirectional map between characters and dot/dash strings.
//!
//! Lookups are O(1) in both directions. The table is fixed at compile time and is freely
//! shareable across threads — it never changes at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

/// `(character, code)` pairs, exactly the ITU alphabet plus digits and a fixed punctuation set.
///
/// Implementations must match this table character-for-character, including the parenthesis
/// codes `-.--.` (open) and `-.--.-` (close).
const ENTRIES: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
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
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('(', "-.--."),
    (')', "-.--.-"),
];

struct Table {
    char_to_code: HashMap<char, &'static str>,
    code_to_char: HashMap<&'static str, char>,
}

static TABLE: LazyLock<Table> = LazyLock::new(|| {
    let mut char_to_code = HashMap::with_capacity(ENTRIES.len());
    let mut code_to_char = HashMap::with_capacity(ENTRIES.len());
    for &(ch, code) in ENTRIES {
        char_to_code.insert(ch, code);
        code_to_char.insert(code, ch);
    }
    Table {
        char_to_code,
        code_to_char,
    }
});

/// Look up the dot/dash code for a (lowercase) character. Returns `None` for characters outside
/// the table — callers are expected to normalize input to lowercase first.
pub fn code_for_char(ch: char) -> Option<&'static str> {
    TABLE.char_to_code.get(&ch).copied()
}

/// Look up the uppercase character for a dot/dash code. Returns `None` for unmapped symbols.
pub fn char_for_code(code: &str) -> Option<char> {
    TABLE
        .code_to_char
        .get(code)
        .map(|c| c.to_ascii_uppercase())
}
