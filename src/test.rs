use crate::alphabet::*;
use crate::index::*;

///The alphabet used in tests and examples: lowercase a to z
pub fn get_test_alphabet() -> CharRangeAlphabet {
    CharRangeAlphabet::new('a', 'z').expect("valid range")
}

pub fn get_test_dictionary() -> Vec<String> {
    ["cat", "bat", "rat", "dog"]
        .iter()
        .map(|word| word.to_string())
        .collect()
}

///A slightly larger word list for cross-checking searchers against each other
pub fn get_test_wordlist() -> Vec<String> {
    [
        "apple", "ample", "maple", "staple", "stable", "table", "cable", "fable", "gable",
        "ladle", "saddle", "paddle", "puddle", "muddle", "middle", "riddle", "fiddle",
        "house", "mouse", "moose", "goose", "loose", "noose", "horse", "hoarse",
        "word", "ward", "wart", "cart", "card", "cord", "corn", "born", "barn",
    ]
    .iter()
    .map(|word| word.to_string())
    .collect()
}

pub fn get_test_index(hash_size: u8) -> SigIndex<CharRangeAlphabet> {
    SigIndexer::new(get_test_alphabet(), hash_size)
        .expect("valid hash size")
        .create_index(get_test_dictionary())
        .expect("dictionary maps cleanly")
}
