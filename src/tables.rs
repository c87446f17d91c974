//! Hand-checked translations used to settle duplicate headwords.

use std::collections::{HashMap, HashSet};

/// Lowercased headword → the one accepted nicobarese translation.
pub fn canonical_translations() -> HashMap<String, String> {
    HashMap::from([
        ("sand", "Kūyàyö"),
        ("wind", "Kūföt"),
        ("one", "Kahōk"),
        ("two", "Nët"),
        ("three", "Lūöi"),
        ("four", "Fën"),
        ("five", "Taneui"),
        ("head", "Kūi"),
        ("eye", "Mat"),
        ("ear", "nâng"),
        ("nose", "Elmëh"),
        ("mouth", "Elvāng"),
        ("hand", "el-tī"),
        ("finger", "Kūnti"),
        ("leg", "kal-drān"),
        ("stomach", "Ellön"),
        ("back", "Ùk"),
        ("face", "AreKuö"),
        ("blood", "Māhām"),
        ("sun", "tâwūˑe"),
        ("moon", "chingeät"),
        ("star", "Taneūsömat"),
        ("sky", "Hāliöngö"),
        ("rain", "kòmrâˑh"),
        ("fire", "Tāmeūyö"),
        ("night", "Hātööm"),
        ("evening", "Hāraap"),
        ("mother", "Kikanö Yöng Nyiö"),
        ("father", "Kikònyö Yöng"),
        ("brother", "Kanònyö-Mem/Kahem"),
        ("sister", "Kānanö"),
        ("boy", "Kikònyö"),
        ("girl", "Kikanö"),
        ("child", "Nyiö/Kūn Nyiö"),
        ("friend", "Hòl"),
    ])
    .into_iter()
    .map(|(english, nicobarese)| (english.to_string(), nicobarese.to_string()))
    .collect()
}

/// Headwords whose duplicates are all genuine and must all be kept.
pub fn keep_both() -> HashSet<String> {
    ["foot"].into_iter().map(ToString::to_string).collect()
}
