//! Room code generation.
//!
//! Room ids are short uppercase alphanumeric codes, easy to read aloud and to
//! paste into a group chat. Lookups are case-insensitive (ids are normalized
//! to uppercase at the boundary).

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CODE_LEN: usize = 6;

pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    let mut s = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        s.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
    }
    s
}

pub fn normalize_room_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
