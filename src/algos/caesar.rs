use tracing::debug;

use crate::constants::{LOWER_BOUND, RANGE, UPPER_BOUND};
use crate::error::Result;
use crate::structs::Caesar;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{char_from_code, is_in_alphabet};

/// Encrypts `plain_text` by shifting each character `key` code points
/// forward, wrapping back into the alphabet whenever the shift passes
/// `'_'`.
///
/// Input containing characters outside the alphabet is not encrypted:
/// the result is the empty string. Callers cannot tell that apart from
/// encrypting an empty input.
///
/// The wraparound corrects the upper side only; a key more negative
/// than one alphabet period leaves the result below `' '`.
pub fn encrypt_caesar(plain_text: &str, key: i32) -> String {
    if !is_in_alphabet(plain_text) {
        debug!("plain text contains characters outside the cipher alphabet, returning empty output");
        return String::new();
    }

    plain_text
        .chars()
        .map(|c| {
            let mut shifted = c as i64 + i64::from(key);
            while shifted > UPPER_BOUND as i64 {
                shifted -= RANGE;
            }
            char_from_code(shifted)
        })
        .collect()
}

/// Decrypts text produced by [`encrypt_caesar`] with the same `key`.
///
/// No bounds check is performed on the input. The wraparound corrects
/// the lower side only.
pub fn decrypt_caesar(encrypted_text: &str, key: i32) -> String {
    encrypted_text
        .chars()
        .map(|c| {
            let mut shifted = c as i64 - i64::from(key);
            while shifted < LOWER_BOUND as i64 {
                shifted += RANGE;
            }
            char_from_code(shifted)
        })
        .collect()
}

impl Caesar {
    pub fn new(key: i32) -> Self {
        Caesar { key }
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(encrypt_caesar(message, self.key))
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(decrypt_caesar(message, self.key))
    }
}
