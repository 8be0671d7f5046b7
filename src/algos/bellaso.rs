use crate::constants::{LOWER_BOUND, RANGE, UPPER_BOUND};
use crate::error::{CipherError, Result};
use crate::structs::Bellaso;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::char_from_code;

/// Encrypts `plain_text` by shifting each character forward by the code
/// point of the corresponding character of `bellaso_str`, which repeats
/// cyclically to cover the whole plaintext. Shifts past `'_'` wrap back
/// into the alphabet.
///
/// Unlike [`encrypt_caesar`](crate::algos::caesar::encrypt_caesar), the
/// plaintext is not bounds-checked.
pub fn encrypt_bellaso(plain_text: &str, bellaso_str: &str) -> Result<String> {
    if bellaso_str.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let encrypted = plain_text
        .chars()
        .zip(bellaso_str.chars().cycle())
        .map(|(c, k)| {
            let mut shifted = c as i64 + k as i64;
            while shifted > UPPER_BOUND as i64 {
                shifted -= RANGE;
            }
            char_from_code(shifted)
        })
        .collect();

    Ok(encrypted)
}

/// Decrypts text produced by [`encrypt_bellaso`] with the same key,
/// shifting each character backward and wrapping on the lower side
/// only.
pub fn decrypt_bellaso(encrypted_text: &str, bellaso_str: &str) -> Result<String> {
    if bellaso_str.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let decrypted = encrypted_text
        .chars()
        .zip(bellaso_str.chars().cycle())
        .map(|(c, k)| {
            let mut shifted = c as i64 - k as i64;
            while shifted < LOWER_BOUND as i64 {
                shifted += RANGE;
            }
            char_from_code(shifted)
        })
        .collect();

    Ok(decrypted)
}

impl Bellaso {
    pub fn new(key: impl Into<String>) -> Self {
        Bellaso { key: key.into() }
    }
}

impl Encryptor for Bellaso {
    fn encrypt(&self, message: &str) -> Result<String> {
        encrypt_bellaso(message, &self.key)
    }
}

impl Decryptor for Bellaso {
    fn decrypt(&self, message: &str) -> Result<String> {
        decrypt_bellaso(message, &self.key)
    }
}
