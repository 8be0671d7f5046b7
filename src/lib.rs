//! Classical substitution ciphers over the 64-symbol printable ASCII
//! alphabet from `' '` (0x20) through `'_'` (0x5F): a Caesar shift
//! cipher and a Bellaso repeating-key cipher.
//!
//! These are historical ciphers, not secure primitives.

pub mod algos;
pub mod constants;
pub mod error;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::bellaso::{decrypt_bellaso, encrypt_bellaso};
pub use algos::caesar::{decrypt_caesar, encrypt_caesar};
pub use error::{CipherError, Result};
pub use structs::{Bellaso, Caesar};
pub use traits::{Decryptor, Encryptor};
pub use utils::is_in_alphabet;
