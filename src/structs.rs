/// Caesar cipher with a fixed integer shift.
pub struct Caesar {
    pub key: i32,
}

/// Bellaso cipher with a repeating key string.
pub struct Bellaso {
    pub key: String,
}
