/// Lowest character of the cipher alphabet (inclusive).
pub const LOWER_BOUND: char = ' ';

/// Highest character of the cipher alphabet (inclusive).
pub const UPPER_BOUND: char = '_';

/// Size of the cipher alphabet, used as the wraparound modulus.
pub const RANGE: i64 = UPPER_BOUND as i64 - LOWER_BOUND as i64 + 1;
