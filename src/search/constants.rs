// Fixed digit universe for the combination search
pub const DIGIT_MIN: u8 = 1;
pub const DIGIT_MAX: u8 = 9;

/// Distinct digits available, which also caps how long a combination can be
pub const UNIVERSE_SIZE: i32 = 9;
