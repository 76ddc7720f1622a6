//! Pseudo-random strings, UUIDs, colors and integers
//!
//! Every generator has a `*_with` form taking any [`Rng`], so callers can
//! seed it for reproducible output. The plain forms use the thread-local RNG.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Alphabet for [`random_string`]: ASCII letters and digits without the
/// easily confused `oOLl 9gq Vv Uu I1`
pub const RANDOM_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTWXYZabcdefhijkmnprstwxyz2345678";

/// Length used when the caller does not supply one
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Random string of `len` characters drawn from [`RANDOM_ALPHABET`]
pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::thread_rng(), len)
}

pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| RANDOM_ALPHABET[rng.gen_range(0..RANDOM_ALPHABET.len())] as char)
        .collect()
}

/// Version 4 UUID, lowercase and hyphenated
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

pub fn generate_uuid_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// Random `#rrggbb` color
pub fn random_color() -> String {
    random_color_with(&mut rand::thread_rng())
}

pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Uniform integer in `min..=max`; reversed bounds are swapped
pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::thread_rng(), min, max)
}

pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}
