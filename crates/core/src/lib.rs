//! Standalone utility functions
//!
//! This crate provides:
//! - Emptiness checks over dynamic and native values
//! - Deep copies of dynamic values (dates, regexes, arrays, objects)
//! - Date formatting and relative time
//! - Precision arithmetic without binary floating-point residue
//! - Random strings, UUIDs, colors and integers
//! - Version comparison, deduplication and URL parameter joining
//!
//! Every function is a leaf: nothing here shares state with anything else.

pub mod collections;
pub mod date;
pub mod empty;
pub mod error;
pub mod format;
pub mod precise;
pub mod random;
pub mod query;
pub mod value;
pub mod version;

// Re-exports
pub use collections::unique;
pub use date::{
    format_date, format_date_in, now_timestamp, relative_time, time_ago, to_timestamp,
    TimeInput, DEFAULT_DATE_FORMAT,
};
pub use empty::{is_array, is_empty, Blank};
pub use error::{Result, UtilError};
pub use format::{number_to_chinese, separator};
pub use precise::{decimal_places, precise_add, precise_div, precise_mul, precise_sub};
pub use random::{
    generate_uuid, random_color, random_int, random_string, DEFAULT_RANDOM_LENGTH, RANDOM_ALPHABET,
};
pub use query::join_url_params;
pub use value::{deep_clone, Value};
pub use version::compare_version;
