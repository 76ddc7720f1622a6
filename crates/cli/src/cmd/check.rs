//! Emptiness and type checks

use crate::util;
use anyhow::Result;
use handy_core::{deep_clone, is_array, is_empty};

/// Print whether the argument is empty
pub fn run_empty(input: &str) -> Result<()> {
    let value = util::parse_value(input);
    tracing::debug!("Checking emptiness of {} value", value.kind());
    println!("{}", is_empty(&value));
    Ok(())
}

/// Print whether the argument is a JSON array
pub fn run_is_array(input: &str) -> Result<()> {
    let value = util::parse_value(input);
    println!("{}", is_array(&value));
    Ok(())
}

/// Print a deep copy of the argument, normalised as JSON
pub fn run_clone(input: &str) -> Result<()> {
    let value = util::parse_value(input);
    let copy = deep_clone(&value);
    println!("{}", copy);
    Ok(())
}
