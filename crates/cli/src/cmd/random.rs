//! Random strings, UUIDs, colors and integers

use anyhow::Result;
use handy_core::{generate_uuid, random_color, random_int, random_string};

pub fn run_string(length: usize, count: usize) -> Result<()> {
    if length == 0 {
        anyhow::bail!("Length must be at least 1");
    }
    for _ in 0..count {
        println!("{}", random_string(length));
    }
    Ok(())
}

pub fn run_uuid(count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", generate_uuid());
    }
    Ok(())
}

pub fn run_color(count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", random_color());
    }
    Ok(())
}

pub fn run_int(min: i64, max: i64, count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", random_int(min, max));
    }
    Ok(())
}
