//! Debounce and throttle stdin lines
//!
//! Both read lines from stdin and echo them to stdout, rate limited:
//! `debounce` prints the last line of each burst once input goes quiet,
//! `throttle` prints at most one line per interval and drops the rest.

use anyhow::{Context, Result};
use handy_timing::{Debouncer, Throttler};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run_debounce(delay: Duration) -> Result<()> {
    let debouncer = Debouncer::new(delay, |line: String| println!("{}", line))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        debouncer.call(line);
    }

    // Input closed: emit whatever is still waiting
    debouncer.flush();
    Ok(())
}

pub async fn run_throttle(delay: Duration) -> Result<()> {
    let throttler = Throttler::new(delay, |line: String| println!("{}", line));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut dropped = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if !throttler.call(line) {
            dropped += 1;
        }
    }

    tracing::debug!("Throttle dropped {} lines", dropped);
    Ok(())
}
