//! Handy CLI - handy command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cmd;
mod system_config;
mod util;

use cmd::calc::CalcOp;

/// Handy - small utilities from the shell
#[derive(Parser)]
#[command(name = "handy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (or set HANDY_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a value is empty (JSON, or plain text)
    Empty {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Check whether a value is a JSON array
    IsArray {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Deep-copy a JSON value and print the copy
    DeepClone {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format a timestamp (milliseconds or date text; default now)
    FormatDate {
        /// Timestamp to format
        timestamp: Option<String>,
        /// Pattern using YYYY MM DD HH mm ss (default from config)
        #[arg(short, long)]
        format: Option<String>,
        /// Format in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
    /// Show how long ago a timestamp was
    Ago {
        timestamp: String,
    },
    /// Decimal-safe arithmetic
    Calc {
        #[arg(value_enum)]
        op: CalcOp,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Generate random strings
    Random {
        /// String length (default from config)
        #[arg(short, long)]
        length: Option<usize>,
        /// Number of strings
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Generate version 4 UUIDs
    Uuid {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Generate random #rrggbb colors
    Color {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Generate random integers in an inclusive range
    Int {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Compare two dotted versions (prints -1, 0 or 1)
    Compare {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Remove duplicate items, keeping first occurrences
    Unique {
        #[arg(allow_hyphen_values = true)]
        items: Vec<String>,
    },
    /// Append key=value params to a URL
    Url {
        #[arg(allow_hyphen_values = true)]
        base: String,
        #[arg(allow_hyphen_values = true)]
        params: Vec<String>,
    },
    /// Group the digits of a number
    Separator {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Digits per group (default from config)
        #[arg(short, long)]
        group: Option<usize>,
        /// Group separator (default from config)
        #[arg(short, long)]
        symbol: Option<String>,
    },
    /// Spell a number digit by digit in Chinese numerals
    Chinese {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Echo stdin, printing only the last line of each burst
    Debounce {
        /// Quiet period in milliseconds (default from config)
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },
    /// Echo stdin, printing at most one line per interval
    Throttle {
        /// Interval in milliseconds (default from config)
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },
    /// View or edit configuration
    Config {
        /// List all values
        #[arg(long)]
        list: bool,
        /// Print one value (e.g. date.format)
        #[arg(long, value_name = "KEY")]
        get: Option<String>,
        /// Set one value
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// With --path, create the file if missing
        #[arg(long)]
        create: bool,
        /// Print an example config file
        #[arg(long)]
        example: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("HANDY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config only feeds defaults; the config command reads it on its own
    let config = match &cli.command {
        Commands::Config { .. } => system_config::SystemConfig::default(),
        _ => system_config::load()?,
    };

    match cli.command {
        Commands::Empty { value } => cmd::check::run_empty(&value),
        Commands::IsArray { value } => cmd::check::run_is_array(&value),
        Commands::DeepClone { value } => cmd::check::run_clone(&value),
        Commands::FormatDate { timestamp, format, utc } => {
            cmd::date::run_format(&config, timestamp.as_deref(), format.as_deref(), utc)
        }
        Commands::Ago { timestamp } => cmd::date::run_ago(&timestamp),
        Commands::Calc { op, a, b } => cmd::calc::run(op, a, b),
        Commands::Random { length, count } => {
            cmd::random::run_string(length.unwrap_or(config.random.length), count)
        }
        Commands::Uuid { count } => cmd::random::run_uuid(count),
        Commands::Color { count } => cmd::random::run_color(count),
        Commands::Int { min, max, count } => cmd::random::run_int(min, max, count),
        Commands::Compare { a, b } => cmd::version::run(&a, &b),
        Commands::Unique { items } => cmd::text::run_unique(&items),
        Commands::Url { base, params } => cmd::text::run_url(&base, &params),
        Commands::Separator { value, group, symbol } => cmd::text::run_separator(
            &value,
            group.unwrap_or(config.separator.group),
            symbol.as_deref().unwrap_or(&config.separator.symbol),
        ),
        Commands::Chinese { value } => cmd::text::run_chinese(&value),
        Commands::Debounce { delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.timing.delay_ms));
            cmd::timing::run_debounce(delay).await
        }
        Commands::Throttle { delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.timing.delay_ms));
            cmd::timing::run_throttle(delay).await
        }
        Commands::Config { list: _, get, set, path, create, example } => {
            if let Some(key) = get {
                cmd::config::run_get(&key)
            } else if let Some([key, value]) = set.as_deref() {
                cmd::config::run_set(key, value)
            } else if path {
                cmd::config::run_path(create)
            } else if example {
                cmd::config::run_example()
            } else {
                cmd::config::run_list()
            }
        }
    }
}
