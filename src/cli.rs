//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - Top-level arguments and the global `-v` flag
//! - [`Command`] - One subcommand per analysis
//! - [`InputArgs`] / [`SenderArgs`] - Flags shared by every subcommand
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use chatstat::cli::{Args, Command};
//!
//! let args = Args::try_parse_from(["chatstat", "stats", "chat.txt", "--user", "Alice"]).unwrap();
//! let Command::Stats(sender) = &args.command else { unreachable!() };
//! assert_eq!(sender.user, "Alice");
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{OVERALL, ParserConfig};
use crate::core::filter::{FilterConfig, SenderFilter};
use crate::error::ChatstatError;
use crate::format::OutputFormat;

/// Analyze a WhatsApp chat export: counters, activity, sentiment,
/// keywords and topics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat stats chat.txt
    chatstat stats chat.txt --user Alice -f json
    chatstat busiest chat.txt --top 3
    chatstat heatmap chat.txt -o heatmap.csv
    chatstat compare chat.txt -s Alice -s Bob --from 2024-01-01
    chatstat keywords chat.txt -k 10
    chatstat users chat.txt --search ali")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available analyses.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Message, word, media, link and emoji counters
    Stats(SenderArgs),

    /// Most and least active senders
    Busiest {
        #[command(flatten)]
        input: InputArgs,

        /// How many senders to list at each end
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },

    /// Messages per date and sender
    Activity(SenderArgs),

    /// Messages per month name, busiest first
    Months(SenderArgs),

    /// Messages per weekday, Monday first
    Weekdays(SenderArgs),

    /// Weekday by time-of-day message counts
    Heatmap(SenderArgs),

    /// Compare senders over a date range (defaults to the whole chat)
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Sender to include (repeatable)
        #[arg(short, long = "sender", value_name = "USER", required = true)]
        senders: Vec<String>,
    },

    /// Messages per (year, month)
    Monthly(SenderArgs),

    /// Messages per calendar date
    Daily(SenderArgs),

    /// Positive / neutral / negative message counts
    Sentiment {
        #[command(flatten)]
        sender: SenderArgs,

        /// Per-date counts instead of one total row
        #[arg(long)]
        trend: bool,
    },

    /// Top TF-IDF keywords
    Keywords {
        #[command(flatten)]
        sender: SenderArgs,

        /// Number of keywords
        #[arg(short, default_value_t = 5)]
        k: usize,
    },

    /// LDA topics
    Topics {
        #[command(flatten)]
        sender: SenderArgs,

        /// Number of topics
        #[arg(short = 'n', long = "topics", default_value_t = 5)]
        num_topics: usize,

        /// Terms listed per topic
        #[arg(long, default_value_t = 5)]
        terms: usize,

        /// Sampler seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// List senders (with the Overall entry first)
    Users {
        #[command(flatten)]
        input: InputArgs,

        /// Case-insensitive substring filter
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Emoji usage, most frequent first
    Emojis(SenderArgs),
}

/// Input file, output destination and date range.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the WhatsApp TXT export
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Two-digit years below this are 20xx, the rest 19xx
    #[arg(long, value_name = "YY", default_value_t = 70)]
    pub year_pivot: u32,
}

impl InputArgs {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_year_pivot(self.year_pivot)
    }

    /// Date-range filter from `--from` / `--to`.
    pub fn filter(&self) -> Result<FilterConfig, ChatstatError> {
        let mut filter = FilterConfig::new();
        if let Some(from) = &self.from {
            filter = filter.with_date_from(from)?;
        }
        if let Some(to) = &self.to {
            filter = filter.with_date_to(to)?;
        }
        Ok(filter)
    }
}

/// [`InputArgs`] plus the sender to analyze.
#[derive(clap::Args, Debug, Clone)]
pub struct SenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sender to analyze
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,
}

impl SenderArgs {
    pub fn sender(&self) -> SenderFilter {
        SenderFilter::from(self.user.as_str())
    }
}

impl Command {
    /// Input arguments, whichever subcommand was chosen.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Stats(s)
            | Command::Activity(s)
            | Command::Months(s)
            | Command::Weekdays(s)
            | Command::Heatmap(s)
            | Command::Monthly(s)
            | Command::Daily(s)
            | Command::Emojis(s)
            | Command::Sentiment { sender: s, .. }
            | Command::Keywords { sender: s, .. }
            | Command::Topics { sender: s, .. } => &s.input,
            Command::Busiest { input, .. }
            | Command::Compare { input, .. }
            | Command::Users { input, .. } => input,
        }
    }
}
