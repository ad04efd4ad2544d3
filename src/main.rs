//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::fs;
use std::process;
use std::sync::Arc;

use clap::Parser as ClapParser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatstat::cache::{NoCache, load_transcript};
use chatstat::cli::{Args, Command, InputArgs};
use chatstat::config::{StatsConfig, TextConfig};
use chatstat::format::{to_format_string, write_to_format};
use chatstat::stats::{
    self, LabeledCount, activity_by_month, activity_by_weekday, activity_heatmap,
    activity_over_time, comparative_activity, daily_timeline, emoji_frequency, fetch_stats,
    monthly_timeline,
};
use chatstat::text::{
    GibbsLda, LexiconSentiment, TfIdfRanker, corpus, sentiment_breakdown, sentiment_trend,
    top_keywords, topic_model,
};
use chatstat::transcript::search_senders;
use chatstat::{ChatstatError, Transcript, TranscriptParser};

#[derive(Serialize)]
struct RankRow<'a> {
    rank: &'static str,
    sender: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct KeywordRow {
    keyword: String,
    weight: f64,
}

#[derive(Serialize)]
struct TopicRow {
    topic: String,
}

#[derive(Serialize)]
struct UserRow<'a> {
    user: &'a str,
}

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable. `-v` overrides
/// `RUST_LOG` for this crate.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,chatstat=debug"),
        _ => EnvFilter::new("warn,chatstat=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let input = args.command.input();
    let transcript = load(input)?;

    match &args.command {
        Command::Stats(s) => {
            let stats = fetch_stats(&transcript, &s.sender());
            emit(&[stats], input)
        }
        Command::Busiest { top, .. } => {
            let config = StatsConfig::new().with_ranking_size(*top);
            let ranking = stats::busiest_with(&transcript, &config);
            let rows: Vec<RankRow<'_>> = ranking
                .top
                .iter()
                .map(|c| ("top", c))
                .chain(ranking.bottom.iter().map(|c| ("bottom", c)))
                .map(|(rank, c)| RankRow {
                    rank,
                    sender: &c.label,
                    count: c.count,
                })
                .collect();
            emit(&rows, input)
        }
        Command::Activity(s) => emit(&activity_over_time(&transcript, &s.sender()).cells(), input),
        Command::Months(s) => emit(&activity_by_month(&transcript, &s.sender()), input),
        Command::Weekdays(s) => emit(&activity_by_weekday(&transcript, &s.sender()), input),
        Command::Heatmap(s) => emit(&activity_heatmap(&transcript, &s.sender()).rows(), input),
        Command::Compare { senders, .. } => {
            let rows: Vec<LabeledCount> = match transcript.date_bounds() {
                Some((start, end)) => comparative_activity(&transcript, senders.as_slice(), start, end),
                None => Vec::new(),
            };
            emit(&rows, input)
        }
        Command::Monthly(s) => emit(&monthly_timeline(&transcript, &s.sender()), input),
        Command::Daily(s) => emit(&daily_timeline(&transcript, &s.sender()), input),
        Command::Sentiment { sender, trend } => {
            let model = LexiconSentiment::new();
            if *trend {
                emit(&sentiment_trend(&transcript, &sender.sender(), &model), input)
            } else {
                emit(
                    &[sentiment_breakdown(&transcript, &sender.sender(), &model)],
                    input,
                )
            }
        }
        Command::Keywords { sender, k } => {
            let filter = sender.sender();
            let messages = corpus(&transcript, &filter);
            let rows: Vec<KeywordRow> = top_keywords(&TfIdfRanker::new(), &messages, *k)?
                .into_iter()
                .map(|(keyword, weight)| KeywordRow { keyword, weight })
                .collect();
            emit(&rows, input)
        }
        Command::Topics {
            sender,
            num_topics,
            terms,
            seed,
        } => {
            let filter = sender.sender();
            let messages = corpus(&transcript, &filter);
            let config = TextConfig::new()
                .with_terms_per_topic(*terms)
                .with_seed(*seed);
            let model = GibbsLda::with_config(config);
            let rows: Vec<TopicRow> = topic_model(&model, &messages, *num_topics)?
                .into_iter()
                .map(|topic| TopicRow { topic })
                .collect();
            emit(&rows, input)
        }
        Command::Users { search, .. } => {
            let options = transcript.sender_options();
            let matches = search_senders(&options, search.as_deref().unwrap_or(""));
            let rows: Vec<UserRow<'_>> = matches.into_iter().map(|user| UserRow { user }).collect();
            emit(&rows, input)
        }
        Command::Emojis(s) => emit(&emoji_frequency(&transcript, &s.sender()), input),
    }
}

/// Reads, parses and date-filters the export.
fn load(input: &InputArgs) -> Result<Arc<Transcript>, ChatstatError> {
    let bytes = fs::read(&input.input)?;
    let parser = TranscriptParser::with_config(input.parser_config());
    let transcript = load_transcript(&bytes, &parser, &mut NoCache)?;

    let filter = input.filter()?;
    let transcript = if filter.is_active() {
        Arc::new(filter.apply(&transcript))
    } else {
        transcript
    };

    info!(
        path = %input.input.display(),
        records = transcript.len(),
        untimed = transcript.untimed_count(),
        "loaded transcript"
    );
    Ok(transcript)
}

/// Writes rows to `--output`, or prints them to stdout.
fn emit<T: Serialize>(rows: &[T], input: &InputArgs) -> Result<(), ChatstatError> {
    match &input.output {
        Some(path) => {
            write_to_format(rows, path, input.format)?;
            eprintln!("✅ Saved {} rows to {}", rows.len(), path.display());
        }
        None => {
            let text = to_format_string(rows, input.format)?;
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
        }
    }
    Ok(())
}
