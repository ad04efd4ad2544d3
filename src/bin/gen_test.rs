//! Synthetic WhatsApp export generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [seed]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt 42

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol Danvers",
    "Иван",
    "村上",
    "محمد",
    "+44 7700 900123",
    "🔥FireUser🔥",
    "Dr. Who: The Doctor",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💔", "👍🏽", "🏳️‍🌈", "🇰🇿",
    "👨‍👩‍👧‍👦", "🧑‍🚀", "🤷‍♀️",
];

const WORDS: &[&str] = &[
    "pizza", "tonight", "guitar", "practice", "meeting", "tomorrow", "great", "terrible", "love",
    "hate", "movie", "weekend", "coffee", "train", "late", "happy", "sorry", "project", "deadline",
    "birthday", "party", "not", "very", "really", "good", "bad",
];

const NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, including WhatsApp, can read or listen to them.",
    "Alice created group \"Weekend plans\"",
    "Bob added Carol Danvers",
    "Carol Danvers left",
    "You changed this group's icon",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Seed:     {}", seed);
    println!();

    if let Err(e) = generate(count, output, seed) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str, seed: u64) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let mut bytes_written: usize = 0;

    // Preamble before the first header is discarded by the parser
    let preamble = "Exported chat history\n";
    writer.write_all(preamble.as_bytes())?;
    bytes_written += preamble.len();

    for i in 0..count {
        let header = header_for(&mut rng, i);
        let line = if i % 97 == 0 {
            let notice = NOTICES.choose(&mut rng).copied().unwrap_or_default();
            format!("{header}{notice}\n")
        } else {
            let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
            let body = generate_body(&mut rng, i);
            format!("{header}{sender}: {body}\n")
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

/// Day-first header walking forward through 2023-2024, with the odd
/// impossible date and narrow no-break space before the meridiem.
fn header_for(rng: &mut impl Rng, index: usize) -> String {
    let day_of_year = (index / 40) % 360;
    let month = day_of_year / 30 + 1;
    let day = day_of_year % 30 + 1;
    let year = 23 + (index / 14_400) % 2;
    let hour = rng.gen_range(1..=12);
    let minute = rng.gen_range(0..60);
    let meridiem = if rng.gen_bool(0.5) { "AM" } else { "PM" };

    // February 29/30 in 2023 do not exist; the parser keeps those rows untimed
    let space = if index % 13 == 0 { '\u{202F}' } else { ' ' };
    format!("{day}/{month}/{year}, {hour}:{minute:02}{space}{meridiem} - ")
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 20 {
        0..=7 => sentence(rng, 3..12),
        8 => "<Media omitted>".to_string(),
        9 => "This message was deleted".to_string(),
        10 => format!("{} <This message was edited>", sentence(rng, 2..6)),
        11 => format!("look at this https://example.com/item/{index} {}", sentence(rng, 1..4)),
        12 => {
            let emojis: String = (0..rng.gen_range(1..8))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {emojis}", sentence(rng, 1..5))
        }
        13 => "Carol Danvers.vcf (file attached)".to_string(),
        14 => {
            let lat: f64 = rng.gen_range(-90.0..90.0);
            let lon: f64 = rng.gen_range(-180.0..180.0);
            format!("location: https://maps.google.com/?q={lat:.6},{lon:.6}")
        }
        15 => format!("{}\n{}\n{}", sentence(rng, 2..5), sentence(rng, 2..5), sentence(rng, 1..3)),
        16 => "Кириллица: Привет мир!".to_string(),
        17 => "note: time is 10:30: bring snacks".to_string(),
        18 => String::new(),
        _ => format!("Message number {index}"),
    }
}

fn sentence(rng: &mut impl Rng, len: std::ops::Range<usize>) -> String {
    let n = rng.gen_range(len);
    (0..n)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
