//! Tokenizer stages for transcript text.
//!
//! Parsing is split in two so each half can be tested on its own:
//! [`scan_headers`] finds message boundaries as byte offsets, then
//! [`parse_header_timestamp`] and [`split_sender`] turn each segment into
//! fields.

pub mod whatsapp;

pub use whatsapp::{
    Segment, leading_text, normalize_spaces, parse_header_timestamp, scan_headers,
    split_segments, split_sender,
};
