//! Word Ticks Example
//!
//! Encodes a word two ways, as 8-bit character codes and as Morse code,
//! and previews both in the terminal.
//!
//! Run with: `cargo run --example word_ticks -- [word]`

use tally_viz::encode::morse_symbols;
use tally_viz::prelude::*;

fn main() {
    let word = std::env::args().nth(1).unwrap_or_else(|| "theo".to_string());

    println!("Word Ticks Example: {word:?}");
    println!("==========================\n");

    let morse: Vec<String> = word
        .chars()
        .map(|c| match morse_symbols(c) {
            Some(symbols) => symbols.iter().map(ToString::to_string).collect(),
            None => "?".to_string(),
        })
        .collect();
    println!("Morse: {}\n", morse.join(" "));

    let encoder = TerminalEncoder::new().width(80);

    let sources = [("Binary", Source::Binary(word.clone())), ("Morse", Source::Morse(word.clone()))];
    for (label, source) in sources {
        let chart = Illustration::new(source)
            .first_position(1.0)
            .chart_with(TickChart::new().dimensions(800, 120))
            .expect("Failed to build chart");

        println!("{label}: {} ticks", chart.tick_count());
        print!("{}", chart.to_terminal(&encoder).expect("Failed to render"));
        println!();
    }
}
