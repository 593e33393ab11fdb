//! Solar System Example
//!
//! Draws the Sun, the eight planets and the Moon as ticks whose lengths
//! follow the natural log of their radii, then writes PNG and SVG copies.
//!
//! Run with: `cargo run --example solar_system`

use tally_viz::prelude::*;
use tally_viz::presets::{PLANET_RADII_KM, SOLAR_SYSTEM_RADII_KM};

fn main() {
    println!("Solar System Example");
    println!("====================\n");

    // Step 1: The preset puts the Moon at 3.15, beside Earth
    let chart = Preset::SolarSystemLn
        .illustration()
        .chart()
        .expect("Failed to build solar system chart");

    println!("Step 1: {} bodies", chart.tick_count());
    for (tick, radius) in chart.ticks().iter().zip(SOLAR_SYSTEM_RADII_KM) {
        println!("  x={:<5} radius={radius:>9} km  length={:.3}", tick.position, tick.length);
    }
    println!();

    // Step 2: Compare transforms on the same radii
    println!("Step 2: Transforms (Sun vs Earth)");
    for transform in Transform::ALL {
        let lengths = Normalizer::default()
            .normalize_with(&PLANET_RADII_KM, transform)
            .expect("radii are positive");
        println!("  {transform:<6} sun={:.3} earth={:.3}", lengths[0], lengths[3]);
    }
    println!();

    // Step 3: Terminal preview
    println!("Step 3: Preview");
    let fb = chart.to_framebuffer().expect("Failed to render");
    print!("{}", TerminalEncoder::new().mode(TerminalMode::Ascii).width(80).render(&fb));
    println!();

    // Step 4: Files
    chart.render_to_file("solar_system.png").expect("Failed to write PNG");
    chart.render_to_file("solar_system.svg").expect("Failed to write SVG");
    println!("Step 4: Wrote solar_system.png and solar_system.svg");
}
