//! # Tally-Viz
//!
//! Tally-mark illustrations: a horizontal baseline crossed by centered
//! perpendicular ticks whose lengths encode data.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library for
//! SIMD reductions. Inputs are encoded into tick weights, optionally
//! transformed and normalized into a visual length range, then rasterized
//! or emitted as vector graphics.
//!
//! ## Features
//!
//! - **Encoders**: words as 8-bit character codes or as Morse code
//! - **Normalization**: affine rescaling with linear, sqrt, log10 and ln pre-transforms
//! - **Multiple Outputs**: PNG, SVG, and terminal (ASCII/Unicode) rendering
//! - **Presets**: planet radii, the solar system, and word encodings ready to draw
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tally_viz::prelude::*;
//!
//! let chart = TickChart::new()
//!     .lengths(&morse_ticks("sos"))
//!     .color(Rgba::BLUE)
//!     .build()?;
//!
//! chart.render_to_file("sos.png")?;
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `tally` binary (clap, anyhow, tracing-subscriber)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines).
pub mod geometry;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Data Modules
// ============================================================================

/// Text encoders producing raw tick weights.
pub mod encode;

/// Affine rescaling of raw weights into tick lengths.
pub mod normalize;

/// Encode-normalize-render pipeline.
pub mod pipeline;

/// Named example illustrations.
pub mod presets;

/// YAML configuration.
pub mod config;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Tick chart.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, SVG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tally-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use tally_viz::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::encode::{binary_ticks, morse_ticks};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point};
    pub use crate::normalize::{normalize, Normalizer, Transform};
    pub use crate::output::{PngEncoder, SvgEncoder, TerminalEncoder, TerminalMode};
    pub use crate::pipeline::{Illustration, Source};
    pub use crate::plots::{Tick, TickChart};
    pub use crate::presets::Preset;
    pub use crate::scale::{LinearScale, Scale};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
