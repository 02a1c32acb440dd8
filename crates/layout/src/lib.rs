//! Text layout: turns spacing-annotated segments into absolutely positioned
//! runs, applying line wrap, word wrap, list indentation, heading rhythm and
//! context-sensitive inter-segment spacing.

pub mod config;
pub mod engine;
pub mod measure;

pub use config::LayoutOptions;
pub use engine::{LayoutResult, PositionedSegment, TextLayout, compute_bounds};
pub use measure::{HeuristicMeasurer, TextMeasurer};
