//! # Delta Life
//!
//! A terminal implementation of Conway's Game of Life built around an
//! incremental grid engine: neighbor counts are kept up to date as cells
//! change instead of being recounted every generation.
//!
//! ## Features
//!
//! * Bounded grid with a fixed dead border (no wrapping)
//! * B3/S23 rule with double-buffered cells and delta-propagated counts
//! * Mouse drawing, panning and auto-play in the terminal
//! * Named seed patterns and seeded random fills
//! * Headless mode for batch runs

pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod stats;
pub mod terminal;
pub mod ui;

pub use error::LifeError;
pub use grid::{GenerationReport, Grid};
