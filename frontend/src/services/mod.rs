//! Data sources for the demo page.
//!
//! # Services
//!
//! - [`sample`] - Bundled demo clients and payment figures

pub mod sample;

pub use sample::*;
