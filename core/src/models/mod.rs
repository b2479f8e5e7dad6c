//! Domain models for the client card.
//!
//! - [`Client`] - Construction-service customer and project status
//! - [`ClientCategory`] - Which list a client is shown in (building, deposit, built)

mod category;
mod client;

pub use category::*;
pub use client::*;

/// Placeholder shown for missing text values.
pub const PLACEHOLDER: &str = "—";
