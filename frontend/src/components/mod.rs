//! UI Components for the client card.
//!
//! # Card Components
//! - [`ClientCard`] - Payment-status card for one client
//! - [`PaymentProgressBar`] - Paid share and remaining amount
//! - Icons (`Building2Icon`, `HistoryIcon`, `EyeIcon`, `EyeOffIcon`)
//!
//! # List Components
//! - [`ClientSection`] - Numbered cards of one category

mod client_card;
mod client_list;
mod icons;
mod payment_progress;

pub use client_card::*;
pub use client_list::*;
pub use icons::*;
pub use payment_progress::*;
