//! # Client card - domain logic
//!
//! Everything the client payment-status card derives from a client record,
//! kept free of any UI code so it can be tested natively.
//!
//! ## Data flow
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │   Client    │────▶│ DeadlineStatus   │────▶│  name colour    │
//! │  + category │     │ (near / passed)  │     │  (palette)      │
//! └─────────────┘     └──────────────────┘     └─────────────────┘
//!        │
//!        ├───────────▶ format_money ──────────▶ "1 000 000 ₸"
//!        │
//!        └───────────▶ PaymentTracker ────────▶ PaymentProgress
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use clientcard::{format_money, parse_clients, ClientCategory, DeadlineStatus};
//!
//! let clients = parse_clients(r#"[{"firstName": "Ерлан", "lastName": "Нурланов",
//!     "totalAmount": 1000000, "constructionDays": 10}]"#).unwrap();
//! let mut client = clients[0].clone();
//! client.created_at = Some(Utc::now() - Duration::days(6));
//!
//! let status = DeadlineStatus::evaluate(&client, ClientCategory::Building, Utc::now());
//! assert!(status.near);
//! assert_eq!(format_money(client.total_amount), "1\u{a0}000\u{a0}000 ₸");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Client record and category
//! - [`deadline`] - Construction deadline flags
//! - [`money`] - Currency formatting
//! - [`palette`] - Category colours
//! - [`payments`] - Payment progress seam

// Core modules
pub mod error;
pub mod models;

// Derived display values
pub mod deadline;
pub mod money;
pub mod palette;

// External collaborators
pub mod payments;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ClientError, ClientResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{parse_clients, Client, ClientCategory, PLACEHOLDER};

// =============================================================================
// Re-exports - Display values
// =============================================================================

pub use deadline::{days_left, deadline_date, DeadlineStatus, DEADLINE_WARNING_DAYS};
pub use money::{format_money, format_number, CURRENCY_SUFFIX};
pub use palette::{name_class, StatusPalette};

// =============================================================================
// Re-exports - Payments
// =============================================================================

pub use payments::{PaymentProgress, PaymentTracker, StaticPayments};
