//! Payment progress seam.
//!
//! How much of a contract has been paid is computed elsewhere in the app.
//! The card only asks a [`PaymentTracker`] for the current figures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Client;

/// Paid share of a client's contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProgress {
    /// Paid share in percent (0-100)
    pub progress: f64,
    /// Amount still owed
    pub remaining_amount: f64,
}

impl PaymentProgress {
    /// Progress clamped into 0-100, with NaN treated as nothing paid.
    pub fn clamped_percent(&self) -> f64 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 100.0)
        }
    }

    /// Whether the contract is fully paid.
    pub fn is_complete(&self) -> bool {
        self.clamped_percent() >= 100.0
    }
}

/// Source of payment progress for clients.
pub trait PaymentTracker {
    /// Current progress for `client`.
    fn progress(&self, client: &Client) -> PaymentProgress;
}

/// Fixed progress figures keyed by client id.
///
/// Unknown clients report no progress.
#[derive(Debug, Clone, Default)]
pub struct StaticPayments {
    entries: HashMap<String, PaymentProgress>,
}

impl StaticPayments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the figures for one client id.
    pub fn insert(&mut self, client_id: impl Into<String>, progress: PaymentProgress) {
        self.entries.insert(client_id.into(), progress);
    }

    /// Decode a JSON object `{ "<client id>": { "progress": .., "remainingAmount": .. } }`.
    pub fn from_json(json: &str) -> crate::ClientResult<Self> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PaymentTracker for StaticPayments {
    fn progress(&self, client: &Client) -> PaymentProgress {
        self.entries.get(&client.id).copied().unwrap_or_default()
    }
}
