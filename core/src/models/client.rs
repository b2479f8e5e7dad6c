use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PLACEHOLDER;
use crate::error::{ClientError, ClientResult};

/// A construction-service customer as stored by the client-management app.
///
/// The card only reads this record; callers own and mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    /// Name of the construction object (project)
    #[serde(default)]
    pub object_name: Option<String>,
    /// Contract total, never negative
    #[serde(default)]
    pub total_amount: f64,
    /// Agreed construction duration in days
    #[serde(default)]
    pub construction_days: u32,
    /// When the client was created; deadline math falls back to "now"
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether auxiliary icons are shown for this client
    #[serde(default)]
    pub is_icons_visible: bool,
}

impl Client {
    /// "Last First", the order used across the client lists.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Object name, or the placeholder when absent or blank.
    pub fn object_label(&self) -> &str {
        match self.object_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => PLACEHOLDER,
        }
    }

    /// Start of construction: the creation timestamp, or `now` if unknown.
    pub fn start_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.created_at.unwrap_or(now)
    }

    /// Check the numeric invariants of the record.
    pub fn validate(&self) -> ClientResult<()> {
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(ClientError::InvalidAmount {
                client: self.id.clone(),
                amount: self.total_amount,
            });
        }
        Ok(())
    }
}

/// Decode a JSON array of clients.
pub fn parse_clients(json: &str) -> ClientResult<Vec<Client>> {
    Ok(serde_json::from_str(json)?)
}
