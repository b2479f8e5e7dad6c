use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Project stage a client is listed under.
///
/// Only [`ClientCategory::Building`] clients have a running construction
/// deadline; the other two stages never raise deadline warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientCategory {
    /// Construction in progress.
    Building,
    /// Deposit received, construction not started.
    Deposit,
    /// Construction finished.
    Built,
}

impl ClientCategory {
    /// Every category, in display order.
    pub const ALL: [ClientCategory; 3] = [
        ClientCategory::Building,
        ClientCategory::Deposit,
        ClientCategory::Built,
    ];

    /// Wire name (`building`, `deposit`, `built`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientCategory::Building => "building",
            ClientCategory::Deposit => "deposit",
            ClientCategory::Built => "built",
        }
    }

    /// Whether the construction deadline applies to this category.
    pub fn tracks_deadline(&self) -> bool {
        matches!(self, ClientCategory::Building)
    }
}

impl fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientCategory {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "building" => Ok(ClientCategory::Building),
            "deposit" => Ok(ClientCategory::Deposit),
            "built" => Ok(ClientCategory::Built),
            other => Err(ClientError::UnknownCategory(other.to_string())),
        }
    }
}
