//! Tailwind class palette per client category.

use crate::models::ClientCategory;

/// Colour classes for a card of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    /// Left border colour
    pub border: &'static str,
    /// Card background tint
    pub background: &'static str,
    /// Avatar circle background (desktop layout)
    pub avatar: &'static str,
}

impl StatusPalette {
    /// Border and background, ready to append to the card class list.
    pub fn card_classes(&self) -> String {
        format!("{} {}", self.border, self.background)
    }
}

impl ClientCategory {
    /// Palette used to render cards of this category.
    pub fn palette(&self) -> StatusPalette {
        match self {
            ClientCategory::Building => StatusPalette {
                border: "border-emerald-500",
                background: "bg-emerald-50",
                avatar: "bg-emerald-100",
            },
            ClientCategory::Deposit => StatusPalette {
                border: "border-amber-500",
                background: "bg-amber-50",
                avatar: "bg-amber-100",
            },
            ClientCategory::Built => StatusPalette {
                border: "border-blue-500",
                background: "bg-blue-50",
                avatar: "bg-blue-100",
            },
        }
    }
}

/// Text colour for the client name.
pub fn name_class(alert: bool) -> &'static str {
    if alert {
        "text-red-600"
    } else {
        "text-gray-900"
    }
}
