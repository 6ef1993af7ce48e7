// src/domain/status_style.rs

/// Visual encoding of a complaint status, shared by the list and map views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Resolved,
    UnderInvestigation,
    Pending,
    Unknown,
}

/// Maps a status label onto its style. Case-insensitive but otherwise exact;
/// anything unrecognized, padded labels included, falls through to `Unknown`.
pub fn classify(status: &str) -> StatusStyle {
    match status.to_lowercase().as_str() {
        "resolved" => StatusStyle::Resolved,
        "under investigation" => StatusStyle::UnderInvestigation,
        "pending" => StatusStyle::Pending,
        _ => StatusStyle::Unknown,
    }
}

impl StatusStyle {
    /// Classes for the status badge on list cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            StatusStyle::Resolved => "bg-green-100 text-green-800 hover:bg-green-200",
            StatusStyle::UnderInvestigation => "bg-blue-100 text-blue-800 hover:bg-blue-200",
            StatusStyle::Pending => "bg-yellow-100 text-yellow-800 hover:bg-yellow-200",
            StatusStyle::Unknown => "bg-gray-100 text-gray-800 hover:bg-gray-200",
        }
    }

    /// Fill class for map markers and the map legend.
    pub fn marker_class(self) -> &'static str {
        match self {
            StatusStyle::Resolved => "bg-green-500",
            StatusStyle::UnderInvestigation => "bg-blue-500",
            StatusStyle::Pending => "bg-yellow-500",
            StatusStyle::Unknown => "bg-gray-500",
        }
    }
}
