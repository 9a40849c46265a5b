use core::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trailing time span an order must fall into to be reported.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time window `{0}` (expected one of: all, 7days, 30days)")]
pub struct UnknownWindow(pub String);

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Last7Days => "7days",
            TimeWindow::Last30Days => "30days",
        }
    }

    /// Span of the window; `None` for [`TimeWindow::All`].
    pub fn span(&self) -> Option<Duration> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Last7Days => Some(Duration::days(7)),
            TimeWindow::Last30Days => Some(Duration::days(30)),
        }
    }

    /// Whether an order placed at `placed_at` is inside the window ending at `now`.
    ///
    /// Future timestamps are inside every window. An unknown timestamp is only
    /// inside [`TimeWindow::All`].
    pub fn contains(&self, placed_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match (self.span(), placed_at) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(span), Some(at)) => now - at <= span,
        }
    }
}

impl FromStr for TimeWindow {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TimeWindow::All),
            "7days" | "7d" => Ok(TimeWindow::Last7Days),
            "30days" | "30d" => Ok(TimeWindow::Last30Days),
            _ => Err(UnknownWindow(s.to_string())),
        }
    }
}

impl core::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
