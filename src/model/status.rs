//! Qualitative status and display tone lookups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Qualitative status of a measured metric.
///
/// Ordering is by severity: `Good < Warning < Critical < Unavailable`.
/// `Unavailable` is a distinct state for unmeasured samples, not an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Warning,
    Critical,
    Unavailable,
}

impl Status {
    /// Human-readable assessment label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Needs Improvement",
            Self::Critical => "Critical",
            Self::Unavailable => "Not Available",
        }
    }

    /// Display tone for this status
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Good => Tone::Green,
            Self::Warning => Tone::Yellow,
            Self::Critical => Tone::Red,
            Self::Unavailable => Tone::Slate,
        }
    }

    /// Whether the underlying metric was actually measured
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Display tone (color family) for statuses, tiers, priorities, and bands.
///
/// A closed lookup target so renderers can branch exhaustively instead of
/// dispatching on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Red,
    Purple,
    Slate,
}

impl Tone {
    /// Stable lowercase name of the tone
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Slate => "slate",
        }
    }
}
