use serde::{Deserialize, Serialize};

/// Selected time-granularity tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RangeKey {
    Day,
    #[default]
    Week,
    Month,
    Test,
}

/// How the hover tooltip tracks the pointer for a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    /// Continuous interpolation between hourly samples.
    FreeHover,
    /// Snap to the nearest rendered sample by x-distance.
    NearestSnap,
}

impl RangeKey {
    /// Tab order as shown in the range strip.
    pub const ALL: [RangeKey; 4] = [
        RangeKey::Day,
        RangeKey::Week,
        RangeKey::Month,
        RangeKey::Test,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Test => "Test",
        }
    }

    /// Fixed series length, `None` for the variable-length Test range.
    #[must_use]
    pub fn expected_len(self) -> Option<usize> {
        match self {
            Self::Day => Some(24),
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Test => None,
        }
    }

    #[must_use]
    pub fn hover_mode(self) -> HoverMode {
        match self {
            Self::Day => HoverMode::FreeHover,
            Self::Week | Self::Month | Self::Test => HoverMode::NearestSnap,
        }
    }
}
