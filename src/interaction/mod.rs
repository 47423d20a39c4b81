mod hover;

pub use hover::{clock_label, resolve_free_hover, resolve_hover, resolve_nearest_snap};

use serde::{Deserialize, Serialize};

/// Resolved tooltip anchor and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    /// Tooltip anchor in pixels, before the upward tooltip offset.
    pub x: f64,
    pub y: f64,
    /// Displayed heart rate, rounded to a whole bpm.
    pub value: f64,
    pub label: String,
    /// Snapped sample index, or the floor hour for free hover.
    pub index: usize,
}

/// Tooltip state. `NoHover` means nothing is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum HoverState {
    #[default]
    NoHover,
    Hover(HoverPoint),
}

impl HoverState {
    #[must_use]
    pub fn point(&self) -> Option<&HoverPoint> {
        match self {
            Self::NoHover => None,
            Self::Hover(point) => Some(point),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Hover(_))
    }
}

/// Pointer tracking plus the committed hover state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<(f64, f64)>,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Records the pointer and commits the hover resolved for it.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hover: HoverState) {
        self.cursor = Some((x, y));
        self.hover = hover;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hover = HoverState::NoHover;
    }

    /// Drops the tooltip but keeps the pointer position, e.g. after a tab switch.
    pub fn clear_hover(&mut self) {
        self.hover = HoverState::NoHover;
    }
}
