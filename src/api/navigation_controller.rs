use tracing::debug;

use crate::core::RangeKey;
use crate::render::Renderer;

use super::HeartRateChart;

impl<R: Renderer> HeartRateChart<R> {
    /// Switches the active tab. The tooltip is cleared because it belongs to the old series.
    pub fn set_range(&mut self, range: RangeKey) {
        if self.range == range {
            return;
        }
        debug!(from = ?self.range, to = ?range, "range changed");
        self.range = range;
        self.interaction.clear_hover();
    }

    /// Steps to the previous day snapshot, clamped at the first one.
    pub fn go_prev_day(&mut self) -> bool {
        let moved = self.day_cursor.go_prev();
        self.after_day_navigation(moved);
        moved
    }

    /// Steps to the next day snapshot, clamped at the last one.
    pub fn go_next_day(&mut self) -> bool {
        let moved = self.day_cursor.go_next();
        self.after_day_navigation(moved);
        moved
    }

    fn after_day_navigation(&mut self, moved: bool) {
        if !moved {
            return;
        }
        debug!(day = self.day_cursor.index(), "day changed");
        if self.range == RangeKey::Day {
            self.interaction.clear_hover();
        }
    }
}
