use tracing::{trace, warn};

use crate::interaction::{HoverState, resolve_hover};
use crate::render::Renderer;

use super::HeartRateChart;

impl<R: Renderer> HeartRateChart<R> {
    /// Resolves and commits the hover state for a pointer position.
    ///
    /// Exactly one transition is committed per call. A torn-down chart ignores pointer input.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.torn_down {
            trace!(x, y, "pointer move after teardown ignored");
            return;
        }
        let hover = self.resolve_pointer(x, y);
        trace!(x, y, visible = hover.is_visible(), "pointer move");
        self.interaction.on_pointer_move(x, y, hover);
    }

    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.interaction.on_pointer_leave();
    }

    fn resolve_pointer(&self, x: f64, y: f64) -> HoverState {
        let series = self.active_series();
        if series.is_empty() {
            return HoverState::NoHover;
        }
        match self.axis_mapper() {
            Ok(mapper) => resolve_hover(self.range, series, mapper, x, y),
            Err(err) => {
                warn!(error = %err, "cannot map pointer; hiding tooltip");
                HoverState::NoHover
            }
        }
    }
}
