use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates each frame and keeps the last one so tests can inspect
/// exactly what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_marker_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_tooltip_visible(&self) -> bool {
        self.last_frame
            .as_ref()
            .is_some_and(|frame| frame.tooltip.is_some())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_marker_count = frame.markers.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
