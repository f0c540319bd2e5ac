use gpui::{Pixels, point};
use gpui_component::VirtualListScrollHandle;

/// Keeps the reveal list pinned to its newest entry.
///
/// The conversation only ever grows from a script, so unlike a live chat
/// there is no "user scrolled away, stop following" mode: every reveal
/// requests the tail, and the request is applied on the next render once
/// the list has its post-growth extent.
pub struct ScrollManager {
    scroll_handle: VirtualListScrollHandle,
    pending_scroll_to_bottom: bool,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self {
            scroll_handle: VirtualListScrollHandle::new(),
            pending_scroll_to_bottom: false,
        }
    }

    pub fn handle(&self) -> &VirtualListScrollHandle {
        &self.scroll_handle
    }

    pub fn request_scroll_to_bottom(&mut self) {
        self.pending_scroll_to_bottom = true;
    }

    /// Applies a pending tail request. Returns whether a scroll happened.
    pub fn apply_pending_scroll(&mut self) -> bool {
        if !self.pending_scroll_to_bottom {
            return false;
        }

        // GPUI scrolls with negative Y offsets, so the tail sits at -max.
        let max_offset = self.scroll_handle.max_offset().height;
        let current_x = self.scroll_handle.offset().x;
        let target_y = if max_offset > Pixels::ZERO {
            -max_offset
        } else {
            Pixels::ZERO
        };
        self.scroll_handle.set_offset(point(current_x, target_y));

        self.pending_scroll_to_bottom = false;
        true
    }

    pub fn content_width(&self) -> Pixels {
        self.scroll_handle.bounds().size.width
    }
}

impl Default for ScrollManager {
    fn default() -> Self {
        Self::new()
    }
}
