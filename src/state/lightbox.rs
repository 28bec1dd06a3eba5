/// Lightbox (full-screen viewer) state machine
///
/// Two states: closed and open at a cursor into the filtered view. The
/// cursor wraps on navigation, so the filtered view must be non-empty
/// while the viewer is open.

/// Fade duration for the image swap, in milliseconds
pub const FADE_MILLIS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    Open {
        /// Index into the filtered view
        cursor: usize,
        /// Index currently on screen; lags `cursor` during the fade
        displayed: usize,
    },
}

/// Viewer state plus the scroll lock it imposes on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    state: State,
    scroll_locked: bool,
    /// Scroll-lock value to restore when the viewer closes
    restore_scroll: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            state: State::Closed,
            scroll_locked: false,
            restore_scroll: false,
        }
    }

    /// Open the viewer at `cursor` within a filtered view of `len`
    /// records. Ignored when `cursor` does not point into the view
    /// (stale click on a reshuffled grid).
    pub fn open(&mut self, cursor: usize, len: usize) {
        if cursor >= len {
            return;
        }

        self.restore_scroll = self.scroll_locked;
        self.scroll_locked = true;
        self.state = State::Open {
            cursor,
            displayed: cursor,
        };
    }

    /// Close the viewer and restore the pre-open scroll lock. Every
    /// close trigger (close control, backdrop click, Escape) lands here.
    pub fn close(&mut self) {
        self.scroll_locked = self.restore_scroll;
        self.state = State::Closed;
    }

    /// Advance the cursor by one position, wrapping past the end.
    /// Returns the new cursor, or `None` when the viewer is closed or
    /// the view is empty.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.advance(len, 1)
    }

    /// Retreat the cursor by one position, wrapping before the start.
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        self.advance(len, len.saturating_sub(1))
    }

    fn advance(&mut self, len: usize, step: usize) -> Option<usize> {
        let State::Open { cursor, displayed } = self.state else {
            return None;
        };
        if len == 0 {
            return None;
        }

        let moved = (cursor + step) % len;
        self.state = State::Open {
            cursor: moved,
            displayed,
        };
        Some(moved)
    }

    /// The displayed image catches up with the cursor once the fade-out
    /// has run.
    pub fn finish_fade(&mut self) {
        if let State::Open { cursor, .. } = self.state {
            self.state = State::Open {
                cursor,
                displayed: cursor,
            };
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Cursor position while open
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            State::Open { cursor, .. } => Some(cursor),
            State::Closed => None,
        }
    }

    /// Index to draw; lags the cursor during the fade
    pub fn displayed(&self) -> Option<usize> {
        match self.state {
            State::Open { displayed, .. } => Some(displayed),
            State::Closed => None,
        }
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.state, State::Open { cursor, displayed } if cursor != displayed)
    }

    /// Whether page scrolling is currently suppressed
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unlocked() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
        assert_eq!(lightbox.cursor(), None);
        assert_eq!(lightbox.displayed(), None);
    }

    #[test]
    fn open_sets_cursor_and_locks_scrolling() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 5);
        assert!(lightbox.is_open());
        assert!(lightbox.scroll_locked());
        assert_eq!(lightbox.cursor(), Some(2));
        assert_eq!(lightbox.displayed(), Some(2));
    }

    #[test]
    fn open_out_of_bounds_is_ignored() {
        let mut lightbox = Lightbox::new();
        lightbox.open(5, 5);
        assert!(!lightbox.is_open());

        lightbox.open(0, 0);
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn next_wraps_past_the_last_record() {
        let mut lightbox = Lightbox::new();
        lightbox.open(4, 5);
        assert_eq!(lightbox.next(5), Some(0));
        assert_eq!(lightbox.cursor(), Some(0));
    }

    #[test]
    fn previous_wraps_before_the_first_record() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 5);
        assert_eq!(lightbox.previous(5), Some(4));
        assert_eq!(lightbox.cursor(), Some(4));
    }

    #[test]
    fn single_record_view_wraps_to_itself() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 1);
        assert_eq!(lightbox.next(1), Some(0));
        assert_eq!(lightbox.previous(1), Some(0));
    }

    #[test]
    fn navigation_is_a_no_op_while_closed() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.next(5), None);
        assert_eq!(lightbox.previous(5), None);
    }

    #[test]
    fn navigation_is_a_no_op_on_an_empty_view() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);
        assert_eq!(lightbox.next(0), None);
        assert_eq!(lightbox.previous(0), None);
        assert_eq!(lightbox.cursor(), Some(0));
    }

    #[test]
    fn close_restores_the_pre_open_scroll_lock() {
        // Same close() regardless of which control triggered it
        let mut lightbox = Lightbox::new();
        lightbox.open(1, 3);
        assert!(lightbox.scroll_locked());

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn reopening_after_close_locks_again() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 2);
        lightbox.close();
        lightbox.open(1, 2);
        assert!(lightbox.scroll_locked());
        assert_eq!(lightbox.cursor(), Some(1));
    }

    #[test]
    fn navigation_fades_then_swaps_the_displayed_image() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);
        assert!(!lightbox.is_fading());

        lightbox.next(3);
        assert!(lightbox.is_fading());
        assert_eq!(lightbox.cursor(), Some(1));
        assert_eq!(lightbox.displayed(), Some(0));

        lightbox.finish_fade();
        assert!(!lightbox.is_fading());
        assert_eq!(lightbox.displayed(), Some(1));
    }

    #[test]
    fn rapid_navigation_settles_on_the_latest_cursor() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 4);
        lightbox.next(4);
        lightbox.next(4);
        assert_eq!(lightbox.cursor(), Some(2));
        assert_eq!(lightbox.displayed(), Some(0));

        lightbox.finish_fade();
        assert_eq!(lightbox.displayed(), Some(2));
    }
}
