//! Scrollable selection over a sequence of items.
//!
//! Both the process list and the signal menu are a window of at most `window`
//! rows sliding over `items`. The selection is an offset *inside* that window,
//! so moving past the bottom edge scrolls instead of moving the highlight.

/// Navigation direction for [`ScrollList::navigate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Scroll position and window of a [`ScrollList`], saved to come back to later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_offset: usize,
    pub selected_offset: usize,
    pub window: usize,
}

/// Windowed list with a scroll offset and a selected row within the window
#[derive(Debug, Clone)]
pub struct ScrollList<T> {
    items: Vec<T>,
    scroll_offset: usize,
    selected_offset: usize,
    /// Maximum number of rows shown (set during render)
    window: usize,
}

impl<T> ScrollList<T> {
    pub fn new(items: Vec<T>, window: usize) -> Self {
        Self {
            items,
            scroll_offset: 0,
            selected_offset: 0,
            window,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_offset(&self) -> usize {
        self.selected_offset
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of rows currently visible
    pub fn shown_count(&self) -> usize {
        self.window
            .min(self.items.len().saturating_sub(self.scroll_offset))
    }

    /// Replace the underlying items, keeping scroll and selection where possible
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_scroll();
        self.clamp_selection();
    }

    /// Change the window size, e.g. after the terminal was resized.
    ///
    /// A shrinking window scrolls so the highlighted item stays highlighted.
    pub fn set_window(&mut self, window: usize) {
        self.window = window;
        if window > 0 && self.selected_offset >= window {
            self.scroll_offset += self.selected_offset - (window - 1);
            self.selected_offset = window - 1;
        }
        self.clamp_selection();
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            scroll_offset: self.scroll_offset,
            selected_offset: self.selected_offset,
            window: self.window,
        }
    }

    /// Go back to a saved viewport, clamped to the current items
    pub fn restore_viewport(&mut self, viewport: Viewport) {
        self.window = viewport.window;
        self.scroll_offset = viewport.scroll_offset;
        self.selected_offset = viewport.selected_offset;
        self.clamp_scroll();
        self.clamp_selection();
    }

    /// Back to the first item
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.selected_offset = 0;
    }

    pub fn navigate(&mut self, direction: Direction) {
        let shown = self.shown_count();
        if shown == 0 {
            return;
        }
        match direction {
            Direction::Down => {
                if self.selected_offset >= shown - 1 {
                    if self.scroll_offset + shown < self.items.len() {
                        self.scroll_offset += 1;
                    }
                } else {
                    self.selected_offset += 1;
                }
            }
            Direction::Up => {
                if self.selected_offset == 0 {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                } else {
                    self.selected_offset -= 1;
                }
            }
        }
    }

    /// Item under the highlight, if anything is shown
    pub fn current(&self) -> Option<&T> {
        if self.shown_count() == 0 {
            return None;
        }
        self.items.get(self.scroll_offset + self.selected_offset)
    }

    /// Visible items paired with whether each one is selected
    pub fn visible(&self) -> impl Iterator<Item = (&T, bool)> {
        let selected = self.selected_offset;
        self.items
            .iter()
            .skip(self.scroll_offset)
            .take(self.shown_count())
            .enumerate()
            .map(move |(row, item)| (item, row == selected))
    }

    /// Keep the window filled when the list got shorter
    fn clamp_scroll(&mut self) {
        let last_start = self.items.len().saturating_sub(self.window);
        self.scroll_offset = self.scroll_offset.min(last_start);
    }

    fn clamp_selection(&mut self) {
        let shown = self.shown_count();
        if self.selected_offset >= shown {
            self.selected_offset = shown.saturating_sub(1);
        }
    }
}
