// Horizontal carousels
//
// A Carousel is a horizontally scrolled strip measured in terminal cells.
// Card carousels (timeline, certifications) step by one card plus gap;
// the project tab strip steps by a fixed amount over variable-width tabs.

/// Horizontal scroll state of a strip of cards or tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    /// Scroll position of the left viewport edge
    offset: usize,
    /// Visible width
    viewport: usize,
    /// Width of one card, 0 for variable-width strips
    card_width: usize,
    gap: usize,
    items: usize,
    /// Total scrollable width
    content: usize,
    /// Fixed scroll step, overrides the card step
    fixed_step: Option<usize>,
}

impl Carousel {
    /// Carousel of equally sized cards separated by `gap`
    pub fn cards(card_width: usize, gap: usize) -> Self {
        Self {
            offset: 0,
            viewport: 0,
            card_width,
            gap,
            items: 0,
            content: 0,
            fixed_step: None,
        }
    }

    /// Strip of arbitrary content that scrolls `step` cells per arrow press
    pub fn strip(step: usize) -> Self {
        Self {
            fixed_step: Some(step),
            ..Self::cards(0, 0)
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.items
    }

    /// Set the number of cards (card carousels)
    pub fn set_items(&mut self, items: usize) {
        self.items = items;
        self.content = if items == 0 {
            0
        } else {
            items * self.card_width + (items - 1) * self.gap
        };
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Set the total content width (strips)
    pub fn set_content_width(&mut self, width: usize) {
        self.content = width;
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Scroll distance of one arrow press; 0 when there is nothing to step over
    pub fn step(&self) -> usize {
        match self.fixed_step {
            Some(step) => step,
            None if self.items == 0 => 0,
            None => self.card_width + self.gap,
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.content.saturating_sub(self.viewport)
    }

    /// Scroll by `delta` cells, clamped to the content
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset as isize + delta;
        self.offset = (target.max(0) as usize).min(self.max_scroll());
    }

    /// Scroll one step left (left arrow)
    pub fn scroll_left(&mut self) {
        self.scroll_by(-(self.step() as isize));
    }

    /// Scroll one step right (right arrow)
    pub fn scroll_right(&mut self) {
        self.scroll_by(self.step() as isize);
    }

    /// Left arrow enabled
    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0
    }

    /// Right arrow enabled
    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.max_scroll()
    }

    /// Update the visible width (terminal resize)
    ///
    /// On a width change the offset snaps to the nearest whole step so a
    /// card stays aligned with the left edge.
    pub fn set_viewport(&mut self, viewport: usize) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        let step = self.step();
        if step > 0 {
            let index = (self.offset as f64 / step as f64).round() as usize;
            self.offset = index * step;
        }
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Bring the span [start, start + width) into view with minimal scrolling
    pub fn ensure_visible(&mut self, start: usize, width: usize) {
        // Not laid out yet
        if self.viewport == 0 {
            return;
        }
        if start < self.offset {
            self.offset = start;
        } else if start + width > self.offset + self.viewport {
            self.offset = (start + width).saturating_sub(self.viewport);
        }
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Content-space span of card `index`
    pub fn card_span(&self, index: usize) -> (usize, usize) {
        let start = index * (self.card_width + self.gap);
        (start, start + self.card_width)
    }

    /// Fraction (0.0..=1.0) of card `index` inside the viewport
    pub fn visible_fraction(&self, index: usize) -> f64 {
        if index >= self.items || self.card_width == 0 {
            return 0.0;
        }
        let (start, end) = self.card_span(index);
        let view_end = self.offset + self.viewport;
        let overlap = end.min(view_end).saturating_sub(start.max(self.offset));
        overlap as f64 / self.card_width as f64
    }

    /// Card nearest to the left viewport edge
    pub fn leading_index(&self) -> usize {
        let step = self.step();
        if step == 0 || self.items == 0 {
            return 0;
        }
        let index = (self.offset as f64 / step as f64).round() as usize;
        index.min(self.items - 1)
    }
}

/// Cycling index over a project's images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCycler {
    current: usize,
    len: usize,
}

impl ImageCycler {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Move by `direction` images, wrapping at both ends
    pub fn advance(&mut self, direction: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.current = (self.current as isize + direction).rem_euclid(len) as usize;
    }

    /// Point at a new image list, starting over at the first image
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}
