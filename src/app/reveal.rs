// Fade-in-on-view tracking
//
// Cards start dimmed and are revealed the first time enough of them is on
// screen. Once revealed a card stays revealed and is no longer observed.

use std::collections::HashSet;

use super::config::REVEAL_THRESHOLD;
use super::Section;

/// Identity of a revealable card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId {
    pub section: Section,
    pub index: usize,
}

impl RevealId {
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<RevealId>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report how much of a card is visible (0.0..=1.0)
    ///
    /// Returns true if this observation revealed the card.
    pub fn observe(&mut self, id: RevealId, visible_fraction: f64) -> bool {
        if visible_fraction < REVEAL_THRESHOLD || self.revealed.contains(&id) {
            return false;
        }
        self.revealed.insert(id)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.contains(&id)
    }

    /// Number of revealed cards
    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Fraction of the line span [start, start + height) visible in the window
/// [scroll, scroll + viewport) of a vertically scrolled panel
pub fn vertical_fraction(start: usize, height: usize, scroll: usize, viewport: usize) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let end = start + height;
    let view_end = scroll + viewport;
    let overlap = end.min(view_end).saturating_sub(start.max(scroll));
    overlap as f64 / height as f64
}
