use crate::config::{ACTIVE_LINE, HEADER_COMPACT_THRESHOLD, SCROLL_TOP_THRESHOLD};
use crate::section::Section;
use crate::viewport::{Bounds, Viewport};

/// What a single scroll event tells us about the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    /// `None` when no section crosses the active line.
    pub active: Option<Section>,
}

impl ScrollSample {
    pub fn show_scroll_to_top(&self) -> bool {
        self.scroll_y > SCROLL_TOP_THRESHOLD
    }
}

pub fn header_is_compact(scroll_y: f64) -> bool {
    scroll_y > HEADER_COMPACT_THRESHOLD
}

/// First section, in `Section::ALL` order, whose box crosses the active line.
///
/// Ties go to the earlier section even if a later one fills more of the
/// screen. Sections without an element are skipped.
pub fn find_active_section<F>(mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<Bounds>,
{
    Section::ALL
        .into_iter()
        .find(|section| bounds_of(*section).map_or(false, |b| b.crosses(ACTIVE_LINE)))
}

pub struct ScrollTracker<V> {
    viewport: V,
}

impl<V: Viewport> ScrollTracker<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    pub fn sample(&self) -> ScrollSample {
        ScrollSample {
            scroll_y: self.viewport.scroll_y(),
            active: find_active_section(|section| self.viewport.bounds(section.id())),
        }
    }
}
