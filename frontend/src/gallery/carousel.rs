use super::breakpoint::Breakpoint;
use super::error::GalleryError;

/// How far one `advance`/`retreat` moves under the clamped policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    /// One item per step.
    Item,
    /// A full page (`items_per_page`) per step.
    Page,
}

/// What the clamped policy does when a step would cross a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Stay at the bound.
    Stop,
    /// Jump to the opposite bound.
    Rewind,
}

/// Boundary behavior of the carousel. Exactly one is active per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Offsets stay within `0..=len - items_per_page`.
    Clamped { stride: Stride, edge: Edge },
    /// Single-item steps that wrap modulo the catalog length.
    Cyclic,
}

impl NavigationPolicy {
    pub const fn clamped_paging() -> Self {
        Self::Clamped {
            stride: Stride::Page,
            edge: Edge::Stop,
        }
    }
}

/// Something that can hold the autoplay timer back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSource {
    Hover,
    Lightbox,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PauseRequests {
    hover: bool,
    lightbox: bool,
}

impl PauseRequests {
    fn slot(&mut self, source: PauseSource) -> &mut bool {
        match source {
            PauseSource::Hover => &mut self.hover,
            PauseSource::Lightbox => &mut self.lightbox,
        }
    }

    fn any(&self) -> bool {
        self.hover || self.lightbox
    }
}

/// Snapshot of the controller for rendering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub items_per_page: usize,
    pub is_paused: bool,
}

/// Tracks which contiguous slice of the catalog is in view.
///
/// The controller never does I/O. Every operation either mutates the
/// offset within its invariant range or leaves it untouched; the boolean
/// returns tell the caller whether anything moved.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    items_per_page: usize,
    policy: NavigationPolicy,
    breakpoint: Breakpoint,
    autoplay: bool,
    pauses: PauseRequests,
    torn_down: bool,
}

impl Carousel {
    pub fn new(len: usize, policy: NavigationPolicy, breakpoint: Breakpoint, width: f64) -> Self {
        Self {
            len,
            index: 0,
            items_per_page: breakpoint.derive_items_per_page(width),
            policy,
            breakpoint,
            autoplay: false,
            pauses: PauseRequests::default(),
            torn_down: false,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            items_per_page: self.items_per_page,
            is_paused: self.is_paused(),
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn is_paused(&self) -> bool {
        self.pauses.any()
    }

    /// Largest offset the current policy allows.
    pub fn max_offset(&self) -> usize {
        match self.policy {
            NavigationPolicy::Clamped { .. } => self.len.saturating_sub(self.items_per_page),
            NavigationPolicy::Cyclic => self.len.saturating_sub(1),
        }
    }

    fn stride(&self) -> usize {
        match self.policy {
            NavigationPolicy::Clamped {
                stride: Stride::Page,
                ..
            } => self.items_per_page,
            _ => 1,
        }
    }

    fn move_to(&mut self, index: usize) -> bool {
        let moved = self.index != index;
        self.index = index;
        moved
    }

    pub fn advance(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        match self.policy {
            NavigationPolicy::Clamped { edge, .. } => {
                let max = self.max_offset();
                if self.index >= max {
                    match edge {
                        Edge::Stop => false,
                        Edge::Rewind => self.move_to(0),
                    }
                } else {
                    self.move_to((self.index + self.stride()).min(max))
                }
            }
            NavigationPolicy::Cyclic => self.move_to((self.index + 1) % self.len),
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        match self.policy {
            NavigationPolicy::Clamped { edge, .. } => {
                if self.index == 0 {
                    match edge {
                        Edge::Stop => false,
                        Edge::Rewind => self.move_to(self.max_offset()),
                    }
                } else {
                    // Back to the previous page start, so a capped last page
                    // returns to where `advance` came from.
                    let stride = self.stride();
                    self.move_to((self.index - 1) / stride * stride)
                }
            }
            NavigationPolicy::Cyclic => self.move_to((self.index + self.len - 1) % self.len),
        }
    }

    /// Brings catalog position `target` into view.
    ///
    /// Under the clamped policy the offset is capped at `max_offset`, which
    /// still leaves `target` visible. Positions outside the catalog are
    /// rejected without touching the state.
    pub fn jump_to(&mut self, target: usize) -> Result<bool, GalleryError> {
        if target >= self.len {
            return Err(GalleryError::InvalidIndex {
                index: target,
                len: self.len,
            });
        }
        let offset = match self.policy {
            NavigationPolicy::Clamped { .. } => target.min(self.max_offset()),
            NavigationPolicy::Cyclic => target,
        };
        Ok(self.move_to(offset))
    }

    /// Number of pagination dots: one per page when clamped, one per item
    /// when cyclic.
    pub fn page_count(&self) -> usize {
        match self.policy {
            NavigationPolicy::Clamped { .. } => self.len.div_ceil(self.items_per_page),
            NavigationPolicy::Cyclic => self.len,
        }
    }

    pub fn current_page(&self) -> usize {
        match self.policy {
            NavigationPolicy::Clamped { .. } => {
                if self.len > 0 && self.index >= self.max_offset() {
                    self.page_count() - 1
                } else {
                    self.index / self.items_per_page
                }
            }
            NavigationPolicy::Cyclic => self.index,
        }
    }

    pub fn jump_to_page(&mut self, page: usize) -> Result<bool, GalleryError> {
        let pages = self.page_count();
        if page >= pages {
            return Err(GalleryError::InvalidIndex {
                index: page,
                len: pages,
            });
        }
        match self.policy {
            NavigationPolicy::Clamped { .. } => {
                let offset = (page * self.items_per_page).min(self.max_offset());
                Ok(self.move_to(offset))
            }
            NavigationPolicy::Cyclic => self.jump_to(page),
        }
    }

    /// Recomputes the page size for `width` and pulls the offset back into
    /// range. Calling it again with the same width changes nothing.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let items_per_page = self.breakpoint.derive_items_per_page(width);
        let resized = items_per_page != self.items_per_page;
        self.items_per_page = items_per_page;
        let clamped = self.move_to(self.index.min(self.max_offset()));
        resized || clamped
    }

    /// Catalog positions currently in view, in display order.
    pub fn visible_positions(&self) -> Vec<usize> {
        let count = self.items_per_page.min(self.len);
        match self.policy {
            NavigationPolicy::Clamped { .. } => (self.index..self.index + count).collect(),
            NavigationPolicy::Cyclic => (0..count).map(|k| (self.index + k) % self.len).collect(),
        }
    }

    pub fn request_pause(&mut self, source: PauseSource) -> bool {
        let slot = self.pauses.slot(source);
        let changed = !*slot;
        *slot = true;
        changed
    }

    pub fn release_pause(&mut self, source: PauseSource) -> bool {
        let slot = self.pauses.slot(source);
        let changed = *slot;
        *slot = false;
        changed
    }

    /// Autoplay step. Ticks that arrive while paused are dropped rather than
    /// queued, so resuming moves by exactly one step.
    pub fn tick(&mut self) -> Result<bool, GalleryError> {
        if self.torn_down {
            return Err(GalleryError::TornDown);
        }
        if !self.autoplay || self.is_paused() {
            return Ok(false);
        }
        Ok(self.advance())
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}
