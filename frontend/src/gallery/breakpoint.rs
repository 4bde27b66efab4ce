/// Width rule that decides how many gallery items share the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Viewport width in CSS pixels at which the wide layout starts.
    pub threshold: f64,
    pub narrow_items: usize,
    pub wide_items: usize,
}

impl Breakpoint {
    pub const fn new(threshold: f64, narrow_items: usize, wide_items: usize) -> Self {
        Self {
            threshold,
            narrow_items,
            wide_items,
        }
    }

    /// Items per page for a viewport `width`: narrow below the threshold,
    /// wide at or above it. Never returns zero.
    pub fn derive_items_per_page(&self, width: f64) -> usize {
        let items = if width >= self.threshold {
            self.wide_items
        } else {
            self.narrow_items
        };
        items.max(1)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        // Tailwind's `md` breakpoint: one image on phones, three on desktop.
        Self::new(768.0, 1, 3)
    }
}
