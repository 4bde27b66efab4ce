use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use super::breakpoint::Breakpoint;
use super::carousel::{Carousel, CarouselState, NavigationPolicy, PauseSource};
use super::catalog::{Catalog, GalleryItem};
use super::error::GalleryError;
use super::lightbox::{LightboxClick, LightboxState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub period_ms: u32,
    pub pause_on_hover: bool,
    pub pause_on_lightbox: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            period_ms: 3_000,
            pause_on_hover: true,
            pause_on_lightbox: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryConfig {
    pub policy: NavigationPolicy,
    pub breakpoint: Breakpoint,
    /// `None` disables the autoplay timer entirely.
    pub autoplay: Option<AutoplayConfig>,
}

/// Keys the gallery reacts to while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    Left,
    Right,
}

impl GalleryKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Arrow keys belong to the focused gallery. Escape is left to the
    /// window listener that exists while the overlay is open, so it is
    /// dispatched once.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Everything that can happen to the gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEvent {
    Next,
    Previous,
    JumpTo(usize),
    JumpToPage(usize),
    Resize(f64),
    Tick,
    PointerEnter,
    PointerLeave,
    Select(usize),
    LightboxClick(LightboxClick),
    Key(GalleryKey),
    Teardown,
}

/// Carousel and lightbox of one gallery instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryWidget {
    catalog: Catalog,
    config: GalleryConfig,
    carousel: Carousel,
    lightbox: LightboxState,
}

impl GalleryWidget {
    pub fn new(catalog: Catalog, config: GalleryConfig, width: f64) -> Self {
        let carousel = Carousel::new(catalog.len(), config.policy, config.breakpoint, width)
            .with_autoplay(config.autoplay.is_some());
        Self {
            catalog,
            config,
            carousel,
            lightbox: LightboxState::default(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn lightbox(&self) -> &LightboxState {
        &self.lightbox
    }

    /// Items in view, paired with their catalog positions.
    pub fn visible_items(&self) -> Vec<(usize, &GalleryItem)> {
        self.carousel
            .visible_positions()
            .into_iter()
            .filter_map(|position| self.catalog.get(position).map(|item| (position, item)))
            .collect()
    }

    pub fn open_item(&self) -> Option<&GalleryItem> {
        self.lightbox.open_item(&self.catalog)
    }

    /// Event behind pagination dot `dot`: a page under the clamped policy,
    /// an item under the cyclic one.
    pub fn dot_event(&self, dot: usize) -> GalleryEvent {
        match self.config.policy {
            NavigationPolicy::Clamped { .. } => GalleryEvent::JumpToPage(dot),
            NavigationPolicy::Cyclic => GalleryEvent::JumpTo(dot),
        }
    }

    /// Applies one event. `Ok(false)` means the event was valid but changed
    /// nothing; errors leave the widget exactly as it was.
    pub fn handle(&mut self, event: GalleryEvent) -> Result<bool, GalleryError> {
        match event {
            GalleryEvent::Next => Ok(self.carousel.advance()),
            GalleryEvent::Previous => Ok(self.carousel.retreat()),
            GalleryEvent::JumpTo(position) => self.carousel.jump_to(position),
            GalleryEvent::JumpToPage(page) => self.carousel.jump_to_page(page),
            GalleryEvent::Resize(width) => Ok(self.carousel.on_resize(width)),
            GalleryEvent::Tick => self.carousel.tick(),
            GalleryEvent::PointerEnter => Ok(self.pause_if(PauseSource::Hover)),
            GalleryEvent::PointerLeave => Ok(self.carousel.release_pause(PauseSource::Hover)),
            GalleryEvent::Select(position) => self.open(position),
            GalleryEvent::LightboxClick(click) => {
                if click.dismisses() {
                    Ok(self.close())
                } else {
                    Ok(false)
                }
            }
            GalleryEvent::Key(GalleryKey::Escape) => Ok(self.close()),
            GalleryEvent::Key(GalleryKey::Left) => Ok(self.carousel.retreat()),
            GalleryEvent::Key(GalleryKey::Right) => Ok(self.carousel.advance()),
            GalleryEvent::Teardown => {
                self.carousel.teardown();
                Ok(true)
            }
        }
    }

    pub fn open(&mut self, position: usize) -> Result<bool, GalleryError> {
        let before = self.lightbox.open_position();
        self.lightbox.open(&self.catalog, position)?;
        let paused = self.pause_if(PauseSource::Lightbox);
        Ok(paused || before != Some(position))
    }

    /// Hides the overlay and withdraws its pause request. A hover pause
    /// stays in effect until the pointer leaves.
    pub fn close(&mut self) -> bool {
        let was_open = self.lightbox.close();
        let resumed = self.carousel.release_pause(PauseSource::Lightbox);
        was_open || resumed
    }

    fn pause_if(&mut self, source: PauseSource) -> bool {
        let wanted = match (self.config.autoplay, source) {
            (Some(autoplay), PauseSource::Hover) => autoplay.pause_on_hover,
            (Some(autoplay), PauseSource::Lightbox) => autoplay.pause_on_lightbox,
            (None, _) => false,
        };
        wanted && self.carousel.request_pause(source)
    }
}

impl Reducible for GalleryWidget {
    type Action = GalleryEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.handle(action) {
            Ok(true) => Rc::new(next),
            Ok(false) => self,
            Err(GalleryError::TornDown) => {
                debug!("dropping {:?} after gallery teardown", action);
                self
            }
            Err(err) => {
                warn!("gallery rejected {:?}: {}", action, err);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn catalog(n: usize) -> Catalog {
        (0..n)
            .map(|i| GalleryItem::new(format!("/assets/galeria/{i}.jpg"), format!("Foto {i}")))
            .collect()
    }

    fn slideshow(n: usize) -> GalleryWidget {
        GalleryWidget::new(catalog(n), config::structure_slideshow(), 1280.0)
    }

    #[test]
    fn opening_lightbox_pauses_autoplay() {
        let mut g = slideshow(5);
        g.handle(GalleryEvent::Tick).unwrap();
        assert_eq!(g.state().index, 1);

        assert_eq!(g.handle(GalleryEvent::Select(2)), Ok(true));
        assert!(g.state().is_paused);
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(false));
        assert_eq!(g.state().index, 1);

        g.handle(GalleryEvent::LightboxClick(LightboxClick::CloseButton))
            .unwrap();
        assert!(!g.state().is_paused);
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(true));
        assert_eq!(g.state().index, 2);
    }

    #[test]
    fn image_click_keeps_overlay_backdrop_closes_it() {
        let mut g = slideshow(3);
        g.handle(GalleryEvent::Select(1)).unwrap();
        assert_eq!(
            g.handle(GalleryEvent::LightboxClick(LightboxClick::Image)),
            Ok(false)
        );
        assert_eq!(g.open_item().map(|item| item.caption.as_str()), Some("Foto 1"));
        g.handle(GalleryEvent::LightboxClick(LightboxClick::Backdrop))
            .unwrap();
        assert!(g.open_item().is_none());
    }

    #[test]
    fn hover_keeps_pause_after_lightbox_closes() {
        let mut g = slideshow(4);
        g.handle(GalleryEvent::PointerEnter).unwrap();
        g.handle(GalleryEvent::Select(0)).unwrap();
        g.handle(GalleryEvent::Key(GalleryKey::Escape)).unwrap();
        assert!(g.state().is_paused);
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(false));
        g.handle(GalleryEvent::PointerLeave).unwrap();
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(true));
    }

    #[test]
    fn hover_is_ignored_when_not_configured() {
        let mut config = config::structure_slideshow();
        config.autoplay = Some(AutoplayConfig {
            pause_on_hover: false,
            ..AutoplayConfig::default()
        });
        let mut g = GalleryWidget::new(catalog(4), config, 1280.0);
        assert_eq!(g.handle(GalleryEvent::PointerEnter), Ok(false));
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(true));
    }

    #[test]
    fn manual_gallery_never_pauses() {
        let mut g = GalleryWidget::new(catalog(6), config::units_gallery(), 1280.0);
        g.handle(GalleryEvent::Select(4)).unwrap();
        assert!(!g.state().is_paused);
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(false));
        assert_eq!(g.state().index, 0);
    }

    #[test]
    fn switching_images_leaves_only_the_last_open() {
        let mut g = slideshow(5);
        g.handle(GalleryEvent::Select(1)).unwrap();
        g.handle(GalleryEvent::Select(3)).unwrap();
        assert_eq!(g.lightbox().open_position(), Some(3));
        assert_eq!(g.handle(GalleryEvent::Select(3)), Ok(false));
    }

    #[test]
    fn invalid_jump_is_observable_and_harmless() {
        let mut g = slideshow(5);
        let before = g.clone();
        assert_eq!(
            g.handle(GalleryEvent::JumpTo(7)),
            Err(GalleryError::InvalidIndex { index: 7, len: 5 })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn empty_gallery_degrades_to_noops() {
        let mut g = slideshow(0);
        assert_eq!(g.handle(GalleryEvent::Next), Ok(false));
        assert_eq!(g.handle(GalleryEvent::Previous), Ok(false));
        assert_eq!(g.handle(GalleryEvent::Tick), Ok(false));
        assert_eq!(g.handle(GalleryEvent::Select(0)), Err(GalleryError::EmptyCatalog));
        assert!(g.visible_items().is_empty());
        assert!(!g.state().is_paused);
    }

    #[test]
    fn visible_items_follow_the_offset() {
        let mut g = GalleryWidget::new(catalog(6), config::units_gallery(), 1280.0);
        g.handle(GalleryEvent::Next).unwrap();
        let positions: Vec<usize> = g.visible_items().iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![3, 4, 5]);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut g = slideshow(3);
        g.handle(GalleryEvent::Key(GalleryKey::Left)).unwrap();
        assert_eq!(g.state().index, 2);
        g.handle(GalleryEvent::Key(GalleryKey::Right)).unwrap();
        assert_eq!(g.state().index, 0);
        assert_eq!(GalleryKey::from_key("Enter"), None);
    }

    #[test]
    fn focused_gallery_leaves_escape_to_the_window() {
        assert!(GalleryKey::Left.is_navigation());
        assert!(GalleryKey::Right.is_navigation());
        assert!(!GalleryKey::Escape.is_navigation());

        // A single Escape closes the overlay; a repeat has nothing to do.
        let mut g = slideshow(3);
        g.handle(GalleryEvent::Select(1)).unwrap();
        assert_eq!(g.handle(GalleryEvent::Key(GalleryKey::Escape)), Ok(true));
        assert_eq!(g.handle(GalleryEvent::Key(GalleryKey::Escape)), Ok(false));
    }

    #[test]
    fn dots_follow_the_policy() {
        let mut slides = slideshow(5);
        assert_eq!(slides.dot_event(3), GalleryEvent::JumpTo(3));
        assert_eq!(slides.handle(slides.dot_event(3)), Ok(true));
        assert_eq!(slides.state().index, 3);

        let mut units = GalleryWidget::new(catalog(7), config::units_gallery(), 1280.0);
        assert_eq!(units.dot_event(2), GalleryEvent::JumpToPage(2));
        assert_eq!(units.handle(units.dot_event(2)), Ok(true));
        assert_eq!(units.state().index, 4);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let g = Rc::new(slideshow(3));
        let after = g.clone().reduce(GalleryEvent::JumpTo(9));
        assert!(Rc::ptr_eq(&g, &after));
        let moved = g.clone().reduce(GalleryEvent::Next);
        assert_eq!(moved.state().index, 1);
    }

    #[test]
    fn reducer_ignores_ticks_after_teardown() {
        let g = Rc::new(slideshow(3)).reduce(GalleryEvent::Teardown);
        let after = g.clone().reduce(GalleryEvent::Tick);
        assert!(Rc::ptr_eq(&g, &after));
        assert_eq!(after.state().index, 0);
    }
}
