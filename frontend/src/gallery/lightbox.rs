use super::catalog::{Catalog, GalleryItem};
use super::error::GalleryError;

/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxClick {
    Image,
    Backdrop,
    CloseButton,
}

impl LightboxClick {
    /// Clicks on the image itself keep the overlay open.
    pub fn dismisses(self) -> bool {
        !matches!(self, LightboxClick::Image)
    }
}

/// Full-size overlay showing at most one catalog image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: Option<usize>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_position(&self) -> Option<usize> {
        self.open
    }

    pub fn open_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a GalleryItem> {
        self.open.and_then(|position| catalog.get(position))
    }

    /// Shows `position`, replacing whatever was open before.
    pub fn open(&mut self, catalog: &Catalog, position: usize) -> Result<(), GalleryError> {
        catalog.check_position(position)?;
        self.open = Some(position);
        Ok(())
    }

    /// Returns whether an image was actually showing.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            GalleryItem::new("/assets/fachada.jpg", "Fachada"),
            GalleryItem::new("/assets/jardim.jpg", "Jardim"),
            GalleryItem::new("/assets/refeitorio.jpg", "Refeitório"),
        ])
    }

    #[test]
    fn last_open_wins() {
        let catalog = catalog();
        let mut lightbox = LightboxState::default();
        lightbox.open(&catalog, 0).unwrap();
        lightbox.open(&catalog, 2).unwrap();
        assert_eq!(lightbox.open_position(), Some(2));
        assert_eq!(
            lightbox.open_item(&catalog).map(|item| item.image_ref.as_str()),
            Some("/assets/refeitorio.jpg")
        );
    }

    #[test]
    fn invalid_position_keeps_previous_image() {
        let catalog = catalog();
        let mut lightbox = LightboxState::default();
        lightbox.open(&catalog, 1).unwrap();
        assert_eq!(
            lightbox.open(&catalog, 9),
            Err(GalleryError::InvalidIndex { index: 9, len: 3 })
        );
        assert_eq!(lightbox.open_position(), Some(1));
    }

    #[test]
    fn empty_catalog_cannot_open() {
        let mut lightbox = LightboxState::default();
        assert_eq!(
            lightbox.open(&Catalog::new(Vec::new()), 0),
            Err(GalleryError::EmptyCatalog)
        );
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_reports_whether_it_was_open() {
        let catalog = catalog();
        let mut lightbox = LightboxState::default();
        assert!(!lightbox.close());
        lightbox.open(&catalog, 1).unwrap();
        assert!(lightbox.close());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn only_image_clicks_keep_it_open() {
        assert!(!LightboxClick::Image.dismisses());
        assert!(LightboxClick::Backdrop.dismisses());
        assert!(LightboxClick::CloseButton.dismisses());
    }
}
