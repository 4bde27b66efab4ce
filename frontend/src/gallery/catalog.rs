use std::rc::Rc;

use super::error::GalleryError;

/// One image of the gallery together with the caption shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub image_ref: String,
    pub caption: String,
}

impl GalleryItem {
    pub fn new(image_ref: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            caption: caption.into(),
        }
    }
}

/// Ordered, read-only list of gallery items owned by the embedding page.
///
/// Cloning is cheap: every clone shares the same backing slice, so the
/// widget can hold the catalog without copying the page's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Rc<[GalleryItem]>,
}

impl Catalog {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items: items.into() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&GalleryItem> {
        self.items.get(position)
    }

    /// Checks that `position` names an existing item.
    pub fn check_position(&self, position: usize) -> Result<(), GalleryError> {
        if self.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        if position >= self.len() {
            return Err(GalleryError::InvalidIndex {
                index: position,
                len: self.len(),
            });
        }
        Ok(())
    }
}

impl FromIterator<GalleryItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = GalleryItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Catalog {
        (0..n)
            .map(|i| GalleryItem::new(format!("/assets/unidade-{i}.jpg"), format!("Unidade {i}")))
            .collect()
    }

    #[test]
    fn clones_share_items() {
        let a = catalog(3);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.get(2).map(|item| item.caption.as_str()), Some("Unidade 2"));
    }

    #[test]
    fn check_position_reports_out_of_range() {
        let c = catalog(5);
        assert_eq!(c.check_position(4), Ok(()));
        assert_eq!(
            c.check_position(7),
            Err(GalleryError::InvalidIndex { index: 7, len: 5 })
        );
    }

    #[test]
    fn check_position_on_empty_catalog() {
        assert_eq!(catalog(0).check_position(0), Err(GalleryError::EmptyCatalog));
    }
}
