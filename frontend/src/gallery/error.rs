use thiserror::Error;

/// Misuse of the gallery by its caller. None of these are fatal: the widget
/// state is left untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("index {index} is outside the catalog (len {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("the gallery catalog is empty")]
    EmptyCatalog,
    #[error("the gallery has been torn down")]
    TornDown,
}
