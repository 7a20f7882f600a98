/// Fetch-then-render state of a view-owned resource.
///
/// `Empty` is a successful response with nothing to show, kept apart from
/// `Failed` so the view can say "No Data" instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Wrap a collection response; an empty collection becomes `Empty`.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() { Self::Empty } else { Self::Loaded(items) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_are_not_loaded() {
        assert_eq!(LoadState::<Vec<u8>>::from_items(vec![]), LoadState::Empty);
        assert_eq!(LoadState::from_items(vec![1u8]).loaded(), Some(&vec![1u8]));
    }

    #[test]
    fn default_is_loading() {
        let state: LoadState<()> = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }
}
