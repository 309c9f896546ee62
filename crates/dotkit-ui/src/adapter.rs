//! Content adapters.
//!
//! Host views delegate their item count to an [`Adapter`]. A view with no
//! adapter installed reports zero items.

/// Supplies the number of pages/items a view can show.
pub trait Adapter {
    /// Number of items currently available.
    fn item_count(&self) -> usize;
}

/// Adapter over an owned list of items.
pub struct VecAdapter<T> {
    items: Vec<T>,
}

impl<T> VecAdapter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Adapter for VecAdapter<T> {
    fn item_count(&self) -> usize {
        self.items.len()
    }
}
