//! PagerView: a discrete paged content host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::adapter::Adapter;
use crate::listeners::{ListenerId, ListenerSet};

/// Callback fired when the selected page changes.
pub type PageCallback = Box<dyn FnMut(usize)>;

/// A paged view showing one whole page at a time.
///
/// The page count comes from the installed [`Adapter`]; with no adapter
/// the view reports zero pages and ignores page changes. Registered
/// callbacks fire only when the selected page actually changes, never
/// when a change request lands on the page already shown.
pub struct PagerView {
    adapter: Option<Box<dyn Adapter>>,
    page: usize,
    callbacks: Rc<RefCell<ListenerSet<PageCallback>>>,
}

impl PagerView {
    /// Create a pager with no adapter installed.
    pub fn new() -> Self {
        Self {
            adapter: None,
            page: 0,
            callbacks: Rc::new(RefCell::new(ListenerSet::new())),
        }
    }

    /// Install or remove the content adapter.
    pub fn set_adapter(&mut self, adapter: Option<Box<dyn Adapter>>) {
        self.adapter = adapter;
        self.page = 0;
    }

    /// Number of pages. Zero when no adapter is installed.
    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.item_count())
    }

    /// Currently selected page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Select a page, clamping past-the-end requests to the last page.
    /// Does nothing when the view has no pages.
    pub fn set_page(&mut self, page: usize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let page = page.min(count - 1);
        if page == self.page {
            return;
        }
        self.page = page;
        self.emit(page);
    }

    /// Switch to the next page (wraps around).
    pub fn next_page(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.set_page((self.page + 1) % count);
    }

    /// Switch to the previous page (wraps around).
    pub fn prev_page(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let target = if self.page == 0 {
            count - 1
        } else {
            self.page - 1
        };
        self.set_page(target);
    }

    /// Register a page-change callback. Returns the id to unregister with.
    pub fn register_page_callback(
        &mut self,
        callback: impl FnMut(usize) + 'static,
    ) -> ListenerId {
        self.callbacks.borrow_mut().add(Box::new(callback))
    }

    /// Unregister a callback. Returns `false` for unknown ids.
    pub fn unregister_page_callback(&mut self, id: ListenerId) -> bool {
        self.callbacks.borrow_mut().remove(id).is_some()
    }

    pub(crate) fn callbacks(&self) -> &Rc<RefCell<ListenerSet<PageCallback>>> {
        &self.callbacks
    }

    fn emit(&mut self, page: usize) {
        // Loan the callbacks out of the cell so one of them can
        // unregister (or detach an attachment) without re-borrowing.
        let mut dispatch = self.callbacks.borrow_mut().begin_dispatch();
        for (_, callback) in &mut dispatch {
            callback(page);
        }
        self.callbacks.borrow_mut().end_dispatch(dispatch);
    }
}

impl Default for PagerView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::VecAdapter;

    fn pager_with_pages(n: usize) -> PagerView {
        let mut pager = PagerView::new();
        pager.set_adapter(Some(Box::new(VecAdapter::new(vec![(); n]))));
        pager
    }

    #[test]
    fn new_has_no_pages() {
        let pager = PagerView::new();
        assert_eq!(pager.item_count(), 0);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn count_tracks_adapter() {
        let pager = pager_with_pages(4);
        assert_eq!(pager.item_count(), 4);
    }

    #[test]
    fn set_page_selects() {
        let mut pager = pager_with_pages(4);
        pager.set_page(2);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn set_page_clamps_to_last() {
        let mut pager = pager_with_pages(3);
        pager.set_page(99);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn set_page_without_adapter_ignored() {
        let mut pager = PagerView::new();
        pager.set_page(1);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn callback_fires_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pager = pager_with_pages(5);
        let sink = Rc::clone(&seen);
        pager.register_page_callback(move |page| sink.borrow_mut().push(page));

        pager.set_page(3);
        pager.set_page(1);
        assert_eq!(*seen.borrow(), vec![3, 1]);
    }

    #[test]
    fn callback_skipped_when_page_unchanged() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pager = pager_with_pages(5);
        let sink = Rc::clone(&seen);
        pager.register_page_callback(move |page| sink.borrow_mut().push(page));

        pager.set_page(2);
        pager.set_page(2);
        // Clamped request landing on the current page is also silent.
        pager.set_page(2);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn callbacks_fire_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pager = pager_with_pages(3);
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        pager.register_page_callback(move |page| first.borrow_mut().push(("first", page)));
        pager.register_page_callback(move |page| second.borrow_mut().push(("second", page)));

        pager.set_page(1);
        assert_eq!(*seen.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn unregister_stops_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pager = pager_with_pages(3);
        let sink = Rc::clone(&seen);
        let id = pager.register_page_callback(move |page| sink.borrow_mut().push(page));

        pager.set_page(1);
        assert!(pager.unregister_page_callback(id));
        pager.set_page(2);
        assert_eq!(*seen.borrow(), vec![1]);
        // A second unregister with the same id is a no-op.
        assert!(!pager.unregister_page_callback(id));
    }

    #[test]
    fn next_page_wraps() {
        let mut pager = pager_with_pages(2);
        pager.next_page();
        assert_eq!(pager.page(), 1);
        pager.next_page();
        assert_eq!(pager.page(), 0); // Wraps (2 pages).
    }

    #[test]
    fn prev_page_wraps() {
        let mut pager = pager_with_pages(3);
        pager.prev_page();
        assert_eq!(pager.page(), 2); // Wraps to last.
    }

    #[test]
    fn next_page_without_pages_no_panic() {
        let mut pager = PagerView::new();
        pager.next_page();
        pager.prev_page();
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn swapping_adapter_resets_page() {
        let mut pager = pager_with_pages(4);
        pager.set_page(3);
        pager.set_adapter(Some(Box::new(VecAdapter::new(vec![(); 2]))));
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.item_count(), 2);
    }
}
