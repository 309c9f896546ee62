//! CarouselView: a legacy paged host with a three-hook listener surface.
//!
//! Unlike [`crate::pager::PagerView`], which reports only page selection,
//! the carousel keeps a continuous scroll position and reports the whole
//! transition: per-frame scroll progress, drag lifecycle, and the final
//! page selection. Listeners implement [`CarouselListener`] and override
//! only the hooks they care about.

use std::cell::RefCell;
use std::rc::Rc;

use crate::adapter::Adapter;
use crate::listeners::{ListenerId, ListenerSet};

/// Drag lifecycle reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// Nothing in flight.
    Idle,
    /// The user is actively dragging.
    Dragging,
    /// The drag was released and the view is snapping to a page.
    Settling,
}

/// Listener over carousel transitions. Every hook has a default no-op
/// body, so implementors override only what they need.
pub trait CarouselListener {
    /// Scroll progress. `offset` is the fraction in `[0, 1)` scrolled
    /// past `page` toward `page + 1`.
    fn on_scrolled(&mut self, page: usize, offset: f32) {
        let _ = (page, offset);
    }

    /// A new page became the selected page.
    fn on_page_selected(&mut self, page: usize) {
        let _ = page;
    }

    /// The drag state changed.
    fn on_drag_state(&mut self, state: DragState) {
        let _ = state;
    }
}

/// A paged view with drag-driven transitions.
pub struct CarouselView {
    adapter: Option<Box<dyn Adapter>>,
    page: usize,
    /// Continuous page position; `1.25` means a quarter past page 1.
    position: f32,
    state: DragState,
    listeners: Rc<RefCell<ListenerSet<Box<dyn CarouselListener>>>>,
}

impl CarouselView {
    /// Create a carousel with no adapter installed.
    pub fn new() -> Self {
        Self {
            adapter: None,
            page: 0,
            position: 0.0,
            state: DragState::Idle,
            listeners: Rc::new(RefCell::new(ListenerSet::new())),
        }
    }

    /// Install or remove the content adapter.
    pub fn set_adapter(&mut self, adapter: Option<Box<dyn Adapter>>) {
        self.adapter = adapter;
        self.page = 0;
        self.position = 0.0;
    }

    /// Number of pages. Zero when no adapter is installed.
    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.item_count())
    }

    /// Currently selected page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.state
    }

    /// Register a listener. Returns the id to remove it with.
    pub fn add_listener(&mut self, listener: Box<dyn CarouselListener>) -> ListenerId {
        self.listeners.borrow_mut().add(listener)
    }

    /// Remove a listener, returning ownership if the id was present.
    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn CarouselListener>> {
        self.listeners.borrow_mut().remove(id)
    }

    /// Jump directly to a page without a drag transition. Out-of-range
    /// requests clamp to the last page; no-change requests are silent.
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
        self.position = page as f32;
        self.emit(|l| l.on_page_selected(page));
    }

    /// Begin a user drag.
    pub fn begin_drag(&mut self) {
        self.set_state(DragState::Dragging);
    }

    /// Move the drag by a page-fraction delta. Position stays clamped to
    /// the content range; listeners see the progress as page + offset.
    pub fn drag_by(&mut self, delta: f32) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let max = (count - 1) as f32;
        self.position = (self.position + delta).clamp(0.0, max);
        let page = self.position.floor() as usize;
        let offset = self.position.fract();
        self.emit(|l| l.on_scrolled(page, offset));
    }

    /// Release the drag. The view settles on the nearest page, reporting
    /// the selection (if it changed) between the settling and idle states.
    pub fn end_drag(&mut self) {
        self.set_state(DragState::Settling);
        let count = self.item_count();
        if count > 0 {
            let target = (self.position.round() as usize).min(count - 1);
            self.position = target as f32;
            if target != self.page {
                self.page = target;
                self.emit(|l| l.on_page_selected(target));
            }
        }
        self.set_state(DragState::Idle);
    }

    fn set_state(&mut self, state: DragState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.emit(|l| l.on_drag_state(state));
    }

    fn emit(&mut self, mut hook: impl FnMut(&mut dyn CarouselListener)) {
        // Loan the listeners out of the cell so one of them can
        // unregister (or detach an attachment) without re-borrowing.
        let mut dispatch = self.listeners.borrow_mut().begin_dispatch();
        for (_, listener) in &mut dispatch {
            hook(listener.as_mut());
        }
        self.listeners.borrow_mut().end_dispatch(dispatch);
    }

    pub(crate) fn listeners(&self) -> &Rc<RefCell<ListenerSet<Box<dyn CarouselListener>>>> {
        &self.listeners
    }
}

impl Default for CarouselView {
    fn default() -> Self {
        Self::new()
    }
}
