//! ItemListView: a horizontally scrolling item strip.
//!
//! The list has no discrete page concept. Consumers that need one (the
//! dots indicator does) derive it from [`ListGeometry::nearest_to_center`]
//! whenever the scroll state changes. Scroll-state callbacks fire only on
//! state transitions, never per scrolled pixel.

use std::cell::RefCell;
use std::rc::Rc;

use crate::adapter::Adapter;
use crate::listeners::{ListenerId, ListenerSet};

/// Scroll activity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    /// Nothing in flight.
    Idle,
    /// The user is actively dragging.
    Dragging,
    /// The drag was released and the fling is decaying.
    Settling,
}

/// Geometry snapshot handed to scroll-state callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGeometry {
    /// Number of items in the strip.
    pub item_count: usize,
    /// Length of one item along the scroll axis, in pixels.
    pub item_extent: u32,
    /// Visible length of the viewport along the scroll axis, in pixels.
    pub viewport_extent: u32,
    /// Content-space position of the viewport's leading edge.
    pub scroll_offset: i32,
}

impl ListGeometry {
    /// Index of the item covering the viewport's center point.
    ///
    /// Items span half-open ranges `[i * extent, (i + 1) * extent)`, and
    /// over-scrolled centers clamp to the first or last item. Returns
    /// `None` when the list is empty or either extent is zero.
    pub fn nearest_to_center(&self) -> Option<usize> {
        if self.item_count == 0 || self.item_extent == 0 || self.viewport_extent == 0 {
            return None;
        }
        let center = self.scroll_offset + self.viewport_extent as i32 / 2;
        let index = center.div_euclid(self.item_extent as i32);
        Some(index.clamp(0, self.item_count as i32 - 1) as usize)
    }
}

/// Callback fired when the scroll state changes.
pub type ScrollCallback = Box<dyn FnMut(ListGeometry, ScrollState)>;

/// A scrollable strip of equally sized items.
pub struct ItemListView {
    adapter: Option<Box<dyn Adapter>>,
    item_extent: u32,
    viewport_extent: u32,
    scroll_offset: i32,
    state: ScrollState,
    listeners: Rc<RefCell<ListenerSet<ScrollCallback>>>,
}

impl ItemListView {
    /// Create a list with the given item and viewport extents.
    pub fn new(item_extent: u32, viewport_extent: u32) -> Self {
        Self {
            adapter: None,
            item_extent: item_extent.max(1),
            viewport_extent,
            scroll_offset: 0,
            state: ScrollState::Idle,
            listeners: Rc::new(RefCell::new(ListenerSet::new())),
        }
    }

    /// Install or remove the content adapter.
    pub fn set_adapter(&mut self, adapter: Option<Box<dyn Adapter>>) {
        self.adapter = adapter;
        self.scroll_offset = 0;
    }

    /// Number of items. Zero when no adapter is installed.
    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.item_count())
    }

    /// Current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    /// Snapshot of the current layout.
    pub fn geometry(&self) -> ListGeometry {
        ListGeometry {
            item_count: self.item_count(),
            item_extent: self.item_extent,
            viewport_extent: self.viewport_extent,
            scroll_offset: self.scroll_offset,
        }
    }

    /// Total content length along the scroll axis.
    pub fn content_extent(&self) -> u32 {
        self.item_count() as u32 * self.item_extent
    }

    /// Scroll by a delta, clamped to the content range. Scrolling alone
    /// never fires callbacks; only state transitions do.
    pub fn scroll_by(&mut self, delta: i32) {
        let max_scroll = (self.content_extent() as i32 - self.viewport_extent as i32).max(0);
        self.scroll_offset = (self.scroll_offset + delta).clamp(0, max_scroll);
    }

    /// Begin a user drag.
    pub fn begin_drag(&mut self) {
        self.set_state(ScrollState::Dragging);
    }

    /// Release the drag; the fling starts decaying.
    pub fn end_drag(&mut self) {
        self.set_state(ScrollState::Settling);
    }

    /// Complete the fling and come to rest.
    pub fn settle(&mut self) {
        self.set_state(ScrollState::Idle);
    }

    /// Register a scroll-state callback. Returns the id to remove it with.
    pub fn add_scroll_listener(
        &mut self,
        callback: impl FnMut(ListGeometry, ScrollState) + 'static,
    ) -> ListenerId {
        self.listeners.borrow_mut().add(Box::new(callback))
    }

    /// Remove a scroll-state callback. Returns `false` for unknown ids.
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }

    pub(crate) fn listeners(&self) -> &Rc<RefCell<ListenerSet<ScrollCallback>>> {
        &self.listeners
    }

    fn set_state(&mut self, state: ScrollState) {
        if state == self.state {
            return;
        }
        self.state = state;
        let geometry = self.geometry();
        // Loan the callbacks out of the cell so one of them can
        // unregister (or detach an attachment) without re-borrowing.
        let mut dispatch = self.listeners.borrow_mut().begin_dispatch();
        for (_, callback) in &mut dispatch {
            callback(geometry, state);
        }
        self.listeners.borrow_mut().end_dispatch(dispatch);
    }
}
