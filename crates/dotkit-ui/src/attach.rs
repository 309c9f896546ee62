//! Attaching the indicator to paged and scrolling sources.
//!
//! [`DotsIndicator::attach`] seeds the dot count from the source's
//! adapter, registers the right flavor of listener, and returns an
//! [`Attachment`] handle. The handle owns the registration: dropping it
//! (or calling [`Attachment::detach`]) removes the listener, after which
//! the source no longer drives the indicator. The handle holds only a
//! weak reference to the source's listener registry, so it may safely
//! outlive the source itself.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::carousel::{CarouselListener, CarouselView};
use crate::dots::DotsIndicator;
use crate::list_view::{ItemListView, ScrollCallback};
use crate::listeners::{ListenerId, ListenerSet};
use crate::pager::{PageCallback, PagerView};

/// A paging or scrolling view the indicator can observe.
///
/// The three host flavors share no common capability surface, so
/// attachment branches on the source shape rather than a trait.
pub enum PagedSource<'a> {
    /// Discrete pager reporting page selection.
    Pager(&'a mut PagerView),
    /// Legacy carousel reporting scroll, selection, and drag state.
    Carousel(&'a mut CarouselView),
    /// Item strip with no page concept; the indicator tracks whichever
    /// item sits nearest the viewport center.
    ItemList(&'a mut ItemListView),
}

enum Binding {
    Pager {
        set: Weak<RefCell<ListenerSet<PageCallback>>>,
        id: ListenerId,
    },
    Carousel {
        set: Weak<RefCell<ListenerSet<Box<dyn CarouselListener>>>>,
        id: ListenerId,
    },
    ItemList {
        set: Weak<RefCell<ListenerSet<ScrollCallback>>>,
        id: ListenerId,
    },
}

/// Handle owning one indicator-to-source registration.
pub struct Attachment {
    binding: Option<Binding>,
}

impl Attachment {
    /// Whether the registration is still live: the source exists and the
    /// listener has not been removed.
    pub fn is_attached(&self) -> bool {
        match &self.binding {
            Some(Binding::Pager { set, id }) => {
                set.upgrade().is_some_and(|s| s.borrow().contains(*id))
            },
            Some(Binding::Carousel { set, id }) => {
                set.upgrade().is_some_and(|s| s.borrow().contains(*id))
            },
            Some(Binding::ItemList { set, id }) => {
                set.upgrade().is_some_and(|s| s.borrow().contains(*id))
            },
            None => false,
        }
    }

    /// Remove the listener from the source. Equivalent to dropping the
    /// handle, but explicit at the call site.
    ///
    /// Safe to call from inside one of the source's own callbacks; the
    /// removal then lands when the in-flight event finishes.
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(binding) = self.binding.take() else {
            return;
        };
        match binding {
            Binding::Pager { set, id } => {
                if let Some(set) = set.upgrade() {
                    set.borrow_mut().remove(id);
                }
            },
            Binding::Carousel { set, id } => {
                if let Some(set) = set.upgrade() {
                    set.borrow_mut().remove(id);
                }
            },
            Binding::ItemList { set, id } => {
                if let Some(set) = set.upgrade() {
                    set.borrow_mut().remove(id);
                }
            },
        }
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.release();
    }
}

/// Carousel listener that forwards page selection to an indicator.
struct PageFollower {
    indicator: Rc<RefCell<DotsIndicator>>,
}

impl CarouselListener for PageFollower {
    fn on_page_selected(&mut self, page: usize) {
        self.indicator.borrow_mut().set_current_index(page);
    }
}

impl DotsIndicator {
    /// Attach the indicator to a source view.
    ///
    /// The dot count is seeded once from the source's current item count
    /// (zero when no adapter is installed; the source does not push later
    /// adapter swaps). From then on the source drives the selection until
    /// the returned [`Attachment`] is detached or dropped.
    pub fn attach(indicator: &Rc<RefCell<DotsIndicator>>, source: PagedSource<'_>) -> Attachment {
        let binding = match source {
            PagedSource::Pager(pager) => {
                indicator.borrow_mut().set_dot_count(pager.item_count());
                let follower = Rc::clone(indicator);
                let id = pager.register_page_callback(move |page| {
                    follower.borrow_mut().set_current_index(page);
                });
                log::debug!("Indicator attached to pager with {} pages", pager.item_count());
                Binding::Pager {
                    set: Rc::downgrade(pager.callbacks()),
                    id,
                }
            },
            PagedSource::Carousel(carousel) => {
                indicator.borrow_mut().set_dot_count(carousel.item_count());
                let id = carousel.add_listener(Box::new(PageFollower {
                    indicator: Rc::clone(indicator),
                }));
                log::debug!(
                    "Indicator attached to carousel with {} pages",
                    carousel.item_count()
                );
                Binding::Carousel {
                    set: Rc::downgrade(carousel.listeners()),
                    id,
                }
            },
            PagedSource::ItemList(list) => {
                indicator.borrow_mut().set_dot_count(list.item_count());
                let follower = Rc::clone(indicator);
                let id = list.add_scroll_listener(move |geometry, _state| {
                    if let Some(index) = geometry.nearest_to_center() {
                        follower.borrow_mut().set_current_index(index);
                    }
                });
                log::debug!(
                    "Indicator attached to item list with {} items",
                    list.item_count()
                );
                Binding::ItemList {
                    set: Rc::downgrade(list.listeners()),
                    id,
                }
            },
        };
        Attachment {
            binding: Some(binding),
        }
    }
}
