//! Slotted listener registries shared by the host views.
//!
//! Each view keeps its listeners in a [`ListenerSet`] behind
//! `Rc<RefCell<..>>` so detach handles can reach the registry after the
//! view has been borrowed away or moved. Ids are monotonic and never
//! reused within one set. Event dispatch loans the entries out of the
//! cell first ([`ListenerSet::begin_dispatch`]), so a callback may
//! unregister any listener, its own registration included, without
//! re-borrowing the cell mid-event.

use std::mem;

/// Identifier for a registered listener within one [`ListenerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered collection of listeners with stable removal ids.
pub struct ListenerSet<T> {
    next_id: u64,
    entries: Vec<(ListenerId, T)>,
    /// Nesting depth of in-flight dispatches.
    dispatch_depth: usize,
    /// Ids currently loaned out to a dispatch.
    in_flight: Vec<ListenerId>,
    /// Removals queued while their entry is loaned out.
    removed: Vec<ListenerId>,
}

impl<T> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            dispatch_depth: 0,
            in_flight: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Register a listener and return its removal id. A listener added
    /// during a dispatch joins after the in-flight event.
    pub fn add(&mut self, listener: T) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener, returning it if the id was present.
    ///
    /// During a dispatch the entry may be loaned out to the dispatch
    /// loop. The removal is then queued for the merge and `None` comes
    /// back; the listener itself is dropped when the dispatch ends.
    pub fn remove(&mut self, id: ListenerId) -> Option<T> {
        if let Some(index) = self.entries.iter().position(|(i, _)| *i == id) {
            return Some(self.entries.remove(index).1);
        }
        if self.in_flight.contains(&id) && !self.removed.contains(&id) {
            self.removed.push(id);
        }
        None
    }

    /// Whether a listener with this id is still registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(i, _)| *i == id)
            || (self.in_flight.contains(&id) && !self.removed.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate listeners in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, l)| l)
    }

    /// Loan the entries out for an event dispatch.
    ///
    /// The caller invokes the listeners with no borrow held on the set,
    /// then hands them back through [`ListenerSet::end_dispatch`]. While
    /// they are out, removals of loaned ids are queued rather than
    /// applied, taking effect at the merge.
    pub fn begin_dispatch(&mut self) -> Vec<(ListenerId, T)> {
        self.dispatch_depth += 1;
        let loaned = mem::take(&mut self.entries);
        self.in_flight.extend(loaned.iter().map(|(id, _)| *id));
        loaned
    }

    /// Merge loaned entries back, dropping any removed in the meantime.
    pub fn end_dispatch(&mut self, mut loaned: Vec<(ListenerId, T)>) {
        loaned.retain(|(id, _)| !self.removed.contains(id));
        // Listeners added during the dispatch keep their later order.
        let added = mem::take(&mut self.entries);
        self.entries = loaned;
        self.entries.extend(added);
        self.dispatch_depth = self.dispatch_depth.saturating_sub(1);
        if self.dispatch_depth == 0 {
            self.in_flight.clear();
            self.removed.clear();
        }
    }
}

impl<T> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
