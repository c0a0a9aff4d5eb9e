//! Event listeners.

use std::path::PathBuf;

use crate::{BandId, Orientation};

/// Identifies a registered listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener<E> {
    id: ListenerId,
    once: bool,
    f: Box<dyn FnMut(&E)>,
}

/// Stores listeners and calls them in registration order.
pub struct Emitter<E> {
    listeners: Vec<Listener<E>>,
    next_id: u64,
}

impl<E> Emitter<E> {
    /// Creates an emitter without listeners.
    pub fn new() -> Emitter<E> {
        Emitter {listeners: vec![], next_id: 0}
    }

    fn push(&mut self, once: bool, f: Box<dyn FnMut(&E)>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {id, once, f});
        id
    }

    /// Registers a listener.
    pub fn on(&mut self, f: impl FnMut(&E) + 'static) -> ListenerId {
        self.push(false, Box::new(f))
    }

    /// Registers a listener that is removed after its first call.
    pub fn once(&mut self, f: impl FnMut(&E) + 'static) -> ListenerId {
        self.push(true, Box::new(f))
    }

    /// Removes a listener, returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let n = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != n
    }

    /// Removes all listeners.
    pub fn remove_all_listeners(&mut self) {self.listeners.clear()}

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {self.listeners.len()}

    /// Calls every listener with the event.
    pub fn emit(&mut self, event: &E) {
        for l in &mut self.listeners {(l.f)(event)}
        self.listeners.retain(|l| !l.once);
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Emitter<E> {Emitter::new()}
}

/// Changes reported by [`crate::FlagGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub enum FlagEvent {
    /// A band was appended.
    BandAdded(BandId),
    /// The color or weight of a band changed.
    BandChanged(BandId),
    /// A band was removed.
    BandRemoved(BandId),
    /// The stripes changed direction.
    OrientationChanged(Orientation),
    /// The canvas got new dimensions.
    Resized {
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },
    /// The canvas was drawn.
    Redrawn,
    /// The canvas was exported.
    Saved(PathBuf),
}
