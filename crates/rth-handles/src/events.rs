//! Listener registries
//!
//! Each emitter owns an [`EventRegistry`]. Subscribing returns a
//! [`ListenerId`] that unsubscribes exactly that listener. Registries are
//! cleared when their owner is destroyed, so listeners never outlive it.

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Handle returned by [`EventRegistry::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered set of callbacks for events of type `E`
pub struct EventRegistry<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Default for EventRegistry<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for EventRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> EventRegistry<E> {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it runs for every emitted event until removed
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener in subscription order
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if nothing is subscribed
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
