//! View notifications and listener registry.

use std::fmt;

/// Notification emitted by a [`HexView`](crate::HexView).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Caret or selection moved because of pointer input.
    SelectionChanged { has_selection: bool },
    /// A new buffer was installed (or the old one removed).
    BufferChanged { len: Option<usize> },
}

type Listener = Box<dyn FnMut(&ViewEvent) + 'static>;

/// Ordered list of listeners invoked synchronously on emit.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<Listener>,
}

impl EventEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; listeners run in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &ViewEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
