//! Host lifecycle events
//!
//! The host integration layer publishes two events the filter cares about:
//! - `Ready`: the motion pipeline is assembled and the exclusion adapter may
//!   install itself into the transform chain (it must be the last transform
//!   installed so it observes moves first).
//! - `FileReset`: a new job/file was loaded; known objects and exclusions are
//!   cleared together.
//!
//! Dispatch is synchronous: handlers run to completion on the publishing
//! context, in registration order. The motion pipeline has no suspension
//! points, so there is no channel or task machinery here.

use std::fmt;

/// Host lifecycle event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The host finished startup; transforms may be installed
    Ready,
    /// A job/file reset occurred
    FileReset,
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Ready => write!(f, "ready"),
            HostEvent::FileReset => write!(f, "file_reset"),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(HostEvent) + Send>;

/// Synchronous dispatcher for host lifecycle events
///
/// Handlers are invoked in registration order, on the caller's context.
#[derive(Default)]
pub struct HostEventDispatcher {
    handlers: Vec<(HostEvent, EventHandler)>,
}

impl HostEventDispatcher {
    /// Create a dispatcher with no registered handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a specific event
    pub fn subscribe<F>(&mut self, event: HostEvent, handler: F)
    where
        F: Fn(HostEvent) + Send + 'static,
    {
        self.handlers.push((event, Box::new(handler)));
    }

    /// Publish an event to every handler registered for it
    pub fn publish(&self, event: HostEvent) {
        tracing::debug!(event = %event, "publishing host event");
        for (registered, handler) in &self.handlers {
            if *registered == event {
                handler(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_publish_reaches_matching_handlers_only() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = HostEventDispatcher::new();

        let counter = Arc::clone(&hits);
        dispatcher.subscribe(HostEvent::FileReset, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.publish(HostEvent::Ready);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        dispatcher.publish(HostEvent::FileReset);
        dispatcher.publish(HostEvent::FileReset);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
