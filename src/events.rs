//! Change events emitted after committed viewport mutations.
//!
//! The map invokes every registered handler synchronously, on the caller's
//! thread, right after a mutation commits. Handlers observe state that is
//! already valid; they must not mutate the map re-entrantly.

use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;
use crate::core::projection::{ProjectedPoint, ProjectedRect};
use crate::core::viewport::ScreenSize;

/// Events describing committed changes to the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The map center moved
    CenterChanged {
        coordinate: LatLng,
        projected: ProjectedPoint,
    },
    /// The zoom level changed
    ZoomChanged { zoom: f64 },
    /// The visible projected rectangle changed (follows any center, zoom, or
    /// size change)
    BoundsChanged { bounds: ProjectedRect },
    /// The view was resized
    SizeChanged { size: ScreenSize },
}

/// Identifies a registered handler so it can be removed later
pub type HandlerId = usize;

type Handler = Box<dyn FnMut(&MapEvent) + Send>;

/// Keeps the registered event handlers and dispatches events to them in
/// registration order
#[derive(Default)]
pub struct EventManager {
    handlers: Vec<(HandlerId, Handler)>,
    next_id: HandlerId,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and returns its id
    pub fn subscribe<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&MapEvent) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns whether the id was registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Invokes every handler with the event, synchronously
    pub fn emit(&mut self, event: &MapEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
