use std::rc::Weak;

use crate::components::path::LatLng;

/// Payload of the bubbling press event: which overlay was pressed, and
/// where the engine resolved the touch.
#[derive(Clone, Debug, PartialEq)]
pub struct PressEvent {
    pub identifier: String,
    pub point: LatLng,
}

/// Receives events bubbled out of overlay bindings. Delivery is
/// fire-and-forget; the sink never acknowledges.
pub trait EventSink {
    fn emit(&self, event: PressEvent);
}

/// Non-owning sink reference held by each binding. The binding's lifetime
/// never depends on the sink's; emission is skipped once the sink is gone.
pub type EventSinkRef = Weak<dyn EventSink>;
