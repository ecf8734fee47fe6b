//! Declarative-to-imperative binding for polyline map overlays: each
//! [`PolylineOverlay`] holds a declarative property set and keeps one live
//! engine object synchronized with it, bubbling press events back to the
//! host.

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod overlays;
pub mod palette;
pub mod surface;

pub use components::paint::StrokePaint;
pub use components::paint::StrokeSpan;
pub use components::path::LatLng;
pub use components::stroke::DashPattern;
pub use components::stroke::StrokeStyle;
pub use config::StyleConfig;
pub use error::BindingError;
pub use events::EventSink;
pub use events::EventSinkRef;
pub use events::PressEvent;
pub use overlays::polyline::PolylineOverlay;
pub use surface::live::LivePolyline;
pub use surface::MapSurface;
pub use surface::SharedSurface;
pub use surface::SurfaceHandle;
