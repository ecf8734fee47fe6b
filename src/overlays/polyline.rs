use std::cell::RefCell;
use std::rc::Rc;

use crate::components::paint::StrokePaint;
use crate::components::path::LatLng;
use crate::components::stroke::DashPattern;
use crate::components::stroke::StrokeStyle;
use crate::config::StyleConfig;
use crate::error::BindingError;
use crate::events::EventSinkRef;
use crate::events::PressEvent;
use crate::surface::live::LivePolyline;
use crate::surface::SharedSurface;
use crate::surface::SurfaceHandle;

/// Declarative-to-imperative binding for one polyline overlay.
///
/// Holds the declarative property set delivered by the host and keeps the
/// live engine object in sync with it; one instance per declared polyline
/// in the view tree. Every setter is independently idempotent, so the host
/// may deliver property diffs in any order.
pub struct PolylineOverlay {
    identifier: String,
    coordinates: Vec<LatLng>,
    style: StrokeStyle,
    geodesic: bool,
    title: Option<String>,
    z_index: i32,
    tappable: bool,
    defaults: StyleConfig,
    sink: EventSinkRef,
    live: Option<Rc<RefCell<LivePolyline>>>,
    attached: Option<SharedSurface>,
    destroyed: bool,
}

impl PolylineOverlay {
    pub fn new(identifier: impl Into<String>, sink: EventSinkRef) -> Self {
        Self::with_config(identifier, sink, StyleConfig::default())
    }

    pub fn with_config(
        identifier: impl Into<String>,
        sink: EventSinkRef,
        config: StyleConfig,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            coordinates: Vec::new(),
            style: StrokeStyle::from_config(&config),
            geodesic: false,
            title: None,
            z_index: 0,
            tappable: false,
            defaults: config,
            sink,
            live: None,
            attached: None,
            destroyed: false,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn coordinates(&self) -> &[LatLng] {
        &self.coordinates
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The live engine object, if it has been created. Read-only outside
    /// the crate; only this binding mutates it.
    pub fn live(&self) -> Option<&Rc<RefCell<LivePolyline>>> {
        self.live.as_ref()
    }

    /// Attaches the overlay to a map surface, creating the live object on
    /// first use. Re-attaching to the same surface is a no-op; attaching to
    /// a different surface detaches from the old one first, so the overlay
    /// is never rendered on two maps at once. A dangling handle fails with
    /// `InvalidSurface` and changes no state.
    pub fn attach(&mut self, surface: &SurfaceHandle) -> Result<(), BindingError> {
        self.ensure_active()?;
        let surface = surface.upgrade().ok_or(BindingError::InvalidSurface)?;
        if let Some(current) = &self.attached {
            if Rc::ptr_eq(current, &surface) {
                return Ok(());
            }
        }
        let live = self.ensure_live();
        if let Some(previous) = self.attached.take() {
            previous.borrow_mut().remove_overlay(&live);
        }
        surface.borrow_mut().add_overlay(&live);
        self.attached = Some(surface);
        log::debug!("polyline {:?} attached", self.identifier);
        Ok(())
    }

    /// Removes the overlay from its surface. The live object keeps its
    /// style and path, so a later re-attach needs no recomputation. Safe to
    /// call when already detached.
    pub fn detach(&mut self) -> Result<(), BindingError> {
        self.ensure_active()?;
        if let Some(surface) = self.attached.take() {
            if let Some(live) = &self.live {
                surface.borrow_mut().remove_overlay(live);
            }
            log::debug!("polyline {:?} detached", self.identifier);
        }
        Ok(())
    }

    /// Replaces the vertex list. Order is significant and duplicates are
    /// kept; zero or one vertices is a legal degenerate overlay. An active
    /// gradient is re-partitioned over the new length.
    pub fn set_coordinates(&mut self, coordinates: Vec<LatLng>) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.coordinates = coordinates;
        if let Some(live) = &self.live {
            let spans = self.style.paint.spans(self.coordinates.len());
            live.borrow_mut().set_path(self.coordinates.clone(), spans);
        }
        Ok(())
    }

    /// Re-resolves the stroke description. A palette of two or more colors
    /// enables gradient mode regardless of `color`; otherwise `color` or
    /// the configured default applies uniformly. Geometry is untouched.
    pub fn set_stroke_style(
        &mut self,
        color: Option<palette::Srgba<u8>>,
        colors: &[palette::Srgba<u8>],
        width: f64,
        dash_pattern: DashPattern,
    ) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.style = StrokeStyle {
            paint: StrokePaint::resolve(color, colors, self.defaults.stroke_color),
            width,
            dash_pattern,
        };
        if let Some(live) = &self.live {
            let spans = self.style.paint.spans(self.coordinates.len());
            live.borrow_mut()
                .set_stroke(spans, width, self.style.dash_pattern.clone());
        }
        Ok(())
    }

    pub fn set_geodesic(&mut self, geodesic: bool) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.geodesic = geodesic;
        if let Some(live) = &self.live {
            live.borrow_mut().set_geodesic(geodesic);
        }
        Ok(())
    }

    pub fn set_title(&mut self, title: Option<String>) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.title = title.clone();
        if let Some(live) = &self.live {
            live.borrow_mut().set_title(title);
        }
        Ok(())
    }

    /// Stacking order among overlays on the same surface; the surface
    /// re-sorts lazily when its draw order is next read.
    pub fn set_z_index(&mut self, z_index: i32) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.z_index = z_index;
        if let Some(live) = &self.live {
            live.borrow_mut().set_z_index(z_index);
        }
        Ok(())
    }

    /// Whether the overlay participates in hit-testing. When false the
    /// surface never lists it as a press candidate, so no press event can
    /// be produced for it.
    pub fn set_tappable(&mut self, tappable: bool) -> Result<(), BindingError> {
        self.ensure_active()?;
        self.tappable = tappable;
        if let Some(live) = &self.live {
            live.borrow_mut().set_tappable(tappable);
        }
        Ok(())
    }

    /// Called by the engine once a touch has resolved to this overlay.
    /// Bubbles `(identifier, point)` to the sink, once per resolved touch;
    /// emission is skipped silently if the sink is gone.
    pub fn handle_press(&self, point: LatLng) -> Result<(), BindingError> {
        self.ensure_active()?;
        if let Some(sink) = self.sink.upgrade() {
            log::trace!(
                "polyline {:?} pressed at ({}, {})",
                self.identifier,
                point.lat,
                point.lng
            );
            sink.emit(PressEvent {
                identifier: self.identifier.clone(),
                point,
            });
        }
        Ok(())
    }

    /// Detaches and releases the live object. Idempotent: the second call
    /// is a no-op. Every other operation fails with `UseAfterTeardown`
    /// afterwards.
    pub fn teardown(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(surface) = self.attached.take() {
            if let Some(live) = &self.live {
                surface.borrow_mut().remove_overlay(live);
            }
        }
        self.live = None;
        self.destroyed = true;
        log::debug!("polyline {:?} torn down", self.identifier);
    }

    fn ensure_active(&self) -> Result<(), BindingError> {
        if self.destroyed {
            Err(BindingError::UseAfterTeardown)
        } else {
            Ok(())
        }
    }

    fn ensure_live(&mut self) -> Rc<RefCell<LivePolyline>> {
        if let Some(live) = &self.live {
            return Rc::clone(live);
        }
        let live = Rc::new(RefCell::new(LivePolyline::new(
            self.coordinates.clone(),
            &self.style,
            self.geodesic,
            self.title.clone(),
            self.z_index,
            self.tappable,
        )));
        self.live = Some(Rc::clone(&live));
        live
    }
}

impl Drop for PolylineOverlay {
    fn drop(&mut self) {
        self.teardown();
    }
}
