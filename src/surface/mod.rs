pub mod live;

use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

use self::live::LivePolyline;

/// A map surface shared between the host and the bindings attached to it.
/// The model is single-threaded; all mutation happens on the thread that
/// owns the surface.
pub type SharedSurface = Rc<RefCell<MapSurface>>;

/// Possibly-dangling reference to a map surface, as handed to a binding by
/// the host. Upgrading fails once the surface is gone, which `attach`
/// reports as `InvalidSurface`.
#[derive(Clone, Default)]
pub struct SurfaceHandle(Weak<RefCell<MapSurface>>);

impl SurfaceHandle {
    /// A handle that refers to no surface.
    pub fn dangling() -> Self {
        Self::default()
    }

    pub(crate) fn upgrade(&self) -> Option<SharedSurface> {
        self.0.upgrade()
    }
}

impl From<&SharedSurface> for SurfaceHandle {
    fn from(surface: &SharedSurface) -> Self {
        Self(Rc::downgrade(surface))
    }
}

/// The ordered overlay set of one map surface. Insertion order is the base
/// draw order; z-index re-sorting happens lazily when the order is read.
#[derive(Default)]
pub struct MapSurface {
    overlays: Vec<Rc<RefCell<LivePolyline>>>,
}

impl MapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSurface {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Adds an overlay; a second add of the same overlay is a no-op, so no
    /// surface ever holds duplicate entries.
    pub fn add_overlay(&mut self, live: &Rc<RefCell<LivePolyline>>) {
        if self.position(live).is_none() {
            self.overlays.push(Rc::clone(live));
        }
    }

    pub fn remove_overlay(&mut self, live: &Rc<RefCell<LivePolyline>>) {
        if let Some(index) = self.position(live) {
            self.overlays.remove(index);
        }
    }

    pub fn contains(&self, live: &Rc<RefCell<LivePolyline>>) -> bool {
        self.position(live).is_some()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Bottom-to-top draw order: z-index ascending, insertion order breaking
    /// ties (the sort is stable).
    pub fn draw_order(&self) -> Vec<Rc<RefCell<LivePolyline>>> {
        let mut ordered = self.overlays.clone();
        ordered.sort_by_key(|live| live.borrow().z_index());
        ordered
    }

    /// Hit-test candidates for the engine, top-most first. Overlays that
    /// opted out of tapping are never candidates, so no press event can
    /// originate from them.
    pub fn press_candidates(&self) -> Vec<Rc<RefCell<LivePolyline>>> {
        self.draw_order()
            .into_iter()
            .rev()
            .filter(|live| live.borrow().tappable())
            .collect()
    }

    fn position(&self, live: &Rc<RefCell<LivePolyline>>) -> Option<usize> {
        self.overlays
            .iter()
            .position(|entry| Rc::ptr_eq(entry, live))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stroke::StrokeStyle;

    fn live(z_index: i32, tappable: bool) -> Rc<RefCell<LivePolyline>> {
        Rc::new(RefCell::new(LivePolyline::new(
            Vec::new(),
            &StrokeStyle::default(),
            false,
            None,
            z_index,
            tappable,
        )))
    }

    #[test]
    fn add_is_idempotent() {
        let mut surface = MapSurface::new();
        let overlay = live(0, false);
        surface.add_overlay(&overlay);
        surface.add_overlay(&overlay);
        assert_eq!(surface.overlay_count(), 1);
    }

    #[test]
    fn remove_unknown_overlay_is_noop() {
        let mut surface = MapSurface::new();
        let overlay = live(0, false);
        surface.remove_overlay(&overlay);
        assert_eq!(surface.overlay_count(), 0);
    }

    #[test]
    fn draw_order_sorts_by_z_index_then_insertion() {
        let mut surface = MapSurface::new();
        let bottom = live(-1, false);
        let first = live(0, false);
        let second = live(0, false);
        let top = live(3, false);
        surface.add_overlay(&top);
        surface.add_overlay(&first);
        surface.add_overlay(&second);
        surface.add_overlay(&bottom);

        let order = surface.draw_order();
        assert!(Rc::ptr_eq(&order[0], &bottom));
        assert!(Rc::ptr_eq(&order[1], &first));
        assert!(Rc::ptr_eq(&order[2], &second));
        assert!(Rc::ptr_eq(&order[3], &top));
    }

    #[test]
    fn press_candidates_are_tappable_topmost_first() {
        let mut surface = MapSurface::new();
        let below = live(0, true);
        let muted = live(1, false);
        let above = live(2, true);
        surface.add_overlay(&below);
        surface.add_overlay(&muted);
        surface.add_overlay(&above);

        let candidates = surface.press_candidates();
        assert_eq!(candidates.len(), 2);
        assert!(Rc::ptr_eq(&candidates[0], &above));
        assert!(Rc::ptr_eq(&candidates[1], &below));
    }
}
