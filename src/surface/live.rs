use crate::components::paint::StrokeSpan;
use crate::components::path::LatLng;
use crate::components::stroke::DashPattern;
use crate::components::stroke::StrokeStyle;

/// The engine-native polyline object. Created lazily by its binding on
/// first attach and mutated only through that binding; the map surface and
/// the engine read it when drawing and hit-testing.
#[derive(Debug)]
pub struct LivePolyline {
    path: Vec<LatLng>,
    spans: Vec<StrokeSpan>,
    width: f64,
    dash_pattern: DashPattern,
    geodesic: bool,
    title: Option<String>,
    z_index: i32,
    tappable: bool,
}

impl LivePolyline {
    pub(crate) fn new(
        path: Vec<LatLng>,
        style: &StrokeStyle,
        geodesic: bool,
        title: Option<String>,
        z_index: i32,
        tappable: bool,
    ) -> Self {
        let spans = style.paint.spans(path.len());
        Self {
            path,
            spans,
            width: style.width,
            dash_pattern: style.dash_pattern.clone(),
            geodesic,
            title,
            z_index,
            tappable,
        }
    }

    /// Replaces geometry and span partition together; no partially-updated
    /// path is ever observable.
    pub(crate) fn set_path(&mut self, path: Vec<LatLng>, spans: Vec<StrokeSpan>) {
        self.path = path;
        self.spans = spans;
    }

    pub(crate) fn set_stroke(
        &mut self,
        spans: Vec<StrokeSpan>,
        width: f64,
        dash_pattern: DashPattern,
    ) {
        self.spans = spans;
        self.width = width;
        self.dash_pattern = dash_pattern;
    }

    pub(crate) fn set_geodesic(&mut self, geodesic: bool) {
        self.geodesic = geodesic;
    }

    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub(crate) fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    pub(crate) fn set_tappable(&mut self, tappable: bool) {
        self.tappable = tappable;
    }

    pub fn path(&self) -> &[LatLng] {
        &self.path
    }

    pub fn spans(&self) -> &[StrokeSpan] {
        &self.spans
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn dash_pattern(&self) -> &DashPattern {
        &self.dash_pattern
    }

    pub fn geodesic(&self) -> bool {
        self.geodesic
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn tappable(&self) -> bool {
        self.tappable
    }
}
