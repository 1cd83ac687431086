//! Scroll-to-angle interpolation for the hero dot.
//!
//! The dot travels along a circular arc inside the track element as the hero
//! scroll container scrolls. Everything here is pure math over
//! [`ScrollMetrics`] and [`TrackGeometry`] snapshots; the only side effect is
//! [`AnimationScene::place_dot`], which the host implements.
//!
//! # Model
//!
//! ```text
//! max_scroll = scroll_height - client_height       (skip frame if <= 0)
//! percent    = scroll_top / max_scroll             (not clamped)
//! angle      = start - percent * (start - end)     (degrees, then radians)
//! radius     = (track_width - dot_width) / 2 + inset
//! point      = center + radius * (cos angle, sin angle)
//! ```
//!
//! Screen coordinates grow downward, so a decreasing angle reads as
//! counter-clockwise travel.

use serde::{Deserialize, Serialize};

/// Scroll state of the container, read fresh on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Layout of the track and dot, read fresh on every tick.
///
/// `track_left`/`track_top` are the track's bounding-box origin in viewport
/// coordinates; the sizes are layout (offset) sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track_left: f64,
    pub track_top: f64,
    pub track_width: f64,
    pub track_height: f64,
    pub dot_width: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            self.track_left + self.track_width / 2.0,
            self.track_top + self.track_height / 2.0,
        )
    }
}

/// Arc the dot travels along, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcPath {
    /// Angle at scroll percent 0.
    pub start_deg: f64,
    /// Angle at scroll percent 1.
    pub end_deg: f64,
    /// Added to the half-gap between track and dot width.
    pub inset: f64,
}

impl Default for ArcPath {
    fn default() -> Self {
        Self {
            start_deg: 240.0,
            end_deg: 170.0,
            inset: 15.0,
        }
    }
}

impl ArcPath {
    /// Linear interpolation from `start_deg` toward `end_deg`.
    ///
    /// Interpolating in degrees keeps both endpoints exact.
    #[must_use]
    pub fn angle_deg_at(&self, percent: f64) -> f64 {
        self.start_deg - percent * (self.start_deg - self.end_deg)
    }

    #[must_use]
    pub fn radius(&self, geometry: &TrackGeometry) -> f64 {
        (geometry.track_width - geometry.dot_width) / 2.0 + self.inset
    }

    /// Dot center for the given percent.
    #[must_use]
    pub fn position_at(&self, geometry: &TrackGeometry, percent: f64) -> DotPosition {
        let angle_deg = self.angle_deg_at(percent);
        let angle = angle_deg.to_radians();
        let radius = self.radius(geometry);
        let (cx, cy) = geometry.center();
        DotPosition {
            x: cx + radius * angle.cos(),
            y: cy + radius * angle.sin(),
            angle_deg,
            radius,
        }
    }
}

/// Where the dot's center goes, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPosition {
    pub x: f64,
    pub y: f64,
    pub angle_deg: f64,
    pub radius: f64,
}

impl DotPosition {
    #[must_use]
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

/// Inline style written to the dot element.
///
/// The translate keeps the element's own box centered on the point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotStyle {
    pub left: String,
    pub top: String,
}

impl DotStyle {
    pub const POSITION: &'static str = "fixed";
    pub const TRANSFORM: &'static str = "translate(-50%, -50%)";

    /// `(property, value)` pairs in the order they are applied.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &str); 4] {
        [
            ("position", Self::POSITION),
            ("left", self.left.as_str()),
            ("top", self.top.as_str()),
            ("transform", Self::TRANSFORM),
        ]
    }
}

impl From<DotPosition> for DotStyle {
    fn from(pos: DotPosition) -> Self {
        Self {
            left: format!("{}px", pos.x),
            top: format!("{}px", pos.y),
        }
    }
}

/// `scroll_top / max_scroll`, or `None` when the content does not overflow.
#[must_use]
pub fn scroll_percent(metrics: &ScrollMetrics) -> Option<f64> {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 {
        return None;
    }
    Some(metrics.scroll_top / max_scroll)
}

/// Dot position for a scroll frame, or `None` for degenerate scroll geometry.
#[must_use]
pub fn compute_dot_position(
    metrics: &ScrollMetrics,
    geometry: &TrackGeometry,
    path: &ArcPath,
) -> Option<DotPosition> {
    scroll_percent(metrics).map(|percent| path.position_at(geometry, percent))
}

/// Dot position before any scroll: percent 0, i.e. the start angle.
#[must_use]
pub fn resting_position(geometry: &TrackGeometry, path: &ArcPath) -> DotPosition {
    path.position_at(geometry, 0.0)
}

/// Owns the dot position between scroll ticks.
#[derive(Debug, Clone, Default)]
pub struct DotAnimator {
    path: ArcPath,
    position: Option<DotPosition>,
}

impl DotAnimator {
    #[must_use]
    pub fn new(path: ArcPath) -> Self {
        Self {
            path,
            position: None,
        }
    }

    /// Last computed position.
    #[must_use]
    pub fn position(&self) -> Option<DotPosition> {
        self.position
    }

    /// Place the dot at rest.
    pub fn initialize(&mut self, geometry: &TrackGeometry) -> DotPosition {
        let pos = resting_position(geometry, &self.path);
        self.position = Some(pos);
        pos
    }

    /// Recompute for a scroll tick. Leaves the last position untouched and
    /// returns `None` when the container does not overflow.
    pub fn on_scroll(
        &mut self,
        metrics: &ScrollMetrics,
        geometry: &TrackGeometry,
    ) -> Option<DotPosition> {
        let pos = compute_dot_position(metrics, geometry, &self.path)?;
        self.position = Some(pos);
        Some(pos)
    }
}

/// Live elements the animator reads from and writes to.
pub trait AnimationScene {
    fn scroll_metrics(&self) -> ScrollMetrics;
    fn track_geometry(&self) -> TrackGeometry;
    fn place_dot(&self, style: &DotStyle);
}

/// Place the dot at rest on a freshly mounted scene.
pub fn settle_scene<S: AnimationScene + ?Sized>(
    scene: &S,
    animator: &mut DotAnimator,
) -> DotPosition {
    let pos = animator.initialize(&scene.track_geometry());
    scene.place_dot(&DotStyle::from(pos));
    pos
}

/// One scroll tick: read, recompute, write.
///
/// Geometry is only read once the scroll metrics show overflow.
pub fn animate_frame<S: AnimationScene + ?Sized>(
    scene: &S,
    animator: &mut DotAnimator,
) -> Option<DotPosition> {
    let metrics = scene.scroll_metrics();
    if scroll_percent(&metrics).is_none() {
        tracing::trace!(
            scroll_height = metrics.scroll_height,
            client_height = metrics.client_height,
            "scroll container does not overflow; dot left in place"
        );
        return None;
    }
    let pos = animator.on_scroll(&metrics, &scene.track_geometry())?;
    tracing::trace!(x = pos.x, y = pos.y, angle_deg = pos.angle_deg, "dot moved");
    scene.place_dot(&DotStyle::from(pos));
    Some(pos)
}
