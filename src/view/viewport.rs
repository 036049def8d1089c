//! Viewport controller - pan/zoom state and the model↔screen transform.
//!
//! The transform is `screen = (model + offset) · scale`, and the same
//! convention is used for rendering and for inverse-mapping pointer hits.
//! Pan deltas are divided by the scale so drag speed stays visually
//! constant at every zoom level.

use crate::types::Point;

/// Scale limits and zoom step
#[derive(Debug, Clone, Copy)]
pub struct ViewportConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplicative step applied by zoom_in / zoom_out
    pub zoom_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.0,
            zoom_step: 1.1,
        }
    }
}

/// Emitted whenever scale or offset actually changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChanged {
    pub scale: f64,
    pub offset: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging,
}

/// Ephemeral pan/zoom state. Created on mount, destroyed on unmount,
/// never persisted.
#[derive(Debug)]
pub struct Viewport {
    scale: f64,
    offset: Point,
    phase: Phase,
    drag_anchor: Point,
    width: f64,
    height: f64,
    config: ViewportConfig,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::with_config(ViewportConfig::default())
    }

    pub fn with_config(config: ViewportConfig) -> Self {
        Self {
            scale: 1.0,
            offset: Point::new(0.0, 0.0),
            phase: Phase::Idle,
            drag_anchor: Point::new(0.0, 0.0),
            width: 0.0,
            height: 0.0,
            config,
        }
    }

    /// Tell the viewport its surface size in pixels; zooming is centered on
    /// the surface midpoint (falls back to the origin while unsized)
    pub fn resize(&mut self, width: f64, height: f64) {
        if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    // ------------------------------------------------------------------
    // Transform
    // ------------------------------------------------------------------

    pub fn to_screen(&self, model: Point) -> Point {
        Point::new(
            (model.x + self.offset.x) * self.scale,
            (model.y + self.offset.y) * self.scale,
        )
    }

    pub fn to_model(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.scale - self.offset.x,
            screen.y / self.scale - self.offset.y,
        )
    }

    // ------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------

    /// Pointer pressed on the diagram surface
    pub fn pointer_down(&mut self, screen: Point) {
        if !screen.is_finite() {
            return;
        }
        self.phase = Phase::Dragging;
        self.drag_anchor = screen;
    }

    /// Pointer moved; pans while dragging
    pub fn pointer_move(&mut self, screen: Point) -> Option<ViewportChanged> {
        if self.phase != Phase::Dragging || !screen.is_finite() {
            return None;
        }
        let next = Point::new(
            self.offset.x + (screen.x - self.drag_anchor.x) / self.scale,
            self.offset.y + (screen.y - self.drag_anchor.y) / self.scale,
        );
        self.drag_anchor = screen;
        if !next.is_finite() || next == self.offset {
            return None;
        }
        self.offset = next;
        Some(self.changed())
    }

    pub fn pointer_up(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.phase = Phase::Idle;
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    pub fn zoom_in(&mut self) -> Option<ViewportChanged> {
        self.set_scale(self.scale * self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Option<ViewportChanged> {
        self.set_scale(self.scale / self.config.zoom_step)
    }

    /// Set the scale directly, clamped to the configured range. The point
    /// under the viewport center stays fixed. Non-finite requests are
    /// rejected, never propagated.
    pub fn set_scale(&mut self, target: f64) -> Option<ViewportChanged> {
        if !target.is_finite() {
            return None;
        }
        let next = target.clamp(self.config.min_scale, self.config.max_scale);
        if next == self.scale {
            return None;
        }
        let center = Point::new(self.width / 2.0, self.height / 2.0);
        let offset = Point::new(
            self.offset.x + center.x * (1.0 / next - 1.0 / self.scale),
            self.offset.y + center.y * (1.0 / next - 1.0 / self.scale),
        );
        if offset.is_finite() {
            self.offset = offset;
        }
        self.scale = next;
        Some(self.changed())
    }

    /// Reset to the identity transform (scale 1, no pan)
    pub fn reset(&mut self) -> Option<ViewportChanged> {
        if self.scale == 1.0 && self.offset == Point::new(0.0, 0.0) {
            return None;
        }
        self.scale = 1.0;
        self.offset = Point::new(0.0, 0.0);
        Some(self.changed())
    }

    fn changed(&self) -> ViewportChanged {
        ViewportChanged {
            scale: self.scale,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_round_trip_restores_scale() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        vp.zoom_out();
        assert!((vp.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pan_round_trip_restores_offset() {
        let mut vp = Viewport::new();
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(70.0, -5.0);
        vp.pointer_down(p1);
        vp.pointer_move(p2);
        vp.pointer_up();
        vp.pointer_down(p2);
        vp.pointer_move(p1);
        vp.pointer_up();
        let off = vp.offset();
        assert!(off.x.abs() < 1e-12 && off.y.abs() < 1e-12);
    }

    #[test]
    fn scale_is_clamped() {
        let mut vp = Viewport::new();
        for _ in 0..100 {
            vp.zoom_in();
        }
        assert!(vp.scale() <= 2.0);
        for _ in 0..100 {
            vp.zoom_out();
        }
        assert!(vp.scale() >= 0.5);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let mut vp = Viewport::new();
        assert!(vp.set_scale(f64::NAN).is_none());
        vp.pointer_down(Point::new(0.0, 0.0));
        assert!(vp.pointer_move(Point::new(f64::INFINITY, 0.0)).is_none());
        assert!(vp.scale().is_finite());
        assert!(vp.offset().is_finite());
    }

    #[test]
    fn pan_speed_is_independent_of_zoom() {
        let mut vp = Viewport::new();
        vp.set_scale(2.0);
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.pointer_move(Point::new(10.0, 0.0));
        // 10 screen px at 2× zoom moves the model by 5 units
        assert!((vp.offset().x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut vp = Viewport::new();
        vp.resize(800.0, 600.0);
        vp.zoom_in();
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.pointer_move(Point::new(30.0, 30.0));
        vp.pointer_up();
        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Point::new(0.0, 0.0));
    }

    #[test]
    fn transform_and_inverse_are_consistent() {
        let mut vp = Viewport::new();
        vp.resize(800.0, 600.0);
        vp.zoom_in();
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.pointer_move(Point::new(13.0, -7.0));
        vp.pointer_up();
        let model = Point::new(42.5, -17.25);
        let back = vp.to_model(vp.to_screen(model));
        assert!((back.x - model.x).abs() < 1e-9);
        assert!((back.y - model.y).abs() < 1e-9);
    }
}
