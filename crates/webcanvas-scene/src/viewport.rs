//! The canvas camera: a pan offset plus a uniform zoom factor.
//!
//! Screen = scene * scale + pan. Items keep their scene coordinates while
//! the user pans and zooms; only this transform changes.

use serde::{Deserialize, Serialize};

use webcanvas_common::types::{Point, Rect};

pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
        }
    }

    pub fn to_screen_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.pan_x, p.y * self.scale + self.pan_y)
    }

    pub fn to_scene_point(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.pan_x) / self.scale,
            (p.y - self.pan_y) / self.scale,
        )
    }

    pub fn to_screen_rect(&self, r: &Rect) -> Rect {
        let origin = self.to_screen_point(Point::new(r.x, r.y));
        Rect::new(
            origin.x,
            origin.y,
            r.width * self.scale,
            r.height * self.scale,
        )
    }

    pub fn to_scene_rect(&self, r: &Rect) -> Rect {
        let origin = self.to_scene_point(Point::new(r.x, r.y));
        Rect::new(
            origin.x,
            origin.y,
            r.width / self.scale,
            r.height / self.scale,
        )
    }

    /// Translate the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Scale by `factor` about a screen-space anchor: the scene point under
    /// the anchor stays under it. The resulting scale is clamped to
    /// [`MIN_SCALE`, `MAX_SCALE`].
    pub fn zoom_at(&mut self, factor: f64, anchor: Point) {
        let fixed = self.to_scene_point(anchor);
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.pan_x = anchor.x - fixed.x * self.scale;
        self.pan_y = anchor.y - fixed.y * self.scale;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_transform() {
        let vp = Viewport::new();
        let p = Point::new(10.0, 20.0);
        assert_eq!(vp.to_screen_point(p), p);
        assert_eq!(vp.to_scene_point(p), p);
    }

    #[test]
    fn pan_shifts_screen_coords() {
        let mut vp = Viewport::new();
        vp.pan_by(100.0, -50.0);
        let p = vp.to_screen_point(Point::new(10.0, 10.0));
        assert!(close(p.x, 110.0));
        assert!(close(p.y, -40.0));
    }

    #[test]
    fn round_trip_under_pan_and_zoom() {
        let mut vp = Viewport::new();
        vp.pan_by(37.0, -12.5);
        vp.zoom_at(1.5, Point::new(200.0, 150.0));

        let scene = Point::new(123.0, 456.0);
        let back = vp.to_scene_point(vp.to_screen_point(scene));
        assert!(close(back.x, scene.x));
        assert!(close(back.y, scene.y));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut vp = Viewport::new();
        vp.pan_by(30.0, 40.0);
        let anchor = Point::new(400.0, 300.0);
        let before = vp.to_scene_point(anchor);

        vp.zoom_at(2.0, anchor);
        let after = vp.to_scene_point(anchor);
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));
    }

    #[test]
    fn zoom_clamps_scale() {
        let mut vp = Viewport::new();
        let anchor = Point::new(0.0, 0.0);
        vp.zoom_at(100.0, anchor);
        assert_eq!(vp.scale, MAX_SCALE);
        vp.zoom_at(1e-6, anchor);
        assert_eq!(vp.scale, MIN_SCALE);
    }

    #[test]
    fn rect_mapping_scales_extent() {
        let mut vp = Viewport::new();
        vp.zoom_at(2.0, Point::new(0.0, 0.0));
        let r = vp.to_screen_rect(&Rect::new(10.0, 10.0, 50.0, 25.0));
        assert!(close(r.x, 20.0));
        assert!(close(r.y, 20.0));
        assert!(close(r.width, 100.0));
        assert!(close(r.height, 50.0));

        let back = vp.to_scene_rect(&r);
        assert!(close(back.x, 10.0));
        assert!(close(back.width, 50.0));
    }
}
