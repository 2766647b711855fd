//! Mouse-based drag state for the canvas.
//!
//! Tracks whether the user is dragging an item body, a corner resize
//! handle, or a rubber-band selection over empty canvas. The event handler
//! calls into this module on cursor movement and mouse button events.

use webcanvas_common::types::{PageId, Point};
use webcanvas_scene::{CanvasScene, Corner};

// =============================================================================
// TYPES
// =============================================================================

/// Active drag state during a mouse interaction, in scene coordinates.
#[derive(Debug, Clone)]
pub enum DragState {
    /// Moving an item body; `last` is the previous pointer position for
    /// incremental deltas.
    MovePage { page: PageId, last: Point },
    /// Dragging one corner handle of an item.
    ResizePage { page: PageId, corner: Corner },
    /// Rubber-band selection over empty canvas.
    RubberBand { origin: Point, current: Point },
}

/// What the cursor is over, with handles taking priority over bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(PageId, Corner),
    Body(PageId),
    Empty,
}

/// Cursor shape to display for a hover target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    None,
    Move,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
}

// =============================================================================
// HIT TESTING
// =============================================================================

/// Resolve what sits under a scene point: the topmost corner handle wins
/// over the topmost item body.
pub fn hit_target(scene: &CanvasScene, p: Point, handle_size: f64) -> HitTarget {
    if let Some((page, corner)) = scene.hit_test_handle(p, handle_size) {
        return HitTarget::Handle(page, corner);
    }
    match scene.hit_test(p) {
        Some(page) => HitTarget::Body(page),
        None => HitTarget::Empty,
    }
}

/// Determine the cursor zone for a hover target.
pub fn cursor_zone(target: HitTarget) -> CursorZone {
    match target {
        HitTarget::Handle(_, Corner::TopLeft) => CursorZone::NwResize,
        HitTarget::Handle(_, Corner::TopRight) => CursorZone::NeResize,
        HitTarget::Handle(_, Corner::BottomLeft) => CursorZone::SwResize,
        HitTarget::Handle(_, Corner::BottomRight) => CursorZone::SeResize,
        HitTarget::Body(_) => CursorZone::Move,
        HitTarget::Empty => CursorZone::None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use webcanvas_common::types::Rect;

    const HANDLE: f64 = 14.0;

    fn scene_with_item() -> (CanvasScene, PageId) {
        let mut scene = CanvasScene::new();
        let mut rng = StdRng::seed_from_u64(1);
        let id = scene.add_page("https://example.com", (1280.0, 800.0), &mut rng);
        scene.page_mut(id).unwrap().rect = Rect::new(100.0, 100.0, 300.0, 200.0);
        (scene, id)
    }

    #[test]
    fn empty_canvas_hits_nothing() {
        let (scene, _) = scene_with_item();
        assert_eq!(
            hit_target(&scene, Point::new(900.0, 900.0), HANDLE),
            HitTarget::Empty
        );
    }

    #[test]
    fn body_hit_inside_item() {
        let (scene, id) = scene_with_item();
        assert_eq!(
            hit_target(&scene, Point::new(250.0, 200.0), HANDLE),
            HitTarget::Body(id)
        );
    }

    #[test]
    fn handle_hit_beats_body_hit() {
        let (scene, id) = scene_with_item();
        assert_eq!(
            hit_target(&scene, Point::new(102.0, 102.0), HANDLE),
            HitTarget::Handle(id, Corner::TopLeft)
        );
        assert_eq!(
            hit_target(&scene, Point::new(395.0, 295.0), HANDLE),
            HitTarget::Handle(id, Corner::BottomRight)
        );
    }

    #[test]
    fn topmost_item_wins_body_hit() {
        let (mut scene, a) = scene_with_item();
        let mut rng = StdRng::seed_from_u64(2);
        let b = scene.add_page("https://example.org", (1280.0, 800.0), &mut rng);
        scene.page_mut(b).unwrap().rect = Rect::new(200.0, 150.0, 300.0, 200.0);

        assert_eq!(
            hit_target(&scene, Point::new(250.0, 200.0), HANDLE),
            HitTarget::Body(b)
        );
        assert_eq!(
            hit_target(&scene, Point::new(110.0, 250.0), HANDLE),
            HitTarget::Body(a)
        );
    }

    #[test]
    fn cursor_zones_per_corner() {
        let id = PageId(1);
        assert_eq!(
            cursor_zone(HitTarget::Handle(id, Corner::TopLeft)),
            CursorZone::NwResize
        );
        assert_eq!(
            cursor_zone(HitTarget::Handle(id, Corner::TopRight)),
            CursorZone::NeResize
        );
        assert_eq!(
            cursor_zone(HitTarget::Handle(id, Corner::BottomLeft)),
            CursorZone::SwResize
        );
        assert_eq!(
            cursor_zone(HitTarget::Handle(id, Corner::BottomRight)),
            CursorZone::SeResize
        );
        assert_eq!(cursor_zone(HitTarget::Body(id)), CursorZone::Move);
        assert_eq!(cursor_zone(HitTarget::Empty), CursorZone::None);
    }
}
