//! The CanvasScene owns every page item, their z-order, and the selection.

use std::collections::HashSet;

use rand::Rng;

use webcanvas_common::types::{PageId, Point, Rect};

use crate::handle::{handle_rect, resize_to, Corner};
use crate::item::PageItem;

/// Sizing defaults applied to new and resized items, in scene units.
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            min_width: 50.0,
            min_height: 50.0,
        }
    }
}

/// Ordered set of page items plus selection state. Insertion order doubles
/// as z-order: later items sit on top for hit testing.
pub struct CanvasScene {
    items: Vec<PageItem>,
    selected: HashSet<PageId>,
    defaults: PageDefaults,
    next_id: u32,
}

impl CanvasScene {
    pub fn new() -> Self {
        Self::with_defaults(PageDefaults::default())
    }

    pub fn with_defaults(defaults: PageDefaults) -> Self {
        Self {
            items: Vec::new(),
            selected: HashSet::new(),
            defaults,
            next_id: 1,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn page_count(&self) -> usize {
        self.items.len()
    }

    pub fn pages(&self) -> &[PageItem] {
        &self.items
    }

    pub fn pages_mut(&mut self) -> &mut [PageItem] {
        &mut self.items
    }

    pub fn page(&self, id: PageId) -> Option<&PageItem> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut PageItem> {
        self.items.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.page(id).is_some()
    }

    pub fn defaults(&self) -> PageDefaults {
        self.defaults
    }

    // -----------------------------------------------------------------------
    // Add / remove
    // -----------------------------------------------------------------------

    /// Add a page for an already-normalized URL. The item is placed
    /// pseudo-randomly within the top-left quadrant of the visible size,
    /// matching nothing in particular — items may overlap freely.
    pub fn add_page(
        &mut self,
        url: impl Into<String>,
        visible_size: (f64, f64),
        rng: &mut impl Rng,
    ) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;

        let max_x = (visible_size.0 / 2.0).max(0.0);
        let max_y = (visible_size.1 / 2.0).max(0.0);
        let x = rng.gen_range(0.0..=max_x);
        let y = rng.gen_range(0.0..=max_y);

        let rect = Rect::new(x, y, self.defaults.width, self.defaults.height);
        self.items.push(PageItem::new(id, url, rect));
        id
    }

    /// Remove an item. Returns false if the id is unknown.
    pub fn remove_page(&mut self, id: PageId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.selected.remove(&id);
        self.items.len() != before
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    /// The topmost item containing the scene point, if any.
    pub fn hit_test(&self, p: Point) -> Option<PageId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.rect.contains(p))
            .map(|item| item.id)
    }

    /// The topmost corner handle containing the scene point. Handles win
    /// over item bodies, so callers check this first.
    pub fn hit_test_handle(&self, p: Point, handle_size: f64) -> Option<(PageId, Corner)> {
        self.items.iter().rev().find_map(|item| {
            item.handles().iter().find_map(|h| {
                handle_rect(&item.rect, h.corner, handle_size)
                    .contains(p)
                    .then_some((item.id, h.corner))
            })
        })
    }

    // -----------------------------------------------------------------------
    // Geometry mutation
    // -----------------------------------------------------------------------

    /// Translate an item by a scene-space delta.
    pub fn move_page(&mut self, id: PageId, dx: f64, dy: f64) -> bool {
        match self.page_mut(id) {
            Some(item) => {
                item.rect = item.rect.translated(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Drag one corner of an item to a scene-space pointer position.
    pub fn resize_page(&mut self, id: PageId, corner: Corner, pointer: Point) -> bool {
        let (min_w, min_h) = (self.defaults.min_width, self.defaults.min_height);
        match self.page_mut(id) {
            Some(item) => {
                item.rect = resize_to(&item.rect, corner, pointer, min_w, min_h);
                true
            }
            None => false,
        }
    }

    pub fn set_title(&mut self, id: PageId, title: impl Into<String>) -> bool {
        match self.page_mut(id) {
            Some(item) => {
                item.title = title.into();
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn is_selected(&self, id: PageId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in a stable order.
    pub fn selected(&self) -> Vec<PageId> {
        let mut ids: Vec<PageId> = self.selected.iter().copied().collect();
        ids.sort();
        ids
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn select_only(&mut self, id: PageId) {
        self.selected.clear();
        if self.contains(id) {
            self.selected.insert(id);
        }
    }

    /// Rubber-band selection: every item intersecting the scene rect
    /// becomes selected, replacing the previous selection. Returns how
    /// many items matched.
    pub fn select_in_rect(&mut self, band: &Rect) -> usize {
        self.selected = self
            .items
            .iter()
            .filter(|item| item.rect.intersects(band))
            .map(|item| item.id)
            .collect();
        self.selected.len()
    }
}

impl Default for CanvasScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VISIBLE: (f64, f64) = (1280.0, 800.0);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn new_scene_is_empty() {
        let scene = CanvasScene::new();
        assert_eq!(scene.page_count(), 0);
        assert!(scene.selected().is_empty());
    }

    #[test]
    fn add_page_assigns_distinct_ids() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let a = scene.add_page("https://example.com", VISIBLE, &mut rng);
        let b = scene.add_page("https://example.org", VISIBLE, &mut rng);
        assert_ne!(a, b);
        assert_eq!(scene.page_count(), 2);
        assert!(scene.contains(a));
        assert!(scene.contains(b));
    }

    #[test]
    fn placement_falls_in_the_top_left_quadrant() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        for _ in 0..32 {
            let id = scene.add_page("https://example.com", VISIBLE, &mut rng);
            let rect = scene.page(id).unwrap().rect;
            assert!(rect.x >= 0.0 && rect.x <= VISIBLE.0 / 2.0);
            assert!(rect.y >= 0.0 && rect.y <= VISIBLE.1 / 2.0);
        }
    }

    #[test]
    fn placement_is_deterministic_under_a_seeded_rng() {
        let mut a = CanvasScene::new();
        let mut b = CanvasScene::new();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..5 {
            let id_a = a.add_page("https://example.com", VISIBLE, &mut rng_a);
            let id_b = b.add_page("https://example.com", VISIBLE, &mut rng_b);
            assert_eq!(a.page(id_a).unwrap().rect, b.page(id_b).unwrap().rect);
        }
    }

    #[test]
    fn placement_handles_zero_visible_size() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let id = scene.add_page("https://example.com", (0.0, 0.0), &mut rng);
        let rect = scene.page(id).unwrap().rect;
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn new_page_uses_default_size_and_disabled_refresh() {
        let mut scene = CanvasScene::new();
        let id = scene.add_page("https://example.com", VISIBLE, &mut rng());
        let item = scene.page(id).unwrap();
        assert_eq!(item.rect.width, 640.0);
        assert_eq!(item.rect.height, 480.0);
        assert_eq!(item.refresh.interval_secs(), 0);
    }

    #[test]
    fn remove_page_drops_item_and_selection() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let a = scene.add_page("https://example.com", VISIBLE, &mut rng);
        let b = scene.add_page("https://example.org", VISIBLE, &mut rng);
        scene.select_only(a);

        assert!(scene.remove_page(a));
        assert_eq!(scene.page_count(), 1);
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
        assert!(scene.selected().is_empty());
        // Removing again is a no-op
        assert!(!scene.remove_page(a));
    }

    #[test]
    fn items_drag_independently() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let a = scene.add_page("https://example.com", VISIBLE, &mut rng);
        let b = scene.add_page("https://example.org", VISIBLE, &mut rng);
        let before_b = scene.page(b).unwrap().rect;

        assert!(scene.move_page(a, 25.0, -10.0));
        assert_eq!(scene.page(b).unwrap().rect, before_b);
        assert!(!scene.move_page(PageId(99), 1.0, 1.0));
    }

    #[test]
    fn hit_test_returns_topmost() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let a = scene.add_page("https://example.com", VISIBLE, &mut rng);
        let b = scene.add_page("https://example.org", VISIBLE, &mut rng);
        // Stack both at a known spot
        scene.page_mut(a).unwrap().rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        scene.page_mut(b).unwrap().rect = Rect::new(50.0, 50.0, 100.0, 100.0);

        // Overlap region: the later item wins
        assert_eq!(scene.hit_test(Point::new(75.0, 75.0)), Some(b));
        // Only `a` covers this point
        assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), Some(a));
        assert_eq!(scene.hit_test(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn hit_test_handle_finds_corners() {
        let mut scene = CanvasScene::new();
        let id = scene.add_page("https://example.com", VISIBLE, &mut rng());
        scene.page_mut(id).unwrap().rect = Rect::new(100.0, 100.0, 200.0, 200.0);

        assert_eq!(
            scene.hit_test_handle(Point::new(102.0, 102.0), 14.0),
            Some((id, Corner::TopLeft))
        );
        assert_eq!(
            scene.hit_test_handle(Point::new(295.0, 295.0), 14.0),
            Some((id, Corner::BottomRight))
        );
        // Center of the item is not a handle
        assert_eq!(scene.hit_test_handle(Point::new(200.0, 200.0), 14.0), None);
    }

    #[test]
    fn resize_page_applies_corner_law() {
        let mut scene = CanvasScene::new();
        let id = scene.add_page("https://example.com", VISIBLE, &mut rng());
        scene.page_mut(id).unwrap().rect = Rect::new(100.0, 100.0, 200.0, 200.0);

        assert!(scene.resize_page(id, Corner::BottomRight, Point::new(400.0, 500.0)));
        let rect = scene.page(id).unwrap().rect;
        assert_eq!(rect, Rect::new(100.0, 100.0, 300.0, 400.0));
    }

    #[test]
    fn resize_respects_minimum() {
        let mut scene = CanvasScene::new();
        let id = scene.add_page("https://example.com", VISIBLE, &mut rng());
        scene.page_mut(id).unwrap().rect = Rect::new(100.0, 100.0, 200.0, 200.0);

        scene.resize_page(id, Corner::BottomRight, Point::new(0.0, 0.0));
        let rect = scene.page(id).unwrap().rect;
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 50.0);
        assert_eq!(rect.x, 100.0);
        assert_eq!(rect.y, 100.0);
    }

    #[test]
    fn rubber_band_selects_intersecting_items() {
        let mut scene = CanvasScene::new();
        let mut rng = rng();
        let a = scene.add_page("https://example.com", VISIBLE, &mut rng);
        let b = scene.add_page("https://example.org", VISIBLE, &mut rng);
        let c = scene.add_page("https://example.net", VISIBLE, &mut rng);
        scene.page_mut(a).unwrap().rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        scene.page_mut(b).unwrap().rect = Rect::new(150.0, 0.0, 100.0, 100.0);
        scene.page_mut(c).unwrap().rect = Rect::new(1000.0, 1000.0, 100.0, 100.0);

        let band = Rect::new(50.0, 20.0, 150.0, 60.0);
        assert_eq!(scene.select_in_rect(&band), 2);
        assert!(scene.is_selected(a));
        assert!(scene.is_selected(b));
        assert!(!scene.is_selected(c));

        scene.clear_selection();
        assert!(scene.selected().is_empty());
    }

    #[test]
    fn set_title_updates_item() {
        let mut scene = CanvasScene::new();
        let id = scene.add_page("https://example.com", VISIBLE, &mut rng());
        assert!(scene.set_title(id, "Example Domain"));
        assert_eq!(scene.page(id).unwrap().title, "Example Domain");
        assert!(!scene.set_title(PageId(99), "nope"));
    }
}
