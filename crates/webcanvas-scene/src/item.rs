use webcanvas_common::types::{PageId, Rect};

use crate::handle::{Corner, ResizeHandle};
use crate::refresh::RefreshTimer;

/// One embedded web page placed on the canvas.
#[derive(Debug)]
pub struct PageItem {
    pub id: PageId,
    /// The URL the item was created with (already scheme-normalized).
    pub url: String,
    /// Document title reported by the web view; empty until the first load.
    pub title: String,
    /// Item bounds in scene coordinates.
    pub rect: Rect,
    pub refresh: RefreshTimer,
}

impl PageItem {
    pub fn new(id: PageId, url: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            rect,
            refresh: RefreshTimer::new(),
        }
    }

    /// The four corner handles, derived on demand so they can never
    /// outlive the item.
    pub fn handles(&self) -> [ResizeHandle; 4] {
        Corner::ALL.map(|corner| ResizeHandle {
            page: self.id,
            corner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_untitled_with_refresh_disabled() {
        let item = PageItem::new(
            PageId(1),
            "https://example.com",
            Rect::new(0.0, 0.0, 640.0, 480.0),
        );
        assert_eq!(item.url, "https://example.com");
        assert!(item.title.is_empty());
        assert_eq!(item.refresh.interval_secs(), 0);
        assert!(!item.refresh.is_active());
    }

    #[test]
    fn exactly_four_handles_one_per_corner() {
        let item = PageItem::new(PageId(3), "https://example.com", Rect::new(0.0, 0.0, 100.0, 100.0));
        let handles = item.handles();
        assert_eq!(handles.len(), 4);
        for (handle, corner) in handles.iter().zip(Corner::ALL) {
            assert_eq!(handle.page, PageId(3));
            assert_eq!(handle.corner, corner);
        }
    }
}
