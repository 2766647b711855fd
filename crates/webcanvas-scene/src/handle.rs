//! Corner resize handles.
//!
//! Each page item exposes four handles, one per corner. Dragging a handle
//! moves exactly that corner while the opposite corner stays fixed. The
//! handles are derived values: they carry a non-owning back-reference to
//! their item and never survive it.

use serde::{Deserialize, Serialize};

use webcanvas_common::types::{PageId, Point, Rect};

/// One corner of a page item's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The corner that stays fixed while this one is dragged.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on a rect.
    pub fn point_on(self, rect: &Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(rect.x, rect.y),
            Corner::TopRight => Point::new(rect.right(), rect.y),
            Corner::BottomLeft => Point::new(rect.x, rect.bottom()),
            Corner::BottomRight => Point::new(rect.right(), rect.bottom()),
        }
    }
}

/// A draggable handle bound to one corner of one page item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    /// The item this handle belongs to (non-owning).
    pub page: PageId,
    pub corner: Corner,
}

/// The square occupied by a corner handle, inside the item rect.
pub fn handle_rect(item: &Rect, corner: Corner, size: f64) -> Rect {
    let (x, y) = match corner {
        Corner::TopLeft => (item.x, item.y),
        Corner::TopRight => (item.right() - size, item.y),
        Corner::BottomLeft => (item.x, item.bottom() - size),
        Corner::BottomRight => (item.right() - size, item.bottom() - size),
    };
    Rect::new(x, y, size, size)
}

/// Apply a corner drag: the dragged corner follows `pointer`, the opposite
/// corner stays fixed, and the result never shrinks below `min_w`/`min_h`.
pub fn resize_to(rect: &Rect, corner: Corner, pointer: Point, min_w: f64, min_h: f64) -> Rect {
    let right = rect.right();
    let bottom = rect.bottom();

    match corner {
        Corner::BottomRight => {
            let w = (pointer.x - rect.x).max(min_w);
            let h = (pointer.y - rect.y).max(min_h);
            Rect::new(rect.x, rect.y, w, h)
        }
        Corner::BottomLeft => {
            let x = pointer.x.min(right - min_w);
            let h = (pointer.y - rect.y).max(min_h);
            Rect::new(x, rect.y, right - x, h)
        }
        Corner::TopRight => {
            let y = pointer.y.min(bottom - min_h);
            let w = (pointer.x - rect.x).max(min_w);
            Rect::new(rect.x, y, w, bottom - y)
        }
        Corner::TopLeft => {
            let x = pointer.x.min(right - min_w);
            let y = pointer.y.min(bottom - min_h);
            Rect::new(x, y, right - x, bottom - y)
        }
    }
}
