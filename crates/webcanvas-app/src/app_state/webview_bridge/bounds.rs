//! Coordinate conversion between canvas rects and wry rects.

use webcanvas_common::types::Rect;

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a canvas `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_wry_rect() {
        let rect = Rect::new(100.0, 50.0, 800.0, 600.0);
        let wry_rect = rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn zero_rect_converts_correctly() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        let wry_rect = rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x).abs() < f64::EPSILON);
                assert!((pos.y).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width).abs() < f64::EPSILON);
                assert!((size.height).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
