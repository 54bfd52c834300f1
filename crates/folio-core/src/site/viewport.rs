//! Scroll-driven visibility: fade-in reveal and the scroll-to-top button.

use serde::{Deserialize, Serialize};

/// Scroll offset past which the scroll-to-top button shows.
const SCROLL_TOP_THRESHOLD: f64 = 20.0;

/// Element box relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// True when the whole box lies inside the viewport.
pub fn is_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= viewport.height && rect.right <= viewport.width
}

pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Indices of fade-in elements to reveal for the current scroll position.
pub fn revealed(elements: &[Rect], viewport: &Viewport) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, r)| is_in_viewport(r, viewport))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport { width: 800.0, height: 600.0 };

    fn rect(top: f64, bottom: f64) -> Rect {
        Rect { top, left: 10.0, bottom, right: 300.0 }
    }

    #[test]
    fn test_fully_inside_only() {
        assert!(is_in_viewport(&rect(0.0, 600.0), &VP));
        assert!(!is_in_viewport(&rect(-1.0, 100.0), &VP));
        assert!(!is_in_viewport(&rect(500.0, 601.0), &VP));
        assert_eq!(revealed(&[rect(10.0, 50.0), rect(590.0, 700.0), rect(100.0, 200.0)], &VP), vec![0, 2]);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!scroll_to_top_visible(20.0));
        assert!(scroll_to_top_visible(20.5));
    }
}
