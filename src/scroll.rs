//! Horizontal scroll affordances for the board container.

/// Scroll geometry of a horizontally scrolling element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: i32,
    pub client_width: i32,
    pub scroll_width: i32,
}

impl ScrollMetrics {
    pub fn of(el: &web_sys::Element) -> Self {
        Self {
            scroll_left: el.scroll_left(),
            client_width: el.client_width(),
            scroll_width: el.scroll_width(),
        }
    }
}

/// Whether there is hidden content to either side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollAffordance {
    pub fn from_metrics(m: ScrollMetrics) -> Self {
        Self {
            can_scroll_left: m.scroll_left > 0,
            can_scroll_right: m.scroll_left + m.client_width < m.scroll_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: i32, client_width: i32, scroll_width: i32) -> ScrollMetrics {
        ScrollMetrics { scroll_left, client_width, scroll_width }
    }

    #[test]
    fn test_at_left_edge_with_overflow() {
        let a = ScrollAffordance::from_metrics(metrics(0, 800, 1800));
        assert!(!a.can_scroll_left);
        assert!(a.can_scroll_right);
    }

    #[test]
    fn test_scrolled_to_right_edge() {
        let a = ScrollAffordance::from_metrics(metrics(1000, 800, 1800));
        assert!(a.can_scroll_left);
        assert!(!a.can_scroll_right);
    }

    #[test]
    fn test_middle() {
        let a = ScrollAffordance::from_metrics(metrics(300, 800, 1800));
        assert_eq!(a, ScrollAffordance { can_scroll_left: true, can_scroll_right: true });
    }

    #[test]
    fn test_content_fits() {
        assert_eq!(ScrollAffordance::from_metrics(metrics(0, 1200, 1200)), ScrollAffordance::default());
    }
}
