use crate::config::{HERO_PARALLAX_MAX_PERCENT, NAV_SOLID_THRESHOLD_PX};

/// Snapshot of the window's vertical scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the document scrolled through: 0 at the top, 1 once the
    /// viewport bottom meets the document bottom.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        // Compared before dividing so fractional pixels still reach exactly 1.
        if self.scroll_y + self.viewport_height >= self.document_height {
            return 1.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

pub fn nav_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAV_SOLID_THRESHOLD_PX
}

/// Vertical offset of the hero background, in percent of its own height.
///
/// Progress runs from the hero's top reaching the viewport top to the hero's
/// bottom reaching the viewport top, so the effect is independent of how
/// long the rest of the document is.
pub fn hero_parallax_percent(scroll_y: f64, hero_top: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    let progress = ((scroll_y - hero_top) / hero_height).clamp(0.0, 1.0);
    progress * HERO_PARALLAX_MAX_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 800.0,
            document_height: 4800.0,
        }
    }

    #[test]
    fn progress_spans_top_to_bottom() {
        assert_eq!(at(0.0).progress(), 0.0);
        assert_eq!(at(2000.0).progress(), 0.5);
        assert_eq!(at(4000.0).progress(), 1.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        assert_eq!(at(-60.0).progress(), 0.0);
        assert_eq!(at(4100.0).progress(), 1.0);
    }

    #[test]
    fn fractional_bottom_is_full_progress() {
        let viewport_height = 1131.9689085764892;
        let scroll_y = 541.071811067318;
        let metrics = ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height: viewport_height + scroll_y,
        };
        assert_eq!(metrics.progress(), 1.0);
    }

    #[test]
    fn short_document_has_no_progress() {
        let metrics = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 900.0,
            document_height: 700.0,
        };
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!nav_is_solid(0.0));
        assert!(!nav_is_solid(50.0));
        assert!(nav_is_solid(50.5));
    }

    #[test]
    fn parallax_is_relative_to_hero() {
        assert_eq!(hero_parallax_percent(0.0, 0.0, 1000.0), 0.0);
        assert_eq!(hero_parallax_percent(500.0, 0.0, 1000.0), 12.5);
        assert_eq!(hero_parallax_percent(1000.0, 0.0, 1000.0), 25.0);
        assert_eq!(hero_parallax_percent(3000.0, 0.0, 1000.0), 25.0);
        assert_eq!(hero_parallax_percent(100.0, 200.0, 1000.0), 0.0);
        assert_eq!(hero_parallax_percent(10.0, 0.0, 0.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_progress_is_monotonic(
            viewport in 300.0f64..2000.0,
            extra in 1.0f64..20000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let document = viewport + extra;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let metrics = |y: f64| ScrollMetrics { scroll_y: y, viewport_height: viewport, document_height: document };
            prop_assert!(metrics(lo * extra).progress() <= metrics(hi * extra).progress());
        }

        #[test]
        fn prop_progress_full_only_at_bottom(
            viewport in 300.0f64..2000.0,
            extra in 1.0f64..20000.0,
            fraction in 0.0f64..0.999,
        ) {
            let document = viewport + extra;
            let metrics = |y: f64| ScrollMetrics { scroll_y: y, viewport_height: viewport, document_height: document };
            prop_assert_eq!(metrics(extra).progress(), 1.0);
            prop_assert!(metrics(fraction * extra).progress() < 1.0);
        }

        #[test]
        fn prop_parallax_within_range(scroll in -1000.0f64..10000.0, top in 0.0f64..500.0, height in 1.0f64..3000.0) {
            let offset = hero_parallax_percent(scroll, top, height);
            prop_assert!((0.0..=HERO_PARALLAX_MAX_PERCENT).contains(&offset));
        }
    }
}
