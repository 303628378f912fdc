//! Carousel state machine - the core of the viewer
//!
//! A carousel is an ordered, fixed-size track of slides with one active
//! slide at a time, mirrored by a row of dot indicators. The only mutable
//! state is the active index; slide offsets are derived from it and the
//! dot row is re-synced after every transition.

/// One indicator in the dot row.
///
/// Dots are synthesized 1:1 with slides at construction and never
/// added or removed afterwards. Exactly one dot is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Index of the slide this dot represents
    pub slide_index: usize,
    /// Whether this dot's slide is the active one
    pub active: bool,
}

/// State for the slide track and dot row.
///
/// Invariant: `0 <= current < count` for every reachable state, and the
/// dot at `current` is the single active dot.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// The active slide index - the sole mutable state of the carousel
    current: usize,
    /// Number of slides, fixed at construction
    count: usize,
    /// Dot row, one per slide
    dots: Vec<Dot>,
}

impl CarouselState {
    /// Create a carousel over `count` slides with slide 0 active.
    ///
    /// `count` must be at least 1; an empty slide set is rejected at
    /// startup before the model is built (see `cli::StartupConfig`).
    pub fn new(count: usize) -> Self {
        debug_assert!(count >= 1, "carousel requires at least one slide");
        let mut carousel = Self {
            current: 0,
            count,
            dots: (0..count)
                .map(|i| Dot {
                    slide_index: i,
                    active: false,
                })
                .collect(),
        };
        carousel.sync_dots();
        carousel
    }

    /// Create a carousel starting at a specific slide (from `--slide`).
    pub fn starting_at(count: usize, start: usize) -> Self {
        let mut carousel = Self::new(count);
        carousel.go_to(start);
        carousel
    }

    /// The active slide index
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides in the track
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The dot row
    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Advance to the next slide, wrapping from the last back to the first
    pub fn next(&mut self) {
        self.current = if self.current == self.count - 1 {
            0
        } else {
            self.current + 1
        };
        self.sync_dots();
    }

    /// Go back to the previous slide, wrapping from the first to the last
    pub fn prev(&mut self) {
        self.current = if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        };
        self.sync_dots();
    }

    /// Jump directly to a slide (dot clicks, Home/End).
    ///
    /// Precondition: `slide < count`. Dot clicks always satisfy this
    /// because dots are synthesized 1:1 with slides; there is no clamping
    /// for other callers.
    pub fn go_to(&mut self, slide: usize) {
        self.current = slide;
        self.sync_dots();
    }

    /// Horizontal offset of slide `index` in percent of the slide width.
    ///
    /// The active slide sits at 0, slides after it at +100, +200, ... and
    /// slides before it at -100, -200, ..., forming one continuous strip.
    #[inline]
    pub fn offset_percent(&self, index: usize) -> i32 {
        100 * (index as i32 - self.current as i32)
    }

    /// Offsets for every slide in track order
    pub fn offsets(&self) -> Vec<i32> {
        (0..self.count).map(|i| self.offset_percent(i)).collect()
    }

    /// Re-sync the dot row with the active index.
    ///
    /// Called after every transition. Clears every dot, then activates the
    /// one whose slide index matches `current`. Idempotent: calling it
    /// again without a transition changes nothing.
    pub fn sync_dots(&mut self) {
        for dot in &mut self.dots {
            dot.active = false;
        }
        self.dots[self.current].active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_dots(c: &CarouselState) -> Vec<usize> {
        c.dots()
            .iter()
            .filter(|d| d.active)
            .map(|d| d.slide_index)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let c = CarouselState::new(3);
        assert_eq!(c.current(), 0);
        assert_eq!(c.offsets(), vec![0, 100, 200]);
        assert_eq!(active_dots(&c), vec![0]);
    }

    #[test]
    fn test_next_wraps_at_end() {
        let mut c = CarouselState::new(3);
        c.go_to(2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_prev_wraps_at_start() {
        let mut c = CarouselState::new(3);
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for start in 0..4 {
            let mut c = CarouselState::starting_at(4, start);
            c.next();
            c.prev();
            assert_eq!(c.current(), start);
            c.prev();
            c.next();
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn test_single_slide_track() {
        let mut c = CarouselState::new(1);
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 0);
        assert_eq!(active_dots(&c), vec![0]);
    }

    #[test]
    fn test_exactly_one_active_dot_and_zero_offset() {
        let mut c = CarouselState::new(5);
        for _ in 0..7 {
            c.next();
            let zero_offsets: Vec<usize> = (0..c.count())
                .filter(|&i| c.offset_percent(i) == 0)
                .collect();
            assert_eq!(zero_offsets, vec![c.current()]);
            assert_eq!(active_dots(&c), vec![c.current()]);
        }
    }

    #[test]
    fn test_sync_dots_is_idempotent() {
        let mut c = CarouselState::new(3);
        c.next();
        let offsets = c.offsets();
        let dots = c.dots().to_vec();
        c.sync_dots();
        assert_eq!(c.offsets(), offsets);
        assert_eq!(c.dots(), &dots[..]);
    }

    #[test]
    fn test_go_to_matches_dot_index() {
        let mut c = CarouselState::new(4);
        for i in 0..4 {
            c.go_to(i);
            assert_eq!(c.offset_percent(i), 0);
            assert_eq!(active_dots(&c), vec![i]);
        }
    }

    #[test]
    fn test_three_slide_walkthrough() {
        let mut c = CarouselState::new(3);
        assert_eq!(c.offsets(), vec![0, 100, 200]);

        c.next();
        assert_eq!(c.current(), 1);
        assert_eq!(c.offsets(), vec![-100, 0, 100]);

        c.next();
        assert_eq!(c.current(), 2);
        assert_eq!(c.offsets(), vec![-200, -100, 0]);

        c.next();
        assert_eq!(c.current(), 0);
        assert_eq!(c.offsets(), vec![0, 100, 200]);
    }
}
