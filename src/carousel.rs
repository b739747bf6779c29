//! Carousel index arithmetic.
//!
//! The carousel shows a three-slide window: the active slide flanked by its
//! wrap-around neighbours, which the page renders blurred. Indices handed to
//! [`Carousel::show`] are 1-based like the page's slide numbering.

/// Wrap a raw slide number into `1..=count`.
///
/// Anything past the end restarts at the first slide and anything before the
/// first jumps to the last one. Returns `None` when there are no slides.
pub fn normalize_slide_index(n: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count as isize;
    let index = if n > last {
        1
    } else if n < 1 {
        last
    } else {
        n
    };
    Some(index as usize)
}

/// Zero-based positions of the visible slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideWindow {
    pub active: usize,
    pub previous: usize,
    pub next: usize,
}

/// Class markers one slide should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideMarker {
    pub active: bool,
    pub blurred: bool,
}

impl SlideWindow {
    fn around(index: usize, count: usize) -> Self {
        let active = index - 1;
        let previous = if active == 0 { count - 1 } else { active - 1 };
        let next = if active + 1 == count { 0 } else { active + 1 };
        Self {
            active,
            previous,
            next,
        }
    }

    pub fn marker(&self, slide: usize) -> SlideMarker {
        SlideMarker {
            active: slide == self.active,
            blurred: slide == self.previous || slide == self.next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self { index: 1, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Move to slide `n` (wrapped) and return the resulting window.
    pub fn show(&mut self, n: isize) -> Option<SlideWindow> {
        let index = normalize_slide_index(n, self.count)?;
        self.index = index;
        Some(SlideWindow::around(index, self.count))
    }

    /// Step `delta` slides from the current one.
    pub fn advance(&mut self, delta: isize) -> Option<SlideWindow> {
        self.show((self.index as isize).saturating_add(delta))
    }

    pub fn window(&self) -> Option<SlideWindow> {
        normalize_slide_index(self.index as isize, self.count)
            .map(|index| SlideWindow::around(index, self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(window: &SlideWindow, count: usize) -> Vec<SlideMarker> {
        (0..count).map(|i| window.marker(i)).collect()
    }

    #[test]
    fn normalize_always_in_range() {
        for count in 1..=6usize {
            for n in -10isize..=20 {
                let index = normalize_slide_index(n, count).unwrap();
                assert!((1..=count).contains(&index), "n={} count={}", n, count);
            }
        }
        assert_eq!(normalize_slide_index(3, 0), None);
    }

    #[test]
    fn out_of_range_wraps_to_ends() {
        assert_eq!(normalize_slide_index(6, 5), Some(1));
        assert_eq!(normalize_slide_index(0, 5), Some(5));
        assert_eq!(normalize_slide_index(-3, 5), Some(5));
        assert_eq!(normalize_slide_index(3, 5), Some(3));
    }

    #[test]
    fn window_marks_active_and_two_neighbours() {
        let count = 5;
        let mut carousel = Carousel::new(count);
        for n in 1..=count as isize {
            let window = carousel.show(n).unwrap();
            let marks = markers(&window, count);
            assert_eq!(marks.iter().filter(|m| m.active).count(), 1);
            assert_eq!(marks.iter().filter(|m| m.blurred).count(), 2);

            let active = n as usize - 1;
            assert!(marks[active].active);
            assert!(marks[(active + count - 1) % count].blurred);
            assert!(marks[(active + 1) % count].blurred);
        }
    }

    #[test]
    fn neighbours_wrap_at_edges() {
        let mut carousel = Carousel::new(4);
        let first = carousel.show(1).unwrap();
        assert_eq!((first.previous, first.next), (3, 1));
        let last = carousel.show(4).unwrap();
        assert_eq!((last.previous, last.next), (2, 0));
    }

    #[test]
    fn two_slides_share_a_single_neighbour() {
        let mut carousel = Carousel::new(2);
        let window = carousel.show(1).unwrap();
        let marks = markers(&window, 2);
        assert!(marks[0].active && !marks[0].blurred);
        assert!(marks[1].blurred && !marks[1].active);
    }

    #[test]
    fn single_slide_is_its_own_neighbour() {
        let mut carousel = Carousel::new(1);
        let window = carousel.advance(1).unwrap();
        assert_eq!(window.marker(0), SlideMarker { active: true, blurred: true });
    }

    #[test]
    fn advance_cycles_both_directions() {
        let mut carousel = Carousel::new(3);
        carousel.show(1);
        let visited: Vec<usize> = (0..4)
            .map(|_| {
                carousel.advance(1);
                carousel.index()
            })
            .collect();
        assert_eq!(visited, vec![2, 3, 1, 2]);

        carousel.show(1);
        carousel.advance(-1);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn huge_steps_wrap_to_the_ends() {
        let mut carousel = Carousel::new(3);
        carousel.show(3);
        assert_eq!(carousel.advance(isize::MAX).map(|w| w.active), Some(0));
        assert_eq!(carousel.index(), 1);

        assert_eq!(carousel.advance(isize::MIN).map(|w| w.active), Some(2));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.show(1), None);
        assert_eq!(carousel.advance(1), None);
        assert_eq!(carousel.window(), None);
    }
}
