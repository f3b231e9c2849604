use crate::domain::model::{CarouselView, Direction, Testimonial};

/// Current position in the testimonial rotation. The sequence is read-only;
/// only the index moves, and it is never persisted.
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    testimonials: Vec<Testimonial>,
    current: usize,
}

impl CarouselState {
    /// Binds the testimonial sequence, starting at index 0. An empty
    /// sequence leaves the carousel inactive.
    pub fn new(testimonials: Vec<Testimonial>) -> Self {
        Self {
            testimonials,
            current: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.testimonials.is_empty()
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current)
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.testimonials.get(self.current)
    }

    /// Moves one step with modular wraparound; returns the new index, or
    /// `None` when the carousel is inactive.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let len = self.testimonials.len();
        if len == 0 {
            return None;
        }
        self.current = match direction {
            Direction::Next => (self.current + 1) % len,
            Direction::Previous => (self.current + len - 1) % len,
        };
        Some(self.current)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.advance(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.advance(Direction::Previous)
    }

    /// Direct jump (indicator dots): clamps into range instead of wrapping.
    pub fn set_index(&mut self, index: isize) -> Option<usize> {
        if self.testimonials.is_empty() {
            return None;
        }
        let max = self.testimonials.len() as isize - 1;
        self.current = index.clamp(0, max) as usize;
        Some(self.current)
    }

    pub fn view(&self) -> Option<CarouselView> {
        self.current().map(|testimonial| CarouselView {
            testimonial: testimonial.clone(),
            index: self.current,
            total: self.testimonials.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonials(count: usize) -> Vec<Testimonial> {
        (0..count)
            .map(|i| Testimonial {
                name: format!("Person {}", i),
                role: "Role".to_string(),
                company: format!("Company {}", i),
                quote: format!("Quote {}", i),
            })
            .collect()
    }

    #[test]
    fn test_next_wraps_around() {
        let mut carousel = CarouselState::new(testimonials(3));

        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.current().unwrap().name, "Person 0");
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut carousel = CarouselState::new(testimonials(3));

        assert_eq!(carousel.previous(), Some(2));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = CarouselState::new(testimonials(5));
        carousel.set_index(2);

        for _ in 0..5 {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn test_set_index_clamps_at_both_ends() {
        let mut carousel = CarouselState::new(testimonials(3));

        assert_eq!(carousel.set_index(-1), Some(0));
        assert_eq!(carousel.set_index(3), Some(2));
        assert_eq!(carousel.set_index(1), Some(1));
    }

    #[test]
    fn test_empty_carousel_is_inactive() {
        let mut carousel = CarouselState::new(Vec::new());

        assert!(!carousel.is_active());
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.previous(), None);
        assert_eq!(carousel.set_index(0), None);
        assert_eq!(carousel.current(), None);
        assert!(carousel.view().is_none());
    }

    #[test]
    fn test_view_carries_position_data() {
        let mut carousel = CarouselState::new(testimonials(3));
        carousel.next();

        let view = carousel.view().unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.total, 3);
        assert_eq!(view.testimonial.name, "Person 1");
    }
}
