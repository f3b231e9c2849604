use crate::domain::model::{CarouselView, Feedback, FeedbackCategory};
use crate::domain::ports::RenderSink;

/// Terminal rendition of the page's render surface. A scrolling terminal
/// has no fade-out, so `clear_after` is informational here; a real page
/// adapter schedules the clear from it.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl RenderSink for TerminalRenderer {
    fn render_carousel(&mut self, view: &CarouselView) {
        println!();
        println!("  \"{}\"", view.testimonial.quote);
        println!(
            "  — {}, {} at {}",
            view.testimonial.name, view.testimonial.role, view.testimonial.company
        );
        let dots: String = (0..view.total)
            .map(|i| if i == view.index { '●' } else { '○' })
            .collect();
        println!("  {}  ({}/{})", dots, view.index + 1, view.total);
    }

    fn render_feedback(&mut self, feedback: &Feedback) {
        match feedback.category {
            FeedbackCategory::Success => println!("✅ {}", feedback.message),
            FeedbackCategory::Error => println!("❌ {}", feedback.message),
        }
    }

    fn open_modal(&mut self, prefill: Option<&str>) {
        match prefill {
            Some(note) => println!("[demo request open: {}]", note),
            None => println!("[demo request open]"),
        }
    }

    fn close_modal(&mut self) {
        println!("[demo request closed]");
    }
}
