use crate::core::carousel::CarouselState;
use crate::core::waitlist::WaitlistStore;
use crate::domain::model::{AddOutcome, Direction, Feedback};
use crate::domain::ports::{KeyValueStore, RenderSink};

/// Translates user events into store mutations and render requests. Holds
/// no state beyond the injected stores and sink.
pub struct InteractionController<S: KeyValueStore, R: RenderSink> {
    waitlist: WaitlistStore<S>,
    carousel: CarouselState,
    sink: R,
}

impl<S: KeyValueStore, R: RenderSink> InteractionController<S, R> {
    pub fn new(waitlist: WaitlistStore<S>, carousel: CarouselState, sink: R) -> Self {
        Self {
            waitlist,
            carousel,
            sink,
        }
    }

    /// First render after startup, showing the testimonial at index 0.
    pub fn render_initial(&mut self) {
        if let Some(view) = self.carousel.view() {
            self.sink.render_carousel(&view);
        }
    }

    /// Waitlist form submission. Duplicates and failed persists still read
    /// as success to the user; durability never blocks the happy path.
    pub fn submit_waitlist(&mut self, raw_email: &str) {
        let feedback = match self.waitlist.add(raw_email) {
            AddOutcome::Added => Feedback::success("Thanks! We saved your spot on the waitlist."),
            AddOutcome::AlreadyExists => {
                Feedback::success("You are already on the waitlist. Thank you!")
            }
            AddOutcome::InvalidEmail => {
                Feedback::field_error("Please enter a valid email address.")
            }
            AddOutcome::PersistenceFailed => {
                tracing::warn!("Waitlist submission accepted without durable storage");
                Feedback::success("Thanks! We saved your spot on the waitlist.")
            }
        };
        self.sink.render_feedback(&feedback);
    }

    /// Demo-request form submission; captures into the same waitlist and
    /// closes the modal on anything but invalid input.
    pub fn submit_demo_request(&mut self, raw_email: &str) {
        match self.waitlist.add(raw_email) {
            AddOutcome::InvalidEmail => {
                self.sink
                    .render_feedback(&Feedback::field_error(
                        "Please provide a valid email for demo requests.",
                    ));
            }
            outcome => {
                if outcome == AddOutcome::PersistenceFailed {
                    tracing::warn!("Demo request accepted without durable storage");
                }
                self.sink.close_modal();
                self.sink
                    .render_feedback(&Feedback::success("Thanks! We will contact you soon."));
            }
        }
    }

    pub fn advance_carousel(&mut self, direction: Direction) {
        if self.carousel.advance(direction).is_none() {
            return;
        }
        self.render_carousel();
    }

    pub fn jump_carousel(&mut self, index: isize) {
        if self.carousel.set_index(index).is_none() {
            return;
        }
        self.render_carousel();
    }

    fn render_carousel(&mut self) {
        if let Some(view) = self.carousel.view() {
            self.sink.render_carousel(&view);
        }
    }

    pub fn open_modal(&mut self) {
        self.sink.open_modal(None);
    }

    pub fn close_modal(&mut self) {
        self.sink.close_modal();
    }

    /// Pricing CTA: pre-fills the demo form with the selected plan id and
    /// opens the modal.
    pub fn select_plan(&mut self, plan_id: &str) {
        let note = format!("Interested in plan: {}", plan_id);
        self.sink.open_modal(Some(&note));
    }

    pub fn waitlist(&self) -> &WaitlistStore<S> {
        &self.waitlist
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }
}
