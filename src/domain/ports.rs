use crate::domain::model::{CarouselView, Feedback};
use crate::utils::error::Result;

/// Local key-value persistence. One writer per key within a process; not
/// exclusive across processes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Presentation boundary; the controller pushes render requests through it.
pub trait RenderSink {
    fn render_carousel(&mut self, view: &CarouselView);
    fn render_feedback(&mut self, feedback: &Feedback);
    /// `prefill` carries a note for the demo-request form (e.g. pricing
    /// interest) that the surface should pre-populate.
    fn open_modal(&mut self, prefill: Option<&str>);
    fn close_modal(&mut self);
}
