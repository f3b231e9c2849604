// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde; concrete storage and rendering live in adapters.

pub mod model;
pub mod ports;

pub use model::{
    AddOutcome, CarouselView, Direction, EmailAddress, Feature, Feedback, FeedbackCategory,
    PricingPlan, Testimonial,
};
pub use ports::{KeyValueStore, RenderSink};
