pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::{DirStore, MemoryStore};
pub use crate::config::Catalog;
pub use crate::core::{CarouselState, InteractionController, WaitlistStore, WAITLIST_KEY};
pub use crate::domain::model::{
    AddOutcome, CarouselView, Direction, EmailAddress, Feedback, FeedbackCategory, Testimonial,
};
pub use crate::utils::error::{LandingError, Result};

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
