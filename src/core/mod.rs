pub mod carousel;
pub mod controller;
pub mod waitlist;

pub use carousel::CarouselState;
pub use controller::InteractionController;
pub use waitlist::{WaitlistStore, WAITLIST_KEY};
