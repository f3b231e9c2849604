// Adapters layer: concrete implementations of the domain ports (local
// storage, terminal rendering).

pub mod storage;

#[cfg(feature = "cli")]
pub mod terminal;
