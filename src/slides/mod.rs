pub mod deck;
pub mod types;

pub use types::{SlideData, SlideKind};
