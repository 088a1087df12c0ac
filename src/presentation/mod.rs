pub mod controller;
pub mod input;
pub mod session;
pub mod timer;

pub use session::presentation_socket;
