pub mod actions;
mod attachments;
mod controller;

pub use controller::*;
