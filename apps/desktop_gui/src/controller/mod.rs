//! Controller layer: UI events and submission orchestration.

pub mod events;
pub mod orchestration;
