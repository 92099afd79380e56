//! Projection of model-space points onto the device screen.

mod screen_projector;

pub use self::screen_projector::{project_to_screen, ScreenProjection};
