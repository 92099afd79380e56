//! Value types shared by the screen projector and the camera mapper.
//!
//! Every type here is a plain `Copy` value. None of the numeric operations
//! validate their inputs, the `validate` methods are explicit precondition
//! checks for callers which want them.

mod error;
mod pixel_rect;
mod viewport;

pub use self::{
    error::GeometryError,
    pixel_rect::PixelRect,
    viewport::{ScreenSize, Viewport},
};
