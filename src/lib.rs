//! Coordinate mapping between model space, the device screen and the camera
//! image for augmented reality rendering.
//!
//! Every operation is a pure function over `Copy` values. Inputs are not
//! validated on the numeric path: zero `w` in clip space, zero dimensions
//! and equal clip bounds produce infinite or NaN values. Use the explicit
//! `validate` / `try_new` checks where that matters.

pub mod camera_mapping;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod projection;
