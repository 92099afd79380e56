//! Mapping of screen-space regions onto the native camera image.
//!
//! Camera dimensions are always given in the sensor's native landscape
//! orientation. Screen coordinates have their origin in the top left, as
//! do the camera image coordinates this module produces.
//!
//! The mapping happens in three steps:
//!
//!   1. Rotate the screen rectangle (and the screen size) by the number of
//!      quarter turns between the display and the camera sensor. See
//!      [CorrectedRotation].
//!   2. Scale the camera image up until it covers the screen, cropping the
//!      overflow evenly on both sides. See [AspectFit].
//!   3. Scale the rectangle from the scaled-up image back down to camera
//!      pixels, truncating toward zero.

mod aspect_fit;
mod mapper;
mod rotation;

pub use self::{
    aspect_fit::{AspectFit, FitAxis},
    mapper::{
        map_screen_rect_to_camera, CameraRegion, CameraRegionRequest,
        DisplayGeometry,
    },
    rotation::{CorrectedRotation, ScreenFrame},
};
