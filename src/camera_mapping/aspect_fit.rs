/// Which dimension of the scaled-up camera image exactly matches the
/// screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FitAxis {
    /// The image height fills the screen height and the sides are cropped.
    Height,

    /// The image width fills the screen width and the top and bottom are
    /// cropped.
    Width,
}

/// The camera image scaled up to cover the screen while keeping its aspect
/// ratio, centered so the overflow is split evenly between both edges.
///
/// All values are in screen pixels. Screen dimensions must already be
/// rotated into the camera's orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AspectFit {
    pub axis: FitAxis,
    pub video_width: f32,
    pub video_height: f32,

    /// Added to a screen x coordinate to get the scaled-up image x.
    pub offset_x: f32,

    /// Added to a screen y coordinate to get the scaled-up image y.
    pub offset_y: f32,
}

impl AspectFit {
    /// All four dimensions must be positive. Zero dimensions are not
    /// checked and produce infinite or NaN values.
    pub fn compute(
        screen_width: i32,
        screen_height: i32,
        camera_width: i32,
        camera_height: i32,
    ) -> Self {
        let screen_width = screen_width as f32;
        let screen_height = screen_height as f32;
        let video_aspect_ratio = camera_height as f32 / camera_width as f32;
        let screen_aspect_ratio = screen_height / screen_width;

        if video_aspect_ratio < screen_aspect_ratio {
            let video_width = screen_height / video_aspect_ratio;
            Self {
                axis: FitAxis::Height,
                video_width,
                video_height: screen_height,
                offset_x: (video_width - screen_width) / 2.0,
                offset_y: 0.0,
            }
        } else {
            let video_height = screen_width * video_aspect_ratio;
            Self {
                axis: FitAxis::Width,
                video_width: screen_width,
                video_height,
                offset_x: 0.0,
                offset_y: (video_height - screen_height) / 2.0,
            }
        }
    }
}
