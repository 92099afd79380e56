use crate::geometry::PixelRect;

/// A rectangle in screen pixels along with the size of the screen it lives
/// on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScreenFrame {
    pub rect: PixelRect,
    pub width: i32,
    pub height: i32,
}

impl ScreenFrame {
    #[inline]
    pub const fn new(rect: PixelRect, width: i32, height: i32) -> Self {
        Self {
            rect,
            width,
            height,
        }
    }
}

/// The clockwise rotation which brings the camera image upright on the
/// display in its current orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CorrectedRotation {
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl CorrectedRotation {
    /// Compute the corrected rotation.
    ///
    /// `display_rotation` is the platform's quarter-turn index for the
    /// display (0, 1, 2, 3). `camera_rotation` is the sensor orientation
    /// in degrees. Any integers are accepted, both wrap modulo 360 degrees
    /// and angles between quarter turns round down.
    pub fn from_rotations(display_rotation: i32, camera_rotation: i32) -> Self {
        let degrees = (display_rotation as i64 * 90 - camera_rotation as i64)
            .rem_euclid(360);
        match degrees / 90 {
            0 => CorrectedRotation::None,
            1 => CorrectedRotation::Clockwise90,
            2 => CorrectedRotation::Clockwise180,
            _ => CorrectedRotation::Clockwise270,
        }
    }

    /// The number of clockwise quarter turns, always in 0..=3.
    pub fn quarter_turns(self) -> u8 {
        match self {
            CorrectedRotation::None => 0,
            CorrectedRotation::Clockwise90 => 1,
            CorrectedRotation::Clockwise180 => 2,
            CorrectedRotation::Clockwise270 => 3,
        }
    }

    /// True when the rotation exchanges the screen's width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            CorrectedRotation::Clockwise90 | CorrectedRotation::Clockwise270
        )
    }

    /// Rotate a screen frame into the camera's orientation.
    pub fn apply(self, frame: ScreenFrame) -> ScreenFrame {
        match self {
            CorrectedRotation::None => frame,
            CorrectedRotation::Clockwise90 => rotate_90(frame),
            CorrectedRotation::Clockwise180 => rotate_180(frame),
            CorrectedRotation::Clockwise270 => rotate_270(frame),
        }
    }
}

/// `(x, y) -> (height - y, x)`, extents and screen size swapped.
fn rotate_90(frame: ScreenFrame) -> ScreenFrame {
    let ScreenFrame {
        rect,
        width,
        height,
    } = frame;
    ScreenFrame::new(
        PixelRect::new(height - rect.y, rect.x, rect.dy, rect.dx),
        height,
        width,
    )
}

/// `(x, y) -> (width - x, height - y)`, extents and screen size unchanged.
fn rotate_180(frame: ScreenFrame) -> ScreenFrame {
    let ScreenFrame {
        rect,
        width,
        height,
    } = frame;
    ScreenFrame::new(
        PixelRect::new(width - rect.x, height - rect.y, rect.dx, rect.dy),
        width,
        height,
    )
}

/// `(x, y) -> (y, width - x)`, extents and screen size swapped.
fn rotate_270(frame: ScreenFrame) -> ScreenFrame {
    let ScreenFrame {
        rect,
        width,
        height,
    } = frame;
    ScreenFrame::new(
        PixelRect::new(rect.y, width - rect.x, rect.dy, rect.dx),
        height,
        width,
    )
}
