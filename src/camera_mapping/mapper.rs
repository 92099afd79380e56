use crate::geometry::{GeometryError, PixelRect};

use super::{AspectFit, CorrectedRotation, ScreenFrame};

/// Everything the mapper needs to know about one device configuration.
///
/// Screen sizes are in the display's natural orientation. Camera sizes are
/// in the sensor's native landscape orientation. `display_rotation` is a
/// quarter-turn index and `camera_rotation` is in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayGeometry {
    pub screen_width: i32,
    pub screen_height: i32,
    pub camera_width: i32,
    pub camera_height: i32,
    pub display_rotation: i32,
    pub camera_rotation: i32,
}

/// Selects which fields of a [CameraRegion] get computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CameraRegionRequest {
    pub x: bool,
    pub y: bool,
    pub dx: bool,
    pub dy: bool,
}

impl CameraRegionRequest {
    pub const ALL: Self = Self {
        x: true,
        y: true,
        dx: true,
        dy: true,
    };

    pub const ORIGIN: Self = Self {
        x: true,
        y: true,
        dx: false,
        dy: false,
    };

    pub const EXTENT: Self = Self {
        x: false,
        y: false,
        dx: true,
        dy: true,
    };
}

impl Default for CameraRegionRequest {
    fn default() -> Self {
        Self::ALL
    }
}

/// A camera image rectangle where each field is present only if it was
/// requested.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CameraRegion {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub dx: Option<i32>,
    pub dy: Option<i32>,
}

impl CameraRegion {
    /// The full rectangle, if every field was requested.
    pub fn to_rect(self) -> Option<PixelRect> {
        Some(PixelRect::new(self.x?, self.y?, self.dx?, self.dy?))
    }
}

impl DisplayGeometry {
    /// Create a display geometry without checking any dimension.
    pub const fn new(
        screen_width: i32,
        screen_height: i32,
        camera_width: i32,
        camera_height: i32,
        display_rotation: i32,
        camera_rotation: i32,
    ) -> Self {
        Self {
            screen_width,
            screen_height,
            camera_width,
            camera_height,
            display_rotation,
            camera_rotation,
        }
    }

    /// Create a display geometry, rejecting non-positive screen or camera
    /// dimensions.
    pub fn try_new(
        screen_width: i32,
        screen_height: i32,
        camera_width: i32,
        camera_height: i32,
        display_rotation: i32,
        camera_rotation: i32,
    ) -> Result<Self, GeometryError> {
        let geometry = Self::new(
            screen_width,
            screen_height,
            camera_width,
            camera_height,
            display_rotation,
            camera_rotation,
        );
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check that all screen and camera dimensions are positive.
    ///
    /// The mapping functions never call this themselves.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let dimensions = [
            ("screen width", self.screen_width),
            ("screen height", self.screen_height),
            ("camera width", self.camera_width),
            ("camera height", self.camera_height),
        ];
        for &(name, value) in dimensions.iter() {
            GeometryError::check_positive(name, value as f64)?;
        }
        Ok(())
    }

    pub fn corrected_rotation(&self) -> CorrectedRotation {
        CorrectedRotation::from_rotations(
            self.display_rotation,
            self.camera_rotation,
        )
    }

    /// Map a screen rectangle to the matching rectangle in camera pixels.
    pub fn map_rect(&self, rect: PixelRect) -> PixelRect {
        let region = self.map_rect_partial(rect, CameraRegionRequest::ALL);
        PixelRect::new(
            region.x.unwrap_or_default(),
            region.y.unwrap_or_default(),
            region.dx.unwrap_or_default(),
            region.dy.unwrap_or_default(),
        )
    }

    /// Map a screen rectangle to camera pixels, computing only the
    /// requested fields.
    ///
    /// Each field is computed independently, so a requested field has the
    /// same value no matter which other fields are requested.
    pub fn map_rect_partial(
        &self,
        rect: PixelRect,
        request: CameraRegionRequest,
    ) -> CameraRegion {
        let rotation = self.corrected_rotation();
        let frame = rotation.apply(ScreenFrame::new(
            rect,
            self.screen_width,
            self.screen_height,
        ));
        let fit = AspectFit::compute(
            frame.width,
            frame.height,
            self.camera_width,
            self.camera_height,
        );

        log::debug!(
            "Mapping {:?} with {:?}: rotated to {:?}, {:?}",
            rect,
            rotation,
            frame,
            fit
        );

        let camera_width = self.camera_width as f32;
        let camera_height = self.camera_height as f32;
        let scaled_x = frame.rect.x as f32 + fit.offset_x;
        let scaled_y = frame.rect.y as f32 + fit.offset_y;

        CameraRegion {
            x: request
                .x
                .then(|| ((scaled_x / fit.video_width) * camera_width) as i32),
            y: request
                .y
                .then(|| ((scaled_y / fit.video_height) * camera_height) as i32),
            dx: request.dx.then(|| {
                ((frame.rect.dx as f32 / fit.video_width) * camera_width) as i32
            }),
            dy: request.dy.then(|| {
                ((frame.rect.dy as f32 / fit.video_height) * camera_height)
                    as i32
            }),
        }
    }
}

/// Map a screen rectangle to the matching rectangle in camera pixels.
///
/// Screen and camera dimensions must be positive. They are not checked,
/// use [DisplayGeometry::try_new] for a checked alternative.
pub fn map_screen_rect_to_camera(
    rect: PixelRect,
    screen_width: i32,
    screen_height: i32,
    camera_width: i32,
    camera_height: i32,
    display_rotation: i32,
    camera_rotation: i32,
) -> PixelRect {
    DisplayGeometry::new(
        screen_width,
        screen_height,
        camera_width,
        camera_height,
        display_rotation,
        camera_rotation,
    )
    .map_rect(rect)
}
