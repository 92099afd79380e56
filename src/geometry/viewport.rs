use super::GeometryError;

/// The GPU viewport rectangle in pixels, as handed to `glViewport`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that the viewport has a positive width and height.
    pub fn validate(&self) -> Result<(), GeometryError> {
        GeometryError::check_positive("viewport width", self.width as f64)?;
        GeometryError::check_positive("viewport height", self.height as f64)
    }
}

/// Size of the physical screen in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        GeometryError::check_positive("screen width", self.width as f64)?;
        GeometryError::check_positive("screen height", self.height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_viewport_is_valid() {
        assert_eq!(Viewport::new(-10, 5, 100, 200).validate(), Ok(()));
    }

    #[test]
    fn zero_viewport_height_is_rejected() {
        let err = Viewport::new(0, 0, 100, 0).validate().unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidDimension {
                name: "viewport height",
                value: 0.0
            }
        );
    }

    #[test]
    fn non_finite_screen_size_is_rejected() {
        assert!(ScreenSize::new(f32::NAN, 1920.0).validate().is_err());
        assert!(ScreenSize::new(1080.0, f32::INFINITY).validate().is_err());
        assert!(ScreenSize::new(1080.0, -1.0).validate().is_err());
        assert!(ScreenSize::new(1080.0, 1920.0).validate().is_ok());
    }
}
