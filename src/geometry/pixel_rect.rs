/// Integer pixel rectangle with a top-left origin.
///
/// `dx` and `dy` are the extent of the rectangle, not the far corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    /// A rectangle anchored at the origin covering `width` x `height`.
    #[inline]
    pub const fn full(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_starts_at_origin() {
        assert_eq!(PixelRect::full(1280, 720), PixelRect::new(0, 0, 1280, 720));
    }
}
