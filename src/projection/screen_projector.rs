use crate::{
    geometry::{ScreenSize, Viewport},
    math::{Mat4, Vec3, Vec4},
};

/// Every intermediate stage of projecting one model-space point.
///
/// # Stages
///
///   - `clip`: `mvp * (x, y, z, 1)`
///   - `ndc`: `clip / clip.w`, so x/y/z are in [-1, 1] for visible points
///   - `window`: NDC scaled into the viewport, z in [0, 1]
///   - `screen`: window coordinates rotated into portrait screen pixels
///
/// The portrait rotation always assumes the same device orientation. It
/// does not look at the display rotation the camera mapper uses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenProjection {
    pub clip: Vec4,
    pub ndc: Vec4,
    pub window: Vec3,
    pub screen: Vec3,
}

impl ScreenProjection {
    /// Run the full projection pipeline for `point`.
    ///
    /// The caller must ensure the clip-space `w` is non-zero. A zero `w`
    /// is not special-cased and yields infinite or NaN coordinates.
    ///
    /// `screen_scale` does not take part in the arithmetic. It is accepted
    /// so callers can pass the platform's display density alongside the
    /// other screen metrics, and it is reported in the trace log.
    pub fn compute(
        mvp: &Mat4,
        point: &Vec3,
        viewport: Viewport,
        screen_scale: f32,
        screen_size: ScreenSize,
    ) -> Self {
        log::trace!(
            "Projecting {:?} with viewport {:?}, screen size {:?}, screen scale {}",
            point,
            viewport,
            screen_size,
            screen_scale
        );

        let homogeneous = Vec4::new(point.x, point.y, point.z, 1.0);
        let clip = mvp * homogeneous;
        let ndc = clip / clip.w;

        let vp_x = viewport.x as f32;
        let vp_y = viewport.y as f32;
        let vp_width = viewport.width as f32;
        let vp_height = viewport.height as f32;

        // bring to [0,1] and scale to the viewport
        let window = Vec3::new(
            (ndc.x + 1.0) / 2.0 * vp_width + vp_x,
            (ndc.y + 1.0) / 2.0 * vp_height + vp_y,
            (ndc.z + 1.0) / 2.0,
        );

        // The divisor is the viewport width, not the screen width.
        let aspect_ratio = screen_size.height / vp_width;

        let screen = Vec3::new(
            window.y * aspect_ratio,
            (vp_width - window.x) * aspect_ratio,
            window.z,
        );

        log::trace!(
            "clip {:?} -> ndc {:?} -> window {:?} -> screen {:?}",
            clip,
            ndc,
            window,
            screen
        );

        Self {
            clip,
            ndc,
            window,
            screen,
        }
    }
}

/// Project a model-space point to portrait screen pixel coordinates.
///
/// See [ScreenProjection::compute] for the stages and preconditions.
pub fn project_to_screen(
    mvp: &Mat4,
    point: &Vec3,
    viewport: Viewport,
    screen_scale: f32,
    screen_size: ScreenSize,
) -> Vec3 {
    ScreenProjection::compute(mvp, point, viewport, screen_scale, screen_size)
        .screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SCREEN: ScreenSize = ScreenSize::new(1080.0, 1920.0);

    #[test]
    fn origin_lands_in_viewport_center() {
        let projection = ScreenProjection::compute(
            &Mat4::identity(),
            &Vec3::zeros(),
            Viewport::new(0, 0, 100, 200),
            1.0,
            SCREEN,
        );

        assert_eq!(projection.window, Vec3::new(50.0, 100.0, 0.5));

        let aspect_ratio = 1920.0 / 100.0;
        assert_relative_eq!(projection.screen.x, 100.0 * aspect_ratio);
        assert_relative_eq!(projection.screen.y, (100.0 - 50.0) * aspect_ratio);
        assert_relative_eq!(projection.screen.z, 0.5);
    }

    #[test]
    fn viewport_origin_offsets_window_coordinates() {
        let projection = ScreenProjection::compute(
            &Mat4::identity(),
            &Vec3::new(1.0, 1.0, 1.0),
            Viewport::new(10, 20, 100, 200),
            1.0,
            SCREEN,
        );

        assert_eq!(projection.window, Vec3::new(110.0, 220.0, 1.0));

        // the flipped axis measures from the viewport width, so a point
        // right of the viewport ends up at a negative screen y
        let aspect_ratio = 1920.0 / 100.0;
        assert_relative_eq!(projection.screen.x, 220.0 * aspect_ratio);
        assert_relative_eq!(projection.screen.y, -10.0 * aspect_ratio);
    }

    #[test]
    fn perspective_divide_applies_to_every_component() {
        let mut mvp = Mat4::identity();
        mvp[(3, 3)] = 2.0;

        let projection = ScreenProjection::compute(
            &mvp,
            &Vec3::new(1.0, -1.0, 1.0),
            Viewport::new(0, 0, 100, 200),
            1.0,
            SCREEN,
        );

        assert_eq!(projection.clip, Vec4::new(1.0, -1.0, 1.0, 2.0));
        assert_eq!(projection.ndc, Vec4::new(0.5, -0.5, 0.5, 1.0));
    }

    #[test]
    fn zero_w_propagates_non_finite_values() {
        let mut mvp = Mat4::identity();
        mvp[(3, 3)] = 0.0;

        let screen = project_to_screen(
            &mvp,
            &Vec3::new(0.0, 1.0, 0.0),
            Viewport::new(0, 0, 100, 200),
            1.0,
            SCREEN,
        );

        assert!(screen.x.is_infinite());
        assert!(screen.y.is_nan());
        assert!(screen.z.is_nan());
    }

    #[test]
    fn screen_scale_does_not_change_the_result() {
        let mvp = crate::math::projections::ortho(
            -2.0, 2.0, -4.0, 4.0, -1.0, 1.0,
        );
        let point = Vec3::new(0.5, 1.5, 0.25);
        let viewport = Viewport::new(0, 0, 1080, 1920);

        assert_eq!(
            project_to_screen(&mvp, &point, viewport, 1.0, SCREEN),
            project_to_screen(&mvp, &point, viewport, 3.5, SCREEN)
        );
    }
}
