use anyhow::Result;
use ar_coords::{
    camera_mapping::{CameraRegionRequest, DisplayGeometry},
    geometry::{PixelRect, ScreenSize, Viewport},
    logging,
    math::{projections::ortho, Mat4, Vec3},
    projection::ScreenProjection,
};

/// Half the side length, in screen pixels, of the region sampled around the
/// projected anchor.
const REGION_HALF_EXTENT: i32 = 64;

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    // A portrait phone with a back camera mounted at 90 degrees.
    let geometry = DisplayGeometry::try_new(1080, 1920, 1280, 720, 0, 90)?;
    let viewport = Viewport::new(0, 0, 1920, 1080);
    let screen_size = ScreenSize::new(
        geometry.screen_width as f32,
        geometry.screen_height as f32,
    );
    viewport.validate()?;
    screen_size.validate()?;

    let projection = ortho(-2.0, 2.0, -1.125, 1.125, -10.0, 10.0);
    let model_view = Mat4::new_translation(&Vec3::new(0.5, -0.25, -1.0));
    let mvp = projection * model_view;

    let anchor = ScreenProjection::compute(
        &mvp,
        &Vec3::zeros(),
        viewport,
        3.0,
        screen_size,
    );
    log::info!(
        "Model anchor projects to screen ({:.1}, {:.1}) at depth {:.3}",
        anchor.screen.x,
        anchor.screen.y,
        anchor.screen.z
    );

    let region = PixelRect::new(
        anchor.screen.x as i32 - REGION_HALF_EXTENT,
        anchor.screen.y as i32 - REGION_HALF_EXTENT,
        REGION_HALF_EXTENT * 2,
        REGION_HALF_EXTENT * 2,
    );
    log::info!(
        "Display needs a {:?} correction of the camera image",
        geometry.corrected_rotation()
    );
    log::info!(
        "Screen region {:?} covers camera region {:?}",
        region,
        geometry.map_rect(region)
    );

    let extent =
        geometry.map_rect_partial(region, CameraRegionRequest::EXTENT);
    log::info!(
        "Camera pixels per screen region: {:?} x {:?}",
        extent.dx,
        extent.dy
    );

    Ok(())
}
