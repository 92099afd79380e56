pub type Mat4 = nalgebra::Matrix4<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Vec4 = nalgebra::Vector4<f32>;

pub mod projections {
    use super::Mat4;

    /// Build an orthographic projection matrix which transforms the given
    /// coordinate bounds to the OpenGL view volume.
    /// e.g. Input Values will be bounded by:
    ///  - x in [left, right]
    ///  - y in [bottom, top]
    ///  - z in [near, far]
    ///
    /// Output coordinates will be transformed to:
    ///  - left -> -1.0, right -> 1.0
    ///  - bottom -> -1.0, top -> 1.0
    ///  - z is scaled by 2 / (near - far) and offset by
    ///    (far + near) / (far - near)
    ///
    /// The returned matrix is column-major like every nalgebra matrix, so
    /// `as_slice()` yields the translation terms at indices 12, 13 and 14.
    ///
    /// Degenerate bounds (`right == left`, etc.) are not checked, the
    /// affected entries become infinite or NaN.
    pub fn ortho(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let mh = 2.0 / (right - left);
        let bh = -(right + left) / (right - left);
        let mv = 2.0 / (top - bottom);
        let bv = -(top + bottom) / (top - bottom);
        let mz = 2.0 / (near - far);
        let bz = (far + near) / (far - near);
        Mat4::new(
            mh, 0.0, 0.0, bh, //
            0.0, mv, 0.0, bv, //
            0.0, 0.0, mz, bz, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

}
