use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A width or height which must be strictly positive (and finite, for
    /// floating point sizes) was not.
    #[error("Invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

impl GeometryError {
    pub(crate) fn check_positive(
        name: &'static str,
        value: f64,
    ) -> Result<(), Self> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::InvalidDimension { name, value })
        }
    }
}
