//! Pixel to protocol coordinate transforms

use crate::errors::PlotError;

use super::defaults;

/// Linear interpolation: maps `x` in `x0..x1` onto `u0..u1`.
#[inline]
pub fn lerp(x: f64, x0: f64, x1: f64, u0: f64, u1: f64) -> f64 {
    u0 + ((x - x0) * (u1 - u0)) / (x1 - x0)
}

/// Map `p` in `0..extent` pixels to `0..100`, one decimal digit.
///
/// Used for polygon vertices in the `chd` data series.
pub fn pixel_to_percent(p: f64, extent: u32) -> Result<String, PlotError> {
    let v = scale(p, extent, defaults::PERCENT_MAX)?;
    Ok(format!("{v:.1}"))
}

/// Map `p` in `0..extent` pixels to `0..1`, three decimal digits.
///
/// Used for text marker anchors in `chm`.
pub fn pixel_to_relative(p: f64, extent: u32) -> Result<String, PlotError> {
    let v = scale(p, extent, defaults::RELATIVE_MAX)?;
    Ok(format!("{v:.3}"))
}

fn scale(p: f64, extent: u32, max: f64) -> Result<f64, PlotError> {
    if extent == 0 {
        return Err(PlotError::InvalidDimension {
            axis: "extent",
            value: extent,
        });
    }
    if !p.is_finite() {
        return Err(PlotError::NonFinite {
            what: "coordinate",
            value: p,
        });
    }
    Ok(lerp(p, 0.0, f64::from(extent), 0.0, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_boundaries() {
        assert_eq!(pixel_to_percent(0.0, 300).unwrap(), "0.0");
        assert_eq!(pixel_to_percent(300.0, 300).unwrap(), "100.0");
        assert_eq!(pixel_to_percent(150.0, 300).unwrap(), "50.0");
    }

    #[test]
    fn percent_rounds_to_one_digit() {
        assert_eq!(pixel_to_percent(20.0, 300).unwrap(), "6.7");
        assert_eq!(pixel_to_percent(280.0, 300).unwrap(), "93.3");
    }

    #[test]
    fn percent_outside_canvas_extrapolates() {
        assert_eq!(pixel_to_percent(-30.0, 300).unwrap(), "-10.0");
        assert_eq!(pixel_to_percent(600.0, 300).unwrap(), "200.0");
    }

    #[test]
    fn relative_boundaries() {
        assert_eq!(pixel_to_relative(0.0, 300).unwrap(), "0.000");
        assert_eq!(pixel_to_relative(300.0, 300).unwrap(), "1.000");
        assert_eq!(pixel_to_relative(150.0, 300).unwrap(), "0.500");
        assert_eq!(pixel_to_relative(100.0, 300).unwrap(), "0.333");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(pixel_to_percent(-0.0, 300).unwrap(), "0.0");
        assert_eq!(pixel_to_relative(-0.0, 300).unwrap(), "0.000");
    }

    #[test]
    fn zero_extent_is_an_error() {
        assert_eq!(
            pixel_to_percent(10.0, 0),
            Err(PlotError::InvalidDimension { axis: "extent", value: 0 })
        );
        assert!(pixel_to_relative(10.0, 0).is_err());
    }

    #[test]
    fn non_finite_coordinate_is_an_error() {
        assert!(matches!(
            pixel_to_percent(f64::NAN, 300),
            Err(PlotError::NonFinite { what: "coordinate", .. })
        ));
        assert!(pixel_to_relative(f64::INFINITY, 300).is_err());
    }

    #[test]
    fn lerp_maps_endpoints() {
        assert_eq!(lerp(2.0, 2.0, 4.0, 10.0, 20.0), 10.0);
        assert_eq!(lerp(4.0, 2.0, 4.0, 10.0, 20.0), 20.0);
        assert_eq!(lerp(3.0, 2.0, 4.0, 10.0, 20.0), 15.0);
    }
}
