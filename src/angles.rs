use crate::types::{DualAxisAngles, SunCoordinates};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Two-axis tracker orientation: tilt equals the zenith angle and
/// `panel_azimuth` is the bearing opposite the sun.
pub fn dual_axis_angles(sun: &SunCoordinates) -> DualAxisAngles {
    DualAxisAngles {
        tilt: sun.zenith_angle,
        panel_azimuth: normalize_angle(sun.azimuth + 180.0),
    }
}
