pub mod angles;
pub mod error;
pub mod sunpos;
pub mod types;

pub use angles::{deg_to_rad, dual_axis_angles, normalize_angle, rad_to_deg};

pub use error::{Error, Result};

pub use sunpos::{
    decimal_hours, ecliptic_coordinates, elapsed_julian_days, equatorial_coordinates,
    julian_day_number, sun_position, topocentric_coordinates, ASTRONOMICAL_UNIT,
    EARTH_MEAN_RADIUS, J2000_JULIAN_DAY, RAD,
};

pub use types::{
    DualAxisAngles, EclipticCoordinates, EquatorialCoordinates, Instant, Location,
    SunCoordinates,
};
