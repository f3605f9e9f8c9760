pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

/// Right ascension advances 15 degrees per hour of sidereal time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCMIN_PER_DEGREE: f64 = 60.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// One mean sidereal day (23h 56m 4.0905s) in SI seconds.
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;

/// Allowed deviation of a stored direction vector from unit length.
pub const UNIT_VECTOR_TOLERANCE: f64 = 1e-6;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
