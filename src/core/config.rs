pub const LOW_TOLERANCE: f64 = 1e-6;
pub const MEDIUM_TOLERANCE: f64 = 1e-5;
pub const HIGH_TOLERANCE: f64 = 1e-4;
pub const VERY_HIGH_TOLERANCE: f64 = 1e-3;

pub const DEFAULT_ELLIPSE_POINT_COUNT: usize = 32;
pub const MIN_POLYGON_POINT_COUNT: usize = 3;
