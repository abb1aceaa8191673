pub mod gesture;
pub mod params;
pub mod points;
pub mod selection;
pub mod transform;
