pub mod components;
pub mod contour;
pub mod morphology;
pub mod segment;

pub use contour::{external_contours, Contour};
pub use segment::{segment_vegetation, VegetationMask};
