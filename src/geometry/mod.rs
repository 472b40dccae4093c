//! Vectors and the angles between them

mod three_vector;
pub use three_vector::*;

mod angle;
pub use angle::*;
