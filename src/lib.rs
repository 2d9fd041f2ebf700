//! 2d plane vector math kit
//!
//! Build validated plane vectors from cartesian, slice or polar input
//!
//! Or combine them through the pure operation library

pub mod vec_error;
pub mod vec_model;

pub use vec_error::VecError;
pub use vec_model::*;
