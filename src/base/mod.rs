//! Implements the base data for the singular potential code generation

mod constants;
mod nematic_dim;
pub use crate::base::constants::*;
pub use crate::base::nematic_dim::*;
