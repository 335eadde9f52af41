//! Implements the generation pipeline: monomials, emitters, and the driver

mod generator;
mod integrals;
mod jacobian;
mod monomial;
mod residual;
mod symmetry;
pub use crate::codegen::generator::*;
pub use crate::codegen::integrals::*;
pub use crate::codegen::jacobian::*;
pub use crate::codegen::monomial::*;
pub use crate::codegen::residual::*;
pub use crate::codegen::symmetry::*;
