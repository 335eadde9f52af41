//! spgen - Generates the code to numerically invert the singular potential
//! of nematic liquid crystal theory
//!
//! The generator derives, from the algebra of traceless symmetric 3×3
//! tensors, the quadrature-accumulation statements and the residual and
//! Jacobian statements used by an external Newton solver to find the
//! Lagrange multiplier tensor Λ corresponding to a target moment tensor.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod codegen;
