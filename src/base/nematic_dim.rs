use super::{N_DOF_FULL_3D, N_DOF_QUASI_2D};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Defines the symmetry reduction of the nematic tensor problem
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum NematicDim {
    /// Full three-dimensional tensor with five degrees of freedom
    #[serde(rename = "full_3D")]
    Full3d,

    /// Planar (uniaxial) reduction with three degrees of freedom
    ///
    /// Only monomials with z-exponent 0 or 2 survive this symmetry.
    #[serde(rename = "quasi_2D")]
    Quasi2d,
}

impl NematicDim {
    /// Creates a new NematicDim from the external mode name
    ///
    /// Accepts `full_3D` or `quasi_2D` (the spellings of the original tool).
    pub fn new(name: &str) -> Result<Self, StrError> {
        match name {
            "full_3D" => Ok(NematicDim::Full3d),
            "quasi_2D" => Ok(NematicDim::Quasi2d),
            _ => Err("dim must be either full_3D or quasi_2D"),
        }
    }

    /// Returns the number of independent degrees of freedom
    pub fn n_dof(&self) -> usize {
        match self {
            NematicDim::Full3d => N_DOF_FULL_3D,
            NematicDim::Quasi2d => N_DOF_QUASI_2D,
        }
    }

    /// Indicates whether the monomial lists must be filtered by the planar symmetry
    pub fn filters_monomials(&self) -> bool {
        match self {
            NematicDim::Full3d => false,
            NematicDim::Quasi2d => true,
        }
    }
}

impl FromStr for NematicDim {
    type Err = StrError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NematicDim::new(name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::NematicDim;

    #[test]
    fn clone_debug_partial_eq_work() {
        let dim = NematicDim::Full3d;
        let dim_clone = dim.clone();
        assert_eq!(format!("{:?}", dim), "Full3d");
        assert_eq!(dim, dim_clone);
        assert!(NematicDim::Full3d != NematicDim::Quasi2d);
    }

    #[test]
    fn serde_works() {
        let dim = NematicDim::Quasi2d;
        let json = serde_json::to_string(&dim).unwrap();
        assert_eq!(json, "\"quasi_2D\"");
        let back: NematicDim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dim);
        let full: NematicDim = serde_json::from_str("\"full_3D\"").unwrap();
        assert_eq!(full, NematicDim::Full3d);
    }

    #[test]
    fn new_works() {
        assert_eq!(NematicDim::new("full_3D"), Ok(NematicDim::Full3d));
        assert_eq!(NematicDim::new("quasi_2D"), Ok(NematicDim::Quasi2d));
        assert_eq!("full_3D".parse(), Ok(NematicDim::Full3d));
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(NematicDim::new("full_2D").err(), Some("dim must be either full_3D or quasi_2D"));
        assert_eq!(NematicDim::new("").err(), Some("dim must be either full_3D or quasi_2D"));
    }

    #[test]
    fn n_dof_works() {
        assert_eq!(NematicDim::Full3d.n_dof(), 5);
        assert_eq!(NematicDim::Quasi2d.n_dof(), 3);
        assert_eq!(NematicDim::Full3d.filters_monomials(), false);
        assert_eq!(NematicDim::Quasi2d.filters_monomials(), true);
    }
}
