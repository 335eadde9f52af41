use super::Monomial;
use crate::StrError;

/// Defines the two moment degrees handled by the quadrature accumulation
///
/// The degree selects the target accumulation array of the generated code:
/// second moments go into I2 and fourth moments into I4. Any other degree
/// is a defect in the calling code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MomentDegree {
    /// Second-degree moments, accumulated into the I2 array
    Two,

    /// Fourth-degree moments, accumulated into the I4 array
    Four,
}

impl MomentDegree {
    /// Creates a new MomentDegree from the total degree of a monomial
    pub fn new(degree: usize) -> Result<Self, StrError> {
        match degree {
            2 => Ok(MomentDegree::Two),
            4 => Ok(MomentDegree::Four),
            _ => Err("monomial degree must be either 2 or 4"),
        }
    }

    /// Returns the name of the target accumulation array
    pub fn target(&self) -> &'static str {
        match self {
            MomentDegree::Two => "I2",
            MomentDegree::Four => "I4",
        }
    }
}

/// Returns the quadrature-accumulation statement for one monomial
///
/// The statement sums, over all quadrature points q, the product of the
/// monomial's coordinate powers times the orientation weight exp_lambda and
/// the quadrature weight w[q]; e.g., for (2,0,0) at position 0:
///
/// ```text
/// I2[0] += x[q] * x[q] * exp_lambda * w[q];
/// ```
pub fn integral_expression(idx: usize, list: &[Monomial]) -> Result<String, StrError> {
    if idx >= list.len() {
        return Err("monomial index is out of range");
    }
    let mono = &list[idx];
    let degree = MomentDegree::new(mono.degree())?;
    let mut factors = String::new();
    for _ in 0..mono.px {
        factors.push_str("x[q] * ");
    }
    for _ in 0..mono.py {
        factors.push_str("y[q] * ");
    }
    for _ in 0..mono.pz {
        factors.push_str("z[q] * ");
    }
    Ok(format!("{}[{}] += {}exp_lambda * w[q];", degree.target(), idx, factors))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{integral_expression, MomentDegree};
    use crate::codegen::{monomial_list, Monomial};

    #[test]
    fn clone_debug_partial_eq_work() {
        let degree = MomentDegree::Two;
        let degree_clone = degree.clone();
        assert_eq!(format!("{:?}", degree), "Two");
        assert_eq!(degree, degree_clone);
        assert!(MomentDegree::Two != MomentDegree::Four);
    }

    #[test]
    fn moment_degree_new_works() {
        assert_eq!(MomentDegree::new(2), Ok(MomentDegree::Two));
        assert_eq!(MomentDegree::new(4), Ok(MomentDegree::Four));
        assert_eq!(MomentDegree::Two.target(), "I2");
        assert_eq!(MomentDegree::Four.target(), "I4");
    }

    #[test]
    fn moment_degree_new_captures_errors() {
        assert_eq!(MomentDegree::new(0).err(), Some("monomial degree must be either 2 or 4"));
        assert_eq!(MomentDegree::new(3).err(), Some("monomial degree must be either 2 or 4"));
        assert_eq!(MomentDegree::new(6).err(), Some("monomial degree must be either 2 or 4"));
    }

    #[test]
    fn integral_expression_degree_2_works() {
        let list = monomial_list(2);
        assert_eq!(
            integral_expression(0, &list).unwrap(),
            "I2[0] += x[q] * x[q] * exp_lambda * w[q];"
        );
        assert_eq!(
            integral_expression(1, &list).unwrap(),
            "I2[1] += x[q] * y[q] * exp_lambda * w[q];"
        );
        assert_eq!(
            integral_expression(5, &list).unwrap(),
            "I2[5] += z[q] * z[q] * exp_lambda * w[q];"
        );
    }

    #[test]
    fn integral_expression_degree_4_works() {
        let list = monomial_list(4);
        assert_eq!(
            integral_expression(0, &list).unwrap(),
            "I4[0] += x[q] * x[q] * x[q] * x[q] * exp_lambda * w[q];"
        );
        assert_eq!(
            integral_expression(6, &list).unwrap(),
            "I4[6] += x[q] * x[q] * y[q] * z[q] * exp_lambda * w[q];"
        );
        assert_eq!(
            integral_expression(14, &list).unwrap(),
            "I4[14] += z[q] * z[q] * z[q] * z[q] * exp_lambda * w[q];"
        );
    }

    #[test]
    fn integral_expression_captures_errors() {
        let list = monomial_list(2);
        assert_eq!(integral_expression(6, &list).err(), Some("monomial index is out of range"));
        let bad = vec![Monomial { px: 1, py: 1, pz: 1 }];
        assert_eq!(
            integral_expression(0, &bad).err(),
            Some("monomial degree must be either 2 or 4")
        );
    }
}
