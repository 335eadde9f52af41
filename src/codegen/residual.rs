use super::{find_monomial, Monomial};
use crate::base::dof_tensor_entry;
use crate::StrError;

/// Returns the residual statement for one degree of freedom
///
/// The residual compares the normalized second moment of the tensor entry
/// (i,j) addressed by DOF m against the target moment m(m). The second
/// moment is the monomial x_i·x_j, located by value within the ordered
/// degree-2 list; its position becomes the I2 array index:
///
/// ```text
/// Res(m) = 1 / Z * I2[k] - m(m);
/// ```
///
/// Fails if the monomial was eliminated by the active symmetry reduction.
pub fn residual_expression(m: usize, list_2: &[Monomial]) -> Result<String, StrError> {
    let (i, j) = dof_tensor_entry(m)?;
    let mut mono = Monomial::new();
    mono.raise(i)?;
    mono.raise(j)?;
    let k = find_monomial(list_2, &mono)?;
    Ok(format!("Res({}) = 1 / Z * I2[{}] - m({});", m, k, m))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::residual_expression;
    use crate::codegen::{filter_planar, monomial_list};

    #[test]
    fn residual_expression_works() {
        let list_2 = monomial_list(2);
        assert_eq!(residual_expression(0, &list_2).unwrap(), "Res(0) = 1 / Z * I2[0] - m(0);");
        assert_eq!(residual_expression(1, &list_2).unwrap(), "Res(1) = 1 / Z * I2[2] - m(1);");
        assert_eq!(residual_expression(2, &list_2).unwrap(), "Res(2) = 1 / Z * I2[1] - m(2);");
        assert_eq!(residual_expression(3, &list_2).unwrap(), "Res(3) = 1 / Z * I2[3] - m(3);");
        assert_eq!(residual_expression(4, &list_2).unwrap(), "Res(4) = 1 / Z * I2[4] - m(4);");
    }

    #[test]
    fn residual_expression_quasi_2d_works() {
        let list_2 = filter_planar(&monomial_list(2));
        assert_eq!(residual_expression(0, &list_2).unwrap(), "Res(0) = 1 / Z * I2[0] - m(0);");
        assert_eq!(residual_expression(1, &list_2).unwrap(), "Res(1) = 1 / Z * I2[2] - m(1);");
        assert_eq!(residual_expression(2, &list_2).unwrap(), "Res(2) = 1 / Z * I2[1] - m(2);");
    }

    #[test]
    fn residual_expression_captures_errors() {
        let list_2 = monomial_list(2);
        assert_eq!(residual_expression(5, &list_2).err(), Some("DOF index must be smaller than 5"));
        // DOF 3 addresses the (0,2) entry, whose monomial xz is filtered out
        let filtered = filter_planar(&list_2);
        assert_eq!(
            residual_expression(3, &filtered).err(),
            Some("monomial is not present in the list (eliminated by the symmetry reduction)")
        );
    }
}
