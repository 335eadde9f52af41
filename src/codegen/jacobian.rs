use super::{find_monomial, Monomial};
use crate::base::dof_tensor_entry;
use crate::StrError;

/// Returns the Jacobian statement for a pair of degrees of freedom
///
/// The entry (m, n) is the derivative of residual m with respect to the
/// Λ-component addressed by n. For an off-diagonal column (n ≥ 2) it is
/// twice the covariance between the quadratic forms of the two tensor
/// entries:
///
/// ```text
/// Jac(m, n) = 2 / Z * (I4[a] - 1 / Z * I2[b]*I2[c]);
/// ```
///
/// For a diagonal column (n < 2) the trace constraint makes the (2,2) entry
/// the negative sum of the other two diagonal entries; substituting it
/// before differentiating collapses the derivative into a single closed
/// form pivoted on the z² moments:
///
/// ```text
/// Jac(m, n) = 1 / Z * (I4[a] - I4[d] - 1 / Z * I2[b]*(I2[c] - I2[e]));
/// ```
///
/// where d and e locate the z-reference monomials built from (0,0,2).
/// Fails if any referenced monomial was eliminated by the active symmetry
/// reduction.
pub fn jacobian_expression(m: usize, n: usize, list_4: &[Monomial], list_2: &[Monomial]) -> Result<String, StrError> {
    let (i_m, j_m) = dof_tensor_entry(m)?;
    let (i_n, j_n) = dof_tensor_entry(n)?;

    let mut mono_4 = Monomial::new();
    mono_4.raise(i_m)?;
    mono_4.raise(j_m)?;
    mono_4.raise(i_n)?;
    mono_4.raise(j_n)?;

    let mut mono_2_row = Monomial::new();
    mono_2_row.raise(i_m)?;
    mono_2_row.raise(j_m)?;

    let mut mono_2_col = Monomial::new();
    mono_2_col.raise(i_n)?;
    mono_2_col.raise(j_n)?;

    let i4_idx = find_monomial(list_4, &mono_4)?;
    let i21_idx = find_monomial(list_2, &mono_2_row)?;
    let i22_idx = find_monomial(list_2, &mono_2_col)?;

    // columns 0 and 1 address the two independent diagonal entries
    if n >= 2 {
        return Ok(format!(
            "Jac({}, {}) = 2 / Z * (I4[{}] - 1 / Z * I2[{}]*I2[{}]);",
            m, n, i4_idx, i21_idx, i22_idx
        ));
    }

    let mut mono_4_diag = Monomial { px: 0, py: 0, pz: 2 };
    mono_4_diag.raise(i_m)?;
    mono_4_diag.raise(j_m)?;
    let mono_2_diag = Monomial { px: 0, py: 0, pz: 2 };

    let i4_idx_diag = find_monomial(list_4, &mono_4_diag)?;
    let i2_idx_diag = find_monomial(list_2, &mono_2_diag)?;

    Ok(format!(
        "Jac({}, {}) = 1 / Z * (I4[{}] - I4[{}] - 1 / Z * I2[{}]*(I2[{}] - I2[{}]));",
        m, n, i4_idx, i4_idx_diag, i21_idx, i22_idx, i2_idx_diag
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
