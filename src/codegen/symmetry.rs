use super::Monomial;

/// Retains the monomials compatible with the quasi-2D (planar) symmetry
///
/// Under the planar reduction, moments with an odd power of z vanish and
/// the fourth power of z never enters the residual/Jacobian algebra; hence
/// only z-exponents 0 and 2 survive. The relative order of the surviving
/// monomials is preserved (stable filter), keeping their positions valid
/// as array indices of the generated code.
pub fn filter_planar(list: &[Monomial]) -> Vec<Monomial> {
    list.iter()
        .copied()
        .filter(|mono| mono.pz == 0 || mono.pz == 2)
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
