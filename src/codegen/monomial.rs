use crate::StrError;
use serde::{Deserialize, Serialize};

/// Represents a monomial of the three spatial coordinates by its exponents
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Monomial {
    /// Exponent of the x-coordinate
    pub px: usize,

    /// Exponent of the y-coordinate
    pub py: usize,

    /// Exponent of the z-coordinate
    pub pz: usize,
}

impl Monomial {
    /// Creates a new monomial with all exponents equal to zero
    pub fn new() -> Self {
        Monomial { px: 0, py: 0, pz: 0 }
    }

    /// Returns the total degree (the sum of all exponents)
    pub fn degree(&self) -> usize {
        self.px + self.py + self.pz
    }

    /// Increments the exponent of a coordinate (0 = x, 1 = y, 2 = z)
    pub fn raise(&mut self, coord: usize) -> Result<(), StrError> {
        match coord {
            0 => self.px += 1,
            1 => self.py += 1,
            2 => self.pz += 1,
            _ => return Err("coordinate index must be 0, 1, or 2"),
        }
        Ok(())
    }

    /// Returns the coordinate-letter rendering; e.g., (2,1,0) yields "xxy"
    pub fn letters(&self) -> String {
        let mut text = String::with_capacity(self.degree());
        for _ in 0..self.px {
            text.push('x');
        }
        for _ in 0..self.py {
            text.push('y');
        }
        for _ in 0..self.pz {
            text.push('z');
        }
        text
    }
}

/// Returns the canonical ordered list of all monomials of a given degree
///
/// The enumeration iterates i in 0..=degree (outer) and j in i..=degree
/// (inner), emitting the exponents (degree-j, j-i, i). The z-exponent thus
/// sweeps 0..=degree outermost and, for a fixed z-exponent, the y-exponent
/// sweeps upward while the x-exponent sweeps downward. Each triple arises
/// from exactly one (i, j) pair, so no duplicates occur.
///
/// The position of each monomial in this list becomes its index into the
/// I2/I4 arrays of the generated code; the order is a contract and must not
/// change.
pub fn monomial_list(degree: usize) -> Vec<Monomial> {
    let mut list = Vec::with_capacity((degree + 1) * (degree + 2) / 2);
    for i in 0..=degree {
        for j in i..=degree {
            list.push(Monomial {
                px: degree - j,
                py: j - i,
                pz: i,
            });
        }
    }
    list
}

/// Returns the position of a monomial within an ordered list
///
/// The position is the array index exposed in the generated code. A missing
/// monomial means the requested tensor entry or derivative is not
/// representable under the active symmetry reduction.
pub fn find_monomial(list: &[Monomial], target: &Monomial) -> Result<usize, StrError> {
    list.iter()
        .position(|mono| mono == target)
        .ok_or("monomial is not present in the list (eliminated by the symmetry reduction)")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
