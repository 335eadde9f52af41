use super::{filter_planar, integral_expression, jacobian_expression, monomial_list, residual_expression, Monomial};
use crate::base::NematicDim;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// Records the position and rendering of one monomial of the ordering
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonomialRecord {
    /// Position within the ordered list (the I2/I4 array index)
    pub index: usize,

    /// Exponents of the three coordinates
    pub monomial: Monomial,

    /// Coordinate-letter rendering, e.g. "xxy"
    pub letters: String,
}

/// Holds a machine-readable record of one code generation
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenSummary {
    /// Selected symmetry reduction
    pub dim: NematicDim,

    /// Number of degrees of freedom (length of Res; order of Jac)
    pub n_dof: usize,

    /// Ordering of the degree-2 monomials indexing the I2 array
    pub monomials_2: Vec<MonomialRecord>,

    /// Ordering of the degree-4 monomials indexing the I4 array
    pub monomials_4: Vec<MonomialRecord>,
}

/// Generates the quadrature, residual, and Jacobian code for the inversion
///
/// The generator builds the canonical degree-2 and degree-4 monomial lists
/// (filtered under the quasi-2D reduction) once; they are read-only
/// afterwards. The emitted text is a wire format: the downstream numerical
/// build consumes the lines in order, so the output is fixed and
/// byte-identical across runs for the same mode.
pub struct Generator {
    /// Selected symmetry reduction
    dim: NematicDim,

    /// Ordered degree-2 monomials indexing the I2 array
    list_2: Vec<Monomial>,

    /// Ordered degree-4 monomials indexing the I4 array
    list_4: Vec<Monomial>,
}

impl Generator {
    /// Allocates a new generator for the selected symmetry reduction
    pub fn new(dim: NematicDim) -> Self {
        let mut list_2 = monomial_list(2);
        let mut list_4 = monomial_list(4);
        if dim.filters_monomials() {
            list_2 = filter_planar(&list_2);
            list_4 = filter_planar(&list_4);
        }
        Generator { dim, list_2, list_4 }
    }

    /// Returns the selected symmetry reduction
    pub fn dim(&self) -> NematicDim {
        self.dim
    }

    /// Returns the complete generated text in the fixed line order
    ///
    /// Sections, in order: the monomial ordering (degree-2 then degree-4
    /// letter renderings), the integral statements, then the residual
    /// statements followed by the Jacobian statements in row-major order.
    pub fn code_string(&self) -> Result<String, StrError> {
        let mut buf = String::new();

        // section: index-to-monomial mapping for the downstream consumer
        buf.push_str("Ordering of monomials is:\n\n");
        for mono in &self.list_2 {
            buf.push_str(&mono.letters());
            buf.push('\n');
        }
        for mono in &self.list_4 {
            buf.push_str(&mono.letters());
            buf.push('\n');
        }
        buf.push_str("\n\n");

        // section: quadrature accumulation, one statement per monomial
        buf.push_str("Monomial integral code is:\n\n");
        for idx in 0..self.list_2.len() {
            buf.push_str(&integral_expression(idx, &self.list_2)?);
            buf.push('\n');
        }
        for idx in 0..self.list_4.len() {
            buf.push_str(&integral_expression(idx, &self.list_4)?);
            buf.push('\n');
        }
        buf.push_str("\n\n");

        // section: residual then Jacobian, row-major
        buf.push_str("Residual code is:\n\n");
        let n_dof = self.dim.n_dof();
        for m in 0..n_dof {
            buf.push_str(&residual_expression(m, &self.list_2)?);
            buf.push('\n');
        }
        for m in 0..n_dof {
            for n in 0..n_dof {
                buf.push_str(&jacobian_expression(m, n, &self.list_4, &self.list_2)?);
                buf.push('\n');
            }
        }
        Ok(buf)
    }

    /// Writes the generated code to the given sink
    pub fn write_code<W: Write>(&self, out: &mut W) -> Result<(), StrError> {
        let text = self.code_string()?;
        out.write_all(text.as_bytes()).map_err(|_| "cannot write the generated code")
    }

    /// Writes the generated code to a file
    pub fn write_code_file(&self, path: &str) -> Result<(), StrError> {
        let mut file = File::create(path).map_err(|_| "cannot create the output file")?;
        self.write_code(&mut file)
    }

    /// Returns the machine-readable summary of the generation
    pub fn summary(&self) -> GenSummary {
        GenSummary {
            dim: self.dim,
            n_dof: self.dim.n_dof(),
            monomials_2: records(&self.list_2),
            monomials_4: records(&self.list_4),
        }
    }

    /// Writes the JSON summary of the generation to a file
    pub fn write_summary_file(&self, path: &str) -> Result<(), StrError> {
        let file = File::create(path).map_err(|_| "cannot create the summary file")?;
        serde_json::to_writer_pretty(file, &self.summary()).map_err(|_| "cannot write the summary file")
    }
}

fn records(list: &[Monomial]) -> Vec<MonomialRecord> {
    list.iter()
        .enumerate()
        .map(|(index, mono)| MonomialRecord {
            index,
            monomial: *mono,
            letters: mono.letters(),
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
