use spgen::base::NematicDim;
use spgen::codegen::Generator;
use spgen::StrError;
use std::io;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "spgen_residual_jacobian",
    about = "Generates the residual and Jacobian code for the singular potential inversion"
)]
struct Options {
    /// Symmetry reduction: full_3D or quasi_2D
    #[structopt(long)]
    dim: NematicDim,

    /// Writes the generated code to a file instead of stdout
    #[structopt(long)]
    outfile: Option<String>,

    /// Writes a JSON summary of the monomial ordering to a file
    #[structopt(long)]
    summary: Option<String>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // build the monomial lists for the selected symmetry reduction
    let generator = Generator::new(options.dim);

    // write the generated code
    match &options.outfile {
        Some(path) => generator.write_code_file(path)?,
        None => {
            let stdout = io::stdout();
            generator.write_code(&mut stdout.lock())?;
        }
    }

    // write the index-to-monomial summary
    if let Some(path) = &options.summary {
        generator.write_summary_file(path)?;
    }
    Ok(())
}
