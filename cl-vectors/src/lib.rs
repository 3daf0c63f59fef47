use std::io::Write;

use classgroup::QuadForm;
use indicatif::ProgressBar;
use tracing::info;

pub mod cli;
pub mod config;
pub mod format;
pub mod procedures;
pub mod source;

pub use config::GeneratorConfig;
pub use format::{ VectorRecord, VectorValue };
pub use procedures::{ Procedure, VectorGenerator };
pub use source::ElemSource;

/// Run `config.procedure` against the binary quadratic forms of
/// `config.discriminant`, writing lines to `out`.
pub fn generate<W: Write>(
    config: &GeneratorConfig,
    out: W,
    progbar: ProgressBar
) -> anyhow::Result<usize> {
    config.validate()?;
    let source = ElemSource::<QuadForm>::for_discriminant(&config.discriminant, config.exp_bits)?;
    info!(
        discriminant_bits = config.discriminant.significant_bits(),
        generator = %source.generator(),
        seed = ?config.seed,
        "class group ready"
    );

    let mut generator = VectorGenerator::new(source, config.rng(), out)
        .with_max_attempts(config.max_attempts)
        .with_progress(progbar);
    generator.run(config.procedure, config.num_examples)
}
