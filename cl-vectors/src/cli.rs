use std::str::FromStr;

use anyhow::Context;
use clap::{
    Arg,
    ArgAction,
    ArgMatches,
    Command,
    builder::{ PossibleValuesParser, TypedValueParser },
    value_parser,
};
use rug::Integer;

use crate::{ config::GeneratorConfig, procedures::Procedure };

pub fn command() -> Command {
    Command::new("cl-vectors")
        .about("Classgroup ground-truth generator")
        .arg(
            Arg::new("num_examples")
                .long("num_examples")
                .help("Number of ground-truth examples to generate")
                .required(false)
                .default_value("10")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("procedure")
                .long("procedure")
                .required(true)
                .value_parser(
                    PossibleValuesParser::new(Procedure::ALL.map(|p| p.name())).try_map(|s|
                        Procedure::from_str(&s)
                    )
                )
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed of the random stream; omit to seed from the OS")
                .required(false)
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("exp_bits")
                .long("exp_bits")
                .help("Bit width of random exponents")
                .required(false)
                .default_value("256")
                .value_parser(value_parser!(u32).range(1..))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("max_attempts")
                .long("max_attempts")
                .help("Consecutive rejections allowed per normalize/reduce case")
                .required(false)
                .default_value("100000")
                .value_parser(value_parser!(u64).range(1..))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("discriminant")
                .long("discriminant")
                .help("Negative discriminant, 0 or 1 mod 4 [default: the 2048-bit Delta]")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(parse_integer)
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging on stderr; repeat for more")
                .action(ArgAction::Count)
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("No logging and no progress bar")
                .action(ArgAction::SetTrue)
        )
}

fn parse_integer(s: &str) -> Result<Integer, String> {
    Integer::from_str(s).map_err(|e| format!("`{s}` is not an integer: {e}"))
}

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config: GeneratorConfig,
    pub verbose: u8,
    pub quiet: bool,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<CliArgs> {
        let procedure = *matches
            .get_one::<Procedure>("procedure")
            .context("--procedure is required")?;
        let mut config = GeneratorConfig::new(procedure);
        if let Some(n) = matches.get_one::<usize>("num_examples") {
            config.num_examples = *n;
        }
        if let Some(bits) = matches.get_one::<u32>("exp_bits") {
            config.exp_bits = *bits;
        }
        if let Some(max) = matches.get_one::<u64>("max_attempts") {
            config.max_attempts = *max;
        }
        config.seed = matches.get_one::<u64>("seed").copied();
        if let Some(delta) = matches.get_one::<Integer>("discriminant") {
            config.discriminant = delta.clone();
        }
        config.validate()?;

        Ok(CliArgs {
            config,
            verbose: matches.get_count("verbose"),
            quiet: matches.get_flag("quiet"),
        })
    }

    /// Logs go to stderr; stdout carries only vectors.
    pub fn init_logging(&self) {
        use tracing_subscriber::{ EnvFilter, fmt };

        if self.quiet {
            return;
        }
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
    }
}
