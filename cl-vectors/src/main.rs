use std::{ io::{ self, BufWriter }, process, time::Duration };

use cl_vectors::{ cli::{ self, CliArgs }, generate };
use indicatif::{ ProgressBar, ProgressStyle };

fn main() {
    let matches = cli::command().get_matches();
    let args = match CliArgs::from_matches(&matches) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };
    args.init_logging();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let progbar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let progbar = ProgressBar::new(args.config.num_examples as u64);
        progbar.set_style(
            ProgressStyle::with_template("{percent:>3.1}% |{bar:50}| ({eta})")?.progress_chars("#o-")
        );
        progbar.enable_steady_tick(Duration::from_millis(500));
        progbar
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    generate(&args.config, out, progbar)?;
    Ok(())
}
