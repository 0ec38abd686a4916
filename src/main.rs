use std::{process::exit, time::Instant};

use clap::Parser as ClapParser;
use quickcheck::Gen;

use opbasis::{Basis, Formula, Options, PlaceholderPolicy, Rewriter};

/// Rewrites randomly generated formulas into operator bases and checks the results.
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// The basis to rewrite into. If not set, all bases are checked.
    #[arg(short = 'b', long, value_enum, default_value = None)]
    basis: Option<Basis>,

    /// The number of formulas to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    samples: usize,

    /// The maximal depth of generated formulas
    #[arg(short = 'd', long, default_value_t = 3)]
    depth: usize,

    /// The variable used to encode the constants `T` and `F`
    #[arg(long)]
    placeholder: Option<String>,

    /// Use a placeholder that does not occur in the formula instead of reusing it
    #[arg(long)]
    fresh_placeholder: bool,

    /// Print every formula together with its rewritten form
    #[arg(long)]
    print: bool,
}

fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();

    let rewriter = Rewriter::new(convert_options(&cli));
    let bases = match cli.basis {
        Some(b) => vec![b],
        None => Basis::ALL.to_vec(),
    };

    let mut gen = Gen::new(cli.depth.max(1));
    for _ in 0..cli.samples {
        let formula = Formula::random(&mut gen, cli.depth);
        for basis in &bases {
            match rewriter.rewrite(&formula, *basis) {
                Ok(result) => {
                    if cli.print {
                        println!("{} => {}", formula, result);
                    }
                }
                Err(err) => {
                    log::error!("Error: {}", err);
                    exit(1);
                }
            }
        }
    }

    log::info!(
        "Checked {} formulas in {} bases ({}ms).",
        cli.samples,
        bases.len(),
        ts.elapsed().as_millis()
    );
}

fn convert_options(options: &Args) -> Options {
    let mut opts = Options {
        verify: true,
        ..Options::default()
    };
    if let Some(p) = &options.placeholder {
        opts.set_placeholder(p.as_str());
    }
    if options.fresh_placeholder {
        opts.placeholder_policy = PlaceholderPolicy::Fresh;
    }
    opts
}
