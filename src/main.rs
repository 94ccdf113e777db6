mod cli;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rustplot::expr;
use rustplot::plot::plot;
use rustplot::points::{read_points, sample, sample_count};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(feature = "tui")]
    if args.interactive {
        return tui_mode::run_tui(args.plot_config(), args.overrides());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let overrides = args.overrides();
    let mut config = args.plot_config();

    let mut points = if let Some(source) = &args.expression {
        let expr = expr::compile(source)?;
        if args.dump_tree {
            writeln!(out, "{}", expr.prefix())?;
        }
        let (x_min, x_max) = overrides.sample_range();
        sample(&expr, x_min, x_max, sample_count(config.columns))
    } else if let Some(path) = &args.file {
        let file = File::open(path)
            .with_context(|| format!("Failed to open '{}'", path.display()))?;
        read_points(file).with_context(|| format!("Failed to read '{}'", path.display()))?
    } else {
        read_points(io::stdin().lock()).context("Failed to read points from stdin")?
    };

    config.bounds = overrides.resolve(&points);
    plot(&mut out, &config, &mut points)?;
    out.flush()?;
    Ok(())
}
