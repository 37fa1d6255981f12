use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adventure_map::ascii::{write_colored, write_plain};
use adventure_map::{generate_map, MapParams, MapRng};

#[derive(Parser, Debug)]
#[command(name = "adventure_map")]
#[command(about = "Generate a procedural ASCII adventure map and print it")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print glyphs only, without color directives
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => MapRng::from_seed(seed),
        None => MapRng::random(),
    };
    let params = MapParams::default();

    let map = generate_map(&params, &mut rng);
    info!(
        seed = rng.seed(),
        width = map.width(),
        height = map.height(),
        river_crossing = ?map.river.crossing,
        wall_crossing = ?map.wall.crossing,
        "map generated"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if args.plain {
        write_plain(&map, &mut out)
    } else {
        write_colored(&map, &mut out)
    };
    written.context("failed to write map to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
