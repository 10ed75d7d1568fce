#![warn(clippy::all)]

use anyhow::{anyhow, bail, Context};
use lifegrid::{loader, patterns, plaintext, Config, Grid, Simulator, Topology};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: lifegrid [PATTERN_FILE | builtin] [--generations N] [--grow] \
[--max-side N] [--pad] [--random HxW] [--seed S] [--fill RATE] [--verbose]";

struct Args {
    source: Option<String>,
    generations: usize,
    topology: Topology,
    max_side: usize,
    padding: loader::Padding,
    random: Option<(usize, usize)>,
    seed: Option<u64>,
    fill_rate: f64,
    verbose: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut args = Self {
            source: None,
            generations: 10,
            topology: Topology::FixedBounds,
            max_side: Config::MAX_SIDE,
            padding: loader::Padding::Strict,
            random: None,
            seed: None,
            fill_rate: 0.3,
            verbose: false,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            let mut value = |name: &str| {
                iter.next()
                    .ok_or_else(|| anyhow!("missing value for {}\n{}", name, USAGE))
            };
            match arg.as_str() {
                "--generations" | "-n" => args.generations = value(&arg)?.parse()?,
                "--grow" => args.topology = Topology::AutoGrow,
                "--max-side" => args.max_side = value(&arg)?.parse()?,
                "--pad" => args.padding = loader::Padding::Dead,
                "--seed" => args.seed = Some(value(&arg)?.parse()?),
                "--fill" => args.fill_rate = value(&arg)?.parse()?,
                "--random" => {
                    let dims = value(&arg)?;
                    let (h, w) = dims
                        .split_once('x')
                        .ok_or_else(|| anyhow!("expected HxW, got {}", dims))?;
                    args.random = Some((h.parse()?, w.parse()?));
                }
                "--verbose" | "-v" => args.verbose = true,
                "--help" | "-h" => {
                    println!("{}", USAGE);
                    std::process::exit(0);
                }
                _ if arg.starts_with('-') => bail!("unknown option {}\n{}", arg, USAGE),
                _ => args.source = Some(arg),
            }
        }
        Ok(args)
    }

    fn start(&self) -> anyhow::Result<Grid> {
        if let Some((height, width)) = self.random {
            return Ok(Grid::random(height, width, self.seed, self.fill_rate)?);
        }
        let source = self.source.as_deref().unwrap_or(patterns::TOAD.name);
        if let Some(pattern) = patterns::by_name(source) {
            return Ok(pattern.grid()?);
        }
        loader::load_file(source, &plaintext::Glyphs::default(), self.padding)
            .with_context(|| format!("failed to load pattern from {}", source))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let start = args.start()?;
    let simulator = Simulator::new(
        Config::default()
            .with_generations(args.generations)
            .with_topology(args.topology)
            .with_max_side(args.max_side),
    );

    let timer = std::time::Instant::now();
    let generations = simulator.run(start)?;
    info!(
        "computed {} generations in {:.3}s",
        generations.len(),
        timer.elapsed().as_secs_f64()
    );

    for (i, grid) in generations.iter().enumerate() {
        let (h, w) = grid.dims();
        println!("! generation {} ({}x{}, population {})", i, h, w, grid.population());
        println!("{}", plaintext::format(grid));
    }
    Ok(())
}
