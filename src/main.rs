use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trilife::config::{DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_RULE, DEFAULT_WIDTH};
use trilife::{Automaton, RuleSet, Topology};

/// Terminal driver: randomize a grid, run it for a number of generations,
/// and print the final state as ASCII art.
#[derive(Parser)]
#[command(about = "Generalized B/S cellular automata on square and triangular grids")]
struct Args {
    /// Grid tessellation.
    #[arg(long, value_enum, default_value = "square")]
    grid: GridKind,

    /// Rule in B/S notation, e.g. "B3/S23".
    #[arg(long, default_value = DEFAULT_RULE)]
    rule: String,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of generations to simulate.
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u32,

    /// Fade dying cells out over ten steps instead of killing them instantly.
    #[arg(long)]
    fading: bool,

    /// Seed for the initial randomization (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridKind {
    Square,
    Triangle,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rules: RuleSet = args
        .rule
        .parse()
        .with_context(|| format!("bad --rule {:?}", args.rule))?;
    anyhow::ensure!(
        args.height > 0 && args.width > 0,
        "grid dimensions must be positive"
    );

    let topology = match args.grid {
        GridKind::Square => Topology::Square,
        GridKind::Triangle => Topology::Triangle,
    };
    let mut automaton = Automaton::new(topology, rules, args.height, args.width);
    automaton.set_fading(args.fading);

    log::info!(
        "{}x{} {:?} grid, rule {}, fading {}",
        automaton.height(),
        automaton.width(),
        automaton.topology(),
        automaton.rules(),
        automaton.is_fading()
    );

    match args.seed {
        Some(seed) => automaton.randomize_with(&mut StdRng::seed_from_u64(seed)),
        None => automaton.randomize(),
    }
    log::info!("initial population {}", automaton.population());

    for generation in 1..=args.generations {
        automaton.advance_generation();
        if generation % 10 == 0 || generation == args.generations {
            log::info!(
                "generation {generation}: population {}",
                automaton.population()
            );
        }
    }

    print!("{}", render(&automaton));
    Ok(())
}

/// ASCII dump of the current grid; fade levels map onto a brightness ramp.
fn render(automaton: &Automaton) -> String {
    const RAMP: [char; 11] = [' ', '.', ':', '-', '=', '+', '*', 'x', '%', '#', '@'];
    let mut out = String::with_capacity((automaton.width() + 1) * automaton.height());
    for x in 0..automaton.height() {
        for y in 0..automaton.width() {
            out.push(RAMP[usize::from(automaton.state(x, y) / 10)]);
        }
        out.push('\n');
    }
    out
}
