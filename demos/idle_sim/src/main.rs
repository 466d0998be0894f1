//! Idle Simulation Example
//!
//! Plays a headless session: buys eggs whenever affordable, merges the first
//! matching pair each tick and collects income, then prints the board.

use clap::Parser;
use drakeforge_core::Forge;
use drakeforge_game::{FileStore, Game, GameConfig, MemoryStore, SaveStore};
use drakeforge_script::{from_ron_file, Loader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless drake merging session
#[derive(Parser, Debug)]
#[command(name = "idle_sim")]
#[command(about = "Run a seeded idle session and print the resulting board")]
struct Args {
    /// Random seed (overrides the content's forge seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of income ticks to simulate
    #[arg(long, default_value_t = 300)]
    ticks: u32,

    /// Directory of RON content files (taxonomy.ron, forge.ron)
    #[arg(long)]
    content: Option<PathBuf>,

    /// RON file with game settings
    #[arg(long)]
    game_config: Option<PathBuf>,

    /// Directory to load and save progress in
    #[arg(long)]
    save_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut loader = Loader::new();
    if let Some(dir) = &args.content {
        loader.load_directory(dir)?;
    }
    let mut content = loader.finish();
    if let Some(seed) = args.seed {
        content.forge.seed = seed;
    }
    tracing::info!(seed = content.forge.seed, ticks = args.ticks, "starting idle session");

    let config: GameConfig = match &args.game_config {
        Some(path) => from_ron_file(path)?,
        None => GameConfig::default(),
    };
    let forge = Forge::new(content.taxonomy, content.forge);

    match &args.save_dir {
        Some(dir) => {
            let game = Game::new(forge, config, FileStore::open(dir)?);
            run(game, args.ticks, true)
        }
        None => run(Game::new(forge, config, MemoryStore::new()), args.ticks, false),
    }
}

fn run<S: SaveStore>(
    mut game: Game<S>,
    ticks: u32,
    persist: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    game.start(persist)?;
    let interval = game.config().income_interval();
    let mut merges = 0;

    for _ in 0..ticks {
        while game.buy_drake().is_ok() {}

        if let Some((from, to)) = find_merge(&game) {
            let outcome = game.attempt_merge(from, to)?;
            merges += 1;
            if outcome.new_highest {
                println!("New highest drake: level {}", outcome.level);
            }
        }

        game.advance(interval);
    }

    println!("\n=== After {} ticks ===", ticks);
    println!("Resources: {}", game.resources());
    println!("Merges: {}", merges);
    println!("Income per tick: {:.1}", game.income_per_tick());
    for (index, drake) in game.grid().iter() {
        let icon = game
            .forge()
            .taxonomy()
            .element(drake.element)
            .map(|e| e.icon.as_str())
            .unwrap_or("?");
        println!(
            "  [{:2}] {} Lvl {} {} {} {} (str {}, vit {}, agi {}, foc {}, potential {})",
            index,
            icon,
            drake.level,
            drake.rarity,
            drake.element,
            drake.name,
            drake.stats.strength,
            drake.stats.vitality,
            drake.stats.agility,
            drake.stats.focus,
            drake.potential,
        );
    }

    if persist {
        game.save()?;
    }
    Ok(())
}

/// First pair of equal-level drakes that can still merge
fn find_merge<S: SaveStore>(game: &Game<S>) -> Option<(usize, usize)> {
    let max_level = game.forge().max_level();
    let drakes: Vec<_> = game.grid().iter().collect();

    for (i, (from, a)) in drakes.iter().enumerate() {
        if a.level >= max_level {
            continue;
        }
        if let Some((to, _)) = drakes[i + 1..].iter().find(|(_, b)| b.level == a.level) {
            return Some((*from, *to));
        }
    }
    None
}
