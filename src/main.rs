//! # Loadout Randomizer Main Entry Point
//!
//! Loads a catalog, builds a generator and prints randomized weapons or loadouts.

use clap::Parser;
use log::{info, LevelFilter};
use loadout_randomizer::{
    BundledCatalogLoader, CatalogLoader, Class, Generator, GeneratorConfig, JsonCatalogLoader,
    LoadoutResult, Slot, Weapon, WeaponId,
};
use std::path::PathBuf;

/// Command line arguments for the loadout randomizer.
#[derive(Parser, Debug)]
#[command(name = "loadout-randomizer")]
#[command(about = "Randomizes Team Fortress 2 classes, slots and weapons")]
#[command(version)]
struct Args {
    /// JSON catalog to load instead of the bundled dataset
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Class to roll for, random when omitted
    #[arg(short, long, value_enum, ignore_case = true)]
    class: Option<Class>,

    /// Slot to roll for, random when omitted
    #[arg(long, value_enum, ignore_case = true)]
    slot: Option<Slot>,

    /// Allow the sapper slot when the slot is randomized
    #[arg(long)]
    allow_sapper: bool,

    /// Count every reskin group as a single weapon
    #[arg(long)]
    treat_reskins_as_one: bool,

    /// Weapon ids to remove from the pool
    #[arg(long, num_args = 1..)]
    disable: Vec<u32>,

    /// Number of rolls
    #[arg(short = 'n', long, default_value_t = loadout_randomizer::config::DEFAULT_ROLL_COUNT)]
    count: u32,

    /// Roll a weapon for every slot of the class
    #[arg(long, conflicts_with = "slot")]
    loadout: bool,

    /// List enabled weapons matching the class and slot filters instead of rolling
    #[arg(long)]
    list: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> LoadoutResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting loadout randomizer v{}", loadout_randomizer::VERSION);

    let loader: Box<dyn CatalogLoader> = match &args.catalog {
        Some(path) => Box::new(JsonCatalogLoader::from_path(path)),
        None => Box::new(BundledCatalogLoader),
    };
    info!("Loading catalog with {}", loader.loader_type());
    let catalog = loader.load()?;

    let config = build_config(&args)?;
    let mut generator = Generator::from_config(catalog, &config)?;

    if args.list {
        return list_weapons(&args, &generator);
    }

    for _ in 0..args.count {
        let class = match args.class {
            Some(class) => class,
            None => generator.randomize_class(),
        };

        if args.loadout {
            let loadout = generator.roll_loadout(class)?;
            if args.json {
                println!("{}", serde_json::to_string(&loadout)?);
            } else {
                println!("{}", loadout);
            }
            continue;
        }

        let slot = match args.slot {
            Some(slot) => slot,
            None => generator.roll_slot(),
        };
        let weapon = generator.roll_weapon(class, slot)?;
        if args.json {
            println!("{}", serde_json::to_string(weapon)?);
        } else {
            println!("{}, {} -> {}", class, slot, weapon);
        }
    }

    Ok(())
}

/// Initializes the logger; `RUST_LOG` overrides the command line level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

/// Merges the optional config file with command line flags.
fn build_config(args: &Args) -> LoadoutResult<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::new(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.treat_reskins_as_one |= args.treat_reskins_as_one;
    config.allow_sapper |= args.allow_sapper;
    for &id in &args.disable {
        let id = WeaponId(id);
        if !config.disabled.contains(&id) {
            config.disabled.push(id);
        }
    }

    Ok(config)
}

/// Prints the enabled weapons matching the class and slot filters.
fn list_weapons(args: &Args, generator: &Generator) -> LoadoutResult<()> {
    let weapons: Vec<&Weapon> = match (args.class, args.slot) {
        (Some(class), Some(slot)) => generator.enabled_weapons_for(class, slot)?,
        (Some(class), None) => generator.enabled_weapons_for_class(class),
        (None, Some(slot)) => generator.enabled_weapons_for_slot(slot),
        (None, None) => generator.enabled_weapons(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&weapons)?);
        return Ok(());
    }

    for weapon in weapons {
        let marker = if weapon.stock { " (stock)" } else { "" };
        println!("{:>4}  {}{}", weapon.id, weapon.name, marker);
    }
    Ok(())
}
