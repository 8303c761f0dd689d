mod config;
mod tiles;

use std::io::BufRead;

use config::CliConfig;
use glade_catalog::PropTileSet;
use glade_world::{Grid, LayerStack, TerrainGenerator};
use tracing::info;

const USAGE: &str = "usage: glade [--config <glade.toml>] [--catalog <catalog.json>] [--seed <n>] [--step]

  --config   toml config file (defaults used when the file is absent)
  --catalog  tile catalog json (built-in placeholder catalog otherwise)
  --seed     generation seed (overrides the config file)
  --step     run one pipeline phase per line read from stdin; q quits";

fn main() {
    let mut config_path = String::from("glade.toml");
    let mut catalog_path: Option<String> = None;
    let mut seed_arg: Option<u64> = None;
    let mut step_mode = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = expect_value(args.next(), "--config"),
            "--catalog" => catalog_path = Some(expect_value(args.next(), "--catalog")),
            "--seed" => {
                let value = expect_value(args.next(), "--seed");
                seed_arg = match value.parse() {
                    Ok(seed) => Some(seed),
                    Err(_) => {
                        eprintln!("--seed expects an unsigned integer, got {value}");
                        std::process::exit(2);
                    }
                };
            }
            "--step" => step_mode = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            other => {
                eprintln!("unknown argument: {other}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let config = if std::path::Path::new(&config_path).exists() {
        match CliConfig::load(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {config_path}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        CliConfig::default()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let catalogs = match &catalog_path {
        Some(path) => match config::load_catalogs(path) {
            Ok(catalogs) => catalogs,
            Err(e) => {
                eprintln!("Failed to load catalog {path}: {e}");
                std::process::exit(1);
            }
        },
        None => tiles::builtin_catalogs(),
    };
    let props = catalogs.props.clone();

    let seed = seed_arg.or(config.seed).unwrap_or_else(rand::random);
    info!(
        seed,
        grid_length = config.generation.grid_length,
        grid_height = config.generation.grid_height,
        "glade v{} generating",
        env!("CARGO_PKG_VERSION")
    );

    let mut generator = TerrainGenerator::new(config.generation, catalogs, seed);

    if step_mode {
        println!("press enter to run a phase, q to quit");
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if line.trim() == "q" {
                break;
            }
            match generator.step() {
                Ok(phase) => {
                    println!("{}", render_preview(generator.grid(), generator.layers(), &props));
                    info!(phase, next = generator.phase(), "phase complete");
                }
                Err(e) => {
                    eprintln!("Generation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    } else {
        if let Err(e) = generator.run_full() {
            eprintln!("Generation failed: {e}");
            std::process::exit(1);
        }
        println!("{}", render_preview(generator.grid(), generator.layers(), &props));
    }

    let layers = generator.layers();
    info!(
        ground = layers.ground.len(),
        cliffs = layers.cliffs.iter().map(|l| l.len()).sum::<usize>(),
        grass = layers.low_grass.iter().chain(layers.high_grass.iter()).map(|l| l.len()).sum::<usize>(),
        props = layers.environment.len() + layers.environment_collision.len(),
        "generation finished"
    );
}

fn expect_value(value: Option<String>, flag: &str) -> String {
    match value {
        Some(value) => value,
        None => {
            eprintln!("{flag} expects a value\n{USAGE}");
            std::process::exit(2);
        }
    }
}

/// Top-down ASCII preview. Rows print top row first, so the highest y comes
/// out on the first line.
fn render_preview(grid: &Grid, layers: &LayerStack, props: &PropTileSet) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.height());
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.length() as i32 {
            out.push(cell_glyph(grid, layers, props, x, y));
        }
        out.push('\n');
    }
    out
}

fn cell_glyph(grid: &Grid, layers: &LayerStack, props: &PropTileSet, x: i32, y: i32) -> char {
    let pos = (x, y);
    if layers.foliage.has(pos) {
        return 'T';
    }
    if let Some(tile) = layers.environment_collision.get(pos) {
        return if tile == props.rock { 'o' } else { 'T' };
    }
    if let Some(tile) = layers.environment.get(pos) {
        return if tile == props.tall_grass { '"' } else { '*' };
    }
    if layers.any_cliff_tile(pos) {
        return '#';
    }
    match (grid.elevation(x, y), grid.grass(x, y)) {
        (_, 1) => ',',
        (_, 2) => ';',
        (0, _) => '.',
        (1, _) => '-',
        _ => '=',
    }
}
