//! The `seedmap` binary.

use clap::Parser;
use seedmap_config::{CliArgs, Config, default_config_dir};
use seedmap_world::biome_name;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    seedmap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let request = match seedmap_cli::render_request(&config) {
        Ok(request) => request,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    if let Some((x, y, z)) = args.lookup_position() {
        let id = seedmap_cli::lookup(&request, x, y, z);
        println!("{id} {}", biome_name(seedmap_world::BiomeId(id)).unwrap_or("unknown"));
        return;
    }

    info!(
        seed = config.world.seed,
        version = %request.variant,
        "rendering {}",
        config.output.path.display()
    );
    if let Err(e) = seedmap_cli::render_to_png(&request, &config.output.path) {
        error!("{e}");
        std::process::exit(1);
    }
}
