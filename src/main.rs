use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use lifegrid_core::{init_file_logging, init_logging, AppConfig};
use lifegrid_lib::app::{App, ShutdownManager};
use lifegrid_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "lifegrid.toml")]
    config: String,

    /// Initializer seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Target frames per second for the interactive mode
    #[arg(long)]
    fps: Option<u64>,

    /// Pause when the grid repeats a recent state
    #[arg(long)]
    stop_on_cycle: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    json: bool,

    /// Start from an empty grid holding this pattern (glider, block, blinker, toad, beacon)
    #[arg(short, long)]
    pattern: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if self.seed.is_some() {
            config.engine.seed = self.seed;
        }
        if self.generations.is_some() {
            config.driver.max_generations = self.generations;
        }
        if let Some(fps) = self.fps {
            config.driver.target_fps = fps;
        }
        if self.stop_on_cycle {
            config.driver.stop_on_cycle = true;
        }
    }

    fn seed_pattern(&self, app: &mut App) -> Result<()> {
        if let Some(name) = &self.pattern {
            app.clear();
            app.place_pattern(name)?;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => init_logging(),
        Mode::Standard => init_file_logging(Path::new("lifegrid.log"))
            .context("opening lifegrid.log")?,
    }

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config))?;
    args.apply(&mut config);

    let mut app = App::new(config)?;
    args.seed_pattern(&mut app)?;

    match args.mode {
        Mode::Headless => {
            let shutdown = ShutdownManager::new();
            shutdown.listen_for_ctrl_c();
            let summary = app.run_headless(&shutdown);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!(
                    "Exited clean after {} generations (seed {}).",
                    app.generation, app.seed
                );
            }
        }
    }

    Ok(())
}
