use lifegrid_core::{AppConfig, DriverConfig, EngineConfig};
use lifegrid_lib::app::{App, ShutdownManager};

fn config(seed: u32) -> AppConfig {
    AppConfig {
        engine: EngineConfig {
            seed: Some(seed),
            ..Default::default()
        },
        driver: DriverConfig::default(),
    }
}

#[test]
fn test_generation_counts_successful_steps() {
    let mut app = App::new(config(10)).unwrap();
    app.start();
    for _ in 0..7 {
        app.tick();
    }
    assert_eq!(app.generation, 7);
}

#[test]
fn test_pause_holds_state_indefinitely() {
    let mut app = App::new(config(10)).unwrap();
    app.start();
    app.tick();
    app.pause();
    let frozen = app.grid.fingerprint();
    for _ in 0..50 {
        app.tick();
    }
    assert_eq!(app.grid.fingerprint(), frozen);
    assert_eq!(app.generation, 1);
}

#[test]
fn test_driver_matches_bare_engine() {
    let mut app = App::new(config(321)).unwrap();
    app.start();
    for _ in 0..20 {
        app.tick();
    }

    let mut grid = lifegrid_lib::Grid::new();
    grid.init_random(321);
    for _ in 0..20 {
        grid.step();
    }
    assert_eq!(app.grid.view().as_slice(), grid.view().as_slice());
}

#[test]
fn test_toggle_then_step() {
    let mut app = App::new(config(0)).unwrap();
    app.clear();
    for (x, y) in [(5, 5), (6, 5), (7, 5)] {
        app.toggle_cell(x, y);
    }
    app.step_once();
    assert_eq!(app.grid.get_cell(6, 4), 1);
    assert_eq!(app.grid.get_cell(6, 6), 1);
    assert_eq!(app.grid.get_cell(5, 5), 0);
}

#[test]
fn test_headless_json_summary() {
    let mut cfg = config(8);
    cfg.driver.max_generations = Some(12);
    let mut app = App::new(cfg).unwrap();
    let summary = app.run_headless(&ShutdownManager::new());
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"generations\":12"));
    assert_eq!(summary.fingerprint, app.grid.fingerprint());
}

#[test]
fn test_config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("lifegrid-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[engine]\nseed = 55\ndensity = 30\n\n[driver]\nsteps_per_frame = 2\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.engine.seed, Some(55));
    assert_eq!(config.engine.density, 30);
    assert_eq!(config.driver.steps_per_frame, 2);

    let mut app = App::new(config).unwrap();
    app.start();
    assert_eq!(app.tick(), 2);
}
