use statusdeck::app::AppState;
use statusdeck::runtime::spawn_refresh_worker;
use statusdeck::settings::{build_config, load_from_cli};
use statusdeck::ui::run_ui;

fn main() -> std::io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let config = build_config(&settings);

    let (snapshot_tx, snapshot_rx) = crossbeam_channel::unbounded();
    let worker = spawn_refresh_worker(config.clone(), snapshot_tx);
    let app = AppState::new(config);

    run_ui(app, snapshot_rx, worker)?;
    Ok(())
}
