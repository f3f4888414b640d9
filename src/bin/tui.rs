use anyhow::Result;
use nuancier::config::Config;

fn main() -> Result<()> {
    env_logger::init();

    // A broken config file should not keep the app from starting.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config load failed, using defaults: {}", e);
            Config::default()
        }
    };

    nuancier::tui::run(config)
}
