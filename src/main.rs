use std::io;

use anyhow::Result;
use bikeshare_explorer::app::BikeshareApp;
use bikeshare_explorer::config::SessionConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = SessionConfig::from_env()?;
    log::debug!("reading city data from {}", config.data_dir.display());

    let stdin = io::stdin();
    let mut app = BikeshareApp::new(stdin.lock(), io::stdout(), config);
    app.run()
}
