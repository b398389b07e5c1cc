use tripwire_config::RuntimeSettings;

mod calibrate;
mod editor;
mod io;
mod menu;
mod monitoring;
mod preview;
mod state;

use self::state::AppState;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("Critical error: {e:#}");
        println!("\nCritical error: {e:#}");
        let _ = io::prompt("Press Enter to exit...");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = RuntimeSettings::from_env();
    tracing::debug!("Runtime settings: {settings:?}");

    let mut state = AppState::load(settings)?;
    menu::main_menu(&mut state)
}
