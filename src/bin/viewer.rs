use deedwatch::config::load_config;
use deedwatch::viewer;
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    // A failed download or parse is surfaced instead of rendering an
    // empty table.
    if let Err(e) = viewer::run(&config.viewer).await {
        error!("Viewer failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
