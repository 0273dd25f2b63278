use clap::Parser;
use folio_api::RestApi;
use folio_core::{RecommenderConfig, StopWords};
use folio_storage::{JsonFileSource, ModelManager};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// A content-based catalog recommender
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Recommends similar catalog items by content", long_about = None)]
struct Args {
    /// Path to the JSON catalog (array of {id, title, category, authors})
    #[arg(short, long)]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Number of recommendations returned per item
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Keep English stop words in the vocabulary
    #[arg(long)]
    no_stop_words: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);
    info!("HTTP API port: {}", args.http_port);

    let config = RecommenderConfig {
        top_k: args.top_k,
        stop_words: if args.no_stop_words {
            StopWords::None
        } else {
            StopWords::English
        },
    };
    let source = Arc::new(JsonFileSource::new(&args.catalog));
    let manager = Arc::new(ModelManager::new(source, config)?);

    // Serve even without a model; /retrain can fix it later.
    let initial = manager.clone();
    match tokio::task::spawn_blocking(move || initial.retrain()).await? {
        Ok(snapshot) => info!("Initial model ready: {} items", snapshot.items),
        Err(e) => warn!("Initial training failed, serving empty model: {}", e),
    }

    let manager_http = manager.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(manager_http, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Folio started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
