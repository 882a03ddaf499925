use std::sync::Arc;

use clap::Parser;
use teoria::cache::QuestionCache;
use teoria::query::QuestionService;
use teoria::source::DatastoreClient;
use teoria::{names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:4000")]
    address: String,

    /// Base URL of the government datastore.
    #[arg(long, env, default_value = names::DATASTORE_BASE_URL)]
    datastore_url: String,

    /// Datastore resource id of the question bank.
    #[arg(long, env, default_value = names::QUESTION_RESOURCE_ID)]
    resource_id: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,teoria=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let source = DatastoreClient::new(&args.datastore_url, &args.resource_id);
    let cache = Arc::new(QuestionCache::new(Arc::new(source)));
    let state = AppState {
        questions: QuestionService::new(cache),
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, teoria::router(state)).await?;

    Ok(())
}
