mod chart;
mod error;
mod forms;
mod pages;
mod routes;

use std::sync::Arc;

use folio_data::{PriceSource, SourceId, SyntheticSource, YahooSource};

use crate::error::WebError;
use crate::routes::AppState;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), WebError> {
    let source = source_from_env()?;
    println!("folio-web using price source '{}'", source.id());

    let app = routes::router(AppState { source });

    let bind =
        std::env::var("FOLIO_BIND").unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    println!("folio-web listening on http://{bind}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// `FOLIO_SOURCE=synthetic|yahoo`, defaulting to the offline source so a
/// fresh checkout serves pages without network access.
fn source_from_env() -> Result<Arc<dyn PriceSource>, WebError> {
    let requested = std::env::var("FOLIO_SOURCE").unwrap_or_default();
    let id = if requested.trim().is_empty() {
        SourceId::Synthetic
    } else {
        requested.parse()?
    };

    let source: Arc<dyn PriceSource> = match id {
        SourceId::Synthetic => Arc::new(SyntheticSource),
        SourceId::Yahoo => Arc::new(YahooSource::new()?),
    };
    Ok(source)
}
