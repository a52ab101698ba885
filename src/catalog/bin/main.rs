use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::routes::build_router;
use bookshelf::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    let port = config.port;
    info!("starting bookshelf stage={} store={}", config.stage, config.store);
    let state = AppState::build(config).await?;
    let app = build_router(state);

    // the Lambda runtime exports its API endpoint to every function
    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return run(app).await;
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
