use todo_api::adapters::{HttpConfig, HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let server = HttpServer::new(HttpConfig::default());
    server.serve("0.0.0.0:3000").await?;
    Ok(())
}
