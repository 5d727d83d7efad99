use snapfolio_server::{
    api::{app_router, with_static_fallback},
    build_state,
    config::Config,
    init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config).await?;
    let router = with_static_fallback(app_router(state, &config), &config);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
