use std::sync::Arc;

use travel_genie_backend::routes;
use travel_genie_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let state = Arc::new(AppState::from_env()?);

    let app = routes::create_router().with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    println!("🚀 Travel Genie running at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
