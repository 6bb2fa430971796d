use funds_dashboard::{
    api::{start_server, ApiState},
    auth::AuthService,
    source::StaticProjectSource,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        eprintln!("⚠️  JWT_SECRET not set in .env, using development default");
        "your-secret-key".to_string()
    });

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("🚀 Funds Dashboard - API Server");
    info!("📍 Port: {}", api_port);

    let state = ApiState {
        source: Arc::new(StaticProjectSource::new()),
        auth: Arc::new(AuthService::new(jwt_secret)),
    };

    info!("✅ Dashboard state initialized");
    info!("📡 Starting API server...");

    start_server(state, api_port).await?;

    Ok(())
}
