use trashreporter_api::config::Config;
use trashreporter_api::modules::auth::crud::UserStore;
use trashreporter_api::modules::reports::crud::ReportLedger;
use trashreporter_api::services::jwt::JwtService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trashreporter_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    let jwt_service = JwtService::new(config.jwt_secret);

    // Stores live for the whole process; torn down with it.
    let users = UserStore::new();
    let reports = ReportLedger::new();

    let app = trashreporter_api::create_app(users, reports, jwt_service).await;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.expect("Server error");
}
