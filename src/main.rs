use dotenvy::dotenv;

use inkpress::logging::init_tracing;
use inkpress::router::init_router;
use inkpress::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind server address");

    println!("🚀 Server running on http://localhost:{}", port);
    axum::serve(listener, app).await.expect("Server error");
}
