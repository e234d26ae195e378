use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rosterforge::router::init_router;
use rosterforge::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state();
    let listen_addr = state.server_config.listen_addr.clone();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await.unwrap();
    println!("🚀 Roster service running on http://{listen_addr}");
    println!("📚 Swagger UI available at http://{listen_addr}/swagger-ui");
    axum::serve(listener, app).await.unwrap();
}
