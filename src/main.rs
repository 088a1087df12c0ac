mod config;
mod envelope;
mod error;
mod presentation;
mod render;
mod routes;
mod slides;
mod status;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::slides::SlideData;
use crate::status::StatusClient;
use axum::{Router, routing::get};
use http::{HeaderValue, Method};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub struct AppState {
    config: Config,
    slides: Arc<[SlideData]>,
    status_client: StatusClient,
    started_at: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wrapped=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting Wrapped...");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    // Load the slide deck
    let slides = slides::deck::load(config.presentation.deck_path.as_deref())?;
    info!("Presenting {} slides", slides.len());

    let status_client = StatusClient::new(config.frontend.clone())?;

    // Create shared application state
    let state = Arc::new(AppState {
        config: config.clone(),
        slides,
        status_client,
        started_at: Instant::now(),
    });

    // Build the application router
    let app = build_router(state)?;

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Listening on http://{}", addr);
    info!("Environment: {}", config.server.environment);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Graceful shutdown handler
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}

fn build_router(state: Arc<AppState>) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.config.server.cors_origin).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Invalid CORS origin '{}': {}",
            state.config.server.cors_origin,
            e
        ))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(routes::health_check))
        .route("/api", get(routes::api_root))
        .route("/api/hello", get(routes::hello))
        .route("/api/slides", get(routes::list_slides));

    // Browser pages and the presentation socket
    let ui_routes = Router::new()
        .route("/", get(routes::serve_home_page))
        .route("/wrapped", get(routes::serve_presentation_page))
        .route("/wrapped/ws", get(presentation::presentation_socket));

    Ok(Router::new()
        .merge(api_routes)
        .merge(ui_routes)
        .fallback(routes::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FrontendConfig, PresentationConfig, ServerConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use futures_util::{SinkExt, StreamExt};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
    use tower::ServiceExt; // for oneshot

    fn test_state(auto_play: bool, auto_play_duration_ms: u64) -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origin: "http://localhost:3000".to_string(),
                environment: "test".to_string(),
            },
            frontend: FrontendConfig {
                // Nothing listens on port 9 locally
                api_url: "http://127.0.0.1:9".to_string(),
                request_timeout_seconds: 1,
            },
            presentation: PresentationConfig {
                auto_play,
                auto_play_duration_ms,
                deck_path: None,
            },
        };

        Arc::new(AppState {
            status_client: StatusClient::new(config.frontend.clone()).unwrap(),
            slides: slides::deck::demo_deck().into(),
            config,
            started_at: Instant::now(),
        })
    }

    async fn get_request(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = build_router(test_state(false, 5000)).unwrap();
        let (status, bytes) = get_request(app, uri).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Server is healthy");
        let timestamp = body["data"]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(body["data"]["uptime"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn test_api_root() {
        let (status, body) = get_json("/api").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "success": true, "message": "Welcome to the API" })
        );
    }

    #[tokio::test]
    async fn test_hello() {
        let (status, body) = get_json("/api/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().unwrap().starts_with("Hello"));
        assert!(body["data"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_list_slides() {
        let (status, body) = get_json("/api/slides").await;

        assert_eq!(status, StatusCode::OK);
        let types: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|slide| slide["type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            types,
            ["intro", "stats-overview", "top-prompts", "quotes", "summary"]
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get_json("/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Route not found" })
        );
    }

    #[tokio::test]
    async fn test_cors_origin_header() {
        let app = build_router(test_state(false, 5000)).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_presentation_page_renders_every_slide() {
        let app = build_router(test_state(false, 5000)).unwrap();
        let (status, bytes) = get_request(app, "/wrapped").await;
        let html = String::from_utf8(bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("aria-label=\"Go to slide").count(), 5);
        assert!(html.contains(r#"data-kind="intro""#));
        assert!(html.contains(r#"data-kind="summary""#));
        assert!(html.contains("1 / 5"));
    }

    #[tokio::test]
    async fn test_autoplay_button_title_follows_config() {
        let app = build_router(test_state(true, 5000)).unwrap();
        let (_, bytes) = get_request(app, "/wrapped").await;
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains(r#"id="autoplay" title="Pause""#));

        let app = build_router(test_state(false, 5000)).unwrap();
        let (_, bytes) = get_request(app, "/wrapped").await;
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains(r#"id="autoplay" title="Play""#));
    }

    #[tokio::test]
    async fn test_home_page_reports_unreachable_api() {
        let app = build_router(test_state(false, 5000)).unwrap();
        let (status, bytes) = get_request(app, "/").await;
        let html = String::from_utf8(bytes).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Cannot connect to API"));
    }

    async fn spawn_server(state: Arc<AppState>) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(state).unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn next_json<S>(stream: &mut S) -> Value
    where
        S: futures_util::Stream<
                Item = std::result::Result<Message, tokio_tungstenite::tungstenite::Error>,
            > + Unpin,
    {
        loop {
            match stream.next().await.unwrap().unwrap() {
                Message::Text(text) => return serde_json::from_str(&text).unwrap(),
                _ => continue,
            }
        }
    }

    #[tokio::test]
    async fn test_presentation_socket_navigation() {
        let addr = spawn_server(test_state(false, 5000)).await;
        let (mut ws, _) = connect_async(format!("ws://{}/wrapped/ws", addr))
            .await
            .unwrap();

        let frame = next_json(&mut ws).await;
        assert_eq!(frame["index"], 0);
        assert_eq!(frame["total"], 5);
        assert_eq!(frame["isAutoPlaying"], false);

        ws.send(Message::Text(r#"{"action":"key","key":"ArrowLeft"}"#.to_string()))
            .await
            .unwrap();
        let frame = next_json(&mut ws).await;
        assert_eq!(frame["index"], 4);
        assert_eq!(frame["kind"], "summary");

        ws.send(Message::Text(r#"{"action":"goTo","index":9}"#.to_string()))
            .await
            .unwrap();
        let reply = next_json(&mut ws).await;
        assert!(reply["error"].as_str().unwrap().contains("out of range"));

        ws.send(Message::Text(r#"{"action":"goTo","index":2}"#.to_string()))
            .await
            .unwrap();
        let frame = next_json(&mut ws).await;
        assert_eq!(frame["index"], 2);
        assert_eq!(frame["kind"], "top-prompts");

        ws.close(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_presentation_socket_auto_advances() {
        let addr = spawn_server(test_state(true, 50)).await;
        let (mut ws, _) = connect_async(format!("ws://{}/wrapped/ws", addr))
            .await
            .unwrap();

        let frame = next_json(&mut ws).await;
        assert_eq!(frame["index"], 0);
        assert_eq!(frame["isAutoPlaying"], true);

        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), next_json(&mut ws))
            .await
            .unwrap();
        assert_eq!(frame["index"], 1);

        ws.close(None).await.unwrap();
    }
}
