use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;
use arca::services::cause_client::CauseClient;
use arca::services::cause_repository::CauseRepository;
use arca::services::cause_service::CauseService;
use arca::services::email_service::EmailService;
use arca::structs::cause::Cause;
use arca::structs::config::client_config::ClientConfig;
use arca::structs::config::config::Config;
use arca::structs::config::email_config::EmailConfig;
use arca::ui::api_server::AppState;

/// Serves `body` with `status` on `GET /api/causes` from a free local port.
pub fn serve_fixture(status: StatusCode, body: &'static str) -> SocketAddr {
    let route = warp::path!("api" / "causes").map(move || {
        warp::reply::with_status(
            warp::reply::with_header(body, "content-type", "application/json"),
            status,
        )
    });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

pub fn client_for(addr: SocketAddr) -> CauseClient {
    CauseClient::new(&ClientConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
    })
    .unwrap()
}

pub fn seeded_state() -> AppState {
    let repository = CauseRepository::with_seed(vec![
        Cause::new("Missing parts", 42).with_total(120),
        Cause::new("Operator error", 31).with_description("Wrong setup"),
    ]);

    AppState {
        service: Arc::new(CauseService::new(repository)),
        email: EmailService::new(EmailConfig {
            from: "arca@localhost".to_string(),
            to: vec!["quality@example.com".to_string()],
            pause_ms: 0,
        }),
        config: Config::default(),
    }
}
