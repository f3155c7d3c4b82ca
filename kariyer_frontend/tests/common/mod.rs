#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread;

use axum::Router;
use kariyer_frontend::api::ApiClient;
use kariyer_frontend::config::ClientConfig;

/// Serves `router` on an ephemeral port from a dedicated runtime thread and
/// returns its base URL. The blocking client must not run inside a runtime,
/// so tests stay synchronous.
pub fn spawn_server(router: Router) -> String {
    let (tx, rx) = mpsc::channel::<SocketAddr>();
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral port");
            tx.send(listener.local_addr().expect("local addr"))
                .expect("report address");
            axum::serve(listener, router).await.expect("serve");
        });
    });
    let addr = rx.recv().expect("server address");
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url).expect("api client")
}

pub fn client_with_session(base_url: &str, cookie: &str) -> ApiClient {
    ApiClient::from_config(&ClientConfig {
        api_url: base_url.to_string(),
        session_cookie: Some(cookie.to_string()),
        ..ClientConfig::default()
    })
    .expect("api client")
}
