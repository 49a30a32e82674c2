//! Shared setup for the API suites: a mock server on a random port, a client
//! pointed at it, and the shipped fixture store.

use bookstore_core::{telemetry, ApiClient, FixtureStore, Settings};

pub struct Suite {
    pub client: ApiClient,
    pub fixtures: FixtureStore,
}

/// Start a fresh mock server and return a suite wired to it. Each call gets
/// its own server, so tests never see each other's writes.
pub fn suite() -> Suite {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let settings = Settings {
        request_timeout_ms: 5_000,
        ..Settings::with_base_url(format!("http://{addr}/api/v1"))
    };
    telemetry::init(&settings);

    Suite {
        client: ApiClient::new(&settings),
        fixtures: FixtureStore::from_settings(&settings),
    }
}
