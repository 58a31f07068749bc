use std::sync::{Arc, Mutex};

use athome_api::models::Location;
use athome_server::app::create_app;
use athome_server::configs::{Hub, Logger, Server, Settings};
use axum::Router;
use axum::response::Response;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub struct MockApp {
    pub router: Router,
    /// Requests the scripted hub received, in order
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl MockApp {
    /// Builds the console router against a scripted hub listening on a
    /// loopback port: each accepted connection consumes the next canned
    /// response, then closes, matching the hub's one-exchange-per-socket
    /// behavior.
    pub async fn new(responses: Vec<Value>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let hub_addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };

                let mut buf = vec![0u8; 64 * 1024];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                if let Ok(request) = serde_json::from_slice::<Value>(&buf[..n]) {
                    seen.lock().unwrap().push(request);
                }

                stream.write_all(response.to_string().as_bytes()).await.ok();
            }
        });

        let settings = Arc::new(Settings {
            server: Server {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            logger: Logger {
                level: "debug".to_string(),
            },
            hub: Hub {
                host: hub_addr.ip().to_string(),
                port: hub_addr.port(),
                timeout_secs: 5,
            },
            location: Location {
                latitude: 40.7128,
                longitude: -74.006,
            },
        });

        Self {
            router: create_app(&settings),
            requests,
        }
    }

    /// The nth request the hub received.
    pub fn hub_request(&self, index: usize) -> Value {
        self.requests.lock().unwrap()[index].clone()
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
