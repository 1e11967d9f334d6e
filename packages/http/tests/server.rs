use std::sync::Arc;

use memkv_core_store::MemoryStore;
use memkv_http::{serve_listener, ServerConfig};
use reqwest::header::{CONTENT_TYPE, LOCATION, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start(max_upload_mib: u64) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();

        let config = ServerConfig::new(":0", max_upload_mib);
        let handle = tokio::spawn(async move {
            serve_listener(listener, config, Arc::new(MemoryStore::new()), async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            base,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn end_to_end_over_tcp() {
    let server = TestServer::start(1).await;
    let client = client();

    let response = client
        .post(server.url("/notes/today"))
        .header(USER_AGENT, "curl/8.5.0")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("buy milk")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.text().await.unwrap(),
        "Stored 8 bytes at notes/today\n"
    );

    let response = client.get(server.url("/notes/today")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/plain");
    assert_eq!(response.text().await.unwrap(), "buy milk");

    let response = client.get(server.url("/notes")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[LOCATION], "/notes/");

    let response = client.get(server.url("/notes/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains(r#"<a href="today">"#));

    let response = client.get(server.url("/missing")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    drop(client);
    server.stop().await;
}
