use std::fs;
use std::path::Path;
use std::sync::Arc;

use http_body_util::BodyExt;
use hyper::body::Bytes;
use hyper::Method;
use tempfile::tempdir;

use tinyhttpd::config::{AppState, Config, LoggingConfig, RoutesConfig, ServerConfig};
use tinyhttpd::handler::dispatch;

fn state_for(web_root: &Path) -> AppState {
    state_with_routes(web_root, None)
}

fn state_with_routes(web_root: &Path, home_greeting: Option<String>) -> AppState {
    AppState::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            web_root: web_root.display().to_string(),
            workers: None,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
        },
        routes: RoutesConfig {
            stats_path: "/stats".to_string(),
            home_greeting,
        },
    })
}

async fn body_string(response: hyper::Response<http_body_util::Full<Bytes>>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header<'a>(
    response: &'a hyper::Response<http_body_util::Full<Bytes>>,
    name: &str,
) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn get_root_serves_index_with_exact_headers() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Hi</h1>").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::GET, "/", &Bytes::new()).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(header(&resp, "Content-Length"), Some("11"));
    assert_eq!(body_string(resp).await, "<h1>Hi</h1>");
}

#[tokio::test]
async fn get_unknown_extension_is_octet_stream() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.xyz"), [0u8, 1, 2]).unwrap();
    fs::write(dir.path().join("noext"), "data").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::GET, "/blob.xyz", &Bytes::new()).await;
    assert_eq!(header(&resp, "Content-Type"), Some("application/octet-stream"));

    let resp = dispatch(&state, &Method::GET, "/noext", &Bytes::new()).await;
    assert_eq!(header(&resp, "Content-Type"), Some("application/octet-stream"));
}

#[tokio::test]
async fn get_missing_file_is_404_with_uniform_body() {
    let dir = tempdir().unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::GET, "/nope.html", &Bytes::new()).await;

    assert_eq!(resp.status(), 404);
    assert_eq!(header(&resp, "Content-Type"), Some("text/plain"));
    assert_eq!(body_string(resp).await, "HTTP/1.1 404 Not Found\n\nNot Found");
}

#[tokio::test]
async fn get_directory_falls_back_to_its_index() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/index.html"), "docs home").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::GET, "/docs", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp).await, "docs home");

    // Trailing slash behaves the same
    let resp = dispatch(&state, &Method::GET, "/docs/", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn get_directory_without_index_is_404() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::GET, "/empty", &Bytes::new()).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn head_returns_headers_and_no_body() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::HEAD, "/a.txt", &Bytes::new()).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(header(&resp, "Content-Length"), Some("5"));
    assert_eq!(body_string(resp).await, "");
}

#[tokio::test]
async fn head_on_directory_is_404_even_with_index() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/index.html"), "docs home").unwrap();
    let state = state_for(dir.path());

    // GET falls back to the index, HEAD deliberately does not
    let resp = dispatch(&state, &Method::GET, "/docs", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
    let resp = dispatch(&state, &Method::HEAD, "/docs", &Bytes::new()).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn put_then_get_roundtrips_bytes() {
    let dir = tempdir().unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(
        &state,
        &Method::PUT,
        "/notes/a.txt",
        &Bytes::from_static(b"hello"),
    )
    .await;
    assert_eq!(resp.status(), 201);
    assert_eq!(body_string(resp).await, "HTTP/1.1 201 Created\n\nCreated");
    assert!(dir.path().join("notes").is_dir());

    let resp = dispatch(&state, &Method::GET, "/notes/a.txt", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(body_string(resp).await, "hello");
}

#[tokio::test]
async fn post_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "old content, longer").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::POST, "/a.txt", &Bytes::from_static(b"new")).await;
    assert_eq!(resp.status(), 201);

    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "new");
}

#[tokio::test]
async fn mutations_with_traversal_are_forbidden_regardless_of_target() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("real.txt"), "x").unwrap();
    let state = state_for(dir.path());

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let resp = dispatch(&state, &method, "/../outside.txt", &Bytes::from_static(b"x")).await;
        assert_eq!(resp.status(), 403, "{method} should reject traversal");
    }

    // The check is a raw substring match: a benign name containing
    // `..` is also rejected. Known-weak boundary, pinned on purpose.
    let resp = dispatch(
        &state,
        &Method::PUT,
        "/draft..txt",
        &Bytes::from_static(b"x"),
    )
    .await;
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn delete_existing_file_is_204_then_gone() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gone.txt"), "bye").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::DELETE, "/gone.txt", &Bytes::new()).await;
    assert_eq!(resp.status(), 204);
    assert_eq!(body_string(resp).await, "");

    let resp = dispatch(&state, &Method::GET, "/gone.txt", &Bytes::new()).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_missing_file_is_404_not_500() {
    let dir = tempdir().unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::DELETE, "/never-existed", &Bytes::new()).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "hi").unwrap();
    let state = state_for(dir.path());

    let resp = dispatch(&state, &Method::PATCH, "/index.html", &Bytes::new()).await;
    assert_eq!(resp.status(), 405);
    assert_eq!(
        body_string(resp).await,
        "HTTP/1.1 405 Method Not Allowed\n\nMethod Not Allowed"
    );
}

#[tokio::test]
async fn stats_counts_every_request_including_errors() {
    let dir = tempdir().unwrap();
    let state = state_for(dir.path());

    dispatch(&state, &Method::GET, "/missing", &Bytes::new()).await; // 404
    dispatch(&state, &Method::PATCH, "/", &Bytes::new()).await; // 405
    dispatch(&state, &Method::DELETE, "/../x", &Bytes::new()).await; // 403

    let resp = dispatch(&state, &Method::GET, "/stats", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), Some("application/json"));

    let payload: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    // The stats request itself is counted too
    assert_eq!(payload["totalRequests"], 4);
    let uptime = payload["uptimeSeconds"].as_str().unwrap();
    assert!(uptime.parse::<f64>().is_ok(), "bad uptime: {uptime}");
    assert_eq!(uptime.split('.').nth(1).map(str::len), Some(2));
}

#[tokio::test]
async fn concurrent_requests_never_lose_an_increment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "hi").unwrap();
    let state = Arc::new(state_for(dir.path()));

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let state = Arc::clone(&state);
        tasks.push(tokio::spawn(async move {
            dispatch(&state, &Method::GET, "/", &Bytes::new()).await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(state.request_count(), 50);
}

#[tokio::test]
async fn home_greeting_takes_precedence_over_index_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "from disk").unwrap();
    let state = state_with_routes(dir.path(), Some("<h1>Greetings</h1>".to_string()));

    let resp = dispatch(&state, &Method::GET, "/", &Bytes::new()).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(body_string(resp).await, "<h1>Greetings</h1>");

    // Other paths still hit the filesystem
    let resp = dispatch(&state, &Method::GET, "/index.html", &Bytes::new()).await;
    assert_eq!(body_string(resp).await, "from disk");
}
