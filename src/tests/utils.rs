use crate::app::App;
use crate::config::{Config, DEFAULT_PAGE_SIZE, DEFAULT_PRICE_CEILING};
use crate::db::connection::Database;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A database file path nobody else is using. The file is created on first use.
pub fn temp_db(name: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("unistay_{name}_{nanos}_{n}.sqlite"));
    Database::new(path.to_string_lossy().into_owned())
}

pub fn test_config() -> Config {
    Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        db_path: String::new(),
        schema_path: "sql/schema.sql".into(),
        seed_path: "data/hostels.json".into(),
        page_size: DEFAULT_PAGE_SIZE,
        price_ceiling: DEFAULT_PRICE_CEILING,
        workers: 1,
        catalog_url: None,
    }
}

/// App over a fresh database seeded with the bundled hostels.
pub fn test_app(name: &str) -> App {
    let db = temp_db(name);
    let config = Config {
        db_path: db.path().to_string(),
        ..test_config()
    };
    App::start(config).unwrap_or_else(|e| panic!("App startup failed: {e}"))
}

pub fn get(app: &App, uri: &str) -> Response {
    send(app, Method::GET, uri, None, Body::empty())
}

pub fn get_with_cookie(app: &App, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, Some(cookie), Body::empty())
}

pub fn post_form(app: &App, uri: &str, cookie: Option<&str>, form: &str) -> Response {
    send(app, Method::POST, uri, cookie, Body::from(form.to_string()))
}

fn send(app: &App, method: Method, uri: &str, cookie: Option<&str>, body: Body) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    let req = builder.body(body).unwrap();
    handle(req, app).unwrap_or_else(|e| panic!("{uri} failed: {e}"))
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Like `get`, but hands back the handler error instead of panicking.
pub fn try_get(app: &App, uri: &str) -> crate::responses::ResultResp {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    handle(req, app)
}

/// Serves a single HTTP response on a local port and returns the URL to fetch.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/hostels.json")
}
