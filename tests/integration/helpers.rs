//! Shared test helpers: a minimal HTTP stub server

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use shuttle::config::ShuttleConfig;
use shuttle::registry::{RouteRegistry, RouteSpec};

pub const TOKEN: &str = "stub-token";

/// One request as seen by the stub
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

type Routes = HashMap<(String, String), (u16, String)>;

/// Answers canned responses keyed by method and path; anything else is 404.
///
/// Every response closes the connection.
pub struct StubServer {
    routes: Routes,
}

impl StubServer {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn get(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    pub fn post(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// A login route that hands out [`TOKEN`]
    pub fn with_login(self) -> Self {
        self.post(
            "/api/v1/auth/login",
            200,
            &format!(r#"{{"access_token":"{TOKEN}","token_type":"bearer"}}"#),
        )
    }

    /// Bind to an ephemeral port and serve on a background thread
    pub fn spawn(self) -> RunningStub {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let addr = listener.local_addr().expect("listener should expose addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let routes = self.routes;

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Some(recorded) = serve(stream, &routes) {
                    log.lock().expect("request log lock").push(recorded);
                }
            }
        });

        RunningStub {
            url: format!("http://{addr}"),
            requests,
        }
    }
}

pub struct RunningStub {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl RunningStub {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("request log lock").clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

fn serve(mut stream: TcpStream, routes: &Routes) -> Option<Recorded> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "authorization" => authorization = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    let (status, payload) = routes
        .get(&(method.clone(), path.clone()))
        .cloned()
        .unwrap_or_else(|| (404, r#"{"detail":"Not Found"}"#.to_string()));
    let response = format!(
        "HTTP/1.1 {status} Stub\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();

    Some(Recorded {
        method,
        path,
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// A port nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = listener.local_addr().expect("listener should expose addr");
    drop(listener);
    format!("http://{addr}")
}

/// Two-route registry small enough to stub completely
pub fn small_registry() -> RouteRegistry {
    RouteRegistry::new(vec![
        RouteSpec::new("/login", Vec::<String>::new()),
        RouteSpec::new("/customers", ["/api/v1/customers/", "/api/v1/masters/prefectures"]),
    ])
    .expect("registry should be valid")
}

/// Config pointing both sides at the given stubs, with a registry file in `dir`
pub fn config_for(backend: &str, frontend: &str, dir: &std::path::Path) -> ShuttleConfig {
    let registry_path = dir.join("routes.toml");
    std::fs::write(
        &registry_path,
        r#"
[[routes]]
route = "/login"

[[routes]]
route = "/customers"
apis = ["/api/v1/customers/", "/api/v1/masters/prefectures"]
"#,
    )
    .expect("registry file should be written");

    ShuttleConfig {
        backend_url: backend.to_string(),
        frontend_url: frontend.to_string(),
        request_timeout_secs: Some(5),
        registry: Some(registry_path),
        ..ShuttleConfig::default()
    }
}
