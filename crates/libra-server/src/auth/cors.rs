//! CORS fairing
//!
//! Echoes the request `Origin` back when it is on the configured list and
//! answers preflight requests that no route handles.

use libra_infrastructure::config::ServerCorsConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};
use std::io::Cursor;

/// CORS Fairing for Rocket
#[derive(Debug, Clone)]
pub struct Cors {
    allowed_origins: Vec<String>,
    allowed_methods: String,
    allowed_headers: String,
}

impl Cors {
    /// Build the fairing from `server.cors`
    pub fn from_config(config: &ServerCorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            allowed_methods: config.allowed_methods.join(", "),
            allowed_headers: config.allowed_headers.join(", "),
        }
    }

    /// Value of `Access-Control-Allow-Origin` for `origin`, if allowed
    pub fn allow_origin(&self, origin: &str) -> Option<String> {
        if self.allowed_origins.iter().any(|allowed| allowed == "*") {
            return Some("*".to_string());
        }
        self.allowed_origins
            .iter()
            .find(|allowed| allowed.eq_ignore_ascii_case(origin))
            .map(|_| origin.to_string())
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = request.headers().get_one("Origin") else {
            return;
        };
        let Some(allowed) = self.allow_origin(origin) else {
            return;
        };

        response.set_header(Header::new("Access-Control-Allow-Origin", allowed));
        response.set_header(Header::new("Vary", "Origin"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            self.allowed_methods.clone(),
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            self.allowed_headers.clone(),
        ));

        // Preflight: no route answers OPTIONS
        if request.method() == Method::Options && response.status() == Status::NotFound {
            response.set_status(Status::NoContent);
            response.set_sized_body(0, Cursor::new(""));
        }
    }
}
