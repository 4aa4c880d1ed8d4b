use std::env;

/// Configuration for one static content server
#[derive(Debug, Clone)]
pub struct StaticSiteConfig {
    pub name: &'static str,
    pub directory: String,
    pub index_file: String,
    /// Also expose the directory under a "/static" prefix (admin UI layout).
    pub serve_static_prefix: bool,
    pub ip: String,
    pub port: String,
}

impl StaticSiteConfig {
    /// Frontend site configuration
    ///
    /// Environment variables:
    /// - FRONTEND_DIR: Directory to serve (default: "./frontend")
    /// - FRONTEND_PORT: Port to bind (default: "8080")
    pub fn frontend_from_env() -> Self {
        Self {
            name: "frontend",
            directory: env::var("FRONTEND_DIR").unwrap_or_else(|_| "./frontend".to_string()),
            index_file: "index.html".to_string(),
            serve_static_prefix: false,
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("FRONTEND_PORT").unwrap_or_else(|_| "8080".to_string()),
        }
    }

    /// Admin site configuration
    ///
    /// Environment variables:
    /// - ADMIN_DIR: Directory to serve (default: "./admin")
    /// - ADMIN_PORT: Port to bind (default: "8081")
    pub fn admin_from_env() -> Self {
        Self {
            name: "admin",
            directory: env::var("ADMIN_DIR").unwrap_or_else(|_| "./admin".to_string()),
            index_file: "admin.html".to_string(),
            serve_static_prefix: true,
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("ADMIN_PORT").unwrap_or_else(|_| "8081".to_string()),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
