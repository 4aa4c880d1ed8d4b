use super::{cors_config, server_config::ServerConfig, static_config::StaticSiteConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub frontend: StaticSiteConfig,
    pub admin: StaticSiteConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            frontend: StaticSiteConfig::frontend_from_env(),
            admin: StaticSiteConfig::admin_from_env(),
        }
    }
}
