use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod category {
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
    pub mod static_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
    pub mod static_server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server, static_server::StaticServer};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the API
/// server plus the two static content servers:
/// - config/: Application configuration (server, CORS, database, static sites)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let AppConfig {
        server,
        cors,
        frontend,
        admin,
    } = AppConfig::from_env();

    // 4. Initialize database pool and ensure the products table exists.
    //    Any failure here aborts startup.
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 6. Run the API server and both static servers as independent tasks.
    //    The first listener to exit stops the process.
    let api = tokio::spawn(Server::run(server, cors, container));
    let frontend = tokio::spawn(StaticServer::run(frontend));
    let admin = tokio::spawn(StaticServer::run(admin));

    tokio::select! {
        res = api => res??,
        res = frontend => res??,
        res = admin => res??,
    }

    Ok(())
}
