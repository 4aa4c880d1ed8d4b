use poem::{Route, Server as PoemServer, endpoint::StaticFilesEndpoint, listener::TcpListener};

use crate::config::static_config::StaticSiteConfig;

/// File server for one static site (frontend or admin UI).
///
/// Serves the configured directory at `/` with the configured index file;
/// the admin layout additionally exposes the same directory under
/// `/static`.
pub struct StaticServer;

impl StaticServer {
    pub async fn run(config: StaticSiteConfig) -> anyhow::Result<()> {
        let addr = config.bind_address();

        let mut app = Route::new();
        if config.serve_static_prefix {
            app = app.nest("/static", StaticFilesEndpoint::new(&config.directory));
        }
        let app = app.nest(
            "/",
            StaticFilesEndpoint::new(&config.directory).index_file(&config.index_file),
        );

        println!("{} server running at http://{}", config.name, addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
