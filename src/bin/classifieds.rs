// classifieds/src/bin/classifieds.rs

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use log::info;
use std::time::Duration;

use classifieds::{
    classifieds_initialize, configure_classifieds_services, get_app_config, get_session_key,
    get_session_middleware, setup_logging,
};

#[derive(Parser)]
#[command(name = "classifieds")]
#[command(about = "Classifieds web frontend with category-aware listing forms")]
#[command(version)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Base URL of the remote category API
    #[arg(long, env = "API_BASE_URL")]
    api_base_url: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS")]
    fetch_timeout_secs: Option<u64>,

    /// Number of worker threads (defaults to the number of cores)
    #[arg(short, long)]
    workers: Option<usize>,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging();

    let mut config = get_app_config();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }
    if let Some(secs) = cli.fetch_timeout_secs {
        config.fetch_timeout = Duration::from_secs(secs);
    }

    info!("🔧 Environment: {}", config.environment);

    let state = web::Data::new(classifieds_initialize(config.clone()).await?);
    let session_key = get_session_key(&config);
    let bind = config.bind_address();

    info!("🚀 Classifieds listening on http://{}:{}", bind.0, bind.1);

    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(get_session_middleware(session_key.clone(), &config))
            .wrap(Logger::default())
            .configure(|cfg| configure_classifieds_services(cfg, state))
    });
    if let Some(workers) = cli.workers {
        server = server.workers(workers);
    }

    server.bind(bind)?.run().await?;
    Ok(())
}
