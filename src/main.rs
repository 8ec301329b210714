use route_optimizer::api::routes_api::{Client, RouteAdapter};
use route_optimizer::api::service::State;
use route_optimizer::config::{Config, VARIABLES};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the environment variables ({}).",
            VARIABLES.join(", ")
        );
    })?;

    config.log();

    let client = Client::from_url(config.routes_api_url.clone());
    let adapter = RouteAdapter::new(client, config.routes_api_key.clone());
    let state = State::new(adapter);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = route_optimizer::api::service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
