use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use rally_board_server::{config::settings, db::DataStore, http, metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration (data source is decided once, here)
    let cfg = settings();
    log::info!("data source: {}", cfg.data_source.label());

    let store = web::Data::new(
        DataStore::new(&cfg.data_source, cfg.remote_timeout)
            .context("building the data store")?,
    );

    log::info!("listening on {}", cfg.server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(store.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&cfg.server_addr)
    .with_context(|| format!("binding {}", cfg.server_addr))?
    .run()
    .await?;

    Ok(())
}
