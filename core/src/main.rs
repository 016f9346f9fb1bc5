mod cors;

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use api_invoices::views::ViewRevisions;
use common::env_config::Config;
use db::store::{InvoiceStore, PgStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let origin = config.cors_allowed_origin.clone();
    let cookie_secure = !origin.contains("localhost");

    // init logger
    if config.console_logging_enabled {
        logger::setup(&config).expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config)
        .await
        .expect("Failed to set up database");
    let store = PgStore::new(pool);
    let invoices: Arc<dyn InvoiceStore> = Arc::new(store.clone());
    let users: Arc<dyn UserStore> = Arc::new(store);

    // shared by all workers
    let views = web::Data::new(ViewRevisions::new());

    log::info!(
        "Starting server on {}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        let secret = config_data.session_secret.as_bytes();
        App::new()
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::from(invoices.clone()))
            .app_data(web::Data::from(users.clone()))
            .app_data(views.clone())
            .wrap(logger::middleware()) // 3rd
            .wrap(cors::middleware(&origin)) // 2nd
            .wrap(api_auth::session_middleware(cookie_secure, secret)) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_invoices::mount_views())
                    .service(
                        web::scope("/dashboard")
                            .wrap(api_auth::session_guard())
                            .service(api_invoices::mount_invoices()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
