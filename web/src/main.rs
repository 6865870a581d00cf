use crate::app_context::AppContext;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::{env, io};

mod api;
mod app_context;
mod config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    let config = config::load_app_config(&args)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Failed to load configuration: {}", e)))?;

    let context = web::Data::new(AppContext::from_config(&config));
    let static_assets_path = config.static_assets_path.clone();
    if let Some(path) = &static_assets_path {
        info!("Serving dashboard assets from {}", path);
    }
    info!("Listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .app_data(context.clone())
            .configure(api::configure);

        // Registered last so API routes take precedence.
        match &static_assets_path {
            Some(path) => app.service(Files::new("/", path).index_file("index.html")),
            None => app,
        }
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
