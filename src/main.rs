mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use log::{error, info};
use env_logger::Env;
use actix_web::middleware::Logger;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};
use crate::db::{JsonFileStore, MemoryStore, ProfileStore};
use crate::utils::gemini::create_gemini_client;

fn startup_error(message: String) -> io::Error {
    error!("{}", message);
    io::Error::other(message)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| startup_error(e.to_string()))?;

    // Profile store
    let store: Arc<dyn ProfileStore> = match config.store_backend {
        StoreBackend::Json => {
            let store = JsonFileStore::new(&config.users_file);
            info!("Using JSON profile store at {}", store.path().display());
            Arc::new(store)
        }
        StoreBackend::Memory => {
            info!("Using in-memory profile store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // AI proxy client
    let gemini = create_gemini_client(&config.gemini).map_err(|e| startup_error(e.to_string()))?;

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "health_assistant".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|e| startup_error(format!("Failed to create Prometheus metrics: {}", e)))?;

    let bind_address = config.bind_address.clone();
    info!("Starting server at {}", bind_address);

    let store = web::Data::from(store);
    let config = web::Data::new(config);
    let gemini = web::Data::new(gemini);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default()) // Logging middleware
            .wrap(prometheus.clone()) // Prometheus metrics middleware
            .app_data(store.clone())
            .app_data(config.clone())
            .app_data(gemini.clone())
            .configure(handlers::configure)
    })
    .workers(num_cpus::get())
    .bind(&bind_address)?
    .run()
    .await
}
