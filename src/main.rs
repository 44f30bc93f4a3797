pub mod host;
pub mod modules;
pub mod shared;

use actix_web::{web, App, HttpServer};
use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Per-process configuration handed to the function host.
///
/// `DATABASE_URL` is deliberately not validated here: a missing or broken
/// connection string surfaces as a connection fault at invocation time, not
/// at startup.
#[derive(Clone)]
pub struct FunctionConfig {
    pub database_url: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_default();
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    info!("verified-users function listening on {}:{}", host, port);

    let config = web::Data::new(FunctionConfig { database_url });

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .default_service(web::route().to(host::function_entrypoint))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
