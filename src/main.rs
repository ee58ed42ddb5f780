use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fitwise::config::{LoggingSettings, Settings, StorageBackendKind, StorageSettings};
use fitwise::core::SizeAdvisor;
use fitwise::models::ConfidenceWeights;
use fitwise::routes::{self, handle_json_payload_error, handle_path_error, AppState};
use fitwise::services::{
    FileBackend, MeasurementStore, MemoryBackend, RedisBackend, StorageBackend, StorageError, TryOnClient,
};

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

async fn build_backend(storage: &StorageSettings) -> Result<Arc<dyn StorageBackend>, StorageError> {
    let backend: Arc<dyn StorageBackend> = match storage.backend {
        StorageBackendKind::Memory => Arc::new(MemoryBackend::new()),
        StorageBackendKind::File => Arc::new(FileBackend::new(&storage.path)),
        StorageBackendKind::Redis => {
            let redis_url = storage
                .redis_url
                .as_deref()
                .ok_or_else(|| StorageError::Unavailable("storage.redis_url is not set".to_string()))?;
            let l1_size = storage.l1_cache_size.unwrap_or(1000);
            let ttl_secs = storage.ttl_secs.unwrap_or(300);

            let backend = RedisBackend::new(redis_url, l1_size, ttl_secs).await?;
            info!("Redis storage connected (L1: {} entries, TTL: {}s)", l1_size, ttl_secs);
            Arc::new(backend)
        }
    };

    Ok(backend)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(format!("Configuration error: {}", e)));
        }
    };

    init_logging(&settings.logging);
    info!("Starting Fitwise size recommendation service...");

    let backend = build_backend(&settings.storage).await.map_err(|e| {
        error!("Failed to initialise {:?} storage: {}", settings.storage.backend, e);
        std::io::Error::other(e.to_string())
    })?;
    let store = MeasurementStore::new(backend);

    info!("Measurement store initialized ({})", store.backend_name());

    let weights = ConfidenceWeights::from(&settings.recommendation.confidence);
    let advisor = SizeAdvisor::new(weights);

    info!("Size advisor initialized with weights: {:?}", weights);

    let try_on = match &settings.try_on {
        Some(try_on) => {
            let client = TryOnClient::new(
                try_on.endpoint.clone(),
                try_on.api_key.clone(),
                Duration::from_secs(try_on.timeout_secs),
            )
            .map_err(|e| {
                error!("Failed to create try-on client: {}", e);
                std::io::Error::other(e.to_string())
            })?;
            info!("Try-on client initialized ({})", try_on.endpoint);
            Some(Arc::new(client))
        }
        None => {
            info!("Try-on not configured, endpoints will return 503");
            None
        }
    };

    let app_state = AppState {
        store,
        advisor,
        try_on,
        default_language: settings.recommendation.default_language,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
