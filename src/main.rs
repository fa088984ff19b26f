mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::extract::State;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental Backend");
    info!("=====================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::schema::init_schema(&pool).await?;

    if config.seed_data {
        database::seed::seed_sample_data(&pool).await?;
    }

    // Crear router de la API
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/cars", routes::car_routes::create_car_router())
        .nest("/customers", routes::customer_routes::create_customer_router())
        .nest("/rentals", routes::rental_routes::create_rental_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Cars:");
    info!("   GET    /cars - Listar coches");
    info!("   POST   /cars - Registrar coche");
    info!("   GET    /cars/:id - Obtener coche");
    info!("   PUT    /cars/:id - Actualizar coche");
    info!("   DELETE /cars/:id - Eliminar coche");
    info!("   GET    /cars/available - Coches disponibles");
    info!("   GET    /cars/search?keyword= - Buscar por marca/modelo");
    info!("   GET    /cars/filter?minRate=&maxRate= - Filtrar por tarifa");
    info!("   PATCH  /cars/:id/status?status= - Cambiar estado");
    info!("   GET    /cars/make/:make/model/:model - Por marca y modelo");
    info!("👤 Endpoints - Customers:");
    info!("   GET    /customers - Listar clientes");
    info!("   POST   /customers - Registrar cliente");
    info!("   GET    /customers/:id - Obtener cliente");
    info!("   PUT    /customers/:id - Actualizar cliente");
    info!("   DELETE /customers/:id - Eliminar cliente");
    info!("   GET    /customers/search?keyword= - Buscar clientes");
    info!("   GET    /customers/email/:email - Por email");
    info!("   GET    /customers/license/:license - Por licencia");
    info!("   GET    /customers/phone/:phone - Por teléfono");
    info!("📋 Endpoints - Rentals:");
    info!("   GET    /rentals - Listar alquileres");
    info!("   POST   /rentals - Crear alquiler");
    info!("   GET    /rentals/:id - Obtener alquiler");
    info!("   PUT    /rentals/:id - Actualizar alquiler");
    info!("   DELETE /rentals/:id - Eliminar alquiler");
    info!("   PATCH  /rentals/:id/complete?actualReturnDate= - Completar");
    info!("   GET    /rentals/customer/:id - Por cliente");
    info!("   GET    /rentals/car/:id - Por coche");
    info!("   GET    /rentals/status/:status - Por estado");
    info!("   GET    /rentals/overdue - Alquileres vencidos");
    info!("   GET    /rentals/date-range?startDate=&endDate= - Por rango de fechas");
    info!("   GET    /rentals/calculate-cost?carId=&startDate=&endDate= - Calcular coste");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-rental-backend",
        "status": "healthy",
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
