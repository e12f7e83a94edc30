//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
use metrics::build_metrics;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::warn;

use car_inventory::Trace;
use car_inventory::domain::ports::InMemoryCarRepository;
use car_inventory::inbound::http::health::HealthState;
use car_inventory::inbound::http::routes;
use car_inventory::inbound::http::state::HttpState;
use car_inventory::outbound::persistence::DieselCarRepository;

/// Wire the car ports to the Diesel repository, or to process memory when no
/// pool is configured.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::from_repository(Arc::new(DieselCarRepository::new(pool.clone()))),
        None => {
            warn!("no database pool configured; cars are kept in memory");
            HttpState::from_repository(Arc::new(InMemoryCarRepository::new()))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .configure(routes::configure)
        .wrap(Trace)
        .wrap(NormalizePath::trim())
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing binding and storage settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = build_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Application assembled the way `create_server` assembles it.

    use std::net::{Ipv4Addr, SocketAddr};

    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn in_memory_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let config = ServerConfig::new(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)));
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        build_app(health_state, web::Data::new(build_http_state(&config)))
    }

    #[rstest]
    #[actix_web::test]
    async fn serves_the_openapi_document() {
        let app = test::init_service(in_memory_app()).await;
        let req = test::TestRequest::get()
            .uri(routes::OPENAPI_JSON_PATH)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let doc: Value = test::read_body_json(res).await;
        assert!(doc["paths"]["/api/cars"].is_object());
    }

    #[rstest]
    #[case("/api-docs")]
    #[case("/api-docs/")]
    #[actix_web::test]
    async fn bare_docs_path_redirects_to_swagger_ui(#[case] uri: &'static str) {
        let app = test::init_service(in_memory_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/api-docs/index.html")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn serves_the_swagger_ui_page() {
        let app = test::init_service(in_memory_app()).await;
        let req = test::TestRequest::get()
            .uri("/api-docs/index.html")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn serves_the_welcome_text() {
        let app = test::init_service(in_memory_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn car_routes_use_the_in_memory_store_without_a_pool() {
        let app = test::init_service(in_memory_app()).await;
        let payload = json!({
            "make": "Volvo",
            "model": "XC40",
            "year": 2022,
            "color": "Blue",
            "price": 41000
        });

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/cars/")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(created).await;

        let listed = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/cars").to_request(),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let listed: Value = test::read_body_json(listed).await;
        assert_eq!(listed, json!([created]));
    }
}
