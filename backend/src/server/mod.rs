//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::inbound::http::json_error_handler;
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users;
use user_service::outbound::persistence::DieselUserRepository;
use user_service::{ApiDoc, Trace};

const DOCS_PATH: &str = "/api-docs";
const DOCS_ROOT: &str = "/api-docs/";
const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

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
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live)
        .service(web::redirect(DOCS_PATH, DOCS_ROOT))
        .service(SwaggerUi::new("/api-docs/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Construct an Actix HTTP server backed by the Diesel user repository.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness
/// is flagged once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let repository = Arc::new(DieselUserRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::from_repository(repository));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
