use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cinema_api::config::Config;
use cinema_api::models::{
    CinemaResponse, EntityRef, FilmResponse, SalleResponse, SaveCinema, SaveFilm, SaveSalle,
    SaveSeance, SeanceResponse,
};
use cinema_api::state::AppState;
use cinema_api::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::cinema::list_cinemas,
        handlers::cinema::get_cinema,
        handlers::cinema::create_cinema,
        handlers::cinema::update_cinema,
        handlers::cinema::delete_cinema,
        handlers::salle::list_salles,
        handlers::salle::get_salle,
        handlers::salle::create_salle,
        handlers::salle::update_salle,
        handlers::salle::delete_salle,
        handlers::seance::list_seances,
        handlers::seance::get_seance,
        handlers::seance::create_seance,
        handlers::seance::update_seance,
        handlers::seance::delete_seance,
        handlers::film::list_films,
        handlers::film::get_film,
        handlers::film::create_film,
        handlers::film::update_film,
        handlers::film::delete_film,
    ),
    components(schemas(
        EntityRef,
        SaveCinema,
        CinemaResponse,
        SaveSalle,
        SalleResponse,
        SaveSeance,
        SeanceResponse,
        SaveFilm,
        FilmResponse,
    )),
    tags(
        (name = "Cinemas", description = "Cinema management endpoints"),
        (name = "Salles", description = "Room management endpoints"),
        (name = "Seances", description = "Screening management endpoints"),
        (name = "Films", description = "Film management endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects and migrates the database)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
