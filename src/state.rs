use std::sync::Arc;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use sqlx::migrate::Migrator;

use crate::config::Config;
use crate::repositories::{CinemaRepository, FilmRepository, SalleRepository, SeanceRepository};
use crate::services::{CinemaService, FilmService, SalleService, SeanceService};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM database connection
    pub db: DatabaseConnection,
    pub config: Config,
    pub cinemas: CinemaService,
    pub salles: SalleService,
    pub seances: SeanceService,
    pub films: FilmService,
}

impl AppState {
    /// Create a new AppState by connecting to the database and running migrations
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        run_migrations(&db).await?;

        Ok(Self::from_connection(db, config))
    }

    /// Wire repositories and services on top of an existing connection
    pub fn from_connection(db: DatabaseConnection, config: Config) -> Self {
        let cinemas = CinemaService::new(Arc::new(CinemaRepository::new(db.clone())));
        let salles =
            SalleService::new(Arc::new(SalleRepository::new(db.clone())), cinemas.clone());
        let seances =
            SeanceService::new(Arc::new(SeanceRepository::new(db.clone())), salles.clone());
        let films =
            FilmService::new(Arc::new(FilmRepository::new(db.clone())), seances.clone());

        Self {
            db,
            config,
            cinemas,
            salles,
            seances,
            films,
        }
    }
}

/// Apply the SQL migrations on SeaORM's own pool
async fn run_migrations(db: &DatabaseConnection) -> Result<(), AppStateError> {
    let result = match db.get_database_backend() {
        DbBackend::Postgres => MIGRATOR.run(db.get_postgres_connection_pool()).await,
        DbBackend::Sqlite => MIGRATOR.run(db.get_sqlite_connection_pool()).await,
        backend => return Err(AppStateError::UnsupportedBackend(format!("{:?}", backend))),
    };

    result.map_err(|e| AppStateError::Migration(e.to_string()))?;
    tracing::info!("Database migrations applied");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),
}
