use time::macros::date;

use cinema_api::models::{
    CinemaResponse, EntityRef, FilmResponse, SalleResponse, SaveCinema, SaveFilm, SaveSalle,
    SaveSeance, SeanceResponse,
};
use cinema_api::state::AppState;

/// Factory for creating test data through the service layer
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test cinema
    pub async fn create_cinema(&self, id: &str, name: &str) -> CinemaResponse {
        self.state
            .cinemas
            .save(SaveCinema {
                id: Some(id.to_string()),
                name: name.to_string(),
            })
            .await
            .unwrap()
    }

    /// Create a test salle, optionally inside a cinema
    pub async fn create_salle(&self, id: &str, cinema_id: Option<&str>) -> SalleResponse {
        self.state
            .salles
            .save(SaveSalle {
                id: Some(id.to_string()),
                room_number: 1,
                seat_count: 100,
                cinema: cinema_id.map(EntityRef::new),
            })
            .await
            .unwrap()
    }

    /// Create a test seance on 2024-06-01, optionally in a salle
    pub async fn create_seance(&self, id: &str, salle_id: Option<&str>) -> SeanceResponse {
        self.state
            .seances
            .save(SaveSeance {
                id: Some(id.to_string()),
                date: date!(2024 - 06 - 01),
                salle: salle_id.map(EntityRef::new),
            })
            .await
            .unwrap()
    }

    /// Create a test film, optionally attached to a seance
    pub async fn create_film(&self, id: &str, seance_id: Option<&str>) -> FilmResponse {
        self.state
            .films
            .save(SaveFilm {
                id: Some(id.to_string()),
                name: "Mon Film".to_string(),
                duration: 120.0,
                seance: seance_id.map(EntityRef::new),
            })
            .await
            .unwrap()
    }

    /// Create a full chain: cinema "c1" -> salle "s1" -> seance "se1" -> film "f1"
    pub async fn create_hierarchy(&self) -> FilmResponse {
        self.create_cinema("c1", "gaumont").await;
        self.create_salle("s1", Some("c1")).await;
        self.create_seance("se1", Some("s1")).await;
        self.create_film("f1", Some("se1")).await
    }
}
