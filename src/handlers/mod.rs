pub mod cinema;
pub mod film;
pub mod salle;
pub mod seance;

pub use cinema::{create_cinema, delete_cinema, get_cinema, list_cinemas, update_cinema};
pub use film::{create_film, delete_film, get_film, list_films, update_film};
pub use salle::{create_salle, delete_salle, get_salle, list_salles, update_salle};
pub use seance::{create_seance, delete_seance, get_seance, list_seances, update_seance};
