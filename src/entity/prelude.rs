pub use super::cinema::Entity as CinemaEntity;
pub use super::film::Entity as FilmEntity;
pub use super::salle::Entity as SalleEntity;
pub use super::seance::Entity as SeanceEntity;
