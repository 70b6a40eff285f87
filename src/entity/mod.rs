pub mod cinema;
pub mod film;
pub mod salle;
pub mod seance;

pub mod prelude;

pub use prelude::*;
