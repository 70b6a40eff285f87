pub mod app;
pub mod factory;

pub use app::TestApp;
#[allow(unused_imports)]
pub use factory::Factory;
