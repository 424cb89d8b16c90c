pub mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod trip;
