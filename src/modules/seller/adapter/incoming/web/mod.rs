pub mod gate;
pub mod routes;
