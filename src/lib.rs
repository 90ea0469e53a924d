pub mod database;
pub mod server;
pub mod services;

#[cfg(feature = "graphql")]
pub mod graphql;
