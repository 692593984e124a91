pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod seatable;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod testing;
