pub mod app;
pub mod config;
pub mod data;
pub mod editor;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
pub mod view_models;

#[cfg(test)]
mod test_support;

pub use app::QuizApp;
