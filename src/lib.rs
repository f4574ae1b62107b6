//! Live results for the cats vs dogs vote.
//!
//! `results-server` answers `GET /results` by counting vote rows in Postgres
//! on every request. `results-watch` polls that endpoint and draws the split
//! in a terminal, the same way the browser page does.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod presenter;
pub mod tasks;
pub mod voting;
