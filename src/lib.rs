//! Library entrypoint for OrderLedger.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, router, stores, config).

pub mod config;
pub mod models;
pub mod store;

pub mod controllers;
pub mod routes;

use std::sync::Arc;

use crate::store::OrderStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: Arc<dyn OrderStore>,
}
