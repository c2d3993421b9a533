pub mod config;

pub mod state;

pub mod auth;

pub mod backend;

// Federated search pipeline
pub mod search;

pub mod rest;

pub mod openapi;

pub mod error_convert;

pub mod telemetry;

pub mod health;
