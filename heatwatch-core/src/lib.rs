//! Core library for `heatwatch`.
//!
//! This crate defines:
//! - Configuration handling
//! - The Open-Meteo location resolver and forecast source
//! - Consecutive-day heat streak analysis
//! - The per-city pipeline shared by the CLI and the HTTP server

pub mod analyzer;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use analyzer::{Analysis, analyze};
pub use config::Config;
pub use error::{ForecastError, LookupError, ResolveError};
pub use model::{AnalysisRequest, AnalysisResponse, AnalysisResult, DailyRecord, DailySeries, Place};
pub use provider::{ForecastSource, LocationResolver};
pub use service::Tracker;
