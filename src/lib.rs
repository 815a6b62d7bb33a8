//! Filmroom - play filtering and library search for sports video review
//!
//! This library provides the query core of a film-room video library:
//! a predicate filter engine over charted plays, union-range chip controls,
//! name search and breadcrumbs over the folder tree, and a keyword search
//! over clips. Everything operates on in-memory data and never mutates it.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod filters;
pub mod model;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FilmroomError {
    /// Dataset could not be loaded
    #[error("Dataset error: {0}")]
    DataError(#[from] dataset::DataError),
    /// Filter arguments could not be understood
    #[error("Filter error: {0}")]
    FilterError(#[from] filters::FilterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Results could not be rendered as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
