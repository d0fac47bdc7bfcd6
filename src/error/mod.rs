//! Error types for the catalog core.
//!
//! `AppError` is the top-level error returned by repositories, services and the
//! CLI. Domain-significant failures (validation, malformed identifiers, missing
//! records) get their own variants so callers can react to them; store failures
//! are carried through unchanged.

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::{
    error::{
        config::ConfigError,
        validation::{EntityValidationError, InvalidIdError},
    },
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates every error the catalog can produce. Most variants use `#[from]`
/// so `?` converts domain and infrastructure errors automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An entity or search result failed schema validation.
    ///
    /// Carries the per-field error tree describing every violated rule.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    /// An identifier string is not a UUID v4.
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),

    /// Lookup by key found no matching entity.
    ///
    /// # Fields
    /// - Message naming the entity and the key that was looked up
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    ///
    /// Backing store failures are never retried or wrapped further.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// JSON serialization error while rendering entities or DTOs.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Builds the not-found error for an entity lookup.
    ///
    /// # Arguments
    /// - `entity` - Name of the entity type that was searched for
    /// - `id` - The lookup key
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} not found using id {id}"))
    }

    /// Converts the error into the transport-agnostic error body.
    ///
    /// Store and serialization failures are reduced to a generic message and
    /// logged; domain errors keep their message.
    pub fn into_dto(self) -> ErrorDto {
        let message = self.to_string();

        match self {
            Self::Validation(err) => ErrorDto {
                error: message,
                details: serde_json::to_value(&err.errors).ok(),
            },
            Self::InvalidId(_) | Self::NotFound(_) | Self::Config(_) => ErrorDto {
                error: message,
                details: None,
            },
            Self::DbErr(_) | Self::Serialization(_) => {
                tracing::error!("Internal error: {}", message);
                ErrorDto {
                    error: "Internal error".to_string(),
                    details: None,
                }
            }
        }
    }
}
