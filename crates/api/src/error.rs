// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gudlft_domain::DomainError;
use gudlft_persistence::StoreError;

/// The only text end users see for a failed request.
pub const INVALID_REQUEST: &str = "invalid request";

/// API-level errors.
///
/// These are distinct from domain and storage errors and represent the API
/// contract. Booking rejections are not errors; see `PurchaseOutcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the message to show the end user.
    ///
    /// Every failure surfaces the same way; the `Display` output carries the
    /// detail for logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::ResourceNotFound { .. } | Self::Internal { .. } => {
                INVALID_REQUEST
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidField { record, field } => ApiError::InvalidInput {
            field: String::from("field"),
            message: format!("'{field}' is not a {record} lookup field"),
        },
        DomainError::NotFound {
            record,
            field,
            value,
        } => ApiError::ResourceNotFound {
            resource_type: resource_type(record),
            message: format!("No {record} with {field} '{value}'"),
        },
    }
}

/// Translates a storage error into an API error.
///
/// Missing or unreadable data files are the operator's problem, not the
/// caller's, so they become internal errors.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::Lookup(domain_err) => translate_domain_error(domain_err),
        other @ (StoreError::NotFound { .. }
        | StoreError::Io { .. }
        | StoreError::Format { .. }) => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

fn resource_type(record: &str) -> String {
    match record {
        "club" => String::from("Club"),
        "competition" => String::from("Competition"),
        other => other.to_string(),
    }
}
