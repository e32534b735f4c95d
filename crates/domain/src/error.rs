// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while looking up club or competition records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested field is not a lookup field for this kind of record.
    InvalidField {
        /// The kind of record being searched (`club` or `competition`).
        record: &'static str,
        /// The field name that was rejected.
        field: String,
    },
    /// No record carries the requested value in the requested field.
    NotFound {
        /// The kind of record being searched (`club` or `competition`).
        record: &'static str,
        /// The field that was searched.
        field: String,
        /// The value that was not found.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { record, field } => {
                write!(
                    f,
                    "the field you used is not valid: '{field}' is not a {record} lookup field"
                )
            }
            Self::NotFound {
                record,
                field,
                value,
            } => {
                write!(
                    f,
                    "there is no item matching the value you entered: no {record} with {field} '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
