// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field lookups over club and competition collections.
//!
//! Each record kind accepts a closed set of lookup fields. Field names coming
//! from callers are parsed into that set before any record is inspected, so an
//! unknown field is reported even against an empty collection.

use crate::error::DomainError;
use crate::types::{Club, Competition};
use std::str::FromStr;

/// A record kind that can be searched by one of its fields.
pub trait Record {
    /// The closed set of fields this record can be searched by.
    type Field: Copy + FromStr<Err = DomainError> + std::fmt::Display;

    /// The record kind, used in error messages.
    const KIND: &'static str;

    /// Returns whether this record's `field` equals `value` exactly.
    fn matches(&self, field: Self::Field, value: &str) -> bool;
}

/// Lookup fields for clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubField {
    /// The club name.
    Name,
    /// The club contact email.
    Email,
}

impl ClubField {
    /// Returns the persisted field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

impl FromStr for ClubField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            _ => Err(DomainError::InvalidField {
                record: Club::KIND,
                field: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ClubField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lookup fields for competitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionField {
    /// The competition name.
    Name,
    /// The competition date, compared in its persisted text form.
    Date,
}

impl CompetitionField {
    /// Returns the persisted field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
        }
    }
}

impl FromStr for CompetitionField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            _ => Err(DomainError::InvalidField {
                record: Competition::KIND,
                field: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CompetitionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Record for Club {
    type Field = ClubField;

    const KIND: &'static str = "club";

    fn matches(&self, field: ClubField, value: &str) -> bool {
        match field {
            ClubField::Name => self.name == value,
            ClubField::Email => self.email == value,
        }
    }
}

impl Record for Competition {
    type Field = CompetitionField;

    const KIND: &'static str = "competition";

    fn matches(&self, field: CompetitionField, value: &str) -> bool {
        match field {
            CompetitionField::Name => self.name == value,
            CompetitionField::Date => self.date_text().is_ok_and(|text| text == value),
        }
    }
}

/// A matched record together with the collection it was found in.
///
/// The match is kept as a position inside the collection, so changes made
/// through [`Found::record_mut`] are visible in the collection as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<R> {
    index: usize,
    records: Vec<R>,
}

impl<R> Found<R> {
    /// Returns the position of the match within the collection.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the matched record.
    #[must_use]
    pub fn record(&self) -> &R {
        &self.records[self.index]
    }

    /// Returns the matched record for in-place changes.
    pub fn record_mut(&mut self) -> &mut R {
        &mut self.records[self.index]
    }

    /// Returns the whole collection.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the lookup, returning the whole collection.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// Finds the first record whose `field` equals `value`.
///
/// # Arguments
///
/// * `records` - The collection to search
/// * `field` - The lookup field
/// * `value` - The value to match exactly
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no record matches.
pub fn find_by<R: Record>(
    records: Vec<R>,
    field: R::Field,
    value: &str,
) -> Result<Found<R>, DomainError> {
    let index: usize = records
        .iter()
        .position(|record| record.matches(field, value))
        .ok_or_else(|| DomainError::NotFound {
            record: R::KIND,
            field: field.to_string(),
            value: value.to_string(),
        })?;

    Ok(Found { index, records })
}

/// Finds the first record whose field named `field_name` equals `value`.
///
/// The field name is validated against the record's lookup fields before
/// the collection is searched.
///
/// # Arguments
///
/// * `records` - The collection to search
/// * `field_name` - The name of the lookup field
/// * `value` - The value to match exactly
///
/// # Returns
///
/// * `Ok(Found)` holding the first match and the full collection
/// * `Err(DomainError)` if the field is unknown or nothing matches
///
/// # Errors
///
/// Returns an error if:
/// - `field_name` is not a lookup field for this record kind
/// - No record carries `value` in that field
pub fn find_by_field<R: Record>(
    records: Vec<R>,
    field_name: &str,
    value: &str,
) -> Result<Found<R>, DomainError> {
    let field: R::Field = field_name.parse()?;
    find_by(records, field, value)
}
