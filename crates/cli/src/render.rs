// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text and JSON rendering of command results.

use gudlft_api::{BookingForm, PurchaseOutcome, Summary};
use gudlft_domain::{Club, Competition};
use std::fmt::Write;

/// The result of a command, ready to be rendered.
#[derive(Debug)]
pub enum Output {
    /// The sign-in page: every club.
    Clubs(Vec<Club>),
    /// The points board: every club and its balance.
    Points(Vec<Club>),
    /// A club's welcome page.
    Summary(Summary),
    /// The booking form.
    BookingForm(BookingForm),
    /// The result of a purchase.
    Purchase(PurchaseOutcome),
}

impl Output {
    /// Renders the output as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Clubs(clubs) | Self::Points(clubs) => serde_json::to_string_pretty(clubs),
            Self::Summary(summary) => serde_json::to_string_pretty(summary),
            Self::BookingForm(form) => serde_json::to_string_pretty(form),
            Self::Purchase(outcome) => serde_json::to_string_pretty(outcome),
        }
    }

    /// Renders the output as text for a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the buffer fails.
    pub fn to_text(&self) -> Result<String, std::fmt::Error> {
        let mut out: String = String::new();
        match self {
            Self::Clubs(clubs) => {
                writeln!(out, "Registered clubs:")?;
                for club in clubs {
                    writeln!(out, "- {} <{}>", club.name, club.email)?;
                }
            }
            Self::Points(clubs) => write_points(&mut out, clubs)?,
            Self::Summary(summary) => write_summary(&mut out, summary)?,
            Self::BookingForm(form) => {
                writeln!(out, "{}", form.competition.name)?;
                writeln!(
                    out,
                    "Places available: {}",
                    form.competition.number_of_places
                )?;
                writeln!(out, "Points available: {}", form.club.points)?;
                writeln!(
                    out,
                    "{} can book up to {} places",
                    form.club.name, form.max_places
                )?;
            }
            Self::Purchase(outcome) => {
                writeln!(out, "{}", outcome.message())?;
                if let PurchaseOutcome::Booked { summary, .. } = outcome {
                    writeln!(out)?;
                    write_summary(&mut out, summary)?;
                }
            }
        }
        Ok(out)
    }
}

fn write_points(out: &mut String, clubs: &[Club]) -> std::fmt::Result {
    writeln!(out, "Points available per club:")?;
    let width: usize = clubs.iter().map(|club| club.name.len()).max().unwrap_or(0);
    for club in clubs {
        writeln!(out, "{:<width$}  {}", club.name, club.points)?;
    }
    Ok(())
}

fn write_summary(out: &mut String, summary: &Summary) -> std::fmt::Result {
    writeln!(out, "Welcome, {}", summary.club.email)?;
    writeln!(out, "Points available: {}", summary.club.points)?;
    writeln!(out, "Competitions:")?;
    for competition in &summary.competitions {
        write_competition(out, competition, &summary.club)?;
    }
    Ok(())
}

fn write_competition(out: &mut String, competition: &Competition, club: &Club) -> std::fmt::Result {
    let date: String = competition
        .date_text()
        .unwrap_or_else(|_| competition.date.to_string());
    writeln!(out, "- {}", competition.name)?;
    writeln!(out, "  Date: {date}")?;
    writeln!(out, "  Number of places: {}", competition.number_of_places)?;
    let reserved: u32 = club.reserved_for(&competition.name);
    if reserved > 0 {
        writeln!(out, "  Reserved by {}: {}", club.name, reserved)?;
    }
    if competition.taken_place {
        writeln!(out, "  Already took place")?;
    }
    Ok(())
}
