// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use gudlft_api::{
    ApiError, PurchaseRequest, booking_form, list_clubs, purchase_places, return_to_summary,
    show_summary,
};
use gudlft_domain::now_utc;
use gudlft_persistence::StorePaths;
use render::Output;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let paths: StorePaths = args.store_paths();
    debug!(
        "Using clubs file {} and competitions file {}",
        paths.clubs.display(),
        paths.competitions.display()
    );

    match args.command.run(&paths) {
        Ok(output) => {
            let rendered: String = if args.json {
                output.to_json()?
            } else {
                output.to_text()?
            };
            println!("{}", rendered.trim_end());
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
    Ok(())
}

/// GUDLFT - book competition places for your club
#[derive(Debug, Parser)]
#[command(name = "gudlft", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the clubs JSON file
    #[arg(long, global = true, default_value = "clubs.json")]
    clubs: PathBuf,

    /// Path to the competitions JSON file
    #[arg(long, global = true, default_value = "competitions.json")]
    competitions: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn store_paths(&self) -> StorePaths {
        StorePaths::new(self.clubs.clone(), self.competitions.clone())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// List the registered clubs
    Clubs,

    /// Show the points available to every club
    Points,

    /// Sign in by email and show the club's competitions
    #[command(visible_alias = "login")]
    Summary {
        /// The club's email address
        #[arg(long)]
        email: String,
    },

    /// Show the club's competitions again without refreshing them
    Back {
        /// The club's email address
        #[arg(long)]
        email: String,
    },

    /// Show the booking form for a competition
    Booking {
        /// The competition name
        #[arg(long)]
        competition: String,
        /// The club name
        #[arg(long)]
        club: String,
    },

    /// Purchase places at a competition
    #[command(visible_alias = "book")]
    Purchase {
        /// The competition name
        #[arg(long)]
        competition: String,
        /// The club name
        #[arg(long)]
        club: String,
        /// The number of places to purchase
        #[arg(long)]
        places: String,
    },
}

impl Command {
    fn run(&self, paths: &StorePaths) -> Result<Output, ApiError> {
        match self {
            Self::Clubs => list_clubs(paths).map(Output::Clubs),
            Self::Points => list_clubs(paths).map(Output::Points),
            Self::Summary { email } => show_summary(paths, email, now_utc()).map(Output::Summary),
            Self::Back { email } => return_to_summary(paths, email).map(Output::Summary),
            Self::Booking { competition, club } => {
                booking_form(paths, competition, club).map(Output::BookingForm)
            }
            Self::Purchase {
                competition,
                club,
                places,
            } => {
                let request: PurchaseRequest = PurchaseRequest {
                    competition: competition.clone(),
                    club: club.clone(),
                    places: places.clone(),
                };
                purchase_places(paths, &request, now_utc()).map(Output::Purchase)
            }
        }
    }
}

#[cfg(test)]
mod tests;
