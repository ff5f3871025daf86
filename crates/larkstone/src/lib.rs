//! Localized group booking enquiry site for Larkstone Hotels.
//!
//! The crate is organized around the booking intake flow: `i18n` carries the
//! locale set and message catalogs, `booking` holds the domain model,
//! validation schema, session store seam, submission gate, and the HTTP
//! surface that ties them together. `config`, `error`, and `telemetry`
//! provide the runtime scaffolding consumed by the service binary.

pub mod booking;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;
