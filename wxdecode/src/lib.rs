// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aviation weather bulletin decoder.
//!
//! This crate decodes the fixed-format text of METAR observations, TAF
//! forecasts and SIGMET/AIRMET hazard bulletins into typed records. Every
//! decoded group can be turned into a human readable description with the
//! [formatter].
//!
//! Real-world bulletins often contain vendor-specific or malformed groups.
//! The decoder never fails on them but skips what it can't decode and lists
//! it in the diagnostics of the record. Only an empty input is an error.
//!
//! # Examples
//!
//! Decode an observation and describe its wind and pressure:
//!
//! ```
//! use wxdecode::{format, parse_metar};
//!
//! # fn main() -> Result<(), wxdecode::Error> {
//! let metar = parse_metar("METAR EDDH 121150Z 27015G25KT 9999 FEW030 15/10 Q1013 NOSIG")?;
//!
//! if let Some(wind) = &metar.wind {
//!     println!("{}: {}", metar.station, format::wind(wind)); // => "270° (W) at 15 kt, gusting 25 kt"
//! }
//!
//! let qnh = metar.pressure.expect("pressure should be reported");
//! assert_eq!(format::pressure(&qnh), "1013 hPa (29.91 inHg)");
//! #     Ok(())
//! # }
//! ```
//!
//! Forecasts are split into their periods:
//!
//! ```
//! use wxdecode::parse_taf;
//! use wxdecode::tables::PeriodKind;
//!
//! # fn main() -> Result<(), wxdecode::Error> {
//! let taf = parse_taf("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 TEMPO 1214/1218 4000 SHRA")?;
//!
//! let kinds: Vec<PeriodKind> = taf.periods.iter().map(|p| p.kind).collect();
//! assert_eq!(kinds, [PeriodKind::Main, PeriodKind::Tempo]);
//! #     Ok(())
//! # }
//! ```
//!
//! Hazard bulletins are scanned and never fail:
//!
//! ```
//! use wxdecode::parse_sigmet_bulletin;
//!
//! let records = parse_sigmet_bulletin("UUWW SIGMET 1 VALID 121200/121600 SEV TURB FL300/380 STNR");
//! assert_eq!(records[0].fir.as_deref(), Some("UUWW"));
//! ```
//!
//! [formatter]: crate::format

#[macro_use]
mod macros;

mod batch;
mod conditions;
mod error;
mod token;

pub mod constants;
pub mod fields;
pub mod format;
pub mod metar;
pub mod sigmet;
pub mod tables;
pub mod taf;

pub use batch::{parse_metars, parse_tafs};
pub use conditions::Conditions;
pub use error::{DecodeError, Diagnostic, Error};
pub use metar::{parse_metar, ParsedMetar};
pub use sigmet::{parse_sigmet_bulletin, SigmetRecord};
pub use taf::{parse_taf, ParsedTaf, TafForecastPeriod};
pub use token::{normalize, Cursor, Tokens};
