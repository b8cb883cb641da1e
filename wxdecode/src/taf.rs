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

//! Terminal aerodrome forecasts.
//!
//! A TAF is split into periods at its change groups `BECMG`, `TEMPO`,
//! `PROB30` and `FM`. The conditions of each period are decoded with the
//! same group grammar, starting with the main period that is valid for the
//! whole forecast.

use std::mem;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, trace, warn};

use crate::conditions::Conditions;
use crate::error::{Diagnostic, Error};
use crate::fields::{is_location_indicator, DayTime, Validity};
use crate::tables::{ChangeType, PeriodKind};
use crate::token::{normalize, Cursor, Tokens};

/// Probability of a `PROB` period without digits.
const DEFAULT_PROBABILITY: u8 = 30;

/// Modifiers of the forecast header.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TafModifiers {
    pub is_amended: bool,
    pub is_corrected: bool,
    /// The forecast is missing (`NIL`).
    pub is_missing: bool,
    /// The forecast was cancelled (`CNL`).
    pub is_cancelled: bool,
}

impl TafModifiers {
    fn apply(&mut self, token: &str) -> bool {
        match token {
            "AMD" => self.is_amended = true,
            "COR" => self.is_corrected = true,
            "NIL" => self.is_missing = true,
            "CNL" => self.is_cancelled = true,
            _ => return false,
        }

        true
    }
}

/// A period of the forecast.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TafForecastPeriod {
    pub kind: PeriodKind,
    pub change: ChangeType,
    /// Probability in percent of `PROB` periods.
    pub probability: Option<u8>,
    pub validity: Option<Validity>,
    pub conditions: Conditions,
}

impl TafForecastPeriod {
    fn new(kind: PeriodKind, change: ChangeType) -> Self {
        Self {
            kind,
            change,
            probability: None,
            validity: None,
            conditions: Conditions::default(),
        }
    }

    fn main(validity: Option<Validity>) -> Self {
        Self {
            validity,
            ..Self::new(PeriodKind::Main, ChangeType::Initial)
        }
    }

    /// Opens the period of the change group `token`.
    fn open(token: &str) -> Option<Self> {
        match token {
            "BECMG" => return Some(Self::new(PeriodKind::Becmg, ChangeType::Becoming)),
            "TEMPO" => return Some(Self::new(PeriodKind::Tempo, ChangeType::Temporary)),
            _ => (),
        }

        if let Some(probability) = token.strip_prefix("PROB") {
            let probability = match probability {
                "" => DEFAULT_PROBABILITY,
                p if p.len() == 2 => digits!(p, .., u8)?,
                _ => return None,
            };

            return Some(Self {
                probability: Some(probability),
                ..Self::new(PeriodKind::Prob, ChangeType::Probable)
            });
        }

        // FMDDHHMM or FMDDHH
        let from = token
            .strip_prefix("FM")
            .filter(|t| matches!(t.len(), 4 | 6))
            .and_then(DayTime::from_digits)?;

        Some(Self {
            validity: Some(Validity::starting(from)),
            ..Self::new(PeriodKind::Main, ChangeType::From)
        })
    }

    /// Returns `true` if the period is a `PROB` group still waiting for its
    /// `TEMPO`.
    fn awaits_tempo(&self) -> bool {
        self.kind == PeriodKind::Prob && self.validity.is_none() && self.conditions.is_empty()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Periods,
    Remarks,
}

/// A decoded TAF.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedTaf {
    /// The normalized forecast.
    pub raw: String,
    pub station: String,
    pub issue_time: Option<DayTime>,
    pub validity: Option<Validity>,
    pub modifiers: TafModifiers,
    /// The main period followed by the change periods.
    pub periods: Vec<TafForecastPeriod>,
    /// Remarks in the order they appear.
    pub remarks: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedTaf {
    /// Returns the main period of the forecast.
    pub fn main_period(&self) -> Option<&TafForecastPeriod> {
        self.periods
            .first()
            .filter(|period| period.change == ChangeType::Initial)
    }

    fn modifiers<'a>(&mut self, cursor: Cursor<'a>) -> Cursor<'a> {
        let mut cursor = cursor;

        while let Some(token) = cursor.peek() {
            if !self.modifiers.apply(token) {
                break;
            }
            cursor = cursor.advance();
        }

        cursor
    }

    fn header<'a>(&mut self, cursor: Cursor<'a>) -> Cursor<'a> {
        let cursor = cursor.keyword("TAF").unwrap_or(cursor);
        let mut cursor = self.modifiers(cursor);

        match cursor.find_within(3, is_location_indicator) {
            Some((station, skipped, next)) => {
                for (n, token) in skipped.iter().enumerate() {
                    self.unrecognized(token, cursor.position() + n);
                }

                self.station = station.to_string();
                cursor = next;
            }
            None => {
                warn!("no station found in forecast {:?}", self.raw);
                self.diagnostics.push(Diagnostic::StationNotFound);
            }
        }

        if let Some((time, next)) = cursor.take::<DayTime>() {
            self.issue_time = Some(time);
            cursor = next;
        }

        let cursor = self.modifiers(cursor);

        match cursor.take::<Validity>() {
            Some((validity, next)) => {
                self.validity = Some(validity);
                next
            }
            None => cursor,
        }
    }

    fn flush(&mut self, period: TafForecastPeriod) {
        if period.conditions.is_empty() {
            trace!("dropping empty {:?} period", period.kind);
            return;
        }

        debug!(
            "{:?} period with validity {:?} decoded",
            period.kind, period.validity
        );
        self.periods.push(period);
    }

    fn unrecognized(&mut self, token: &str, position: usize) {
        trace!("skipping unrecognized group {token:?} at {position}");
        self.diagnostics.push(Diagnostic::UnrecognizedGroup {
            token: token.to_string(),
            position,
        });
    }
}

impl FromStr for ParsedTaf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_taf(s)
    }
}

/// Decodes the TAF `raw`.
///
/// # Examples
///
/// ```
/// use wxdecode::parse_taf;
///
/// let taf = parse_taf(
///     "TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 \
///      BECMG 1215/1217 31010KT \
///      PROB30 TEMPO 1303/1306 0800 FG",
/// )?;
///
/// assert_eq!(taf.periods.len(), 3);
/// assert_eq!(taf.periods[2].probability, Some(30));
/// # Ok::<(), wxdecode::Error>(())
/// ```
pub fn parse_taf(raw: &str) -> Result<ParsedTaf, Error> {
    debug!("taf decode: {:?}", raw);
    let tokens = Tokens::try_new(raw)?;

    let mut taf = ParsedTaf {
        raw: normalize(raw),
        ..Default::default()
    };

    let mut cursor = taf.header(tokens.cursor());

    if taf.modifiers.is_missing {
        debug!("taf of {} is missing", taf.station);
        return Ok(taf);
    }

    let mut period = TafForecastPeriod::main(taf.validity);
    let mut state = State::Periods;

    while let Some(token) = cursor.peek() {
        if state == State::Remarks {
            taf.remarks.push(token.to_string());
            cursor = cursor.advance();
            continue;
        }

        if matches!(token, "RMK" | "REMARKS") {
            debug!("remarks start at token {}", cursor.position());
            state = State::Remarks;
            cursor = cursor.advance();
            continue;
        }

        if taf.modifiers.apply(token) {
            cursor = cursor.advance();
            continue;
        }

        if let Some(next) = TafForecastPeriod::open(token) {
            cursor = cursor.advance();

            // PROB30 TEMPO is a single period
            if next.kind == PeriodKind::Tempo && period.awaits_tempo() {
                period.change = ChangeType::Temporary;
            } else {
                let done = mem::replace(&mut period, next);
                taf.flush(done);
            }

            if period.validity.is_none() {
                if let Some((validity, next)) = cursor.take::<Validity>() {
                    period.validity = Some(validity);
                    cursor = next;
                }
            }

            continue;
        }

        cursor = match period.conditions.parse_group(cursor) {
            Some(next) => next,
            None => {
                taf.unrecognized(token, cursor.position());
                cursor.advance()
            }
        };
    }

    taf.flush(period);

    debug!(
        "taf of {} decoded: {} period(s), {} diagnostic(s)",
        taf.station,
        taf.periods.len(),
        taf.diagnostics.len()
    );

    Ok(taf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Visibility;

    fn parse(raw: &str) -> ParsedTaf {
        parse_taf(raw).expect("taf should decode")
    }

    #[test]
    fn decodes_header() {
        let taf = parse("TAF AMD EDDH 121100Z 1212/1318 27015KT 9999 SCT030");

        assert_eq!(taf.station, "EDDH");
        assert!(taf.modifiers.is_amended);
        assert_eq!(taf.issue_time, Some(DayTime::new(12, 11, 0)));
        assert_eq!(
            taf.validity,
            Some(Validity {
                from: DayTime::new(12, 12, 0),
                to: Some(DayTime::new(13, 18, 0))
            })
        );
        assert_eq!(taf.periods.len(), 1);
        assert!(taf.main_period().is_some());
    }

    #[test]
    fn merges_prob_and_tempo() {
        let taf = parse("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 PROB40 TEMPO 1303/1306 0800 FG");
        let period = &taf.periods[1];

        assert_eq!(taf.periods.len(), 2);
        assert_eq!(period.kind, PeriodKind::Prob);
        assert_eq!(period.change, ChangeType::Temporary);
        assert_eq!(period.probability, Some(40));
        assert_eq!(period.conditions.visibility, Some(Visibility::m(800.0)));
    }

    #[test]
    fn opens_from_periods() {
        let taf = parse("TAF KJFK 121130Z 1212/1318 27015KT P6SM FEW250 FM121800 30012KT P6SM SKC");
        let period = &taf.periods[1];

        assert_eq!(period.kind, PeriodKind::Main);
        assert_eq!(period.change, ChangeType::From);
        assert_eq!(period.validity, Some(Validity::starting(DayTime::new(12, 18, 0))));
    }

    #[test]
    fn drops_empty_periods() {
        let taf = parse("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 BECMG 1215/1217 TEMPO 1218/1220 4000 BR");
        assert_eq!(taf.periods.len(), 2);
        assert_eq!(taf.periods[1].kind, PeriodKind::Tempo);
    }

    #[test]
    fn keeps_remarks_flat() {
        let taf = parse("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 RMK NXT FCST BY 18Z");
        assert_eq!(taf.remarks, vec!["NXT", "FCST", "BY", "18Z"]);
        assert!(taf.diagnostics.is_empty());
    }

    #[test]
    fn returns_missing_forecast() {
        let taf = parse("TAF EDDH 121100Z NIL");
        assert!(taf.modifiers.is_missing);
        assert!(taf.periods.is_empty());
    }

    #[test]
    fn flags_cancelled_forecast() {
        let taf = parse("TAF AMD EDDH 121100Z 1212/1318 CNL");
        assert!(taf.modifiers.is_cancelled);
        assert!(taf.periods.is_empty());
    }
}
