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

//! METAR and SPECI observations.
//!
//! An observation is decoded by a forward-only walk over its tokens. The body
//! groups follow a fixed order of [stages](Stage) where some groups are
//! optional and others repeat. Each token is matched against the current and
//! the later stages and the first matching stage becomes the current one, so
//! the parser never goes back to an earlier group. A trend or the remarks
//! switch the parser into their own state until the end of the report.
//!
//! Tokens that match no group are skipped and recorded as a [`Diagnostic`].

use std::str::FromStr;

use chrono::NaiveTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, trace, warn};

use crate::conditions::{self, Conditions};
use crate::constants::STATUTE_MILE_IN_METER;
use crate::error::{Diagnostic, Error};
use crate::fields::{
    is_digits, is_location_indicator, CloudGroup, CloudLayer, DayTime, Pressure,
    RunwayCondition, RunwayVisualRange, Temperature, VariableRange, Visibility, WeatherCondition,
    Wind,
};
use crate::tables::{ClearSky, Code, FlightCategory, TrendKind};
use crate::token::{normalize, Cursor, Tokens};

mod remarks;

pub use remarks::{parse_remarks, Remark, RemarkDetail};

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportType {
    #[code(abbr = "METAR", desc = "Routine observation")]
    Metar,
    #[code(abbr = "SPECI", desc = "Special observation")]
    Speci,
}

/// Modifiers of the report header.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modifiers {
    pub is_auto: bool,
    pub is_corrected: bool,
    pub is_amended: bool,
    /// The report is missing (`NIL`).
    pub is_missing: bool,
}

impl Modifiers {
    /// Applies the modifier `token` and returns `true` if it is one.
    fn apply(&mut self, token: &str) -> bool {
        match token {
            "AUTO" => self.is_auto = true,
            "COR" | "CCA" => self.is_corrected = true,
            "AMD" => self.is_amended = true,
            "NIL" | "/////" => self.is_missing = true,
            _ => return false,
        }

        true
    }

    fn is_modifier(token: &str) -> bool {
        Self::default().apply(token)
    }
}

/// Wind shear reported in the supplementary groups.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindShear {
    Runway(String),
    AllRunways,
}

/// Trend forecast appended to the observation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trend {
    pub kind: TrendKind,
    pub description: String,
    /// The trend as it appears in the report.
    pub raw: String,
    pub from: Option<NaiveTime>,
    pub until: Option<NaiveTime>,
    pub at: Option<NaiveTime>,
    pub conditions: Conditions,
}

impl Trend {
    fn new(kind: TrendKind) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            raw: kind.code().to_string(),
            from: None,
            until: None,
            at: None,
            conditions: Conditions::default(),
        }
    }

    /// Sets the time group `FM1200`, `TL1330` or `AT1300` of the trend.
    fn time(&mut self, token: &str) -> bool {
        let Some((indicator, time)) = token.split_at_checked(2) else {
            return false;
        };

        let time = (time.len() == 4)
            .then(|| Some((digits!(time, 0..2, u32)?, digits!(time, 2..4, u32)?)))
            .flatten()
            .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour % 24, minute, 0));

        let slot = match indicator {
            "FM" => &mut self.from,
            "TL" => &mut self.until,
            "AT" => &mut self.at,
            _ => return false,
        };

        match time {
            Some(time) => {
                *slot = Some(time);
                true
            }
            None => false,
        }
    }
}

/// The groups of the observation body in the order they are reported.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
enum Stage {
    Wind,
    WindRange,
    Visibility,
    RunwayVisualRange,
    Weather,
    Clouds,
    Temperature,
    Pressure,
    Supplementary,
    RunwayState,
}

impl Stage {
    const ALL: [Stage; 10] = [
        Stage::Wind,
        Stage::WindRange,
        Stage::Visibility,
        Stage::RunwayVisualRange,
        Stage::Weather,
        Stage::Clouds,
        Stage::Temperature,
        Stage::Pressure,
        Stage::Supplementary,
        Stage::RunwayState,
    ];

    /// The stage and all stages after it.
    fn remaining(self) -> &'static [Stage] {
        &Self::ALL[self as usize..]
    }

    /// Returns the stage that follows a group of this stage.
    fn after_match(self) -> Stage {
        match self {
            Self::RunwayVisualRange
            | Self::Weather
            | Self::Clouds
            | Self::Supplementary
            | Self::RunwayState => self,
            _ => Self::ALL.get(self as usize + 1).copied().unwrap_or(self),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Body(Stage),
    Trend,
    Remarks,
}

/// A decoded METAR or SPECI.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedMetar {
    /// The normalized report.
    pub raw: String,
    pub report_type: Option<ReportType>,
    /// The ICAO location indicator or empty if none was found.
    pub station: String,
    pub time: Option<DayTime>,
    pub modifiers: Modifiers,
    pub wind: Option<Wind>,
    pub visibility: Visibility,
    pub runway_visual_ranges: Vec<RunwayVisualRange>,
    pub weather: Vec<WeatherCondition>,
    pub recent_weather: Vec<WeatherCondition>,
    pub wind_shear: Vec<WindShear>,
    pub clouds: Vec<CloudLayer>,
    pub sky_clear: Option<ClearSky>,
    pub temperature: Option<Temperature>,
    pub pressure: Option<Pressure>,
    pub runway_conditions: Vec<RunwayCondition>,
    pub trends: Vec<Trend>,
    pub remarks: Vec<Remark>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedMetar {
    /// Returns the lowest layer that constitutes a ceiling.
    pub fn ceiling(&self) -> Option<&CloudLayer> {
        self.clouds
            .iter()
            .filter(|layer| layer.is_ceiling)
            .min_by_key(|layer| layer.altitude)
    }

    /// Returns the flight category by ceiling and visibility.
    pub fn flight_category(&self) -> FlightCategory {
        let ceiling = self.ceiling().map_or(u32::MAX, |layer| layer.altitude);
        let miles = self.visibility.in_meters() / STATUTE_MILE_IN_METER;

        if ceiling < 500 || miles < 1.0 {
            FlightCategory::Lifr
        } else if ceiling < 1000 || miles < 3.0 {
            FlightCategory::Ifr
        } else if ceiling <= 3000 || miles <= 5.0 {
            FlightCategory::Mvfr
        } else {
            FlightCategory::Vfr
        }
    }

    /// Returns the relative humidity in percent.
    pub fn relative_humidity(&self) -> Option<f32> {
        self.temperature?.relative_humidity()
    }

    fn header<'a>(&mut self, cursor: Cursor<'a>) -> Cursor<'a> {
        let mut cursor = cursor;

        if let Some(report_type) = cursor.peek().and_then(ReportType::from_code) {
            self.report_type = Some(report_type);
            cursor = cursor.advance();
        }

        // after leading tokens, modifiers and weather like `SHRA` are no station
        let is_station = |t: &str| {
            is_location_indicator(t)
                && !Modifiers::is_modifier(t)
                && t.parse::<WeatherCondition>().is_err()
        };

        let station = cursor
            .find_within(1, is_location_indicator)
            .or_else(|| cursor.find_within(3, is_station));

        match station {
            Some((station, skipped, next)) => {
                for (n, token) in skipped.iter().enumerate() {
                    if !self.modifiers.apply(token) {
                        self.unrecognized(token, cursor.position() + n);
                    }
                }

                self.station = station.to_string();
                cursor = next;
            }
            None => {
                warn!("no station found in report {:?}", self.raw);
                self.diagnostics.push(Diagnostic::StationNotFound);
            }
        }

        if let Some((time, next)) = cursor.take::<DayTime>() {
            self.time = Some(time);
            cursor = next;
        }

        while let Some(token) = cursor.peek() {
            if !self.modifiers.apply(token) {
                break;
            }
            cursor = cursor.advance();
        }

        cursor
    }

    /// Matches the token at the cursor against the stages starting at
    /// `stage` and returns the first matching stage.
    fn body<'a>(&mut self, stage: Stage, cursor: Cursor<'a>) -> Option<(Stage, Cursor<'a>)> {
        stage
            .remaining()
            .iter()
            .find_map(|s| self.group(*s, cursor).map(|next| (*s, next)))
    }

    fn group<'a>(&mut self, stage: Stage, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        match stage {
            Stage::Wind => {
                let (wind, next) = cursor.take::<Wind>()?;
                self.wind = Some(wind);
                Some(next)
            }
            Stage::WindRange => {
                let wind = self.wind.as_mut()?;
                let (range, next) = cursor.take::<VariableRange>()?;
                wind.variable = Some(range);
                Some(next)
            }
            Stage::Visibility => {
                let (visibility, next) = conditions::visibility(cursor)?;
                self.visibility = visibility;
                Some(next)
            }
            Stage::RunwayVisualRange => {
                let (rvr, next) = cursor.take::<RunwayVisualRange>()?;
                self.runway_visual_ranges.push(rvr);
                Some(next)
            }
            Stage::Weather => {
                let (weather, next) = cursor.take::<WeatherCondition>()?;
                self.weather.push(weather);
                Some(next)
            }
            Stage::Clouds => {
                let (group, next) = cursor.take::<CloudGroup>()?;
                match group {
                    CloudGroup::Layer(layer) => self.clouds.push(layer),
                    CloudGroup::Clear(clear) => {
                        self.clouds.clear();
                        self.sky_clear = Some(clear);
                    }
                }
                Some(next)
            }
            Stage::Temperature => {
                let (temperature, next) = cursor.take::<Temperature>()?;
                self.temperature = Some(temperature);
                Some(next)
            }
            Stage::Pressure => {
                let (pressure, next) = cursor.take::<Pressure>()?;
                self.pressure = Some(pressure);
                Some(next)
            }
            Stage::Supplementary => self.supplementary(cursor),
            Stage::RunwayState => {
                let (condition, next) = cursor.take::<RunwayCondition>()?;
                self.runway_conditions.push(condition);
                Some(next)
            }
        }
    }

    /// Recent weather `RERA` and wind shear `WS R24` or `WS ALL RWY`.
    fn supplementary<'a>(&mut self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let token = cursor.peek()?;

        if let Some(weather) = token.strip_prefix("RE") {
            let weather = weather.parse::<WeatherCondition>().ok()?;
            self.recent_weather.push(weather);
            return Some(cursor.advance());
        }

        let cursor = cursor.keyword("WS")?;

        if let Some(next) = cursor.keyword("ALL").and_then(|c| c.keyword("RWY")) {
            self.wind_shear.push(WindShear::AllRunways);
            return Some(next);
        }

        let runway = cursor.peek()?;
        let designator = runway
            .strip_prefix("RWY")
            .or_else(|| runway.strip_prefix('R'))
            .filter(|d| matches!(d.len(), 2 | 3) && d.get(..2).is_some_and(is_digits))?;

        self.wind_shear.push(WindShear::Runway(designator.to_string()));
        Some(cursor.advance())
    }

    fn trend<'a>(&mut self, cursor: Cursor<'a>) -> Cursor<'a> {
        let Some(trend) = self.trends.last_mut() else {
            return self.unrecognized_at(cursor);
        };

        let next = match cursor.peek() {
            Some(token) if trend.time(token) => Some(cursor.advance()),
            _ => trend.conditions.parse_group(cursor),
        };

        match next {
            Some(next) => {
                let consumed = &cursor.rest()[..next.position() - cursor.position()];
                for token in consumed {
                    trend.raw.push(' ');
                    trend.raw.push_str(token);
                }
                next
            }
            None => self.unrecognized_at(cursor),
        }
    }

    fn unrecognized(&mut self, token: &str, position: usize) {
        trace!("skipping unrecognized group {token:?} at {position}");
        self.diagnostics.push(Diagnostic::UnrecognizedGroup {
            token: token.to_string(),
            position,
        });
    }

    fn unrecognized_at<'a>(&mut self, cursor: Cursor<'a>) -> Cursor<'a> {
        if let Some(token) = cursor.peek() {
            self.unrecognized(token, cursor.position());
        }
        cursor.advance()
    }
}

impl FromStr for ParsedMetar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_metar(s)
    }
}

/// Decodes the METAR or SPECI `raw`.
///
/// Only an empty report fails. Groups that can't be decoded are skipped and
/// listed in the [diagnostics](ParsedMetar::diagnostics) of the result.
///
/// # Examples
///
/// ```
/// use wxdecode::parse_metar;
///
/// let metar = parse_metar("EDDH 121150Z 27015G25KT 9999 FEW030 15/10 Q1013")?;
/// assert_eq!(metar.station, "EDDH");
/// assert_eq!(metar.wind.map(|w| w.speed), Some(15));
/// # Ok::<(), wxdecode::Error>(())
/// ```
pub fn parse_metar(raw: &str) -> Result<ParsedMetar, Error> {
    debug!("metar decode: {:?}", raw);
    let tokens = Tokens::try_new(raw)?;

    let mut metar = ParsedMetar {
        raw: normalize(raw),
        ..Default::default()
    };

    let mut cursor = metar.header(tokens.cursor());

    if metar.modifiers.is_missing {
        debug!("metar of {} is missing", metar.station);
        return Ok(metar);
    }

    let mut state = State::Body(Stage::Wind);

    while let Some(token) = cursor.peek() {
        if token == "RMK" {
            debug!("remarks start at token {}", cursor.position());
            state = State::Remarks;
            cursor = cursor.advance();
            continue;
        }

        if state != State::Remarks {
            if let Some(kind) = TrendKind::from_code(token) {
                debug!("trend {} starts at token {}", kind.code(), cursor.position());
                metar.trends.push(Trend::new(kind));
                state = State::Trend;
                cursor = cursor.advance();
                continue;
            }
        }

        match state {
            State::Body(stage) => match metar.body(stage, cursor) {
                Some((matched, next)) => {
                    trace!("{token:?} decoded as {matched:?}");
                    state = State::Body(matched.after_match());
                    cursor = next;
                }
                None => cursor = metar.unrecognized_at(cursor),
            },
            State::Trend => cursor = metar.trend(cursor),
            State::Remarks => {
                metar.remarks = parse_remarks(cursor.rest());
                break;
            }
        }
    }

    debug!(
        "metar of {} decoded: {} cloud layer(s), {} trend(s), {} remark(s), {} diagnostic(s)",
        metar.station,
        metar.clouds.len(),
        metar.trends.len(),
        metar.remarks.len(),
        metar.diagnostics.len()
    );

    Ok(metar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Tendency;
    use crate::tables::{Coverage, Intensity, Phenomenon};

    fn parse(raw: &str) -> ParsedMetar {
        parse_metar(raw).expect("metar should decode")
    }

    #[test]
    fn decodes_complete_metar() {
        let metar = parse(
            "METAR EDDH 121150Z AUTO 27015G25KT 240V300 4000 R23/P1500U -SHRA \
             FEW010 BKN025CB 15/10 Q1013 RERA R23/290050 NOSIG RMK AO2 SLP132",
        );

        assert_eq!(metar.report_type, Some(ReportType::Metar));
        assert_eq!(metar.station, "EDDH");
        assert_eq!(metar.time, Some(DayTime::new(12, 11, 50)));
        assert!(metar.modifiers.is_auto);

        let wind = metar.wind.expect("wind should be set");
        assert_eq!(wind.direction, Some(270));
        assert_eq!(wind.gust, Some(25));
        assert_eq!(wind.variable, Some(VariableRange { from: 240, to: 300 }));

        assert_eq!(metar.visibility, Visibility::m(4000.0));
        assert_eq!(metar.runway_visual_ranges[0].tendency, Some(Tendency::Upward));
        assert_eq!(metar.weather[0].intensity, Intensity::Light);
        assert_eq!(metar.weather[0].phenomena, vec![Phenomenon::Rain]);
        assert_eq!(metar.clouds.len(), 2);
        assert_eq!(metar.temperature, Some(Temperature { value: 15, dewpoint: Some(10) }));
        assert_eq!(metar.pressure, Some(Pressure::hpa(1013.0)));
        assert_eq!(metar.recent_weather.len(), 1);
        assert_eq!(metar.runway_conditions.len(), 1);
        assert_eq!(metar.trends[0].kind, TrendKind::NoSignificantChange);
        assert_eq!(metar.remarks.len(), 2);
        assert!(metar.diagnostics.is_empty(), "{:?}", metar.diagnostics);
    }

    #[test]
    fn keeps_default_visibility_if_missing() {
        let metar = parse("EDDH 121150Z 27015KT FEW030 15/10 Q1013");
        assert_eq!(metar.visibility, Visibility::default());
        assert!(metar.diagnostics.is_empty());
    }

    #[test]
    fn never_goes_back_to_earlier_groups() {
        // the wind after the temperature is no wind anymore
        let metar = parse("EDDH 121150Z 15/10 27015KT Q1013");
        assert_eq!(metar.wind, None);
        assert_eq!(metar.pressure, Some(Pressure::hpa(1013.0)));
        assert_eq!(
            metar.diagnostics,
            vec![Diagnostic::UnrecognizedGroup {
                token: "27015KT".to_string(),
                position: 3
            }]
        );
    }

    #[test]
    fn clears_cloud_layers() {
        let metar = parse("EDDH 121150Z 27015KT 9999 FEW030 NSC 15/10 Q1013");
        assert!(metar.clouds.is_empty());
        assert_eq!(metar.sky_clear, Some(ClearSky::NoSignificantCloud));
    }

    #[test]
    fn finds_station_after_leading_tokens() {
        let metar = parse("SPECI COR EDDH 121150Z 27015KT CAVOK 15/10 Q1013");
        assert_eq!(metar.report_type, Some(ReportType::Speci));
        assert_eq!(metar.station, "EDDH");
        assert!(metar.modifiers.is_corrected);
    }

    #[test]
    fn takes_weather_like_station_at_first_position() {
        let metar = parse("METAR VAPO 121130Z 27008KT 5000 HZ FEW020 30/18 Q1008");
        assert_eq!(metar.station, "VAPO");
        assert_eq!(metar.time, Some(DayTime::new(12, 11, 30)));
        assert_eq!(metar.wind.map(|w| w.speed), Some(8));
        assert_eq!(metar.visibility, Visibility::m(5000.0));
        assert_eq!(metar.weather.len(), 1);
        assert!(metar.diagnostics.is_empty(), "{:?}", metar.diagnostics);

        let metar = parse("SASA 121200Z 18005KT 9999 SCT040 22/10 Q1015");
        assert_eq!(metar.station, "SASA");
    }

    #[test]
    fn reports_missing_station() {
        let metar = parse("121150Z 27015KT 9999 15/10 Q1013");
        assert_eq!(metar.station, "");
        assert!(metar.diagnostics.contains(&Diagnostic::StationNotFound));
        assert!(metar.wind.is_some());
    }

    #[test]
    fn decodes_trend_conditions() {
        let metar = parse("EDDH 121150Z 27015KT 9999 FEW030 15/10 Q1013 BECMG FM1230 4000 BR");
        let trend = &metar.trends[0];

        assert_eq!(trend.kind, TrendKind::Becoming);
        assert_eq!(trend.raw, "BECMG FM1230 4000 BR");
        assert_eq!(trend.from, NaiveTime::from_hms_opt(12, 30, 0));
        assert_eq!(trend.conditions.visibility, Some(Visibility::m(4000.0)));
        assert_eq!(trend.conditions.weather[0].phenomena, vec![Phenomenon::Mist]);
    }

    #[test]
    fn decodes_wind_shear() {
        let metar = parse("EDDH 121150Z 27015KT 9999 15/10 Q1013 WS R23 WS ALL RWY");
        assert_eq!(
            metar.wind_shear,
            vec![WindShear::Runway("23".to_string()), WindShear::AllRunways]
        );
    }

    #[test]
    fn computes_ceiling_and_flight_category() {
        let metar = parse("EDDH 121150Z 27015KT 9999 FEW005 BKN012 OVC030 15/10 Q1013");
        let ceiling = metar.ceiling().expect("ceiling should be set");
        assert_eq!(ceiling.coverage, Coverage::Broken);
        assert_eq!(ceiling.altitude, 1200);
        assert_eq!(metar.flight_category(), FlightCategory::Mvfr);

        let metar = parse("EDDH 121150Z 27015KT 0400 FG VV002 15/15 Q1013");
        assert_eq!(metar.flight_category(), FlightCategory::Lifr);

        let metar = parse("EDDH 121150Z 27015KT CAVOK 15/10 Q1013");
        assert_eq!(metar.flight_category(), FlightCategory::Vfr);
    }
}
