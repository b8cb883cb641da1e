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

//! Classification of the remarks following `RMK`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;

use crate::constants::HPA_IN_MMHG;
use crate::fields::{is_alpha, is_digits, VariableRange};
use crate::tables::{
    Code, Descriptor, Phenomenon, RemarkCategory, RemarkKeyword, RunwayRemark, SystemRemark,
};

/// Decoded payload of a remark.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemarkDetail {
    /// Temperature and dewpoint in tenths of degree Celsius.
    PreciseTemperature { temperature: f32, dewpoint: Option<f32> },
    /// Sea-level pressure in hPa.
    SeaLevelPressure(f32),
    WeatherEvent { is_begin: bool },
    Time { hour: u8, minute: u8 },
    WindRange(VariableRange),
    /// Snow increase within the last hour and total depth in inches.
    SnowIncrease { increase: u16, total: u16 },
    /// Pressure at the aerodrome elevation.
    Qfe { mm_hg: u16, hpa: u16 },
}

/// A classified remark.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Remark {
    /// The remark as it appears in the report.
    pub code: String,
    pub category: RemarkCategory,
    pub description: String,
    pub detail: Option<RemarkDetail>,
}

impl Remark {
    fn new(code: &str, category: RemarkCategory, description: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            category,
            description: description.into(),
            detail: None,
        }
    }

    fn with_detail(self, detail: RemarkDetail) -> Self {
        Self {
            detail: Some(detail),
            ..self
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Classifies the `tokens` following the remarks sentinel.
pub fn parse_remarks(tokens: &[&str]) -> Vec<Remark> {
    let mut remarks = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while let Some(token) = tokens.get(i).copied() {
        i += 1;

        // the snow increase is followed by its depth pair
        if token == RunwayRemark::SnowIncreasing.code() {
            if let Some(remark) = tokens.get(i).and_then(|pair| snow_increase(token, pair)) {
                i += 1;
                remarks.push(remark);
                continue;
            }
        }

        let remark = classify(token);
        trace!("remark {token:?} classified as {:?}", remark.category);
        remarks.push(remark);
    }

    remarks
}

fn classify(token: &str) -> Remark {
    precise_temperature(token)
        .or_else(|| sea_level_pressure(token))
        .or_else(|| weather_event(token))
        .or_else(|| time(token))
        .or_else(|| wind_range(token))
        .or_else(|| {
            SystemRemark::from_code(token)
                .map(|r| Remark::new(token, RemarkCategory::System, r.description()))
        })
        .or_else(|| {
            RunwayRemark::from_code(token)
                .map(|r| Remark::new(token, RemarkCategory::Runway, r.description()))
        })
        .or_else(|| qfe(token))
        .or_else(|| {
            RemarkKeyword::from_code(token).map(|r| Remark::new(token, r.category(), r.description()))
        })
        .unwrap_or_else(|| Remark::new(token, RemarkCategory::Other, token))
}

/// Parses three digits in tenths with a sign digit, e.g. `1023` for -2.3.
fn tenths(sign: &str, value: &str) -> Option<f32> {
    let value = digits!(value, .., u16)? as f32 / 10.0;

    match sign {
        "0" => Some(value),
        "1" | "M" => Some(-value),
        _ => None,
    }
}

/// `T01230045` or `T0123`
fn precise_temperature(token: &str) -> Option<Remark> {
    let body = token.strip_prefix('T')?;

    let (temperature, dewpoint) = match body.len() {
        4 => (tenths(body.get(..1)?, body.get(1..4)?)?, None),
        8 => (
            tenths(body.get(..1)?, body.get(1..4)?)?,
            Some(tenths(body.get(4..5)?, body.get(5..8)?)?),
        ),
        _ => return None,
    };

    let description = match dewpoint {
        Some(dewpoint) => format!("Temperature {temperature:.1}°C, dewpoint {dewpoint:.1}°C"),
        None => format!("Temperature {temperature:.1}°C"),
    };

    Some(
        Remark::new(token, RemarkCategory::Temperature, description)
            .with_detail(RemarkDetail::PreciseTemperature { temperature, dewpoint }),
    )
}

/// `SLP132` is 1013.2 hPa and `SLP982` is 998.2 hPa.
fn sea_level_pressure(token: &str) -> Option<Remark> {
    let value = token
        .strip_prefix("SLP")
        .filter(|v| v.len() == 3)
        .and_then(|v| digits!(v, ..))?;

    let hpa = value as f32 / 10.0 + if value < 500 { 1000.0 } else { 900.0 };

    Some(
        Remark::new(
            token,
            RemarkCategory::Pressure,
            format!("Sea-level pressure {hpa:.1} hPa"),
        )
        .with_detail(RemarkDetail::SeaLevelPressure(hpa)),
    )
}

/// `RAB` or `TSE`
fn weather_event(token: &str) -> Option<Remark> {
    if token.len() != 3 || !is_alpha(token) {
        return None;
    }

    let (code, event) = token.split_at(2);
    let is_begin = match event {
        "B" => true,
        "E" => false,
        _ => return None,
    };

    let weather = Phenomenon::from_code(code)
        .map(|p| p.description())
        .or_else(|| Descriptor::from_code(code).map(|d| d.description()))
        .unwrap_or(code);
    let description = format!("{weather} {}", if is_begin { "began" } else { "ended" });

    Some(
        Remark::new(token, RemarkCategory::Weather, description)
            .with_detail(RemarkDetail::WeatherEvent { is_begin }),
    )
}

fn time(token: &str) -> Option<Remark> {
    if token.len() != 4 {
        return None;
    }

    let hour = digits!(token, 0..2, u8).filter(|h| *h <= 24)?;
    let minute = digits!(token, 2..4, u8).filter(|m| *m < 60)?;

    Some(
        Remark::new(
            token,
            RemarkCategory::Other,
            format!("At {hour:02}:{minute:02} UTC"),
        )
        .with_detail(RemarkDetail::Time { hour, minute }),
    )
}

fn wind_range(token: &str) -> Option<Remark> {
    let range: VariableRange = token.parse().ok()?;

    Some(
        Remark::new(
            token,
            RemarkCategory::Wind,
            format!(
                "Wind direction variable between {:03}° and {:03}°",
                range.from, range.to
            ),
        )
        .with_detail(RemarkDetail::WindRange(range)),
    )
}

/// `SNINCR 2/10`
fn snow_increase(token: &str, pair: &str) -> Option<Remark> {
    let (increase, total) = pair.split_once('/')?;
    let increase = digits!(increase, ..)?;
    let total = digits!(total, ..)?;

    Some(
        Remark::new(
            &format!("{token} {pair}"),
            RemarkCategory::Runway,
            format!(
                "{}: {increase} in. in the past hour, {total} in. on ground",
                RunwayRemark::SnowIncreasing.description()
            ),
        )
        .with_detail(RemarkDetail::SnowIncrease { increase, total }),
    )
}

/// `QFE750` or `QFE750/1000`
fn qfe(token: &str) -> Option<Remark> {
    let body = token.strip_prefix("QFE")?;

    let (mm_hg, hpa) = match body.split_once('/') {
        Some((mm_hg, hpa)) => (mm_hg, Some(hpa)),
        None => (body, None),
    };

    if mm_hg.len() != 3 || !is_digits(mm_hg) {
        return None;
    }

    let mm_hg = digits!(mm_hg, ..)?;
    let hpa = match hpa {
        Some(hpa) => digits!(hpa, ..)?,
        None => (mm_hg as f32 * HPA_IN_MMHG).round() as u16,
    };

    Some(
        Remark::new(
            token,
            RemarkCategory::Pressure,
            format!("QFE {mm_hg} mmHg ({hpa} hPa)"),
        )
        .with_detail(RemarkDetail::Qfe { mm_hg, hpa }),
    )
}
