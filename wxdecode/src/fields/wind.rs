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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::Error;
use crate::tables::Code;

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    #[default]
    #[code(abbr = "KT", desc = "kt")]
    Knots,
    #[code(abbr = "MPS", desc = "m/s")]
    MetersPerSecond,
    #[code(abbr = "KMH", desc = "km/h")]
    KilometersPerHour,
}

impl SpeedUnit {
    /// Converts `value` in this unit to knots.
    pub fn to_knots(&self, value: f32) -> f32 {
        match self {
            Self::Knots => value,
            Self::MetersPerSecond => value * constants::METER_PER_SECONDS_IN_KNOTS,
            Self::KilometersPerHour => value * constants::KILOMETERS_PER_HOUR_IN_KNOTS,
        }
    }
}

/// Range in which the wind direction varies, e.g. `240V300`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableRange {
    pub from: u16,
    pub to: u16,
}

impl FromStr for VariableRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 7 || s.as_bytes()[3] != b'V' {
            return Err(invalid_group!("variable wind direction", s));
        }

        match (digits!(s, 0..3), digits!(s, 4..7)) {
            (Some(from), Some(to)) if from <= 360 && to <= 360 => Ok(Self { from, to }),
            _ => Err(invalid_group!("variable wind direction", s)),
        }
    }
}

impl fmt::Display for VariableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}V{:03}", self.from, self.to)
    }
}

/// Surface wind.
///
/// The direction is `None` if the wind is variable (`VRB`). A calm wind has
/// a direction of `0` and a speed of `0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub direction: Option<u16>,
    pub speed: u16,
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
    pub variable: Option<VariableRange>,
    pub is_calm: bool,
}

impl Wind {
    /// Returns a calm wind.
    pub fn calm(unit: SpeedUnit) -> Self {
        Self {
            direction: Some(0),
            speed: 0,
            gust: None,
            unit,
            variable: None,
            is_calm: true,
        }
    }

    /// Returns `true` if the wind direction is variable.
    pub fn is_variable(&self) -> bool {
        self.direction.is_none()
    }

    pub fn speed_in_knots(&self) -> f32 {
        self.unit.to_knots(self.speed as f32)
    }

    pub fn gust_in_knots(&self) -> Option<f32> {
        self.gust.map(|gust| self.unit.to_knots(gust as f32))
    }
}

/// Parses a speed of two or three digits.
fn speed(s: &str) -> Option<u16> {
    matches!(s.len(), 2 | 3).then(|| digits!(s, ..)).flatten()
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group e.g. `00000KT`, `VRB03KT`, `27015G25KT` or
    /// `09005MPS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("wind", s);

        let (body, unit) = SpeedUnit::ALL
            .iter()
            .find_map(|unit| s.strip_suffix(unit.code()).map(|body| (body, *unit)))
            .ok_or_else(err)?;

        let (dir, rest) = body.split_at_checked(3).ok_or_else(err)?;

        let direction = match dir {
            "VRB" => None,
            _ => Some(digits!(dir, ..).filter(|d| *d <= 360).ok_or_else(err)?),
        };

        let (speed_part, gust_part) = match rest.split_once('G') {
            Some((speed, gust)) => (speed, Some(gust)),
            None => (rest, None),
        };

        let speed = speed(speed_part).ok_or_else(err)?;
        let gust = gust_part
            .map(|gust| self::speed(gust).ok_or_else(err))
            .transpose()?;

        if direction == Some(0) && speed == 0 && gust.is_none() {
            return Ok(Self::calm(unit));
        }

        Ok(Self {
            direction,
            speed,
            gust,
            unit,
            variable: None,
            is_calm: false,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{direction:03}{:02}", self.speed)?,
            None => write!(f, "VRB{:02}", self.speed)?,
        }

        if let Some(gust) = self.gust {
            write!(f, "G{gust:02}")?;
        }

        write!(f, "{}", self.unit.code())
    }
}
