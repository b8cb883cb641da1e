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
pub enum DistanceUnit {
    #[default]
    #[code(abbr = "m", desc = "m")]
    Meters,
    #[code(abbr = "SM", desc = "SM")]
    StatuteMiles,
}

/// Prevailing visibility.
///
/// A report without visibility group is assumed to have a visibility of
/// 9999 m, which is also the [`Default`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    pub value: f32,
    pub unit: DistanceUnit,
    pub is_cavok: bool,
    pub is_less_than: bool,
    pub is_greater_than: bool,
    /// The value in meters if reported in statute miles.
    pub meters: Option<f32>,
}

impl Visibility {
    pub fn m(value: f32) -> Self {
        Self {
            value,
            unit: DistanceUnit::Meters,
            is_cavok: false,
            is_less_than: false,
            is_greater_than: false,
            meters: None,
        }
    }

    pub fn sm(value: f32) -> Self {
        Self {
            value,
            unit: DistanceUnit::StatuteMiles,
            is_cavok: false,
            is_less_than: false,
            is_greater_than: false,
            meters: Some((value * constants::STATUTE_MILE_IN_METER).round()),
        }
    }

    /// Ceiling and visibility OK with a visibility of 10 km.
    pub fn cavok() -> Self {
        Self {
            is_cavok: true,
            ..Self::m(constants::CAVOK_VISIBILITY_M)
        }
    }

    /// Returns the visibility in meters.
    pub fn in_meters(&self) -> f32 {
        self.meters.unwrap_or(self.value)
    }

    /// Adds whole statute miles to a fraction, e.g. `1` and `1/2SM`.
    pub(crate) fn with_whole_miles(self, whole: u8) -> Self {
        Self {
            is_less_than: self.is_less_than,
            is_greater_than: self.is_greater_than,
            ..Self::sm(self.value + whole as f32)
        }
    }

    pub(crate) fn is_fraction(&self) -> bool {
        self.unit == DistanceUnit::StatuteMiles && self.value < 1.0
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::m(constants::DEFAULT_VISIBILITY_M)
    }
}

/// Parses whole statute miles `3` or a fraction `1/4`.
fn miles(s: &str) -> Option<f32> {
    match s.split_once('/') {
        Some((num, den)) => {
            let num = digits!(num, ..)?;
            let den = digits!(den, ..).filter(|den| *den > 0)?;
            Some(num as f32 / den as f32)
        }
        None => digits!(s, ..).map(|v| v as f32),
    }
}

impl FromStr for Visibility {
    type Err = Error;

    /// Parses `CAVOK`, meters `0800`, statute miles `10SM` or `1/2SM` and
    /// less or greater than values `M1/4SM`, `P6SM` or `P9000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("visibility", s);

        if s == "CAVOK" {
            return Ok(Self::cavok());
        }

        let (body, is_less_than, is_greater_than) = match s.as_bytes().first() {
            Some(b'M') => (&s[1..], true, false),
            Some(b'P') => (&s[1..], false, true),
            _ => (s, false, false),
        };

        let visibility = match body.strip_suffix("SM") {
            Some(miles) => Self::sm(self::miles(miles).ok_or_else(err)?),
            None => {
                // no directional variation is reported as suffix by automatic stations
                let meters = body.strip_suffix("NDV").unwrap_or(body);

                if meters.len() != 4 {
                    return Err(err());
                }

                Self::m(digits!(meters, ..).ok_or_else(err)? as f32)
            }
        };

        Ok(Self {
            is_less_than,
            is_greater_than,
            ..visibility
        })
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cavok {
            return write!(f, "CAVOK");
        }

        if self.is_less_than {
            write!(f, "M")?;
        } else if self.is_greater_than {
            write!(f, "P")?;
        }

        match self.unit {
            DistanceUnit::Meters => write!(f, "{:04}", self.value.round() as u16),
            DistanceUnit::StatuteMiles => {
                let whole = self.value.trunc();
                let fract = self.value - whole;

                if fract == 0.0 {
                    return write!(f, "{}SM", whole as u16);
                }

                let den = [2u16, 4, 8, 16]
                    .into_iter()
                    .find(|den| (fract * *den as f32).fract() == 0.0)
                    .unwrap_or(16);
                let num = (fract * den as f32).round() as u16;

                if whole > 0.0 {
                    write!(f, "{} {num}/{den}SM", whole as u16)
                } else {
                    write!(f, "{num}/{den}SM")
                }
            }
        }
    }
}
