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

use super::{signed, write_signed, DayTime};
use crate::error::Error;
use crate::tables::Code;

/// Temperature and dewpoint in degree Celsius, e.g. `M05/M07`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    pub value: i8,
    pub dewpoint: Option<i8>,
}

impl Temperature {
    /// Returns the relative humidity in percent.
    ///
    /// Uses the Magnus approximation and returns `None` if the dewpoint is
    /// missing.
    pub fn relative_humidity(&self) -> Option<f32> {
        const B: f32 = 17.625;
        const C: f32 = 243.04;

        let t = self.value as f32;
        let td = self.dewpoint? as f32;
        let rh = 100.0 * ((B * td) / (C + td)).exp() / ((B * t) / (C + t)).exp();

        Some(rh.min(100.0))
    }
}

impl FromStr for Temperature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, dewpoint) = s
            .split_once('/')
            .ok_or_else(|| invalid_group!("temperature", s))?;

        let value = signed(value).ok_or_else(|| invalid_group!("temperature", s))?;
        let dewpoint = match dewpoint {
            "" | "//" => None,
            dp => Some(signed(dp).ok_or_else(|| invalid_group!("temperature", s))?),
        };

        Ok(Self { value, dewpoint })
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_signed(f, self.value)?;
        write!(f, "/")?;

        match self.dewpoint {
            Some(dewpoint) => write_signed(f, dewpoint),
            None => write!(f, "//"),
        }
    }
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtremeKind {
    #[code(abbr = "TX", desc = "Maximum temperature")]
    Max,
    #[code(abbr = "TN", desc = "Minimum temperature")]
    Min,
}

/// Forecast maximum or minimum temperature, e.g. `TX25/1214Z`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureExtreme {
    pub kind: ExtremeKind,
    pub value: i8,
    pub time: DayTime,
}

impl FromStr for TemperatureExtreme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("temperature extreme", s);

        let (kind, rest) = ExtremeKind::ALL
            .iter()
            .find_map(|kind| s.strip_prefix(kind.code()).map(|rest| (*kind, rest)))
            .ok_or_else(err)?;

        let (value, time) = rest.split_once('/').ok_or_else(err)?;
        let value = signed(value).ok_or_else(err)?;
        let time = time
            .strip_suffix('Z')
            .filter(|t| t.len() == 4)
            .and_then(DayTime::from_digits)
            .ok_or_else(err)?;

        Ok(Self { kind, value, time })
    }
}

impl fmt::Display for TemperatureExtreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.code())?;
        write_signed(f, self.value)?;
        write!(f, "/{:02}{:02}Z", self.time.day, self.time.hour)
    }
}
