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

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    #[code(abbr = "Q", desc = "hPa")]
    Hectopascal,
    #[code(abbr = "A", desc = "inHg")]
    InchesOfMercury,
}

/// Converts hectopascal to inches of mercury.
pub fn hpa_to_inhg(hpa: f32) -> f32 {
    hpa / constants::HPA_IN_INHG
}

/// Converts inches of mercury to hectopascal.
pub fn inhg_to_hpa(inhg: f32) -> f32 {
    inhg * constants::HPA_IN_INHG
}

/// Altimeter setting (QNH).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    pub value: f32,
    pub unit: PressureUnit,
    pub is_in_hg: bool,
}

impl Pressure {
    pub fn hpa(value: f32) -> Self {
        Self {
            value,
            unit: PressureUnit::Hectopascal,
            is_in_hg: false,
        }
    }

    pub fn in_hg(value: f32) -> Self {
        Self {
            value,
            unit: PressureUnit::InchesOfMercury,
            is_in_hg: true,
        }
    }

    /// Returns the pressure in hectopascal.
    pub fn as_hpa(&self) -> f32 {
        match self.unit {
            PressureUnit::Hectopascal => self.value,
            PressureUnit::InchesOfMercury => inhg_to_hpa(self.value),
        }
    }

    /// Returns the pressure in inches of mercury.
    pub fn as_in_hg(&self) -> f32 {
        match self.unit {
            PressureUnit::Hectopascal => hpa_to_inhg(self.value),
            PressureUnit::InchesOfMercury => self.value,
        }
    }
}

impl FromStr for Pressure {
    type Err = Error;

    /// Parses `Q1013` in hPa or `A2992` in hundredths of inHg.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 5 {
            return Err(invalid_group!("pressure", s));
        }

        match (s.as_bytes()[0], digits!(s, 1..5)) {
            (b'Q', Some(hpa)) => Ok(Self::hpa(hpa as f32)),
            (b'A', Some(inhg)) => Ok(Self::in_hg(inhg as f32 / 100.0)),
            _ => Err(invalid_group!("pressure", s)),
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::Hectopascal => write!(f, "Q{:04}", self.value.round() as u16),
            PressureUnit::InchesOfMercury => {
                write!(f, "A{:04}", (self.value * 100.0).round() as u16)
            }
        }
    }
}
