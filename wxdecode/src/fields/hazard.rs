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

use super::is_digits;
use crate::error::Error;
use crate::tables::{Code, IcingIntensity, TurbulenceIntensity};

/// Splits a forecast layer group `PIHHHT` into the intensity code, the base
/// in feet and the thickness in feet.
fn layer(s: &str, prefix: char) -> Option<(&str, u32, u32)> {
    if s.len() != 6 || !is_digits(s) || !s.starts_with(prefix) {
        return None;
    }

    let base = digits!(s, 2..5, u32)? * 100;
    let thickness = digits!(s, 5..6, u32)? * 1000;
    Some((&s[1..2], base, thickness))
}

/// Forecast turbulence layer, e.g. `520004`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turbulence {
    pub intensity: TurbulenceIntensity,
    /// Base of the layer in feet.
    pub base: u32,
    /// Thickness of the layer in feet.
    pub thickness: u32,
}

impl FromStr for Turbulence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        layer(s, '5')
            .and_then(|(code, base, thickness)| {
                Some(Self {
                    intensity: TurbulenceIntensity::from_code(code)?,
                    base,
                    thickness,
                })
            })
            .ok_or_else(|| invalid_group!("turbulence", s))
    }
}

impl fmt::Display for Turbulence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "5{}{:03}{}",
            self.intensity.code(),
            self.base / 100,
            self.thickness / 1000
        )
    }
}

/// Forecast icing layer, e.g. `640203`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Icing {
    pub intensity: IcingIntensity,
    /// Base of the layer in feet.
    pub base: u32,
    /// Thickness of the layer in feet.
    pub thickness: u32,
}

impl FromStr for Icing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        layer(s, '6')
            .and_then(|(code, base, thickness)| {
                Some(Self {
                    intensity: IcingIntensity::from_code(code)?,
                    base,
                    thickness,
                })
            })
            .ok_or_else(|| invalid_group!("icing", s))
    }
}

impl fmt::Display for Icing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "6{}{:03}{}",
            self.intensity.code(),
            self.base / 100,
            self.thickness / 1000
        )
    }
}
