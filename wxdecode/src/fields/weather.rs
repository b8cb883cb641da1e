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

use crate::error::Error;
use crate::tables::{Code, Descriptor, Intensity, Phenomenon};

/// Present or forecast weather, e.g. `-SHRA` or `+TSRAGR`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherCondition {
    pub intensity: Intensity,
    pub descriptor: Option<Descriptor>,
    pub phenomena: Vec<Phenomenon>,
}

impl FromStr for WeatherCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("weather", s);

        let (intensity, body) = [Intensity::Heavy, Intensity::Light, Intensity::Vicinity]
            .into_iter()
            .find_map(|intensity| s.strip_prefix(intensity.code()).map(|b| (intensity, b)))
            .unwrap_or((Intensity::Moderate, s));

        if body.is_empty() || body.len() % 2 != 0 || !body.is_ascii() {
            return Err(err());
        }

        let mut codes = (0..body.len()).step_by(2).map(|i| &body[i..i + 2]);
        let mut descriptor = None;
        let mut phenomena = Vec::new();

        if let Some(first) = codes.next() {
            match Descriptor::from_code(first) {
                Some(d) => descriptor = Some(d),
                None => phenomena.push(Phenomenon::from_code(first).ok_or_else(err)?),
            }
        }

        for code in codes {
            phenomena.push(Phenomenon::from_code(code).ok_or_else(err)?);
        }

        // only thunderstorms and showers are reported without phenomenon
        if phenomena.is_empty()
            && !matches!(descriptor, Some(Descriptor::Thunderstorm | Descriptor::Showers))
        {
            return Err(err());
        }

        Ok(Self {
            intensity,
            descriptor,
            phenomena,
        })
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.intensity.code())?;

        if let Some(descriptor) = self.descriptor {
            write!(f, "{}", descriptor.code())?;
        }

        for phenomenon in &self.phenomena {
            write!(f, "{}", phenomenon.code())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weather_with_intensity() {
        let wx: WeatherCondition = "+TSRAGR".parse().expect("weather should parse");
        assert_eq!(wx.intensity, Intensity::Heavy);
        assert_eq!(wx.descriptor, Some(Descriptor::Thunderstorm));
        assert_eq!(wx.phenomena, vec![Phenomenon::Rain, Phenomenon::Hail]);
        assert_eq!(wx.to_string(), "+TSRAGR");
    }

    #[test]
    fn parses_weather_without_descriptor() {
        let wx: WeatherCondition = "BR".parse().expect("weather should parse");
        assert_eq!(wx.intensity, Intensity::Moderate);
        assert_eq!(wx.descriptor, None);
        assert_eq!(wx.phenomena, vec![Phenomenon::Mist]);

        let wx: WeatherCondition = "-RASN".parse().expect("weather should parse");
        assert_eq!(wx.intensity, Intensity::Light);
        assert_eq!(wx.phenomena, vec![Phenomenon::Rain, Phenomenon::Snow]);
    }

    #[test]
    fn parses_descriptor_only() {
        let wx: WeatherCondition = "VCSH".parse().expect("weather should parse");
        assert_eq!(wx.intensity, Intensity::Vicinity);
        assert_eq!(wx.descriptor, Some(Descriptor::Showers));
        assert!(wx.phenomena.is_empty());

        assert!("FZ".parse::<WeatherCondition>().is_err());
    }

    #[test]
    fn rejects_other_groups() {
        for token in ["FEW020", "SKC", "NSC", "CAVOK", "Q1013", "10/05", "RMK", "NOSIG", "XYZAB"] {
            assert!(
                token.parse::<WeatherCondition>().is_err(),
                "{token} should be no weather"
            );
        }
    }
}
