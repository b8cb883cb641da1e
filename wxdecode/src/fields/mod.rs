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

//! Groups of a bulletin.
//!
//! Each group of a report, e.g. the wind `27015G25KT` or a cloud layer
//! `BKN012CB`, has its own type that is parsed from a single token with
//! [`FromStr`] and is written back in its coded form with `Display`.
//!
//! [`FromStr`]: std::str::FromStr

mod cloud;
mod hazard;
mod pressure;
mod runway;
mod temperature;
mod time;
mod visibility;
mod weather;
mod wind;

pub use cloud::{CloudGroup, CloudLayer};
pub use hazard::{Icing, Turbulence};
pub use pressure::{hpa_to_inhg, inhg_to_hpa, Pressure, PressureUnit};
pub use runway::{Depth, Friction, Reported, RunwayCondition, RunwayVisualRange, Tendency};
pub use temperature::{ExtremeKind, Temperature, TemperatureExtreme};
pub use time::{DayTime, Validity};
pub use visibility::{DistanceUnit, Visibility};
pub use weather::WeatherCondition;
pub use wind::{SpeedUnit, VariableRange, Wind};

/// Returns `true` if `s` is non-empty and contains only ASCII digits.
#[inline]
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `s` is non-empty and contains only uppercase letters.
#[inline]
pub(crate) fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Returns `true` if `s` is a four letter ICAO location indicator.
#[inline]
pub(crate) fn is_location_indicator(s: &str) -> bool {
    s.len() == 4 && is_alpha(s)
}

/// Parses a two digit value with an optional `M` prefix for negative values.
pub(crate) fn signed(s: &str) -> Option<i8> {
    match s.strip_prefix('M') {
        Some(abs) if abs.len() == 2 => digits!(abs, .., i8).map(|v| -v),
        None if s.len() == 2 => digits!(s, .., i8),
        _ => None,
    }
}

/// Writes a signed value with `M` prefix for negative values.
pub(crate) fn write_signed(f: &mut std::fmt::Formatter<'_>, value: i8) -> std::fmt::Result {
    if value < 0 {
        write!(f, "M{:02}", value.unsigned_abs())
    } else {
        write!(f, "{value:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_values() {
        assert_eq!(signed("05"), Some(5));
        assert_eq!(signed("M05"), Some(-5));
        assert_eq!(signed("M5"), None);
        assert_eq!(signed("105"), None);
        assert_eq!(signed("//"), None);
    }

    #[test]
    fn classifies_location_indicator() {
        assert!(is_location_indicator("UUWW"));
        assert!(!is_location_indicator("UUW1"));
        assert!(!is_location_indicator("SIGMET"));
    }
}
