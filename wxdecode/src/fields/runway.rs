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
use crate::constants;
use crate::error::Error;
use crate::tables::{BrakingAction, Code, Deposit, Extent};

/// A sub-field of a coded group which might be left out with slashes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reported<T> {
    Value(T),
    /// The sub-field was sent as slashes.
    NotReported,
    /// The sub-field has a code without a known meaning.
    Unknown(String),
}

impl<T> Reported<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    fn decode(code: &str, f: impl FnOnce(&str) -> Option<T>) -> Self {
        if code.bytes().all(|b| b == b'/') {
            Self::NotReported
        } else {
            f(code).map_or_else(|| Self::Unknown(code.to_string()), Self::Value)
        }
    }
}

/// Depth of the deposit on the runway.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Depth {
    /// Depth in millimeters where `0` is less than 1 mm and `400` is 40 cm
    /// or more.
    Millimeters(u16),
    /// The runway is not operational due to the deposit.
    NonOperational,
}

impl Depth {
    fn from_code(code: &str) -> Option<Self> {
        match digits!(code, ..)? {
            v @ 0..=90 => Some(Self::Millimeters(v)),
            v @ 92..=97 => Some(Self::Millimeters((v - 90) * 50)),
            98 => Some(Self::Millimeters(400)),
            99 => Some(Self::NonOperational),
            _ => None,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters(0) => write!(f, "less than 1 mm"),
            Self::Millimeters(400) => write!(f, "40 cm or more"),
            Self::Millimeters(mm) if mm % 10 == 0 && *mm >= 100 => write!(f, "{} cm", mm / 10),
            Self::Millimeters(mm) => write!(f, "{mm} mm"),
            Self::NonOperational => write!(f, "runway not operational"),
        }
    }
}

/// Friction coefficient or braking action.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Friction {
    /// Friction coefficient in hundredths, e.g. `35` for 0.35.
    Coefficient(u8),
    BrakingAction(BrakingAction),
    /// The measurement is unreliable.
    Unreliable,
}

impl Friction {
    fn from_code(code: &str) -> Option<Self> {
        match digits!(code, .., u8)? {
            v @ 0..=90 => Some(Self::Coefficient(v)),
            99 => Some(Self::Unreliable),
            _ => BrakingAction::from_code(code).map(Self::BrakingAction),
        }
    }
}

impl fmt::Display for Friction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coefficient(v) => write!(f, "friction coefficient 0.{v:02}"),
            Self::BrakingAction(action) => write!(f, "braking action {action}"),
            Self::Unreliable => write!(f, "unreliable"),
        }
    }
}

/// Splits a runway group `R24L/...` into the designator and the value.
///
/// The designator is empty for the group `R/SNOCLO`.
fn designator(s: &str) -> Option<(&str, &str)> {
    let (runway, value) = s.strip_prefix('R')?.split_once('/')?;

    let valid = runway.is_empty()
        || match runway.len() {
            2 => is_digits(runway),
            3 => {
                runway.get(..2).is_some_and(is_digits)
                    && matches!(runway.get(2..), Some("L" | "C" | "R"))
            }
            _ => false,
        };

    valid.then_some((runway, value))
}

/// State of a runway, e.g. `R24/290050` or `R88/CLRD//`.
///
/// The code is decoded positionally into the deposit, the extent of the
/// contamination, the depth and the friction. Each of them is optional.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayCondition {
    pub runway: String,
    pub code: String,
    pub deposit: Option<Reported<Deposit>>,
    pub extent: Option<Reported<Extent>>,
    pub depth: Option<Reported<Depth>>,
    pub friction: Option<Reported<Friction>>,
    pub is_cleared: bool,
    pub is_closed_by_snow: bool,
}

impl RunwayCondition {
    fn flag(runway: &str, code: &str) -> Self {
        Self {
            runway: runway.to_string(),
            code: code.to_string(),
            deposit: None,
            extent: None,
            depth: None,
            friction: None,
            is_cleared: code.starts_with("CLRD"),
            is_closed_by_snow: code == "SNOCLO",
        }
    }
}

impl FromStr for RunwayCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("runway condition", s);
        let (runway, code) = designator(s).ok_or_else(err)?;

        if code == "SNOCLO" || (!runway.is_empty() && code.starts_with("CLRD")) {
            return Ok(Self::flag(runway, code));
        }

        if runway.is_empty()
            || !(4..=6).contains(&code.len())
            || !code.bytes().all(|b| b.is_ascii_digit() || b == b'/')
        {
            return Err(err());
        }

        Ok(Self {
            runway: runway.to_string(),
            code: code.to_string(),
            deposit: code.get(0..1).map(|c| Reported::decode(c, Deposit::from_code)),
            extent: code.get(1..2).map(|c| Reported::decode(c, Extent::from_code)),
            depth: code.get(2..4).map(|c| Reported::decode(c, Depth::from_code)),
            friction: code
                .get(4..)
                .filter(|c| !c.is_empty())
                .map(|c| Reported::decode(c, Friction::from_code)),
            is_cleared: false,
            is_closed_by_snow: false,
        })
    }
}

impl fmt::Display for RunwayCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/{}", self.runway, self.code)
    }
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tendency {
    #[code(abbr = "U", desc = "upward")]
    Upward,
    #[code(abbr = "D", desc = "downward")]
    Downward,
    #[code(abbr = "N", desc = "no change")]
    NoChange,
}

/// Runway visual range, e.g. `R24L/P1500N` or `R06/1000V1800FT`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayVisualRange {
    pub runway: String,
    pub range: u16,
    pub is_less_than: bool,
    pub is_greater_than: bool,
    pub variable_to: Option<u16>,
    /// The ranges are given in feet instead of meters.
    pub in_feet: bool,
    pub tendency: Option<Tendency>,
}

impl RunwayVisualRange {
    /// Returns the range in meters.
    pub fn range_in_meters(&self) -> f32 {
        if self.in_feet {
            self.range as f32 * constants::FEET_IN_METER
        } else {
            self.range as f32
        }
    }
}

/// Parses a four digit range with optional `M` or `P` prefix.
fn range(s: &str) -> Option<(u16, bool, bool)> {
    let (less, greater, value) = match s.as_bytes().first()? {
        b'M' => (true, false, &s[1..]),
        b'P' => (false, true, &s[1..]),
        _ => (false, false, s),
    };

    (value.len() == 4)
        .then(|| digits!(value, ..))
        .flatten()
        .map(|v| (v, less, greater))
}

impl FromStr for RunwayVisualRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("runway visual range", s);
        let (runway, mut value) = designator(s).filter(|(r, _)| !r.is_empty()).ok_or_else(err)?;

        let tendency = value
            .get(value.len().saturating_sub(1)..)
            .and_then(Tendency::from_code);
        if tendency.is_some() {
            value = &value[..value.len() - 1];
        }

        let in_feet = match value.strip_suffix("FT") {
            Some(v) => {
                value = v;
                true
            }
            None => false,
        };

        let (lower, upper) = match value.split_once('V') {
            Some((lower, upper)) => (lower, Some(upper)),
            None => (value, None),
        };

        let (lower, is_less_than, is_greater_than) = range(lower).ok_or_else(err)?;
        let variable_to = match upper {
            Some(upper) => Some(range(upper).ok_or_else(err)?.0),
            None => None,
        };

        Ok(Self {
            runway: runway.to_string(),
            range: lower,
            is_less_than,
            is_greater_than,
            variable_to,
            in_feet,
            tendency,
        })
    }
}

impl fmt::Display for RunwayVisualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/", self.runway)?;

        if self.is_less_than {
            write!(f, "M")?;
        } else if self.is_greater_than {
            write!(f, "P")?;
        }

        write!(f, "{:04}", self.range)?;

        if let Some(to) = self.variable_to {
            write!(f, "V{to:04}")?;
        }

        if self.in_feet {
            write!(f, "FT")?;
        }

        if let Some(tendency) = self.tendency {
            write!(f, "{}", tendency.code())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_runway_condition() {
        let rc: RunwayCondition = "R24/290050".parse().expect("runway state should parse");
        assert_eq!(rc.runway, "24");
        assert_eq!(rc.deposit, Some(Reported::Value(Deposit::Wet)));
        assert_eq!(rc.extent, Some(Reported::Value(Extent::UpTo100)));
        assert_eq!(rc.depth, Some(Reported::Value(Depth::Millimeters(0))));
        assert_eq!(rc.friction, Some(Reported::Value(Friction::Coefficient(50))));
        assert_eq!(rc.to_string(), "R24/290050");
    }

    #[test]
    fn keeps_not_reported_distinct() {
        let rc: RunwayCondition = "R88L/4///95".parse().expect("runway state should parse");
        assert_eq!(rc.deposit, Some(Reported::Value(Deposit::DrySnow)));
        assert_eq!(rc.extent, Some(Reported::NotReported));
        assert_eq!(rc.depth, Some(Reported::NotReported));
        assert_eq!(
            rc.friction,
            Some(Reported::Value(Friction::BrakingAction(BrakingAction::Good)))
        );

        let rc: RunwayCondition = "R06/7392".parse().expect("runway state should parse");
        assert_eq!(rc.extent, Some(Reported::Unknown("3".to_string())));
        assert_eq!(rc.depth, Some(Reported::Value(Depth::Millimeters(100))));
        assert_eq!(rc.friction, None);
    }

    #[test]
    fn parses_special_runway_states() {
        let rc: RunwayCondition = "R88/CLRD//".parse().expect("cleared should parse");
        assert!(rc.is_cleared);
        assert_eq!(rc.deposit, None);

        let rc: RunwayCondition = "R/SNOCLO".parse().expect("snoclo should parse");
        assert!(rc.is_closed_by_snow);
        assert_eq!(rc.runway, "");
    }

    #[test]
    fn rejects_other_groups() {
        assert!("R24L/P1500N".parse::<RunwayCondition>().is_err());
        assert!("RERA".parse::<RunwayCondition>().is_err());
        assert!("R/290050".parse::<RunwayCondition>().is_err());
    }

    #[test]
    fn parses_runway_visual_range() {
        let rvr: RunwayVisualRange = "R24L/P1500N".parse().expect("rvr should parse");
        assert_eq!(rvr.runway, "24L");
        assert_eq!(rvr.range, 1500);
        assert!(rvr.is_greater_than);
        assert_eq!(rvr.tendency, Some(Tendency::NoChange));
        assert_eq!(rvr.to_string(), "R24L/P1500N");

        let rvr: RunwayVisualRange = "R06/1000V1800FT".parse().expect("rvr should parse");
        assert_eq!(rvr.variable_to, Some(1800));
        assert!(rvr.in_feet);
        assert_eq!(rvr.tendency, None);
        assert!((rvr.range_in_meters() - 304.8).abs() < 0.01);
    }

    #[test]
    fn rvr_rejects_runway_condition() {
        assert!("R24/290050".parse::<RunwayVisualRange>().is_err());
        assert!("R88/CLRD//".parse::<RunwayVisualRange>().is_err());
    }
}
