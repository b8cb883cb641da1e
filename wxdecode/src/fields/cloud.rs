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
use crate::tables::{ClearSky, CloudType, Code, Coverage};

/// A cloud layer, e.g. `BKN012CB`, or a vertical visibility `VV002`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudLayer {
    pub coverage: Coverage,
    /// Height of the cloud base in feet.
    pub altitude: u32,
    pub cloud_type: Option<CloudType>,
    /// Broken or overcast layers and all convective clouds form a ceiling.
    pub is_ceiling: bool,
}

impl CloudLayer {
    pub fn new(coverage: Coverage, altitude: u32, cloud_type: Option<CloudType>) -> Self {
        let is_ceiling = match coverage {
            Coverage::VerticalVisibility => false,
            Coverage::Broken | Coverage::Overcast => true,
            Coverage::Few | Coverage::Scattered => cloud_type.is_some(),
        };

        Self {
            coverage,
            altitude,
            cloud_type,
            is_ceiling,
        }
    }
}

impl FromStr for CloudLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("cloud", s);

        let (coverage, rest) = Coverage::ALL
            .iter()
            .find_map(|cov| s.strip_prefix(cov.code()).map(|rest| (*cov, rest)))
            .ok_or_else(err)?;

        let altitude = digits!(rest, 0..3, u32).ok_or_else(err)? * 100;

        let cloud_type = match rest.get(3..) {
            Some("") | Some("///") => None,
            Some(t) if coverage != Coverage::VerticalVisibility => {
                Some(CloudType::from_code(t).ok_or_else(err)?)
            }
            _ => return Err(err()),
        };

        Ok(Self::new(coverage, altitude, cloud_type))
    }
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.coverage.code(), self.altitude / 100)?;

        if let Some(cloud_type) = self.cloud_type {
            write!(f, "{}", cloud_type.code())?;
        }

        Ok(())
    }
}

/// Token of the cloud group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudGroup {
    Layer(CloudLayer),
    /// Clears all layers reported so far.
    Clear(ClearSky),
}

impl FromStr for CloudGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ClearSky::from_code(s) {
            Some(clear) => Ok(Self::Clear(clear)),
            None => s.parse().map(Self::Layer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layers() {
        let layer: CloudLayer = "FEW030".parse().expect("layer should parse");
        assert_eq!(layer.coverage, Coverage::Few);
        assert_eq!(layer.altitude, 3000);
        assert!(!layer.is_ceiling);

        let layer: CloudLayer = "BKN012".parse().expect("layer should parse");
        assert!(layer.is_ceiling);

        let layer: CloudLayer = "SCT025TCU".parse().expect("layer should parse");
        assert_eq!(layer.cloud_type, Some(CloudType::ToweringCumulus));
        assert!(layer.is_ceiling);
        assert_eq!(layer.to_string(), "SCT025TCU");
    }

    #[test]
    fn vertical_visibility_is_no_ceiling() {
        let layer: CloudLayer = "VV002".parse().expect("layer should parse");
        assert_eq!(layer.coverage, Coverage::VerticalVisibility);
        assert_eq!(layer.altitude, 200);
        assert!(!layer.is_ceiling);
    }

    #[test]
    fn parses_clear_sky() {
        assert_eq!(
            "NSC".parse::<CloudGroup>(),
            Ok(CloudGroup::Clear(ClearSky::NoSignificantCloud))
        );
        assert!(matches!(
            "OVC008".parse::<CloudGroup>(),
            Ok(CloudGroup::Layer(_))
        ));
    }

    #[test]
    fn rejects_invalid_layers() {
        assert!("FEW".parse::<CloudLayer>().is_err());
        assert!("BKN01".parse::<CloudLayer>().is_err());
        assert!("BKN012XX".parse::<CloudLayer>().is_err());
        assert!("FU".parse::<CloudLayer>().is_err());
    }
}
