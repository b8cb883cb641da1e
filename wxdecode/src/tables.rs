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

//! Decode tables.
//!
//! Immutable mappings from the short codes used in bulletins to their
//! descriptions, shared by the parsers and the [formatter]. Every table is a
//! field-less enum implementing [`Code`]; looking up a code that isn't in a
//! table never fails but falls back to the raw code (see [`describe`]).
//!
//! [formatter]: crate::format

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) use wxdecode_derive::Code;

/// A table of codes with their descriptions.
pub trait Code: Sized + Copy + 'static {
    /// All entries of the table.
    const ALL: &'static [Self];

    /// The code as it appears in a bulletin.
    fn code(&self) -> &'static str;

    /// The human readable description.
    fn description(&self) -> &'static str;

    /// Looks up the entry of `code`.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.code() == code)
    }
}

/// Returns the description of `code` in table `C` or the code itself.
///
/// # Examples
///
/// ```
/// use wxdecode::tables::{describe, Phenomenon};
///
/// assert_eq!(describe::<Phenomenon>("RA"), "Rain");
/// assert_eq!(describe::<Phenomenon>("XX"), "XX");
/// ```
pub fn describe<C: Code>(code: &str) -> String {
    C::from_code(code)
        .map(|entry| entry.description().to_string())
        .unwrap_or_else(|| code.to_string())
}

/////////////////////////////////////////////////////////////////////////////
// Clouds
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coverage {
    #[code(abbr = "FEW", desc = "Few")]
    Few,
    #[code(abbr = "SCT", desc = "Scattered")]
    Scattered,
    #[code(abbr = "BKN", desc = "Broken")]
    Broken,
    #[code(abbr = "OVC", desc = "Overcast")]
    Overcast,
    #[code(abbr = "VV", desc = "Sky obscured")]
    VerticalVisibility,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudType {
    #[code(abbr = "CB", desc = "Cumulonimbus")]
    Cumulonimbus,
    #[code(abbr = "TCU", desc = "Towering cumulus")]
    ToweringCumulus,
}

/// Groups stating the absence of cloud.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearSky {
    #[code(abbr = "SKC", desc = "Sky clear")]
    SkyClear,
    #[code(abbr = "CLR", desc = "No clouds below 12,000 ft")]
    Clear,
    #[code(abbr = "NSC", desc = "No significant cloud")]
    NoSignificantCloud,
    #[code(abbr = "NCD", desc = "No cloud detected")]
    NoCloudDetected,
}

/////////////////////////////////////////////////////////////////////////////
// Weather
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intensity {
    #[code(abbr = "-", desc = "Light")]
    Light,
    #[default]
    #[code(abbr = "", desc = "Moderate")]
    Moderate,
    #[code(abbr = "+", desc = "Heavy")]
    Heavy,
    #[code(abbr = "VC", desc = "In the vicinity")]
    Vicinity,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    #[code(abbr = "MI", desc = "Shallow")]
    Shallow,
    #[code(abbr = "BC", desc = "Patches")]
    Patches,
    #[code(abbr = "PR", desc = "Partial")]
    Partial,
    #[code(abbr = "DR", desc = "Low drifting")]
    LowDrifting,
    #[code(abbr = "BL", desc = "Blowing")]
    Blowing,
    #[code(abbr = "SH", desc = "Showers")]
    Showers,
    #[code(abbr = "TS", desc = "Thunderstorm")]
    Thunderstorm,
    #[code(abbr = "FZ", desc = "Freezing")]
    Freezing,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phenomenon {
    #[code(abbr = "DZ", desc = "Drizzle")]
    Drizzle,
    #[code(abbr = "RA", desc = "Rain")]
    Rain,
    #[code(abbr = "SN", desc = "Snow")]
    Snow,
    #[code(abbr = "SG", desc = "Snow grains")]
    SnowGrains,
    #[code(abbr = "IC", desc = "Ice crystals")]
    IceCrystals,
    #[code(abbr = "PL", desc = "Ice pellets")]
    IcePellets,
    #[code(abbr = "GR", desc = "Hail")]
    Hail,
    #[code(abbr = "GS", desc = "Small hail")]
    SmallHail,
    #[code(abbr = "UP", desc = "Unknown precipitation")]
    UnknownPrecipitation,
    #[code(abbr = "BR", desc = "Mist")]
    Mist,
    #[code(abbr = "FG", desc = "Fog")]
    Fog,
    #[code(abbr = "FU", desc = "Smoke")]
    Smoke,
    #[code(abbr = "VA", desc = "Volcanic ash")]
    VolcanicAsh,
    #[code(abbr = "DU", desc = "Widespread dust")]
    Dust,
    #[code(abbr = "SA", desc = "Sand")]
    Sand,
    #[code(abbr = "HZ", desc = "Haze")]
    Haze,
    #[code(abbr = "PY", desc = "Spray")]
    Spray,
    #[code(abbr = "PO", desc = "Dust or sand whirls")]
    DustWhirls,
    #[code(abbr = "SQ", desc = "Squalls")]
    Squalls,
    #[code(abbr = "FC", desc = "Funnel cloud")]
    FunnelCloud,
    #[code(abbr = "SS", desc = "Sandstorm")]
    Sandstorm,
    #[code(abbr = "DS", desc = "Duststorm")]
    Duststorm,
}

impl Phenomenon {
    /// Name of the icon used to display the phenomenon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Drizzle | Self::Rain | Self::UnknownPrecipitation => "cloud-rain",
            Self::Snow | Self::SnowGrains | Self::IceCrystals => "cloud-snow",
            Self::IcePellets | Self::Hail | Self::SmallHail => "cloud-hail",
            Self::Mist | Self::Fog => "cloud-fog",
            Self::Smoke | Self::VolcanicAsh | Self::Haze => "sun-horizon",
            Self::Dust | Self::Sand | Self::Spray | Self::DustWhirls => "wind",
            Self::Squalls | Self::Sandstorm | Self::Duststorm => "tornado",
            Self::FunnelCloud => "tornado",
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Runway state
/////////////////////////////////////////////////////////////////////////////

/// Runway deposit.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Deposit {
    #[code(abbr = "0", desc = "Clear and dry")]
    ClearAndDry,
    #[code(abbr = "1", desc = "Damp")]
    Damp,
    #[code(abbr = "2", desc = "Wet or water patches")]
    Wet,
    #[code(abbr = "3", desc = "Rime or frost")]
    RimeOrFrost,
    #[code(abbr = "4", desc = "Dry snow")]
    DrySnow,
    #[code(abbr = "5", desc = "Wet snow")]
    WetSnow,
    #[code(abbr = "6", desc = "Slush")]
    Slush,
    #[code(abbr = "7", desc = "Ice")]
    Ice,
    #[code(abbr = "8", desc = "Compacted or rolled snow")]
    CompactedSnow,
    #[code(abbr = "9", desc = "Frozen ruts or ridges")]
    FrozenRuts,
}

/// Extent of the runway covered by the deposit.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extent {
    #[code(abbr = "1", desc = "10% or less")]
    UpTo10,
    #[code(abbr = "2", desc = "11% to 25%")]
    UpTo25,
    #[code(abbr = "5", desc = "26% to 50%")]
    UpTo50,
    #[code(abbr = "9", desc = "51% to 100%")]
    UpTo100,
}

/// Braking action reported by the friction codes 91 to 95.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrakingAction {
    #[code(abbr = "91", desc = "Poor")]
    Poor,
    #[code(abbr = "92", desc = "Medium to poor")]
    MediumPoor,
    #[code(abbr = "93", desc = "Medium")]
    Medium,
    #[code(abbr = "94", desc = "Medium to good")]
    MediumGood,
    #[code(abbr = "95", desc = "Good")]
    Good,
}

/////////////////////////////////////////////////////////////////////////////
// Forecast hazards
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurbulenceIntensity {
    #[code(abbr = "0", desc = "None")]
    None,
    #[code(abbr = "1", desc = "Light turbulence")]
    Light,
    #[code(abbr = "2", desc = "Moderate turbulence in clear air, occasional")]
    ModerateClearAirOccasional,
    #[code(abbr = "3", desc = "Moderate turbulence in clear air, frequent")]
    ModerateClearAirFrequent,
    #[code(abbr = "4", desc = "Moderate turbulence in cloud, occasional")]
    ModerateInCloudOccasional,
    #[code(abbr = "5", desc = "Moderate turbulence in cloud, frequent")]
    ModerateInCloudFrequent,
    #[code(abbr = "6", desc = "Severe turbulence in clear air, occasional")]
    SevereClearAirOccasional,
    #[code(abbr = "7", desc = "Severe turbulence in clear air, frequent")]
    SevereClearAirFrequent,
    #[code(abbr = "8", desc = "Severe turbulence in cloud, occasional")]
    SevereInCloudOccasional,
    #[code(abbr = "9", desc = "Severe turbulence in cloud, frequent")]
    SevereInCloudFrequent,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IcingIntensity {
    #[code(abbr = "0", desc = "Trace icing")]
    Trace,
    #[code(abbr = "1", desc = "Light icing")]
    Light,
    #[code(abbr = "2", desc = "Light icing in cloud")]
    LightInCloud,
    #[code(abbr = "3", desc = "Light icing in precipitation")]
    LightInPrecipitation,
    #[code(abbr = "4", desc = "Moderate icing")]
    Moderate,
    #[code(abbr = "5", desc = "Moderate icing in cloud")]
    ModerateInCloud,
    #[code(abbr = "6", desc = "Moderate icing in precipitation")]
    ModerateInPrecipitation,
    #[code(abbr = "7", desc = "Severe icing")]
    Severe,
    #[code(abbr = "8", desc = "Severe icing in cloud")]
    SevereInCloud,
    #[code(abbr = "9", desc = "Severe icing in precipitation")]
    SevereInPrecipitation,
}

/////////////////////////////////////////////////////////////////////////////
// Trends and forecast periods
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrendKind {
    #[code(abbr = "BECMG", desc = "Becoming")]
    Becoming,
    #[code(abbr = "TEMPO", desc = "Temporarily")]
    Temporary,
    #[code(abbr = "NOSIG", desc = "No significant change expected")]
    NoSignificantChange,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeriodKind {
    #[code(abbr = "MAIN", desc = "Main forecast")]
    Main,
    #[code(abbr = "BECMG", desc = "Becoming")]
    Becmg,
    #[code(abbr = "TEMPO", desc = "Temporarily")]
    Tempo,
    #[code(abbr = "PROB", desc = "Probability")]
    Prob,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChangeType {
    #[code(abbr = "", desc = "Initial conditions")]
    Initial,
    #[code(abbr = "FM", desc = "From")]
    From,
    #[code(abbr = "BECMG", desc = "Becoming")]
    Becoming,
    #[code(abbr = "TEMPO", desc = "Temporarily")]
    Temporary,
    #[code(abbr = "PROB", desc = "Probable")]
    Probable,
}

/////////////////////////////////////////////////////////////////////////////
// Remarks
/////////////////////////////////////////////////////////////////////////////

/// Category of a remark used for grouping and coloring.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemarkCategory {
    #[code(abbr = "weather", desc = "Weather")]
    Weather,
    #[code(abbr = "temperature", desc = "Temperature")]
    Temperature,
    #[code(abbr = "pressure", desc = "Pressure")]
    Pressure,
    #[code(abbr = "wind", desc = "Wind")]
    Wind,
    #[code(abbr = "runway", desc = "Runway")]
    Runway,
    #[code(abbr = "system", desc = "System")]
    System,
    #[code(abbr = "other", desc = "Other")]
    Other,
}

impl RemarkCategory {
    /// Display color as hex RGB.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Weather => "#3b82f6",
            Self::Temperature => "#ef4444",
            Self::Pressure => "#8b5cf6",
            Self::Wind => "#14b8a6",
            Self::Runway => "#f59e0b",
            Self::System => "#6b7280",
            Self::Other => "#9ca3af",
        }
    }

    /// Name of the icon used to display the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Weather => "cloud",
            Self::Temperature => "thermometer",
            Self::Pressure => "gauge",
            Self::Wind => "wind",
            Self::Runway => "road-horizon",
            Self::System => "gear",
            Self::Other => "info",
        }
    }
}

/// Remarks about the observing station and its sensors.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemRemark {
    #[code(abbr = "AO1", desc = "Automated station without precipitation discriminator")]
    Ao1,
    #[code(abbr = "AO2", desc = "Automated station with precipitation discriminator")]
    Ao2,
    #[code(abbr = "$", desc = "Station requires maintenance")]
    Maintenance,
    #[code(abbr = "PNO", desc = "Precipitation amount not available")]
    Pno,
    #[code(abbr = "FZRANO", desc = "Freezing rain information not available")]
    Fzrano,
    #[code(abbr = "TSNO", desc = "Thunderstorm information not available")]
    Tsno,
    #[code(abbr = "RVRNO", desc = "Runway visual range not available")]
    Rvrno,
    #[code(abbr = "PWINO", desc = "Present weather identifier not available")]
    Pwino,
    #[code(abbr = "VISNO", desc = "Secondary visibility not available")]
    Visno,
    #[code(abbr = "CHINO", desc = "Secondary ceiling height not available")]
    Chino,
    #[code(abbr = "SLPNO", desc = "Sea-level pressure not available")]
    Slpno,
}

/// Remarks about the state of the runways.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayRemark {
    #[code(abbr = "SNINCR", desc = "Snow increasing rapidly")]
    SnowIncreasing,
    #[code(abbr = "SNOCLO", desc = "Aerodrome closed due to snow")]
    ClosedBySnow,
    #[code(abbr = "CLRD", desc = "Runway cleared")]
    Cleared,
    #[code(abbr = "RCRNR", desc = "Runway condition reading not reported")]
    ConditionNotReported,
}

/// Generic remark keywords.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemarkKeyword {
    #[code(abbr = "ACSL", desc = "Altocumulus standing lenticular")]
    Acsl,
    #[code(abbr = "ACC", desc = "Altocumulus castellanus")]
    Acc,
    #[code(abbr = "CBMAM", desc = "Cumulonimbus mammatus")]
    Cbmam,
    #[code(abbr = "VIRGA", desc = "Virga")]
    Virga,
    #[code(abbr = "LTG", desc = "Lightning")]
    Ltg,
    #[code(abbr = "LTGIC", desc = "Lightning in cloud")]
    Ltgic,
    #[code(abbr = "LTGCC", desc = "Lightning cloud to cloud")]
    Ltgcc,
    #[code(abbr = "LTGCG", desc = "Lightning cloud to ground")]
    Ltgcg,
    #[code(abbr = "LTGCA", desc = "Lightning cloud to air")]
    Ltgca,
    #[code(abbr = "PRESRR", desc = "Pressure rising rapidly")]
    Presrr,
    #[code(abbr = "PRESFR", desc = "Pressure falling rapidly")]
    Presfr,
    #[code(abbr = "WSHFT", desc = "Wind shift")]
    Wshft,
    #[code(abbr = "FROPA", desc = "Frontal passage")]
    Fropa,
    #[code(abbr = "PK", desc = "Peak")]
    Pk,
    #[code(abbr = "WND", desc = "Wind")]
    Wnd,
    #[code(abbr = "CONS", desc = "Continuous")]
    Cons,
    #[code(abbr = "FRQ", desc = "Frequent")]
    Frq,
    #[code(abbr = "OCNL", desc = "Occasional")]
    Ocnl,
    #[code(abbr = "DSNT", desc = "Distant")]
    Dsnt,
    #[code(abbr = "OHD", desc = "Overhead")]
    Ohd,
    #[code(abbr = "ALQDS", desc = "All quadrants")]
    Alqds,
    #[code(abbr = "MOV", desc = "Moving")]
    Mov,
    #[code(abbr = "MT", desc = "Mountains")]
    Mt,
    #[code(abbr = "OBSC", desc = "Obscured")]
    Obsc,
    #[code(abbr = "NOSPECI", desc = "No special reports issued")]
    Nospeci,
    #[code(abbr = "TWR", desc = "Tower")]
    Twr,
    #[code(abbr = "SFC", desc = "Surface")]
    Sfc,
    #[code(abbr = "VIS", desc = "Visibility")]
    Vis,
    #[code(abbr = "CIG", desc = "Ceiling")]
    Cig,
}

impl RemarkKeyword {
    pub fn category(&self) -> RemarkCategory {
        match self {
            Self::Acsl
            | Self::Acc
            | Self::Cbmam
            | Self::Virga
            | Self::Ltg
            | Self::Ltgic
            | Self::Ltgcc
            | Self::Ltgcg
            | Self::Ltgca => RemarkCategory::Weather,
            Self::Presrr | Self::Presfr => RemarkCategory::Pressure,
            Self::Wshft | Self::Fropa | Self::Pk | Self::Wnd => RemarkCategory::Wind,
            _ => RemarkCategory::Other,
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Hazard bulletins
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SigmetType {
    #[code(abbr = "SIGMET", desc = "SIGMET")]
    Sigmet,
    #[code(abbr = "AIRMET", desc = "AIRMET")]
    Airmet,
    #[code(abbr = "GAMET", desc = "GAMET")]
    Gamet,
}

/// Phenomena a hazard bulletin is issued for.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hazard {
    #[code(abbr = "TS", desc = "Thunderstorms")]
    Thunderstorms,
    #[code(abbr = "TSGR", desc = "Thunderstorms with hail")]
    ThunderstormsWithHail,
    #[code(abbr = "GR", desc = "Hail")]
    Hail,
    #[code(abbr = "TURB", desc = "Turbulence")]
    Turbulence,
    #[code(abbr = "ICE", desc = "Icing")]
    Icing,
    #[code(abbr = "MTW", desc = "Mountain waves")]
    MountainWaves,
    #[code(abbr = "FZLVL", desc = "Freezing level")]
    FreezingLevel,
    #[code(abbr = "VOLCANO", desc = "Volcanic activity")]
    Volcano,
    #[code(abbr = "VA", desc = "Volcanic ash")]
    VolcanicAsh,
    #[code(abbr = "TC", desc = "Tropical cyclone")]
    TropicalCyclone,
    #[code(abbr = "DS", desc = "Duststorm")]
    Duststorm,
    #[code(abbr = "SS", desc = "Sandstorm")]
    Sandstorm,
    #[code(abbr = "CB", desc = "Cumulonimbus clouds")]
    Cumulonimbus,
    #[code(abbr = "RDOACT", desc = "Radioactive cloud")]
    RadioactiveCloud,
    #[code(abbr = "FG", desc = "Fog")]
    Fog,
    #[code(abbr = "MT", desc = "Mountain obscuration")]
    MountainObscuration,
}

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HazardQualifier {
    #[code(abbr = "OBSC", desc = "obscured")]
    Obscured,
    #[code(abbr = "EMBD", desc = "embedded")]
    Embedded,
    #[code(abbr = "FRQ", desc = "frequent")]
    Frequent,
    #[code(abbr = "SQL", desc = "squall line")]
    SquallLine,
    #[code(abbr = "ISOL", desc = "isolated")]
    Isolated,
    #[code(abbr = "OCNL", desc = "occasional")]
    Occasional,
    #[code(abbr = "SEV", desc = "severe")]
    Severe,
    #[code(abbr = "MOD", desc = "moderate")]
    Moderate,
    #[code(abbr = "HVY", desc = "heavy")]
    Heavy,
}

/// Expected change of a hazard's intensity.
#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntensityChange {
    #[code(abbr = "INTSF", desc = "intensifying")]
    Intensifying,
    #[code(abbr = "WKN", desc = "weakening")]
    Weakening,
    #[code(abbr = "NC", desc = "no change")]
    NoChange,
}

/////////////////////////////////////////////////////////////////////////////
// Flight rules
/////////////////////////////////////////////////////////////////////////////

#[derive(Code, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightCategory {
    #[code(abbr = "VFR", desc = "Visual flight rules")]
    Vfr,
    #[code(abbr = "MVFR", desc = "Marginal visual flight rules")]
    Mvfr,
    #[code(abbr = "IFR", desc = "Instrument flight rules")]
    Ifr,
    #[code(abbr = "LIFR", desc = "Low instrument flight rules")]
    Lifr,
}

impl FlightCategory {
    /// Display color as hex RGB.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Vfr => "#22c55e",
            Self::Mvfr => "#3b82f6",
            Self::Ifr => "#ef4444",
            Self::Lifr => "#d946ef",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_codes() {
        assert_eq!(Coverage::from_code("BKN"), Some(Coverage::Broken));
        assert_eq!(Phenomenon::from_code("FU"), Some(Phenomenon::Smoke));
        assert_eq!(Intensity::from_code(""), Some(Intensity::Moderate));
        assert_eq!(Deposit::from_code("6"), Some(Deposit::Slush));
        assert_eq!(Hazard::from_code("TS"), Some(Hazard::Thunderstorms));
        assert_eq!(Coverage::from_code("XYZ"), None);
    }

    #[test]
    fn displays_description() {
        assert_eq!(Coverage::Overcast.to_string(), "Overcast");
        assert_eq!(IntensityChange::Intensifying.to_string(), "intensifying");
        assert_eq!(Hazard::Thunderstorms.code(), "TS");
    }

    #[test]
    fn falls_back_to_raw_code() {
        assert_eq!(describe::<RemarkKeyword>("ACSL"), "Altocumulus standing lenticular");
        assert_eq!(describe::<RemarkKeyword>("FOOBAR"), "FOOBAR");
    }

    #[test]
    fn codes_are_unique() {
        fn assert_unique<C: Code>() {
            for (i, a) in C::ALL.iter().enumerate() {
                for b in &C::ALL[i + 1..] {
                    assert_ne!(a.code(), b.code());
                }
            }
        }

        assert_unique::<Phenomenon>();
        assert_unique::<Descriptor>();
        assert_unique::<RemarkKeyword>();
        assert_unique::<Hazard>();
        assert_unique::<SystemRemark>();
    }
}
