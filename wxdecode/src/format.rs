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

//! Human readable descriptions of decoded reports.
//!
//! All functions are pure and only compose the decoded values with the
//! descriptions of the [decode tables](crate::tables).

use crate::fields::{
    CloudLayer, DayTime, Depth, DistanceUnit, Friction, Pressure, PressureUnit, Reported,
    RunwayCondition, RunwayVisualRange, Temperature, Validity, Visibility,
    WeatherCondition, Wind,
};
use crate::sigmet::SigmetRecord;
use crate::tables::{ChangeType, Code, Coverage, Descriptor, Intensity};
use crate::taf::TafForecastPeriod;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Returns the point of the 16-point compass rose closest to `degrees`.
///
/// # Examples
///
/// ```
/// use wxdecode::format::compass;
///
/// assert_eq!(compass(0), "N");
/// assert_eq!(compass(250), "WSW");
/// assert_eq!(compass(355), "N");
/// ```
pub fn compass(degrees: u16) -> &'static str {
    let sector = ((degrees % 360) as f32 / 22.5).round() as usize % COMPASS.len();
    COMPASS[sector]
}

/// Returns the direction in degrees of a compass `point` like `NE`.
pub fn compass_degrees(point: &str) -> Option<u16> {
    COMPASS
        .iter()
        .position(|p| *p == point)
        .map(|sector| (sector as f32 * 22.5).round() as u16)
}

/// Returns an altitude in feet as flight level above 10000 ft.
pub fn altitude(feet: u32) -> String {
    match feet {
        0 => "surface".to_string(),
        ft if ft >= 10_000 && ft % 100 == 0 => format!("FL{:03}", ft / 100),
        ft => format!("{ft} ft"),
    }
}

/// Capitalizes the first letter of `s`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn wind(wind: &Wind) -> String {
    if wind.is_calm {
        return "Calm".to_string();
    }

    let unit = wind.unit.description();
    let mut s = match wind.direction {
        Some(direction) => format!(
            "{direction:03}° ({}) at {} {unit}",
            compass(direction),
            wind.speed
        ),
        None => format!("Variable at {} {unit}", wind.speed),
    };

    if let Some(gust) = wind.gust {
        s.push_str(&format!(", gusting {gust} {unit}"));
    }

    if let Some(range) = wind.variable {
        s.push_str(&format!(
            ", varying between {:03}° and {:03}°",
            range.from, range.to
        ));
    }

    s
}

pub fn visibility(visibility: &Visibility) -> String {
    if visibility.is_cavok {
        return "Ceiling and visibility OK".to_string();
    }

    let prefix = if visibility.is_less_than {
        "less than "
    } else if visibility.is_greater_than {
        "more than "
    } else {
        ""
    };

    let value = match visibility.unit {
        DistanceUnit::Meters if visibility.value >= 9999.0 => "10 km or more".to_string(),
        DistanceUnit::Meters if visibility.value >= 5000.0 => {
            format!("{} km", (visibility.value / 1000.0).round())
        }
        DistanceUnit::Meters => format!("{} m", visibility.value),
        DistanceUnit::StatuteMiles => {
            let unsigned = Visibility {
                is_less_than: false,
                is_greater_than: false,
                ..*visibility
            }
            .to_string();
            let miles = unsigned.strip_suffix("SM").unwrap_or(&unsigned);

            format!("{miles} SM ({} m)", visibility.in_meters())
        }
    };

    capitalize(&format!("{prefix}{value}"))
}

pub fn cloud_layer(layer: &CloudLayer) -> String {
    let mut s = match layer.coverage {
        Coverage::VerticalVisibility => format!("Vertical visibility {} ft", layer.altitude),
        coverage => format!("{} at {} ft", coverage.description(), layer.altitude),
    };

    if let Some(cloud_type) = layer.cloud_type {
        s.push_str(&format!(" ({})", cloud_type.description().to_lowercase()));
    }

    s
}

/// Describes a weather group, e.g. `-SHRA` as "Light rain showers".
pub fn weather(weather: &WeatherCondition) -> String {
    let phenomena = weather
        .phenomena
        .iter()
        .map(|p| p.description().to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ");

    let mut s = match (weather.descriptor, phenomena.is_empty()) {
        (Some(Descriptor::Showers), false) => format!("{phenomena} showers"),
        (Some(Descriptor::Thunderstorm), false) => format!("thunderstorm with {phenomena}"),
        (Some(descriptor), false) => {
            format!("{} {phenomena}", descriptor.description().to_lowercase())
        }
        (Some(descriptor), true) => descriptor.description().to_lowercase(),
        (None, _) => phenomena,
    };

    match weather.intensity {
        Intensity::Light | Intensity::Heavy => {
            s = format!("{} {s}", weather.intensity.description().to_lowercase());
        }
        Intensity::Vicinity => s.push_str(" in the vicinity"),
        Intensity::Moderate => (),
    }

    capitalize(&s)
}

pub fn temperature(temperature: &Temperature) -> String {
    let mut s = format!("{}°C", temperature.value);

    if let Some(dewpoint) = temperature.dewpoint {
        s.push_str(&format!(", dewpoint {dewpoint}°C"));
    }

    if let Some(rh) = temperature.relative_humidity() {
        s.push_str(&format!(", relative humidity {}%", rh.round()));
    }

    s
}

/// Describes the pressure in its unit and in the other unit.
///
/// # Examples
///
/// ```
/// use wxdecode::fields::Pressure;
/// use wxdecode::format;
///
/// assert_eq!(format::pressure(&Pressure::hpa(1013.0)), "1013 hPa (29.91 inHg)");
/// assert_eq!(format::pressure(&Pressure::in_hg(29.92)), "29.92 inHg (1013 hPa)");
/// ```
pub fn pressure(pressure: &Pressure) -> String {
    match pressure.unit {
        PressureUnit::Hectopascal => format!(
            "{:.0} hPa ({:.2} inHg)",
            pressure.value,
            pressure.as_in_hg()
        ),
        PressureUnit::InchesOfMercury => format!(
            "{:.2} inHg ({:.0} hPa)",
            pressure.value,
            pressure.as_hpa()
        ),
    }
}

/// Describes a runway sub-field or its raw code if it isn't known.
fn reported<T>(
    name: &str,
    value: &Option<Reported<T>>,
    f: impl Fn(&T) -> String,
) -> Option<String> {
    match value.as_ref()? {
        Reported::Value(value) => Some(f(value)),
        Reported::NotReported => Some(format!("{name} not reported")),
        Reported::Unknown(code) => Some(format!("{name} {code}")),
    }
}

pub fn runway_condition(condition: &RunwayCondition) -> String {
    if condition.is_closed_by_snow {
        return "Aerodrome closed due to snow".to_string();
    }

    if condition.is_cleared {
        return format!("Runway {}: contamination cleared", condition.runway);
    }

    let parts: Vec<String> = [
        reported("deposit", &condition.deposit, |d| d.description().to_string()),
        reported("extent", &condition.extent, |e| {
            format!("{} covered", e.description())
        }),
        reported("depth", &condition.depth, |d| match d {
            Depth::NonOperational => d.to_string(),
            _ => format!("depth {d}"),
        }),
        reported("friction", &condition.friction, Friction::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();

    format!("Runway {}: {}", condition.runway, parts.join(", "))
}

pub fn runway_visual_range(rvr: &RunwayVisualRange) -> String {
    let unit = if rvr.in_feet { "ft" } else { "m" };
    let bound = if rvr.is_less_than {
        "less than "
    } else if rvr.is_greater_than {
        "more than "
    } else {
        ""
    };

    let mut s = format!("Runway {}: {bound}{} {unit}", rvr.runway, rvr.range);

    if let Some(to) = rvr.variable_to {
        s.push_str(&format!(" varying to {to} {unit}"));
    }

    if let Some(tendency) = rvr.tendency {
        s.push_str(&format!(", {tendency}"));
    }

    s
}

fn day_time(time: &DayTime) -> String {
    format!("day {} {:02}:{:02}Z", time.day, time.hour, time.minute)
}

pub fn validity(validity: &Validity) -> String {
    match &validity.to {
        Some(to) => format!("from {} until {}", day_time(&validity.from), day_time(to)),
        None => format!("from {}", day_time(&validity.from)),
    }
}

/// Describes the kind and validity of a forecast period.
pub fn period(period: &TafForecastPeriod) -> String {
    let mut s = match period.probability {
        Some(probability) if period.change == ChangeType::Temporary => {
            format!("Probability {probability}%, temporarily")
        }
        Some(probability) => format!("Probability {probability}%"),
        // the validity already reads "from ..."
        None if period.change == ChangeType::From => String::new(),
        None => period.change.description().to_string(),
    };

    if let Some(v) = &period.validity {
        if !s.is_empty() {
            s.push(' ');
        }
        s.push_str(&validity(v));
    }

    capitalize(&s)
}

/// Synthesizes the description of a hazard bulletin.
pub(crate) fn sigmet(record: &SigmetRecord) -> String {
    let mut title = record.kind.code().to_string();
    if let Some(id) = &record.id {
        title.push(' ');
        title.push_str(id);
    }

    let mut parts = Vec::new();

    if let Some(phenomenon) = record.phenomenon {
        let qualifiers: Vec<&str> = record.qualifiers.iter().map(|q| q.description()).collect();

        parts.push(if qualifiers.is_empty() {
            phenomenon.description().to_string()
        } else {
            capitalize(&format!(
                "{} {}",
                qualifiers.join(" "),
                phenomenon.description().to_lowercase()
            ))
        });
    }

    if let Some(intensity) = record.intensity {
        parts.push(intensity.description().to_string());
    }

    if let Some(fir) = &record.fir {
        parts.push(format!("FIR {fir}"));
    }

    if let Some(area) = &record.area {
        parts.push(format!("area {area}"));
    }

    if let Some(altitude) = &record.altitude {
        parts.push(altitude.to_string());
    }

    if let Some(movement) = &record.movement {
        parts.push(movement.to_string());
    }

    if let Some(v) = &record.validity {
        parts.push(format!("valid {}", validity(v)));
    }

    if parts.is_empty() {
        title
    } else {
        format!("{title}: {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_compass_points() {
        assert_eq!(compass(90), "E");
        assert_eq!(compass(200), "SSW");
        assert_eq!(compass(360), "N");
        assert_eq!(compass_degrees("NE"), Some(45));
        assert_eq!(compass_degrees("WNW"), Some(293));
        assert_eq!(compass_degrees("AREA"), None);
    }

    #[test]
    fn describes_wind() {
        let wind: Wind = "27015G25KT".parse().expect("wind should parse");
        assert_eq!(super::wind(&wind), "270° (W) at 15 kt, gusting 25 kt");

        let wind: Wind = "00000KT".parse().expect("wind should parse");
        assert_eq!(super::wind(&wind), "Calm");

        let wind: Wind = "VRB03KT".parse().expect("wind should parse");
        assert_eq!(super::wind(&wind), "Variable at 3 kt");
    }

    #[test]
    fn describes_visibility() {
        assert_eq!(super::visibility(&Visibility::m(9999.0)), "10 km or more");
        assert_eq!(super::visibility(&Visibility::m(800.0)), "800 m");
        assert_eq!(super::visibility(&Visibility::cavok()), "Ceiling and visibility OK");

        let vis: Visibility = "M1/4SM".parse().expect("visibility should parse");
        assert_eq!(super::visibility(&vis), "Less than 1/4 SM (402 m)");
    }

    #[test]
    fn describes_weather() {
        let wx: WeatherCondition = "-SHRA".parse().expect("weather should parse");
        assert_eq!(weather(&wx), "Light rain showers");

        let wx: WeatherCondition = "+TSRA".parse().expect("weather should parse");
        assert_eq!(weather(&wx), "Heavy thunderstorm with rain");

        let wx: WeatherCondition = "VCFG".parse().expect("weather should parse");
        assert_eq!(weather(&wx), "Fog in the vicinity");
    }

    #[test]
    fn describes_clouds() {
        let layer: CloudLayer = "BKN012CB".parse().expect("layer should parse");
        assert_eq!(cloud_layer(&layer), "Broken at 1200 ft (cumulonimbus)");

        let layer: CloudLayer = "VV002".parse().expect("layer should parse");
        assert_eq!(cloud_layer(&layer), "Vertical visibility 200 ft");
    }

    #[test]
    fn describes_runway_condition() {
        let rc: RunwayCondition = "R24/290050".parse().expect("runway state should parse");
        assert_eq!(
            runway_condition(&rc),
            "Runway 24: Wet or water patches, 51% to 100% covered, depth less than 1 mm, \
             friction coefficient 0.50"
        );

        let rc: RunwayCondition = "R24/2/////".parse().expect("runway state should parse");
        assert_eq!(
            runway_condition(&rc),
            "Runway 24: Wet or water patches, extent not reported, depth not reported, \
             friction not reported"
        );
    }

    #[test]
    fn formats_altitudes() {
        assert_eq!(altitude(0), "surface");
        assert_eq!(altitude(25_000), "FL250");
        assert_eq!(altitude(5_000), "5000 ft");
    }
}
