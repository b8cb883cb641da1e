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

//! SIGMET, AIRMET and GAMET hazard bulletins.
//!
//! Hazard bulletins are not positional like observations and forecasts. A
//! bulletin starts at its type keyword and the tokens following it are
//! scanned for the groups they could be, in any order. The first group a
//! token matches wins, so a token that could be read two ways is always read
//! the same way.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Contains, LineString, Point, Polygon};
use log::{debug, trace};

use crate::error::Error;
use crate::fields::{is_alpha, is_digits, is_location_indicator, DayTime, SpeedUnit, Validity};
use crate::format;
use crate::tables::{Code, Hazard, HazardQualifier, IntensityChange, SigmetType};
use crate::token::{normalize, Cursor};

/// Words of a bulletin that never name its area.
const KEYWORDS: &[&str] = &[
    "ABV", "AND", "AREA", "AT", "BLW", "BTN", "CNL", "CTA", "ENTIRE", "FCST", "FIR", "FL", "IN",
    "LINE", "MOV", "OBS", "OF", "SFC", "STNR", "TO", "TOP", "UIR", "VALID", "WI",
];

/// Latitude and longitude of a bulletin's area.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

/// Parses degrees with optional minutes, e.g. `5030` for 50.5°.
fn degrees(s: &str, len: usize) -> Option<f64> {
    if !is_digits(s) {
        return None;
    }

    if s.len() == len {
        digits!(s, .., u16).map(f64::from)
    } else if s.len() == len + 2 {
        let deg = digits!(s, ..len, u16)?;
        let min = digits!(s, len.., u16).filter(|min| *min < 60)?;
        Some(deg as f64 + min as f64 / 60.0)
    } else {
        None
    }
}

impl Coordinate {
    /// Parses a latitude `N50` or `S5030`.
    fn latitude(s: &str) -> Option<f64> {
        let (hemisphere, value) = s.split_at_checked(1)?;
        let value = degrees(value, 2).filter(|v| *v <= 90.0)?;

        match hemisphere {
            "N" => Some(value),
            "S" => Some(-value),
            _ => None,
        }
    }

    /// Parses a longitude `E037` or `W03730`.
    fn longitude(s: &str) -> Option<f64> {
        let (hemisphere, value) = s.split_at_checked(1)?;
        let value = degrees(value, 3).filter(|v| *v <= 180.0)?;

        match hemisphere {
            "E" => Some(value),
            "W" => Some(-value),
            _ => None,
        }
    }

    /// Takes a coordinate given as one token `N5000E03700` or as the pair
    /// `N5000 E03700`.
    fn take(cursor: Cursor<'_>) -> Option<(Self, Cursor<'_>)> {
        if let Some((coordinate, next)) = cursor.take::<Self>() {
            return Some((coordinate, next));
        }

        let latitude = cursor.peek().and_then(Self::latitude)?;
        let longitude = cursor.peek_nth(1).and_then(Self::longitude)?;

        Some((
            Self {
                latitude,
                longitude,
            },
            cursor.skip(2),
        ))
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| matches!(c, 'E' | 'W'))
            .map(|(i, _)| i);

        split
            .and_then(|i| {
                let (latitude, longitude) = s.split_at(i);
                Some(Self {
                    latitude: Self::latitude(latitude)?,
                    longitude: Self::longitude(longitude)?,
                })
            })
            .ok_or_else(|| invalid_group!("coordinate", s))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rounded to whole minutes before splitting off the degrees
        let lat = (self.latitude.abs() * 60.0).round() as u32;
        let lon = (self.longitude.abs() * 60.0).round() as u32;

        write!(
            f,
            "{}{:02}{:02}{}{:03}{:02}",
            if self.latitude < 0.0 { 'S' } else { 'N' },
            lat / 60,
            lat % 60,
            if self.longitude < 0.0 { 'W' } else { 'E' },
            lon / 60,
            lon % 60,
        )
    }
}

/// Band of the altitude range of a hazard.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeBand {
    /// Below FL100.
    Low,
    /// From FL100 to FL245.
    Medium,
    /// FL250 and above.
    High,
}

impl AltitudeBand {
    pub fn from_feet(feet: u32) -> Self {
        match feet {
            0..10_000 => Self::Low,
            10_000..25_000 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl fmt::Display for AltitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low level"),
            Self::Medium => write!(f, "medium level"),
            Self::High => write!(f, "high level"),
        }
    }
}

/// Vertical extent of a hazard in feet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AltitudeRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub band: AltitudeBand,
}

impl AltitudeRange {
    /// Returns the range between `min` and `max` or `None` if both are open.
    pub fn new(min: Option<u32>, max: Option<u32>) -> Option<Self> {
        let band = AltitudeBand::from_feet(max.or(min)?);
        Some(Self { min, max, band })
    }
}

/// Parses a level `FL250`, an altitude `10000FT` or the surface `SFC`.
fn level(s: &str) -> Option<u32> {
    if s == "SFC" {
        return Some(0);
    }

    if let Some(fl) = s.strip_prefix("FL") {
        return matches!(fl.len(), 2 | 3)
            .then(|| digits!(fl, .., u32))
            .flatten()
            .map(|fl| fl * 100);
    }

    s.strip_suffix("FT")
        .filter(|ft| matches!(ft.len(), 3..=5))
        .and_then(|ft| digits!(ft, .., u32))
}

impl FromStr for AltitudeRange {
    type Err = Error;

    /// Parses `FL250-FL350`, `SFC/FL100`, `FL250/350`, `05000FT-10000FT` or
    /// a single level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || invalid_group!("altitude range", s);

        let (min, max) = match s.split_once(['-', '/']) {
            Some((lower, upper)) => {
                let min = level(lower).ok_or_else(err)?;
                let max = level(upper)
                    .or_else(|| {
                        // the upper level of FL250/350 is a flight level too
                        (lower.starts_with("FL") && upper.len() == 3)
                            .then(|| digits!(upper, .., u32))
                            .flatten()
                            .map(|fl| fl * 100)
                    })
                    .ok_or_else(err)?;
                (min, max)
            }
            None => {
                let level = level(s).ok_or_else(err)?;
                (level, level)
            }
        };

        Self::new(Some(min), Some(max)).ok_or_else(err)
    }
}

impl fmt::Display for AltitudeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "at {}", format::altitude(min)),
            (Some(min), Some(max)) => write!(
                f,
                "{} to {}",
                format::altitude(min),
                format::altitude(max)
            ),
            (Some(min), None) => write!(f, "above {}", format::altitude(min)),
            (None, Some(max)) => write!(f, "up to {}", format::altitude(max)),
            (None, None) => Ok(()),
        }
    }
}

/// Movement of a hazard.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movement {
    /// Direction in tens of degrees as given by `25015KT`.
    pub direction: Option<u16>,
    /// Compass point given by `MOV NE`.
    pub compass: Option<String>,
    pub speed: Option<u16>,
    pub unit: SpeedUnit,
    pub is_stationary: bool,
}

impl Movement {
    /// Returns the direction of the movement in degrees.
    pub fn direction_degrees(&self) -> Option<u16> {
        self.direction
            .map(|tens| tens * 10)
            .or_else(|| self.compass.as_deref().and_then(format::compass_degrees))
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stationary {
            return write!(f, "stationary");
        }

        write!(f, "moving")?;

        match (&self.compass, self.direction_degrees()) {
            (Some(compass), _) => write!(f, " {compass}")?,
            (None, Some(degrees)) => write!(f, " {}", format::compass(degrees))?,
            (None, None) => (),
        }

        if let Some(speed) = self.speed {
            write!(f, " at {speed} {}", self.unit)?;
        }

        Ok(())
    }
}

/// Parses a speed `15KT` or `020KMH`.
fn speed(s: &str) -> Option<(u16, SpeedUnit)> {
    SpeedUnit::ALL.iter().find_map(|unit| {
        s.strip_suffix(unit.code())
            .filter(|v| matches!(v.len(), 1..=3))
            .and_then(|v| digits!(v, ..))
            .map(|v| (v, *unit))
    })
}

/// A decoded hazard bulletin.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SigmetRecord {
    pub kind: SigmetType,
    pub id: Option<String>,
    pub issue_time: Option<DayTime>,
    pub validity: Option<Validity>,
    /// Location indicator of the flight information region.
    pub fir: Option<String>,
    pub phenomenon: Option<Hazard>,
    pub qualifiers: Vec<HazardQualifier>,
    pub intensity: Option<IntensityChange>,
    pub movement: Option<Movement>,
    pub altitude: Option<AltitudeRange>,
    pub coordinates: Vec<Coordinate>,
    pub area: Option<String>,
    pub description: String,
    /// The bulletin as it appears in the input.
    pub raw: String,
}

impl SigmetRecord {
    fn new(kind: SigmetType, raw: String) -> Self {
        Self {
            kind,
            id: None,
            issue_time: None,
            validity: None,
            fir: None,
            phenomenon: None,
            qualifiers: Vec::new(),
            intensity: None,
            movement: None,
            altitude: None,
            coordinates: Vec::new(),
            area: None,
            description: String::new(),
            raw,
        }
    }

    /// Returns the area enclosed by the coordinates of the bulletin.
    ///
    /// The area needs at least three coordinates.
    pub fn polygon(&self) -> Option<Polygon<f64>> {
        if self.coordinates.len() < 3 {
            return None;
        }

        let exterior: Vec<geo::Coord<f64>> =
            self.coordinates.iter().copied().map(Into::into).collect();

        Some(Polygon::new(LineString::from(exterior), vec![]))
    }

    /// Returns `true` if the point lies within the bulletin's area.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.polygon().is_some_and(|polygon| polygon.contains(point))
    }

    fn is_fir(&self, token: &str) -> bool {
        self.fir.as_deref() == Some(token)
    }

    /// Scans the token at the cursor and returns the cursor following it.
    fn scan<'a>(&mut self, cursor: Cursor<'a>, is_first: bool) -> Cursor<'a> {
        let Some(token) = cursor.peek() else {
            return cursor;
        };

        if let Some((coordinate, next)) = Coordinate::take(cursor) {
            trace!("coordinate {coordinate}");
            self.coordinates.push(coordinate);
            return next;
        }

        if self.id.is_none() && is_id(token, is_first) {
            self.id = Some(token.to_string());
            return cursor.advance();
        }

        let time = token.strip_suffix('Z').unwrap_or(token);
        if self.issue_time.is_none() && time.len() == 6 {
            if let Some(time) = DayTime::from_digits(time) {
                self.issue_time = Some(time);
                return cursor.advance();
            }
        }

        if let Some((validity, next)) = cursor.take::<Validity>() {
            self.validity.get_or_insert(validity);
            return next;
        }

        let fir = token.trim_end_matches('-');
        if is_location_indicator(fir) && !is_reserved(fir) {
            if self.fir.is_none() {
                self.fir = Some(fir.to_string());
                return cursor.advance();
            }

            if self.is_fir(fir) {
                return cursor.advance();
            }
        }

        if let Some(intensity) = IntensityChange::from_code(token) {
            self.intensity.get_or_insert(intensity);
            return cursor.advance();
        }

        if let Some(qualifier) = HazardQualifier::from_code(token) {
            self.qualifiers.push(qualifier);
            return cursor.advance();
        }

        if let Some(hazard) = Hazard::from_code(token) {
            self.phenomenon.get_or_insert(hazard);
            return cursor.advance();
        }

        if let Some(next) = self.altitude_group(cursor) {
            return next;
        }

        if let Some(next) = self.movement_group(cursor) {
            return next;
        }

        if self.area.is_none() && is_alpha(token) && !is_reserved(token) && !self.is_fir(token) {
            self.area = Some(token.to_string());
            return cursor.advance();
        }

        trace!("ignoring {token:?} at {}", cursor.position());
        cursor.advance()
    }

    /// `FL250-FL350`, `TOP FL350`, `ABV FL250` or `BLW FL100`
    fn altitude_group<'a>(&mut self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let token = cursor.peek()?;

        let (range, next) = match token {
            "TOP" | "BLW" => {
                let max = cursor.peek_nth(1).and_then(level)?;
                (AltitudeRange::new(None, Some(max))?, cursor.skip(2))
            }
            "ABV" => {
                let min = cursor.peek_nth(1).and_then(level)?;
                (AltitudeRange::new(Some(min), None)?, cursor.skip(2))
            }
            _ => cursor.take::<AltitudeRange>()?,
        };

        self.altitude.get_or_insert(range);
        Some(next)
    }

    /// `MOV NE 15KT`, `STNR` or `25015KT`
    fn movement_group<'a>(&mut self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let token = cursor.peek()?;

        if token == "STNR" {
            self.movement.get_or_insert_with(Default::default).is_stationary = true;
            return Some(cursor.advance());
        }

        if let Some(mov) = cursor.keyword("MOV") {
            let movement = self.movement.get_or_insert_with(Default::default);
            let mut next = mov;

            if let Some(compass) = mov.peek().filter(|c| format::compass_degrees(c).is_some()) {
                movement.compass = Some(compass.to_string());
                next = next.advance();
            }

            if let Some((speed, unit)) = next.peek().and_then(speed) {
                movement.speed = Some(speed);
                movement.unit = unit;
                next = next.advance();
            }

            return Some(next);
        }

        // ddsssKT
        let body = token.strip_suffix("KT").filter(|b| b.len() == 5)?;
        let direction = digits!(body, ..2)?;
        let speed = digits!(body, 2..)?;

        let movement = self.movement.get_or_insert_with(Default::default);
        movement.direction = Some(direction);
        movement.speed = Some(speed);
        movement.unit = SpeedUnit::Knots;

        Some(cursor.advance())
    }
}

impl fmt::Display for SigmetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Returns `true` if the token is a keyword or table code.
fn is_reserved(token: &str) -> bool {
    KEYWORDS.contains(&token)
        || SigmetType::from_code(token).is_some()
        || Hazard::from_code(token).is_some()
        || HazardQualifier::from_code(token).is_some()
        || IntensityChange::from_code(token).is_some()
        || format::compass_degrees(token).is_some()
}

/// `A123` or a plain number following the type keyword.
fn is_id(token: &str, is_first: bool) -> bool {
    match token.split_at_checked(1) {
        Some((letter, number)) if is_alpha(letter) && is_digits(number) => true,
        _ => is_first && token.len() <= 3 && is_digits(token),
    }
}

/// Splits the tokens into bulletins.
///
/// A bulletin starts at its type keyword or at the location indicator right
/// before it.
fn split<'a>(tokens: &'a [&'a str]) -> Vec<(SigmetType, usize, &'a [&'a str])> {
    let mut starts: Vec<(SigmetType, usize, usize)> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(kind) = SigmetType::from_code(token) else {
            continue;
        };

        let previous = starts.last().map(|(_, _, keyword)| *keyword);
        let start = match i.checked_sub(1) {
            Some(before)
                if is_location_indicator(tokens[before])
                    && !is_reserved(tokens[before])
                    && previous.is_none_or(|keyword| before > keyword) =>
            {
                before
            }
            _ => i,
        };

        starts.push((kind, start, i));
    }

    starts
        .iter()
        .enumerate()
        .map(|(n, (kind, start, keyword))| {
            let end = starts.get(n + 1).map_or(tokens.len(), |(_, next, _)| *next);
            (*kind, keyword - start, &tokens[*start..end])
        })
        .collect()
}

fn scan(kind: SigmetType, keyword: usize, tokens: &[&str]) -> SigmetRecord {
    let mut record = SigmetRecord::new(kind, tokens.join(" "));

    // a location indicator before the keyword names the region
    if keyword > 0 {
        record.fir = tokens.first().map(|fir| fir.to_string());
    }

    let first = keyword + 1;
    let mut cursor = Cursor::new(tokens).at(first);

    while !cursor.is_end() {
        cursor = record.scan(cursor, cursor.position() == first);
    }

    record.description = format::sigmet(&record);
    debug!("{} {:?} scanned: {}", kind.code(), record.id, record.description);
    record
}

/// Scans the hazard bulletins in `raw`.
///
/// The input may contain several bulletins, each starting with its type
/// keyword. Input without any bulletin yields no records.
///
/// # Examples
///
/// ```
/// use wxdecode::parse_sigmet_bulletin;
/// use wxdecode::tables::Hazard;
///
/// let records = parse_sigmet_bulletin(
///     "SIGMET A123 UUWW 1200/1400 UUWW TS INTSF AREA N5000 E03700 FL250-FL350 MOV NE 25015KT",
/// );
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].phenomenon, Some(Hazard::Thunderstorms));
/// ```
pub fn parse_sigmet_bulletin(raw: &str) -> Vec<SigmetRecord> {
    let raw = normalize(raw);
    let tokens: Vec<&str> = raw.split(' ').filter(|t| !t.is_empty()).collect();

    let records: Vec<SigmetRecord> = split(&tokens)
        .into_iter()
        .map(|(kind, keyword, tokens)| scan(kind, keyword, tokens))
        .collect();

    debug!("{} hazard bulletin(s) scanned", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        let c: Coordinate = "N5030E03700".parse().expect("coordinate should parse");
        assert_eq!(c.latitude, 50.5);
        assert_eq!(c.longitude, 37.0);
        assert_eq!(c.to_string(), "N5030E03700");

        let c = Coordinate {
            latitude: 50.9999,
            longitude: -36.99999,
        };
        assert_eq!(c.to_string(), "N5100W03700");

        let c: Coordinate = "S12W045".parse().expect("coordinate should parse");
        assert_eq!(c.latitude, -12.0);
        assert_eq!(c.longitude, -45.0);

        assert!("N5000".parse::<Coordinate>().is_err());
        assert!("E03700".parse::<Coordinate>().is_err());
    }

    #[test]
    fn parses_altitude_ranges() {
        let range: AltitudeRange = "FL250-FL350".parse().expect("range should parse");
        assert_eq!(range.min, Some(25_000));
        assert_eq!(range.max, Some(35_000));
        assert_eq!(range.band, AltitudeBand::High);

        let range: AltitudeRange = "SFC/FL100".parse().expect("range should parse");
        assert_eq!(range.min, Some(0));
        assert_eq!(range.band, AltitudeBand::Medium);

        let range: AltitudeRange = "FL050/080".parse().expect("range should parse");
        assert_eq!(range.max, Some(8_000));
        assert_eq!(range.band, AltitudeBand::Low);

        let range: AltitudeRange = "05000FT-10000FT".parse().expect("range should parse");
        assert_eq!(range.min, Some(5_000));

        assert!("1200/1400".parse::<AltitudeRange>().is_err());
    }

    #[test]
    fn splits_concatenated_bulletins() {
        let records = parse_sigmet_bulletin(
            "UUWW SIGMET 1 VALID 121200/121600 SEV TURB FL300/380 MOV E 20KT \
             UUWW AIRMET B2 VALID 121300/121700 MOD ICE FL080/120 STNR",
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, SigmetType::Sigmet);
        assert_eq!(records[0].fir.as_deref(), Some("UUWW"));
        assert_eq!(records[0].id.as_deref(), Some("1"));
        assert_eq!(records[0].qualifiers, vec![HazardQualifier::Severe]);
        assert_eq!(records[0].phenomenon, Some(Hazard::Turbulence));

        let movement = records[0].movement.as_ref().expect("movement should be set");
        assert_eq!(movement.compass.as_deref(), Some("E"));
        assert_eq!(movement.speed, Some(20));
        assert_eq!(movement.direction_degrees(), Some(90));

        assert_eq!(records[1].kind, SigmetType::Airmet);
        assert_eq!(records[1].fir.as_deref(), Some("UUWW"));
        assert_eq!(records[1].phenomenon, Some(Hazard::Icing));
        assert!(records[1].movement.as_ref().is_some_and(|m| m.is_stationary));
        assert_eq!(
            records[1].validity,
            Some(Validity {
                from: DayTime::new(12, 13, 0),
                to: Some(DayTime::new(12, 17, 0))
            })
        );
    }

    #[test]
    fn keeps_keyword_before_next_bulletin() {
        let records = parse_sigmet_bulletin(
            "UUWW SIGMET 1 VALID 121200/121600 SEV TURB FL300/380 STNR \
             AIRMET B2 UUWW VALID 121300/121700 MOD ICE FL080/120",
        );

        assert_eq!(records.len(), 2);
        assert!(records[0].movement.as_ref().is_some_and(|m| m.is_stationary));
        assert_eq!(records[1].fir.as_deref(), Some("UUWW"));
        assert_eq!(records[1].area, None);
    }

    #[test]
    fn contains_points_of_area() {
        let records = parse_sigmet_bulletin(
            "SIGMET A1 UUWW 1200/1400 EMBD TS WI N5000E03700 - N5100E03700 - N5100E03900 - N5000E03900",
        );
        let record = &records[0];

        assert_eq!(record.coordinates.len(), 4);
        assert!(record.contains(&Point::new(38.0, 50.5)));
        assert!(!record.contains(&Point::new(40.0, 50.5)));
    }

    #[test]
    fn ignores_text_without_bulletin() {
        assert!(parse_sigmet_bulletin("NOTHING TO SEE HERE").is_empty());
        assert!(parse_sigmet_bulletin("").is_empty());
    }
}
