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

use geo::Point;
use wxdecode::fields::{DayTime, Validity};
use wxdecode::parse_sigmet_bulletin;
use wxdecode::sigmet::{AltitudeBand, Coordinate};
use wxdecode::tables::{Code, Hazard, IntensityChange, SigmetType};

const UUWW: &str =
    "SIGMET A123 UUWW 1200/1400 UUWW TS INTSF AREA N5000 E03700 FL250-FL350 MOV NE 25015KT";

#[test]
fn scans_thunderstorm_bulletin() {
    let records = parse_sigmet_bulletin(UUWW);
    assert_eq!(records.len(), 1, "exactly one bulletin should be scanned");

    let record = &records[0];
    assert_eq!(record.kind, SigmetType::Sigmet);
    assert_eq!(record.id.as_deref(), Some("A123"));
    assert_eq!(record.fir.as_deref(), Some("UUWW"));
    assert_eq!(
        record.validity,
        Some(Validity {
            from: DayTime::new(12, 0, 0),
            to: Some(DayTime::new(14, 0, 0))
        })
    );

    let phenomenon = record.phenomenon.expect("phenomenon should be scanned");
    assert_eq!(phenomenon, Hazard::Thunderstorms);
    assert_eq!(phenomenon.description(), "Thunderstorms");

    let intensity = record.intensity.expect("intensity should be scanned");
    assert_eq!(intensity, IntensityChange::Intensifying);
    assert_eq!(intensity.description(), "intensifying");

    let altitude = record.altitude.expect("altitude should be scanned");
    assert_eq!(altitude.min, Some(25_000));
    assert_eq!(altitude.max, Some(35_000));
    assert_eq!(altitude.band, AltitudeBand::High);

    let movement = record.movement.as_ref().expect("movement should be scanned");
    assert_eq!(movement.direction, Some(25));
    assert_eq!(movement.speed, Some(15));
    assert_eq!(movement.compass.as_deref(), Some("NE"));

    assert_eq!(
        record.coordinates,
        vec![Coordinate {
            latitude: 50.0,
            longitude: 37.0
        }]
    );
    assert!(record.polygon().is_none(), "one coordinate is no area");

    assert!(
        record
            .description
            .starts_with("SIGMET A123: Thunderstorms, intensifying, FIR UUWW"),
        "unexpected description {:?}",
        record.description
    );
}

#[test]
fn splits_bulletins_on_type_keyword() {
    let input = format!("{UUWW} AIRMET B7 UUWW 1300/1500 MOD TURB FL080/120 STNR");
    let records = parse_sigmet_bulletin(&input);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].phenomenon, Some(Hazard::Thunderstorms));
    assert_eq!(records[1].kind, SigmetType::Airmet);
    assert_eq!(records[1].id.as_deref(), Some("B7"));
    assert_eq!(records[1].phenomenon, Some(Hazard::Turbulence));
    assert_eq!(
        records[1].altitude.map(|a| a.band),
        Some(AltitudeBand::Medium)
    );
}

#[test]
fn locates_points_in_polygon() {
    let records = parse_sigmet_bulletin(
        "UUWW SIGMET 2 VALID 121200/121600 SEV ICE FCST WI \
         N5500 E03500 - N5600 E03500 - N5600 E03800 - N5500 E03800 - N5500 E03500 \
         FL100/200 STNR",
    );
    let record = &records[0];

    assert_eq!(record.coordinates.len(), 5);
    assert!(record.polygon().is_some());
    assert!(record.contains(&Point::new(36.5, 55.5)));
    assert!(!record.contains(&Point::new(37.5, 54.0)));
}
