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

use wxdecode::fields::{DistanceUnit, Pressure, PressureUnit, SpeedUnit, Temperature, Visibility};
use wxdecode::metar::RemarkDetail;
use wxdecode::tables::{FlightCategory, RemarkCategory};
use wxdecode::{format, parse_metar, Diagnostic, Error};

const KJFK: &str = "METAR KJFK 121151Z 31008KT 1 1/2SM R04R/2200V3000FT -RA BR \
                    BKN008 OVC015 12/11 A2992 RMK AO2 RAB1120 SLP132 T01170106";

#[test]
fn decodes_synthesized_reports() {
    let winds = [
        ("00000KT", None, 0, SpeedUnit::Knots),
        ("VRB03KT", None, 3, SpeedUnit::Knots),
        ("27015G25KT", Some(270), 15, SpeedUnit::Knots),
        ("09005MPS", Some(90), 5, SpeedUnit::MetersPerSecond),
    ];
    let visibilities = [
        ("9999", 9999.0, DistanceUnit::Meters),
        ("0800", 800.0, DistanceUnit::Meters),
        ("10SM", 10.0, DistanceUnit::StatuteMiles),
        ("1/2SM", 0.5, DistanceUnit::StatuteMiles),
    ];
    let temperatures = [("15/10", 15, 10), ("M05/M07", -5, -7), ("00/M01", 0, -1)];
    let pressures = [
        ("Q1013", 1013.0, PressureUnit::Hectopascal),
        ("A2992", 29.92, PressureUnit::InchesOfMercury),
    ];

    for (wind, direction, speed, unit) in winds {
        for (vis, value, distance_unit) in visibilities {
            for (temp, t, dp) in temperatures {
                for (qnh, pressure, pressure_unit) in pressures {
                    let raw = format!("EDDH 121150Z {wind} {vis} FEW030 {temp} {qnh}");
                    let metar = parse_metar(&raw).expect("metar should decode");

                    let w = metar.wind.expect("wind should be decoded");
                    if !w.is_calm {
                        assert_eq!(w.direction, direction, "{raw}");
                    }
                    assert_eq!(w.speed, speed, "{raw}");
                    assert_eq!(w.unit, unit, "{raw}");

                    assert_eq!(metar.visibility.value, value, "{raw}");
                    assert_eq!(metar.visibility.unit, distance_unit, "{raw}");

                    assert_eq!(
                        metar.temperature,
                        Some(Temperature {
                            value: t,
                            dewpoint: Some(dp)
                        }),
                        "{raw}"
                    );

                    let p = metar.pressure.expect("pressure should be decoded");
                    assert_eq!(p.value, pressure, "{raw}");
                    assert_eq!(p.unit, pressure_unit, "{raw}");
                    assert_eq!(p.is_in_hg, pressure_unit == PressureUnit::InchesOfMercury);

                    assert!(metar.diagnostics.is_empty(), "{raw}: {:?}", metar.diagnostics);
                }
            }
        }
    }
}

#[test]
fn calm_wind_has_zero_direction_and_speed() {
    let metar = parse_metar("EDDH 121150Z 00000KT 9999 FEW030 15/10 Q1013").expect("should decode");
    let wind = metar.wind.expect("wind should be decoded");

    assert!(wind.is_calm);
    assert_eq!(wind.direction, Some(0));
    assert_eq!(wind.speed, 0);
}

#[test]
fn variable_wind_has_no_direction() {
    let metar = parse_metar("EDDH 121150Z VRB02KT 9999 FEW030 15/10 Q1013").expect("should decode");
    let wind = metar.wind.expect("wind should be decoded");

    assert!(!wind.is_calm);
    assert_eq!(wind.direction, None);
}

#[test]
fn cavok_is_ten_kilometers() {
    let metar = parse_metar("EDDH 121150Z 27015KT CAVOK 15/10 Q1013").expect("should decode");

    assert!(metar.visibility.is_cavok);
    assert_eq!(metar.visibility.value, 10000.0);
}

#[test]
fn skips_unknown_weather_group() {
    let metar = parse_metar("EDDH 121150Z 27015KT 9999 XYZZY -RA FEW030 15/10 Q1013")
        .expect("should decode despite unknown group");

    assert_eq!(metar.weather.len(), 1);
    assert_eq!(metar.clouds.len(), 1);
    assert_eq!(
        metar.diagnostics,
        vec![Diagnostic::UnrecognizedGroup {
            token: "XYZZY".to_string(),
            position: 4
        }]
    );
}

#[test]
fn missing_report_has_only_modifiers() {
    let metar = parse_metar("METAR EDDH 121150Z NIL").expect("missing report is no error");

    assert!(metar.modifiers.is_missing);
    assert_eq!(metar.station, "EDDH");
    assert_eq!(metar.wind, None);
    assert_eq!(metar.visibility, Visibility::default());
    assert!(metar.weather.is_empty());
    assert!(metar.clouds.is_empty());
    assert_eq!(metar.temperature, None);
    assert_eq!(metar.pressure, None);
    assert!(metar.remarks.is_empty());
}

#[test]
fn slashed_report_is_missing() {
    let metar = parse_metar("METAR EDDH 121150Z /////").expect("missing report is no error");

    assert!(metar.modifiers.is_missing);
    assert_eq!(metar.station, "EDDH");
    assert_eq!(metar.wind, None);
    assert!(metar.diagnostics.is_empty(), "{:?}", metar.diagnostics);
}

#[test]
fn empty_input_fails() {
    assert_eq!(parse_metar("   \n  "), Err(Error::EmptyInput));
}

#[test]
fn decodes_us_observation() {
    let metar = parse_metar(KJFK).expect("should decode");

    assert_eq!(metar.visibility, Visibility::sm(1.5));
    assert_eq!(metar.visibility.meters, Some(2414.0));

    let rvr = &metar.runway_visual_ranges[0];
    assert_eq!(rvr.runway, "04R");
    assert_eq!(rvr.variable_to, Some(3000));
    assert!(rvr.in_feet);

    assert_eq!(metar.weather.len(), 2);
    assert_eq!(metar.ceiling().map(|c| c.altitude), Some(800));
    assert_eq!(metar.flight_category(), FlightCategory::Ifr);
    assert_eq!(metar.pressure, Some(Pressure::in_hg(29.92)));

    let categories: Vec<RemarkCategory> = metar.remarks.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        [
            RemarkCategory::System,
            RemarkCategory::Other,
            RemarkCategory::Pressure,
            RemarkCategory::Temperature
        ]
    );
    assert_eq!(
        metar.remarks[3].detail,
        Some(RemarkDetail::PreciseTemperature {
            temperature: 11.7,
            dewpoint: Some(10.6)
        })
    );
    assert!(metar.diagnostics.is_empty(), "{:?}", metar.diagnostics);
}

#[test]
fn describes_decoded_groups() {
    let metar = parse_metar(KJFK).expect("should decode");

    let wind = metar.wind.as_ref().expect("wind should be decoded");
    assert_eq!(format::wind(wind), "310° (NW) at 8 kt");
    assert_eq!(format::visibility(&metar.visibility), "1 1/2 SM (2414 m)");
    assert_eq!(format::weather(&metar.weather[0]), "Light rain");
    assert_eq!(format::cloud_layer(&metar.clouds[0]), "Broken at 800 ft");
}
