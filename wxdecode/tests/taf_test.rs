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

use wxdecode::fields::{DayTime, Validity, Visibility};
use wxdecode::tables::{ChangeType, PeriodKind};
use wxdecode::{format, parse_taf};

const EDDF: &str = "TAF EDDF 121100Z 1212/1318 24010KT 9999 SCT035
    BECMG 1214/1216 27015G25KT
    BECMG 1300/1302 VRB03KT 4000 BR
    BECMG 1306/1308 9999 NSW BKN020";

#[test]
fn flushes_each_change_period() {
    let taf = parse_taf(EDDF).expect("taf should decode");

    assert_eq!(taf.periods.len(), 4);
    assert_eq!(taf.periods[0].kind, PeriodKind::Main);
    assert!(taf.periods[1..]
        .iter()
        .all(|period| period.kind == PeriodKind::Becmg));
    assert!(taf.periods.iter().all(|period| period.validity.is_some()));
    assert!(taf.remarks.is_empty());
}

#[test]
fn decodes_period_conditions() {
    let taf = parse_taf(EDDF).expect("taf should decode");

    let wind = taf.periods[1].conditions.wind.expect("wind should be decoded");
    assert_eq!(wind.gust, Some(25));

    assert_eq!(
        taf.periods[2].conditions.visibility,
        Some(Visibility::m(4000.0))
    );
    assert!(taf.periods[3].conditions.no_significant_weather);
}

#[test]
fn prob_without_digits_is_thirty_percent() {
    let taf = parse_taf("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 PROB 1303/1306 0800 FG")
        .expect("taf should decode");

    let period = &taf.periods[1];
    assert_eq!(period.kind, PeriodKind::Prob);
    assert_eq!(period.probability, Some(30));
}

#[test]
fn normalizes_end_of_day() {
    let taf = parse_taf("TAF EDDH 301100Z 3012/3124 27015KT 9999 SCT030").expect("taf should decode");

    // 3124 is midnight of the next day
    assert_eq!(
        taf.validity,
        Some(Validity {
            from: DayTime::new(30, 12, 0),
            to: Some(DayTime::new(1, 0, 0))
        })
    );
}

#[test]
fn decodes_us_forecast() {
    let taf = parse_taf(
        "TAF KJFK 121130Z 1212/1318 31012KT P6SM FEW250 \
         FM121800 30015G22KT P6SM SCT050 \
         FM130200 32008KT 5SM -SHRA OVC015 TX22/1219Z TN14/1310Z",
    )
    .expect("taf should decode");

    assert_eq!(taf.periods.len(), 3);
    assert!(taf.periods[1..]
        .iter()
        .all(|period| period.change == ChangeType::From && period.kind == PeriodKind::Main));

    let last = &taf.periods[2];
    assert_eq!(last.validity.and_then(|v| v.to), None);
    assert_eq!(last.conditions.temperature_extremes.len(), 2);
    assert_eq!(format::period(last), "From day 13 02:00Z");
}

#[test]
fn decodes_forecast_hazards() {
    let taf = parse_taf("TAF EDDH 121100Z 1212/1318 27015KT 9999 BKN030 520004 640203")
        .expect("taf should decode");

    let main = taf.main_period().expect("main period should be decoded");
    assert_eq!(main.conditions.turbulence[0].thickness, 4000);
    assert_eq!(main.conditions.icing[0].base, 2000);
}

#[test]
fn opens_from_period_without_minutes() {
    let taf = parse_taf("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 FM1218 31010KT 6000 BKN015")
        .expect("taf should decode");

    let period = &taf.periods[1];
    assert_eq!(period.change, ChangeType::From);
    assert_eq!(period.validity, Some(Validity::starting(DayTime::new(12, 18, 0))));
    assert!(taf.diagnostics.is_empty(), "{:?}", taf.diagnostics);
}

#[test]
fn collects_spelled_out_remarks() {
    let taf = parse_taf("TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030 REMARKS AMD NOT SKED")
        .expect("taf should decode");

    assert_eq!(taf.periods.len(), 1);
    assert_eq!(taf.remarks, ["AMD", "NOT", "SKED"]);
    assert!(!taf.modifiers.is_amended, "remarks are no modifiers");
}
