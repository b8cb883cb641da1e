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

//! Batch decoding of independent reports.
//!
//! Reports don't share any state, so with the `rayon` feature enabled they
//! are decoded in parallel. The results keep the order of the input.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use log::debug;

use crate::error::Error;
use crate::metar::{parse_metar, ParsedMetar};
use crate::taf::{parse_taf, ParsedTaf};

fn decode_all<S, T, F>(reports: &[S], decode: F) -> Vec<Result<T, Error>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> Result<T, Error> + Sync + Send,
{
    debug!("decoding {} report(s)", reports.len());

    #[cfg(feature = "rayon")]
    let results = reports
        .par_iter()
        .map(|report| decode(report.as_ref()))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let results = reports
        .iter()
        .map(|report| decode(report.as_ref()))
        .collect();

    results
}

/// Decodes each of the METARs in `reports`.
pub fn parse_metars<S>(reports: &[S]) -> Vec<Result<ParsedMetar, Error>>
where
    S: AsRef<str> + Sync,
{
    decode_all(reports, parse_metar)
}

/// Decodes each of the TAFs in `reports`.
pub fn parse_tafs<S>(reports: &[S]) -> Vec<Result<ParsedTaf, Error>>
where
    S: AsRef<str> + Sync,
{
    decode_all(reports, parse_taf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_order() {
        let reports = [
            "EDDH 121150Z 27015KT 9999 FEW030 15/10 Q1013",
            "",
            "KJFK 121151Z 31008KT 10SM SCT250 22/12 A3001",
        ];

        let results = parse_metars(&reports);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(|m| m.station.as_str()), Ok("EDDH"));
        assert_eq!(results[1], Err(Error::EmptyInput));
        assert_eq!(results[2].as_ref().map(|m| m.station.as_str()), Ok("KJFK"));
    }

    #[test]
    fn decodes_forecasts() {
        let reports = vec!["TAF EDDH 121100Z 1212/1318 27015KT 9999 SCT030".to_string()];
        let results = parse_tafs(&reports);

        assert!(results[0].as_ref().is_ok_and(|taf| taf.periods.len() == 1));
    }
}
