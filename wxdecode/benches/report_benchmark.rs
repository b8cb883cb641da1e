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

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use wxdecode::{parse_metar, parse_metars, parse_sigmet_bulletin, parse_taf};

const METAR: &str = "METAR KJFK 121151Z 31008KT 1 1/2SM R04R/2200V3000FT -RA BR BKN008 OVC015 \
                     12/11 A2992 RMK AO2 RAB1120 SLP132 T01170106";

const TAF: &str = "TAF EDDF 121100Z 1212/1318 24010KT 9999 SCT035 \
                   BECMG 1214/1216 27015G25KT \
                   PROB30 TEMPO 1218/1222 4000 TSRA BKN015CB \
                   BECMG 1300/1302 VRB03KT 4000 BR";

const SIGMET: &str =
    "SIGMET A123 UUWW 1200/1400 UUWW TS INTSF AREA N5000 E03700 FL250-FL350 MOV NE 25015KT";

fn decode_single(c: &mut Criterion) {
    c.bench_function("metar", |b| b.iter(|| parse_metar(black_box(METAR))));
    c.bench_function("taf", |b| b.iter(|| parse_taf(black_box(TAF))));
    c.bench_function("sigmet", |b| {
        b.iter(|| parse_sigmet_bulletin(black_box(SIGMET)))
    });
}

fn decode_batch(c: &mut Criterion) {
    let reports = vec![METAR; 1000];

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(reports.len() as u64));
    group.bench_function("metars", |b| b.iter(|| parse_metars(black_box(&reports))));
    group.finish();
}

criterion_group!(benches, decode_single, decode_batch);
criterion_main!(benches);
