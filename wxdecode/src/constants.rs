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

pub const FEET_IN_METER: f32 = 0.3048;
pub const HPA_IN_INHG: f32 = 33.8639;
pub const HPA_IN_MMHG: f32 = 1.333224;
pub const KILOMETERS_PER_HOUR_IN_KNOTS: f32 = 0.539957;
pub const METER_PER_SECONDS_IN_KNOTS: f32 = 1.943844;
pub const STATUTE_MILE_IN_METER: f32 = 1609.344;
/// Visibility assumed when a report states none.
pub const DEFAULT_VISIBILITY_M: f32 = 9999.0;
/// Visibility implied by CAVOK.
pub const CAVOK_VISIBILITY_M: f32 = 10000.0;
