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

/// Parses the digits of `$s` in `$range` as number.
///
/// Evaluates to `None` if the range is out of bounds or if any byte in the
/// range isn't an ASCII digit.
macro_rules! digits {
    ($s:expr, $range:expr) => {
        digits!($s, $range, u16)
    };

    ($s:expr, $range:expr, $t:ty) => {
        $s.get($range)
            .filter(|d: &&str| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|d| d.parse::<$t>().ok())
    };
}

/// Returns an [`InvalidGroup`] error for the group and token.
///
/// [`InvalidGroup`]: crate::Error::InvalidGroup
macro_rules! invalid_group {
    ($group:expr, $token:expr) => {
        $crate::Error::InvalidGroup {
            group: $group,
            token: $token.to_string(),
        }
    };
}
