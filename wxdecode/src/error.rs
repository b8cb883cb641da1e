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

use std::error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned when a report can't be decoded at all.
///
/// Only an empty input is fatal for the report parsers. Individual groups
/// that don't match are reported by their `FromStr` implementation as
/// [`InvalidGroup`], which the report parsers treat as "not this group".
///
/// [`InvalidGroup`]: Error::InvalidGroup
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The input is empty or contains only whitespace.
    EmptyInput,
    /// The token doesn't match the group's format.
    InvalidGroup { group: &'static str, token: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "report is empty"),
            Self::InvalidGroup { group, token } => {
                write!(f, "\"{token}\" is not a valid {group} group")
            }
        }
    }
}

impl error::Error for Error {}

/// Name used by the report entry points.
pub type DecodeError = Error;

/// A non-fatal anomaly found while decoding a report.
///
/// The decoder degrades gracefully and records what it had to skip, so the
/// caller can tell a complete result from a partial one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// No ICAO location indicator in the report header.
    StationNotFound,
    /// A token that matches no group at its position.
    UnrecognizedGroup { token: String, position: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StationNotFound => write!(f, "station not found"),
            Self::UnrecognizedGroup { token, position } => {
                write!(f, "skipped unrecognized group \"{token}\" at {position}")
            }
        }
    }
}
