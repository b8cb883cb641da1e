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

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Day of month and time of day in UTC as used by bulletins.
///
/// Bulletins don't carry month or year. Use [`resolve`] to place the time in
/// the calendar relative to a reference date.
///
/// [`resolve`]: DayTime::resolve
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayTime {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl DayTime {
    /// Creates the time and normalizes hour `24` to `00` of the following day.
    ///
    /// The rollover assumes months of 31 days, so day 31 rolls over to day 1.
    pub fn new(day: u8, hour: u8, minute: u8) -> Self {
        if hour >= 24 {
            Self {
                day: if day >= 31 { 1 } else { day + 1 },
                hour: 0,
                minute,
            }
        } else {
            Self { day, hour, minute }
        }
    }

    /// Parses `DDHH` or `DDHHMM` digits.
    pub(crate) fn from_digits(s: &str) -> Option<Self> {
        let day = digits!(s, 0..2, u8)?;
        let hour = digits!(s, 2..4, u8)?;
        let minute = match s.len() {
            4 => 0,
            6 => digits!(s, 4..6, u8)?,
            _ => return None,
        };

        let valid = (1..=31).contains(&day) && hour <= 24 && minute < 60;
        valid.then(|| Self::new(day, hour, minute))
    }

    /// Places the time in the month of `reference` or in its neighboring
    /// month, whichever is closest to the reference date.
    ///
    /// Returns `None` if the day doesn't exist in any of these months.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wxdecode::fields::DayTime;
    ///
    /// let time: DayTime = "302350Z".parse().unwrap();
    /// let reference = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
    ///
    /// // the report was issued the day before the reference date
    /// let resolved = time.resolve(reference).unwrap();
    /// assert_eq!(resolved.to_string(), "2026-10-30 23:50:00");
    /// ```
    pub fn resolve(&self, reference: NaiveDate) -> Option<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0)?;
        let first = reference.with_day(1)?;

        [
            first.checked_sub_months(Months::new(1)),
            Some(first),
            first.checked_add_months(Months::new(1)),
        ]
        .into_iter()
        .flatten()
        .filter_map(|month| month.with_day(self.day.into()))
        .min_by_key(|date| date.signed_duration_since(reference).num_days().abs())
        .map(|date| date.and_time(time))
    }
}

impl FromStr for DayTime {
    type Err = Error;

    /// Parses an observation or issuance time `DDHHMMZ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix('Z')
            .filter(|digits| digits.len() == 6)
            .and_then(Self::from_digits)
            .ok_or_else(|| invalid_group!("time", s))
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

/// Validity window of a forecast, period or bulletin.
///
/// Periods starting with `FM` have no end and are valid until the next
/// period starts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    pub from: DayTime,
    pub to: Option<DayTime>,
}

impl Validity {
    /// Creates an open-ended validity.
    pub fn starting(from: DayTime) -> Self {
        Self { from, to: None }
    }
}

impl FromStr for Validity {
    type Err = Error;

    /// Parses `DDHH/DDHH` or `DDHHMM/DDHHMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('/')
            .filter(|(from, to)| from.len() == to.len())
            .and_then(|(from, to)| {
                Some(Self {
                    from: DayTime::from_digits(from)?,
                    to: Some(DayTime::from_digits(to)?),
                })
            })
            .ok_or_else(|| invalid_group!("validity", s))
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) if self.from.minute == 0 && to.minute == 0 => write!(
                f,
                "{:02}{:02}/{:02}{:02}",
                self.from.day, self.from.hour, to.day, to.hour
            ),
            Some(to) => write!(
                f,
                "{:02}{:02}{:02}/{:02}{:02}{:02}",
                self.from.day, self.from.hour, self.from.minute, to.day, to.hour, to.minute
            ),
            None => write!(
                f,
                "FM{:02}{:02}{:02}",
                self.from.day, self.from.hour, self.from.minute
            ),
        }
    }
}
