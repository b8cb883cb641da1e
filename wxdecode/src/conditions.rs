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

//! Field grammar of forecast periods and trends.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;

use crate::fields::{
    CloudGroup, CloudLayer, Icing, TemperatureExtreme, Turbulence, VariableRange, Visibility,
    WeatherCondition, Wind,
};
use crate::tables::ClearSky;
use crate::token::Cursor;

/// Forecast conditions of a TAF period or a METAR trend.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conditions {
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub weather: Vec<WeatherCondition>,
    /// The period ends the significant weather (`NSW`).
    pub no_significant_weather: bool,
    pub clouds: Vec<CloudLayer>,
    pub sky_clear: Option<ClearSky>,
    pub turbulence: Vec<Turbulence>,
    pub icing: Vec<Icing>,
    pub temperature_extremes: Vec<TemperatureExtreme>,
}

impl Conditions {
    /// Returns `true` if neither wind, visibility, weather nor clouds are
    /// forecast.
    pub fn is_empty(&self) -> bool {
        self.wind.is_none()
            && self.visibility.is_none()
            && self.weather.is_empty()
            && !self.no_significant_weather
            && self.clouds.is_empty()
            && self.sky_clear.is_none()
    }

    /// Parses the group at the cursor into the conditions.
    ///
    /// Returns the cursor following the group or `None` if the token is no
    /// group of a forecast period.
    pub(crate) fn parse_group<'a>(&mut self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let token = cursor.peek()?;
        trace!("forecast group {token:?}");

        if let Some((wind, next)) = cursor.take::<Wind>() {
            let (variable, next) = match next.take::<VariableRange>() {
                Some((range, next)) => (Some(range), next),
                None => (None, next),
            };

            self.wind = Some(Wind { variable, ..wind });
            return Some(next);
        }

        if let Some((visibility, next)) = visibility(cursor) {
            self.visibility = Some(visibility);
            return Some(next);
        }

        if token == "NSW" {
            self.no_significant_weather = true;
            return Some(cursor.advance());
        }

        if let Some((weather, next)) = cursor.take::<WeatherCondition>() {
            self.weather.push(weather);
            return Some(next);
        }

        if let Some((group, next)) = cursor.take::<CloudGroup>() {
            match group {
                CloudGroup::Layer(layer) => self.clouds.push(layer),
                CloudGroup::Clear(clear) => {
                    self.clouds.clear();
                    self.sky_clear = Some(clear);
                }
            }
            return Some(next);
        }

        if let Some((turbulence, next)) = cursor.take::<Turbulence>() {
            self.turbulence.push(turbulence);
            return Some(next);
        }

        if let Some((icing, next)) = cursor.take::<Icing>() {
            self.icing.push(icing);
            return Some(next);
        }

        if let Some((extreme, next)) = cursor.take::<TemperatureExtreme>() {
            self.temperature_extremes.push(extreme);
            return Some(next);
        }

        None
    }
}

/// Takes the visibility at the cursor.
///
/// Whole statute miles followed by a fraction, e.g. `1 1/2SM`, are taken
/// together.
pub(crate) fn visibility<'a>(cursor: Cursor<'a>) -> Option<(Visibility, Cursor<'a>)> {
    let whole = cursor
        .peek()
        .filter(|t| t.len() <= 2)
        .and_then(|t| digits!(t, .., u8));

    if let Some(whole) = whole {
        let fraction = cursor
            .advance()
            .take::<Visibility>()
            .filter(|(v, _)| v.is_fraction() && !v.is_less_than && !v.is_greater_than);

        if let Some((fraction, next)) = fraction {
            return Some((fraction.with_whole_miles(whole), next));
        }
    }

    cursor.take::<Visibility>()
}
