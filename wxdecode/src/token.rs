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

//! Lexical normalization of raw bulletins.
//!
//! Raw bulletins arrive as they are transmitted: wrapped over several lines,
//! padded with runs of spaces and sometimes with several reports
//! concatenated. The lexer collapses all whitespace and splits the text into
//! an ordered sequence of [`Tokens`] without dropping or reordering any of
//! them.
//!
//! The parsers walk the tokens with a [`Cursor`]. A cursor is a plain value
//! of the token slice and a position; advancing it returns a new cursor, so
//! each group parser takes a cursor and hands back the one following the
//! groups it consumed.

use std::str::FromStr;

use log::trace;

use crate::error::Error;

/// Collapses all whitespace runs, including line breaks, to single spaces.
///
/// # Examples
///
/// ```
/// use wxdecode::normalize;
///
/// let raw = "EDDH 121150Z\n   27015KT  9999\r\nFEW030";
/// assert_eq!(normalize(raw), "EDDH 121150Z 27015KT 9999 FEW030");
/// ```
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered, non-empty tokens of a bulletin.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Tokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    /// Splits the bulletin `s` into its tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `s` contains only whitespace.
    pub fn try_new(s: &'a str) -> Result<Self, Error> {
        let tokens: Vec<&str> = s.split_whitespace().collect();

        if tokens.is_empty() {
            Err(Error::EmptyInput)
        } else {
            trace!("lexed {} token(s)", tokens.len());
            Ok(Self { tokens })
        }
    }

    /// Returns a cursor at the first token.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for Tokens<'a> {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'t, 'a> IntoIterator for &'t Tokens<'a> {
    type Item = &'t &'a str;
    type IntoIter = std::slice::Iter<'t, &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Forward-only position within a token sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the token at the cursor.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    /// Returns the token `n` positions after the cursor.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.tokens.get(self.pos + n).copied()
    }

    /// Returns the cursor at the next token.
    #[inline]
    pub fn advance(self) -> Self {
        self.skip(1)
    }

    /// Returns the cursor `n` tokens further, saturating at the end.
    #[inline]
    pub fn skip(self, n: usize) -> Self {
        Self {
            tokens: self.tokens,
            pos: (self.pos + n).min(self.tokens.len()),
        }
    }

    /// Returns the cursor at an absolute position.
    #[inline]
    pub fn at(self, pos: usize) -> Self {
        Self {
            tokens: self.tokens,
            pos: pos.min(self.tokens.len()),
        }
    }

    /// Parses the token at the cursor as group `G`.
    ///
    /// Returns the group and the cursor following it, or `None` if the token
    /// doesn't match the group, in which case nothing is consumed.
    pub fn take<G>(self) -> Option<(G, Self)>
    where
        G: FromStr,
    {
        let group = self.peek()?.parse::<G>().ok()?;
        Some((group, self.advance()))
    }

    /// Returns the cursor following the token if it equals `keyword`.
    pub fn keyword(self, keyword: &str) -> Option<Self> {
        (self.peek()? == keyword).then(|| self.advance())
    }

    /// Finds the first of the next `window` tokens that satisfies `predicate`.
    ///
    /// Returns the token, the tokens skipped before it and the cursor
    /// following it.
    pub fn find_within<P>(
        self,
        window: usize,
        predicate: P,
    ) -> Option<(&'a str, &'a [&'a str], Self)>
    where
        P: Fn(&str) -> bool,
    {
        let n = self
            .rest()
            .iter()
            .take(window)
            .position(|token| predicate(*token))?;

        let skipped = &self.rest()[..n];
        Some((self.tokens[self.pos + n], skipped, self.skip(n + 1)))
    }

    /// Returns the remaining tokens starting at the cursor.
    pub fn rest(&self) -> &'a [&'a str] {
        &self.tokens[self.pos..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
