// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered utility-class token lists.

use alloc::string::String;
use smallvec::SmallVec;

use crate::merge::{Concat, Merge};

/// An ordered sequence of utility-class segments.
///
/// Segments are appended in three positions: structural first, then
/// state-conditional, then caller overrides. [`ClassList::resolve`] joins the
/// non-empty segments with single spaces, preserving insertion order so a
/// last-wins merge engine downstream gives callers the final say.
///
/// Construction is builder-style and by value, like
/// `StyleBuilder` construction elsewhere in the stack:
///
/// ```rust
/// use trellis_class::ClassList;
///
/// let disabled = true;
/// let classes = ClassList::new("px-2 py-1.5 rounded-sm")
///     .when(disabled, "opacity-50 web:pointer-events-none")
///     .extend(None)
///     .resolve();
/// assert_eq!(classes, "px-2 py-1.5 rounded-sm opacity-50 web:pointer-events-none");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    segments: SmallVec<[&'a str; 4]>,
}

impl<'a> ClassList<'a> {
    /// Creates a class list from the structural baseline tokens.
    ///
    /// An empty `structural` string contributes nothing.
    #[must_use]
    pub fn new(structural: &'a str) -> Self {
        Self::default().push(structural)
    }

    /// Appends a further structural segment unconditionally.
    #[must_use]
    pub fn and(self, tokens: &'a str) -> Self {
        self.push(tokens)
    }

    /// Appends `tokens` only when `condition` holds.
    ///
    /// This is how ambient state (open, disabled, inset) reaches the class
    /// string: the assembly layer evaluates the condition against the state
    /// snapshot and the tokens land after the structural segment.
    #[must_use]
    pub fn when(self, condition: bool, tokens: &'a str) -> Self {
        if condition { self.push(tokens) } else { self }
    }

    /// Appends one of two token segments depending on `condition`.
    ///
    /// Used for enter/exit presentation, where both edges of a transition
    /// contribute tokens and exactly one applies at a time.
    #[must_use]
    pub fn either(self, condition: bool, on_true: &'a str, on_false: &'a str) -> Self {
        if condition {
            self.push(on_true)
        } else {
            self.push(on_false)
        }
    }

    /// Appends an optional ambient segment, contributing nothing for `None`.
    ///
    /// Used for values that may simply be absent, like an inherited text
    /// class, as opposed to [`ClassList::when`] conditions on ambient booleans.
    #[must_use]
    pub fn maybe(self, tokens: Option<&'a str>) -> Self {
        match tokens {
            Some(tokens) => self.push(tokens),
            None => self,
        }
    }

    /// Appends caller-supplied tokens, always in the final position.
    ///
    /// `None` contributes nothing. Call this last so caller tokens can
    /// override any property the earlier segments set.
    #[must_use]
    pub fn extend(self, caller: Option<&'a str>) -> Self {
        match caller {
            Some(tokens) => self.push(tokens),
            None => self,
        }
    }

    /// Returns the number of non-empty segments appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no non-empty segment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolves the list to a class string using the default [`Concat`] policy.
    ///
    /// The result is deterministic and idempotent: two calls with the same
    /// list yield identical strings.
    #[must_use]
    pub fn resolve(&self) -> String {
        self.resolve_with(&Concat)
    }

    /// Resolves the list through an explicit merge policy.
    #[must_use]
    pub fn resolve_with(&self, policy: &impl Merge) -> String {
        policy.merge(&self.segments)
    }

    fn push(mut self, tokens: &'a str) -> Self {
        let tokens = tokens.trim();
        if !tokens.is_empty() {
            self.segments.push(tokens);
        }
        self
    }
}
