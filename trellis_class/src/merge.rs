// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The merge-policy seam.
//!
//! Collapsing conflicting tokens on the same property axis is not this
//! layer's job: the downstream styling engine owns that precedence rule.
//! [`Merge`] lets an integration plug its engine's policy in; [`Concat`] is
//! the default and performs ordering-only concatenation.

use alloc::string::String;

/// A policy that turns an ordered token-segment sequence into a class string.
///
/// Implementations must be deterministic: the same segment slice must always
/// produce the same output. They must also respect segment order, since the
/// structural → conditional → caller positions are how overrides work.
pub trait Merge {
    /// Merges ordered segments into one class string.
    fn merge(&self, segments: &[&str]) -> String;
}

/// Ordering-only concatenation, the default policy.
///
/// Joins non-empty segments with single spaces and performs no per-axis
/// deduplication. Pair it with a last-wins engine downstream and caller
/// tokens override structural defaults by position alone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Concat;

impl Merge for Concat {
    fn merge(&self, segments: &[&str]) -> String {
        let mut out = String::new();
        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(segment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_joins_with_single_spaces() {
        assert_eq!(Concat.merge(&["a b", "c"]), "a b c");
    }

    #[test]
    fn concat_skips_empty_segments() {
        assert_eq!(Concat.merge(&["", "a", "  ", "b"]), "a b");
    }

    #[test]
    fn concat_preserves_duplicates_for_downstream_merge() {
        // Deduplication is the styling engine's job, not ours.
        assert_eq!(Concat.merge(&["p-2", "p-4"]), "p-2 p-4");
    }

    #[test]
    fn custom_policy_can_replace_concat() {
        struct First;
        impl Merge for First {
            fn merge(&self, segments: &[&str]) -> String {
                String::from(*segments.first().unwrap_or(&""))
            }
        }
        assert_eq!(First.merge(&["a", "b"]), "a");
    }
}
