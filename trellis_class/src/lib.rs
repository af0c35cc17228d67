// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Class: utility-class resolution for compound widgets.
//!
//! Every styled leaf in a Trellis widget resolves its presentation from three
//! ordered sources:
//!
//! 1. **Structural** tokens — the fixed baseline look of the sub-component.
//! 2. **Conditional** tokens — appended only while a named piece of ambient
//!    state holds (e.g. `bg-accent` while a submenu is open, `opacity-50`
//!    while an item is disabled).
//! 3. **Caller** tokens — arbitrary overrides from the consumer, always last.
//!
//! [`ClassList`] captures that ordering. It is pure and idempotent: the same
//! inputs always produce the same class string, with segments in the same
//! positions.
//!
//! ```rust
//! use trellis_class::ClassList;
//!
//! let open = true;
//! let classes = ClassList::new("rounded-md border border-border bg-popover p-1")
//!     .when(open, "bg-accent")
//!     .extend(Some("my-2"))
//!     .resolve();
//! assert_eq!(
//!     classes,
//!     "rounded-md border border-border bg-popover p-1 bg-accent my-2"
//! );
//! ```
//!
//! ## Merge policy
//!
//! `ClassList` only guarantees token *ordering*. Collapsing conflicting
//! tokens on the same property axis (a "last wins" precedence rule) is the
//! job of the downstream styling engine; the [`Merge`] trait is
//! the seam for plugging one in, and the default [`Concat`] policy performs
//! ordering-only concatenation. Because caller tokens are appended last,
//! any last-wins engine lets callers override structural defaults.
//!
//! ## Variants
//!
//! [`variant`] provides the button variant/size axes used by actionable
//! widget leaves (dialog Action/Cancel buttons), including the derived text
//! classes those leaves hand down to nested text.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod class;
mod merge;
pub mod variant;

pub use class::ClassList;
pub use merge::{Concat, Merge};
