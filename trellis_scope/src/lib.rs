// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Scope: scoped ambient interaction state.
//!
//! A compound widget is a tree of otherwise-independent sub-components that
//! all need to see the interaction state of their enclosing widget instance:
//! the overlay and content read `open` to pick enter/exit presentation, a
//! submenu trigger reads its *own* submenu's `open`, and actionable leaves
//! hand a derived text class to nested text. None of that state is threaded
//! through as parameters; it is ambient.
//!
//! Rust has no implicit context propagation, so ambience is made explicit:
//! [`ScopeStack`] is a per-build stack of scopes, and a read resolves to the
//! *nearest enclosing* scope of the requested kind. The headless primitive
//! (the external state machine driving open/close) pushes a scope when its
//! `Root` or `Sub` mounts and pops it when it unmounts; descendants only
//! read.
//!
//! ```rust
//! use trellis_scope::{ScopeStack, WidgetState};
//!
//! let mut scopes = ScopeStack::new();
//! let root = scopes.push_root(WidgetState::open());
//!
//! // Deep in the tree, the content asks for the nearest root state.
//! assert!(scopes.root().open);
//!
//! // A submenu establishes its own scope; its trigger sees the submenu's
//! // state, never the parent's.
//! let sub = scopes.push_sub(WidgetState::closed());
//! assert!(!scopes.sub().open);
//! assert!(scopes.root().open);
//! scopes.pop(sub);
//! scopes.pop(root);
//! ```
//!
//! Reading outside a matching scope is a programming error, not a
//! recoverable condition: an invalid tree shape at development time. Those
//! reads panic with a message naming the missing scope.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod snapshot;
mod stack;

pub use snapshot::{Align, Side, WidgetState};
pub use stack::{ScopeId, ScopeStack};
