// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The explicit scope stack.

use alloc::string::String;
use alloc::vec::Vec;

use crate::snapshot::WidgetState;

/// Identifies one pushed scope for balanced popping.
///
/// IDs are minted monotonically per stack and never reused, so a stale ID
/// can not silently match a newer scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

enum Scope {
    Root(WidgetState),
    Sub(WidgetState),
    TextClass(String),
}

/// A stack of ambient scopes for one build pass.
///
/// Scopes nest: each `Root` or `Sub` level establishes its own state, and a
/// read resolves to the nearest enclosing scope of the requested kind, never
/// an ancestor's ancestor. Text-class scopes carry the derived text style an
/// actionable leaf hands to its children.
///
/// The stack is written only at push/pop boundaries by the code standing in
/// for the headless primitive; descendants read. Pops must mirror pushes in
/// LIFO order.
#[derive(Default)]
pub struct ScopeStack {
    entries: Vec<(ScopeId, Scope)>,
    next: u64,
}

impl core::fmt::Debug for ScopeStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScopeStack")
            .field("depth", &self.entries.len())
            .field("next", &self.next)
            .finish()
    }
}

impl ScopeStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of scopes currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no scope is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Establishes a root widget scope and returns its ID.
    pub fn push_root(&mut self, state: WidgetState) -> ScopeId {
        self.push(Scope::Root(state))
    }

    /// Establishes a nested sub-widget scope (e.g. a submenu) and returns
    /// its ID.
    pub fn push_sub(&mut self, state: WidgetState) -> ScopeId {
        self.push(Scope::Sub(state))
    }

    /// Establishes a derived text-class scope and returns its ID.
    pub fn push_text_class(&mut self, classes: impl Into<String>) -> ScopeId {
        self.push(Scope::TextClass(classes.into()))
    }

    /// Removes the top scope, which must be the one identified by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not the top of the stack: unbalanced pops indicate
    /// an invalid tree shape.
    pub fn pop(&mut self, id: ScopeId) {
        match self.entries.pop() {
            Some((top, _)) if top == id => {}
            Some((top, _)) => panic!("scope pop out of order: expected {top:?}, got {id:?}"),
            None => panic!("scope pop on an empty stack: {id:?}"),
        }
    }

    /// Returns the nearest enclosing root scope's state.
    ///
    /// # Panics
    ///
    /// Panics if no root scope encloses the caller. Building a widget
    /// sub-component outside its `Root` is a programming error.
    #[must_use]
    pub fn root(&self) -> &WidgetState {
        self.entries
            .iter()
            .rev()
            .find_map(|(_, scope)| match scope {
                Scope::Root(state) => Some(state),
                _ => None,
            })
            .expect("no enclosing root scope: sub-component built outside its widget `Root`")
    }

    /// Returns the nearest enclosing sub scope's state.
    ///
    /// A submenu trigger calls this so it reflects the submenu's own open
    /// state, not the parent menu's.
    ///
    /// # Panics
    ///
    /// Panics if no sub scope encloses the caller.
    #[must_use]
    pub fn sub(&self) -> &WidgetState {
        self.entries
            .iter()
            .rev()
            .find_map(|(_, scope)| match scope {
                Scope::Sub(state) => Some(state),
                _ => None,
            })
            .expect("no enclosing sub scope: sub-component built outside its widget `Sub`")
    }

    /// Returns the nearest enclosing derived text class, if any.
    ///
    /// Unlike [`ScopeStack::root`], absence is not an error: text outside
    /// any actionable leaf simply uses its own defaults.
    #[must_use]
    pub fn text_class(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|(_, scope)| match scope {
            Scope::TextClass(classes) => Some(classes.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, scope: Scope) -> ScopeId {
        let id = ScopeId(self.next);
        self.next += 1;
        self.entries.push((id, scope));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_enclosing_scope_wins() {
        let mut scopes = ScopeStack::new();
        let outer = scopes.push_root(WidgetState::open());
        let inner = scopes.push_root(WidgetState::closed());
        assert!(!scopes.root().open, "inner root shadows outer");
        scopes.pop(inner);
        assert!(scopes.root().open, "outer root visible again");
        scopes.pop(outer);
    }

    #[test]
    fn sub_reads_skip_root_scopes() {
        let mut scopes = ScopeStack::new();
        let root = scopes.push_root(WidgetState::open());
        let sub = scopes.push_sub(WidgetState::closed());
        // A deeper root (a dialog opened from a menu item) must not shadow
        // the submenu scope for sub reads.
        let nested_root = scopes.push_root(WidgetState::open());
        assert!(!scopes.sub().open, "sub read resolves the sub scope");
        assert!(scopes.root().open, "root read resolves the nearest root");
        scopes.pop(nested_root);
        scopes.pop(sub);
        scopes.pop(root);
    }

    #[test]
    fn text_class_nearest_wins_and_is_optional() {
        let mut scopes = ScopeStack::new();
        assert_eq!(scopes.text_class(), None);
        let outer = scopes.push_text_class("text-primary");
        let inner = scopes.push_text_class("text-accent-foreground");
        assert_eq!(scopes.text_class(), Some("text-accent-foreground"));
        scopes.pop(inner);
        assert_eq!(scopes.text_class(), Some("text-primary"));
        scopes.pop(outer);
    }

    #[test]
    #[should_panic(expected = "no enclosing root scope")]
    fn root_read_outside_any_root_fails_fast() {
        let scopes = ScopeStack::new();
        let _ = scopes.root();
    }

    #[test]
    #[should_panic(expected = "no enclosing sub scope")]
    fn sub_read_outside_any_sub_fails_fast() {
        let mut scopes = ScopeStack::new();
        let _root = scopes.push_root(WidgetState::open());
        let _ = scopes.sub();
    }

    #[test]
    #[should_panic(expected = "scope pop out of order")]
    fn out_of_order_pop_fails_fast() {
        let mut scopes = ScopeStack::new();
        let first = scopes.push_root(WidgetState::open());
        let _second = scopes.push_root(WidgetState::open());
        scopes.pop(first);
    }

    #[test]
    fn sibling_instances_do_not_share_state() {
        let mut scopes = ScopeStack::new();
        let first = scopes.push_root(WidgetState::open());
        scopes.pop(first);
        let second = scopes.push_root(WidgetState::closed());
        assert!(!scopes.root().open, "second instance sees only its own state");
        scopes.pop(second);
        assert!(scopes.is_empty());
    }
}
