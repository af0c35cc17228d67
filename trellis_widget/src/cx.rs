// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build context bundling per-pass collaborators.

use alloc::string::String;
use hashbrown::HashMap;
use kurbo::Size;
use trellis_platform::Platform;
use trellis_scope::ScopeStack;

use crate::element::{NodeAllocator, NodeRef};
use crate::overlay::{self, OverlayBuild};

/// Everything a build pass needs, bundled to avoid passing many parameters
/// through every sub-component.
///
/// The overlay implementation is selected from the platform once, here, at
/// construction; widget code receives a single symbol with one contract and
/// never branches on platform. One context can therefore never mix
/// platforms within a widget instance.
pub struct BuildCx {
    /// Ambient scopes for the current build position. Pushed and popped by
    /// the code standing in for the headless primitive; sub-components read.
    pub scopes: ScopeStack,
    platform: Platform,
    viewport: Size,
    nodes: NodeAllocator,
    portal_hosts: HashMap<String, NodeRef>,
    overlay: OverlayBuild,
}

impl core::fmt::Debug for BuildCx {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BuildCx")
            .field("scopes", &self.scopes)
            .field("platform", &self.platform)
            .field("viewport", &self.viewport)
            .field("portal_hosts", &self.portal_hosts.len())
            .finish_non_exhaustive()
    }
}

impl BuildCx {
    /// Creates a context for one platform and viewport.
    ///
    /// # Panics
    ///
    /// Panics if the overlay dispatch table has no entry for `platform`;
    /// the platform set is closed, so this is fatal at initialization.
    #[must_use]
    pub fn new(platform: Platform, viewport: Size) -> Self {
        Self {
            scopes: ScopeStack::new(),
            platform,
            viewport,
            nodes: NodeAllocator::default(),
            portal_hosts: HashMap::new(),
            overlay: overlay::select_overlay(platform),
        }
    }

    /// Returns the platform this context builds for.
    #[must_use]
    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the viewport size in logical pixels.
    #[must_use]
    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Mints the opaque handle for the next rendered node.
    pub fn alloc_node(&mut self) -> NodeRef {
        self.nodes.alloc()
    }

    /// Starts a new build pass. Handles minted before this call carry a
    /// stale generation and no longer match.
    pub fn next_pass(&mut self) {
        self.nodes.next_generation();
    }

    /// Registers a named portal host node.
    pub fn register_portal_host(&mut self, name: impl Into<String>, node: NodeRef) {
        let _ = self.portal_hosts.insert(name.into(), node);
    }

    /// Resolves a named portal host, if registered.
    #[must_use]
    pub fn portal_host(&self, name: &str) -> Option<NodeRef> {
        self.portal_hosts.get(name).copied()
    }

    pub(crate) fn overlay(&self) -> OverlayBuild {
        self.overlay
    }
}
