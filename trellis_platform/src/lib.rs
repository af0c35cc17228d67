// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Platform: closed-set platform dispatch.
//!
//! Some sub-components need one implementation per host platform — the
//! observed case is overlay rendering, where the native renderer must cover
//! the viewport with an absolutely positioned layer and play an explicit
//! fade, while the web renderer relies on stacking context and class-driven
//! transitions. The platform set is closed and known at build time, so
//! dispatch is resolved once, up front, and callers never branch.
//!
//! [`PlatformMap`] is the strategy table: register one implementation per
//! platform, then [`PlatformMap::select`] consumes the map and yields the
//! single implementation for the resolved platform. Both entries share one
//! type, so the selected implementation has the same contract either way.
//!
//! ```rust
//! use trellis_platform::{Platform, PlatformMap};
//!
//! fn web_overlay() -> &'static str { "class-driven" }
//! fn native_overlay() -> &'static str { "absolute-fill" }
//!
//! let build: fn() -> &'static str = PlatformMap::new()
//!     .web(web_overlay as fn() -> &'static str)
//!     .native(native_overlay)
//!     .select(Platform::Native);
//! assert_eq!(build(), "absolute-fill");
//! ```
//!
//! A missing registration for the resolved platform is fatal at
//! initialization, not a runtime condition: [`PlatformMap::select`] panics.
//!
//! This crate is `no_std`.

#![no_std]

/// The closed set of host platforms.
///
/// Selected once per process; two platforms are never mixed within a single
/// widget instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// A DOM-style environment with stacking contexts and class-driven
    /// transitions.
    Web,
    /// A native mobile renderer without CSS-driven animation.
    Native,
}

impl Platform {
    /// All platforms, for exhaustive registration checks.
    pub const ALL: [Self; 2] = [Self::Web, Self::Native];

    /// Returns the lowercase platform name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

impl core::fmt::Display for Platform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-platform strategy table with at most one entry per platform.
///
/// The type parameter is the shared contract: because every entry is a `T`,
/// code receiving the selected implementation cannot tell platforms apart
/// and never needs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformMap<T> {
    web: Option<T>,
    native: Option<T>,
}

impl<T> PlatformMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            web: None,
            native: None,
        }
    }

    /// Registers the web implementation.
    #[must_use]
    pub fn web(mut self, implementation: T) -> Self {
        self.web = Some(implementation);
        self
    }

    /// Registers the native implementation.
    #[must_use]
    pub fn native(mut self, implementation: T) -> Self {
        self.native = Some(implementation);
        self
    }

    /// Returns the registered implementation for `platform`, if any.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&T> {
        match platform {
            Platform::Web => self.web.as_ref(),
            Platform::Native => self.native.as_ref(),
        }
    }

    /// Consumes the map and returns the implementation for `platform`.
    ///
    /// Evaluate this once at definition time per dispatched sub-component;
    /// afterwards there is a single symbol with one contract and no further
    /// platform branching.
    ///
    /// # Panics
    ///
    /// Panics if no implementation is registered for `platform`. The
    /// platform set is closed, so this is a build-time defect, not a
    /// recoverable runtime condition.
    #[must_use]
    pub fn select(self, platform: Platform) -> T {
        let entry = match platform {
            Platform::Web => self.web,
            Platform::Native => self.native,
        };
        match entry {
            Some(implementation) => implementation,
            None => panic!("no implementation registered for platform `{}`", platform.as_str()),
        }
    }
}
