// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Prototype registry.
//!
//! Reconstructs concrete entity types from a bare name, e.g. after reading
//! a type identifier off a stream. Each concrete type registers one
//! prototype instance; [`Registry::create`] asks the prototype for a blank
//! instance of its own runtime type, so the registry never needs to know
//! any concrete type.
//!
//! Registration is first-wins: a duplicate name never replaces the original
//! prototype, and the rejected instance is dropped on the spot. The
//! registry owns every accepted prototype and drops them all with itself.
//!
//! # Example
//!
//! ```rust
//! use tagwire::{MemberStore, Registry, Serializable};
//!
//! #[derive(Default)]
//! struct Pose {
//!     members: MemberStore,
//! }
//!
//! impl Serializable for Pose {
//!     fn blank(&self) -> Box<dyn Serializable> {
//!         Box::new(Pose::default())
//!     }
//!
//!     fn type_name(&self) -> &str {
//!         "Pose"
//!     }
//!
//!     fn members(&self) -> &MemberStore {
//!         &self.members
//!     }
//!
//!     fn members_mut(&mut self) -> &mut MemberStore {
//!         &mut self.members
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(Box::new(Pose::default()));
//!
//! let entity = registry.create("Pose").expect("registered");
//! assert_eq!(entity.type_name(), "Pose");
//! assert!(registry.create("Twist").is_err());
//! ```

use crate::error::RegistryError;
use crate::member::MemberStore;
use std::collections::HashMap;
use std::fmt;

/// Capability implemented once per concrete entity type.
///
/// The only polymorphic requirement the core places on entities: produce a
/// blank instance of your own concrete runtime type, name yourself, and
/// expose your member store.
pub trait Serializable {
    /// Produce a new, blank instance of the same concrete runtime type.
    fn blank(&self) -> Box<dyn Serializable>;

    /// Name this type registers under.
    fn type_name(&self) -> &str;

    /// The entity's named member store.
    fn members(&self) -> &MemberStore;

    /// Mutable access to the member store.
    fn members_mut(&mut self) -> &mut MemberStore;
}

impl fmt::Debug for dyn Serializable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializable")
            .field("type", &self.type_name())
            .finish()
    }
}

/// Name-to-prototype table.
///
/// Owns one prototype per registered name for the registry's whole
/// lifetime; prototypes are never mutated after insertion, only asked for
/// blank instances.
#[derive(Default)]
pub struct Registry {
    prototypes: HashMap<String, Box<dyn Serializable>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `prototype` under `name`.
    ///
    /// The first registration for a name wins: a duplicate is rejected and
    /// the rejected instance is dropped here, never stored and never
    /// leaked.
    pub fn add(&mut self, name: impl Into<String>, prototype: Box<dyn Serializable>) {
        let name = name.into();
        if self.prototypes.contains_key(&name) {
            log::debug!("registry: duplicate prototype for {:?} dropped", name);
            return;
        }
        self.prototypes.insert(name, prototype);
    }

    /// Register `prototype` under its own reported type name.
    pub fn register(&mut self, prototype: Box<dyn Serializable>) {
        let name = prototype.type_name().to_string();
        self.add(name, prototype);
    }

    /// Build a blank instance of the type registered under `name`.
    ///
    /// The caller owns the returned instance. An unregistered name is an
    /// explicit error, never a panic.
    pub fn create(&self, name: &str) -> Result<Box<dyn Serializable>, RegistryError> {
        match self.prototypes.get(name) {
            Some(prototype) => Ok(prototype.blank()),
            None => Err(RegistryError::UnknownType(name.to_string())),
        }
    }

    /// Whether a prototype is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    /// Number of registered prototypes.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Iterate registered names (arbitrary order).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(String::as_str)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("types", &names).finish()
    }
}
