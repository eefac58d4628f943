// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form submission domain model (UI-agnostic).

use serde::{Deserialize, Serialize};

/// One validated form submission as it is persisted in the vault.
///
/// Records are append-only: once stored they are never mutated, and the
/// store keeps duplicates in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub number: String,
    pub password: String,
}

impl FormRecord {
    /// Canonical form of the record for storage: email is lower-cased.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.to_lowercase();
        self
    }
}
