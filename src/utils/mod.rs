// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod color;
pub mod glyphs;
pub mod kebab;

/// Normalize icon names into their canonical kebab-case form.
pub use kebab::to_kebab_case;
