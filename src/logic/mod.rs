// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: field-visibility rules and site-export IO.

pub mod rules;
pub mod site;
