// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Conversions between stored `#rrggbb` strings and egui colors.
//!
//! Card records store colors in the CMS form (`"#3b82f6"`); the form edits
//! them through egui's color button, which works on [`egui::Color32`].

/// Parse a `#rrggbb` string into a color. Returns `None` for anything that is
/// not exactly seven characters of `#` plus six hex digits.
pub fn parse_hex(value: &str) -> Option<egui::Color32> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(egui::Color32::from_rgb(r, g, b))
}

/// Format a color back into the stored lowercase `#rrggbb` form. Alpha is
/// dropped; card colors are opaque.
pub fn format_hex(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
