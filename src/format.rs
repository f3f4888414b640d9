// File: src/format.rs
//! Serializes a palette into the two copyable snippet formats.

use std::fmt::Write;

use crate::palette::Palette;

/// Render the palette as a `:root` block of CSS custom properties, one
/// declaration per step in ascending order.
pub fn css_variables(palette: &Palette, prefix: &str) -> String {
    let mut out = String::from(":root {\n");
    for (step, color) in palette.iter() {
        let _ = writeln!(out, "  --color-{}-{}: {};", prefix, step.label(), color.hex());
    }
    out.push('}');
    out
}

/// Render the palette as a Tailwind theme entry referencing the variables
/// emitted by [`css_variables`].
pub fn tailwind_config(palette: &Palette, prefix: &str) -> String {
    let mut out = format!("{}: {{\n", prefix);
    for (step, _) in palette.iter() {
        let _ = writeln!(
            out,
            "    {}: 'var(--color-{}-{})',",
            step.label(),
            prefix,
            step.label()
        );
    }
    out.push('}');
    out
}
