// File: src/palette.rs
use std::collections::BTreeMap;

use crate::color::{Color, Hsl};

/// One of the eleven canonical ramp positions. Lower steps are lighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Step {
    /// All steps in canonical ascending order.
    pub const ALL: [Step; 11] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
        Step::S950,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Step::S50 => "50",
            Step::S100 => "100",
            Step::S200 => "200",
            Step::S300 => "300",
            Step::S400 => "400",
            Step::S500 => "500",
            Step::S600 => "600",
            Step::S700 => "700",
            Step::S800 => "800",
            Step::S900 => "900",
            Step::S950 => "950",
        }
    }

    /// Target lightness for this step. The table is fixed; it never changes
    /// at runtime.
    pub fn target_lightness(self) -> f32 {
        match self {
            Step::S50 => 0.97,
            Step::S100 => 0.92,
            Step::S200 => 0.84,
            Step::S300 => 0.74,
            Step::S400 => 0.6,
            Step::S500 => 0.5,
            Step::S600 => 0.4,
            Step::S700 => 0.3,
            Step::S800 => 0.2,
            Step::S900 => 0.12,
            Step::S950 => 0.06,
        }
    }

    pub fn from_label(label: &str) -> Option<Step> {
        Step::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// An ordered mapping from ramp step to color.
///
/// The mapping is keyed, not positional, but iteration always yields
/// canonical ascending step order. An empty palette means "the base color
/// did not parse".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    entries: BTreeMap<Step, Color>,
}

impl Palette {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, step: Step) -> Option<Color> {
        self.entries.get(&step).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Step, Color)> + '_ {
        self.entries.iter().map(|(&s, &c)| (s, c))
    }
}

/// Derive the full ramp from a base color.
///
/// The base color's hue and saturation are kept; its lightness is discarded
/// and replaced by each step's target. A string that does not parse as a
/// color yields an empty palette rather than an error, so callers treat an
/// empty result as "invalid input".
pub fn generate(input: &str) -> Palette {
    let Ok(base) = input.parse::<Color>() else {
        return Palette::default();
    };
    let Hsl { h, s, .. } = base.to_hsl();

    let entries = Step::ALL
        .iter()
        .map(|&step| {
            let color = Color::from_hsl(Hsl {
                h,
                s,
                l: step.target_lightness(),
            });
            (step, color)
        })
        .collect();

    Palette { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_yields_exactly_eleven_steps() {
        let palette = generate("#3b82f6");
        assert_eq!(palette.len(), 11);
        for step in Step::ALL {
            assert!(palette.get(step).is_some(), "missing step {}", step.label());
        }
        let labels: Vec<&str> = palette.iter().map(|(s, _)| s.label()).collect();
        assert_eq!(
            labels,
            ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
        );
    }

    #[test]
    fn lightness_descends_from_50_to_950() {
        let palette = generate("#3b82f6");
        let lightness: Vec<f32> = palette.iter().map(|(_, c)| c.to_hsl().l).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] > pair[1], "not descending: {:?}", lightness);
        }
    }

    #[test]
    fn step_500_sits_closest_to_mid_lightness() {
        let palette = generate("tomato");
        let closest = palette
            .iter()
            .min_by(|(_, a), (_, b)| {
                let da = (a.to_hsl().l - 0.5).abs();
                let db = (b.to_hsl().l - 0.5).abs();
                da.partial_cmp(&db).unwrap()
            })
            .map(|(s, _)| s);
        assert_eq!(closest, Some(Step::S500));
    }

    #[test]
    fn invalid_input_yields_empty_palette() {
        assert!(generate("not-a-color").is_empty());
        assert!(generate("").is_empty());
        assert!(generate("#12345").is_empty());
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(generate("#3b82f6"), generate("#3b82f6"));
        assert_eq!(generate("skyblue"), generate("skyblue"));
    }

    #[test]
    fn achromatic_input_yields_gray_ramp() {
        let palette = generate("#808080");
        assert_eq!(palette.len(), 11);
        for (step, color) in palette.iter() {
            assert_eq!(color.r, color.g, "step {} is not gray", step.label());
            assert_eq!(color.g, color.b, "step {} is not gray", step.label());
        }
    }

    #[test]
    fn ramp_preserves_hue_and_saturation_of_base() {
        let base = "#3b82f6".parse::<crate::color::Color>().unwrap().to_hsl();
        let palette = generate("#3b82f6");

        // Step 500 lands on mid lightness with H/S intact.
        let mid = palette.get(Step::S500).unwrap();
        assert_eq!(mid.hex(), "#0b64f4");
        let mid_hsl = mid.to_hsl();
        assert!((mid_hsl.l - 0.5).abs() < 0.01, "l = {}", mid_hsl.l);
        assert!((mid_hsl.h - base.h).abs() < 1.0, "h = {}", mid_hsl.h);
        assert!((mid_hsl.s - base.s).abs() < 0.01, "s = {}", mid_hsl.s);

        // Step 50 is very light; 8-bit quantization dominates H/S recovery
        // at the extremes, hence the looser tolerances.
        let light = palette.get(Step::S50).unwrap();
        let light_hsl = light.to_hsl();
        assert!((light_hsl.l - 0.97).abs() < 0.01, "l = {}", light_hsl.l);
        assert!((light_hsl.h - base.h).abs() < 5.0, "h = {}", light_hsl.h);
        assert!((light_hsl.s - base.s).abs() < 0.05, "s = {}", light_hsl.s);
    }

    #[test]
    fn input_lightness_is_discarded() {
        // Same hue/saturation at different lightness: the ramps agree up to
        // 8-bit quantization of the base color.
        let dark = generate("hsl(217, 91%, 20%)");
        let light = generate("hsl(217, 91%, 80%)");
        for (step, a) in dark.iter() {
            let b = light.get(step).unwrap();
            assert!((a.r as i16 - b.r as i16).abs() <= 1, "step {}", step.label());
            assert!((a.g as i16 - b.g as i16).abs() <= 1, "step {}", step.label());
            assert!((a.b as i16 - b.b as i16).abs() <= 1, "step {}", step.label());
        }
    }

    #[test]
    fn step_labels_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_label(step.label()), Some(step));
        }
        assert_eq!(Step::from_label("450"), None);
    }
}
