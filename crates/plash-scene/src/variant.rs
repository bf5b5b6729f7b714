use serde::{Deserialize, Serialize};

/// Available wallpaper variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Instanced glowing streaks flying out of a box
    #[default]
    Starburst,
    /// CPU-simulated stars drawn as line streaks
    Starfield,
    /// Full-screen domain-warped gradient
    Gradient,
}

impl Variant {
    /// Get all available variants
    pub fn all() -> &'static [Variant] {
        &[Variant::Starburst, Variant::Starfield, Variant::Gradient]
    }

    /// Get the display name for this variant
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Starburst => "Starburst Warp",
            Variant::Starfield => "Starfield Streaks",
            Variant::Gradient => "Warped Gradient",
        }
    }

    /// Parse from string ID (e.g., "starburst", "starfield")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "starburst" => Some(Variant::Starburst),
            "starfield" => Some(Variant::Starfield),
            "gradient" => Some(Variant::Gradient),
            _ => None,
        }
    }

    /// Get the string ID for this variant
    pub fn id(&self) -> &'static str {
        match self {
            Variant::Starburst => "starburst",
            Variant::Starfield => "starfield",
            Variant::Gradient => "gradient",
        }
    }

    /// Whether the variant shows the image overlay by default
    pub fn has_default_overlay(&self) -> bool {
        *self == Variant::Starburst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_default() {
        let v: Variant = Default::default();
        assert_eq!(v, Variant::Starburst);
    }

    #[test]
    fn test_variant_all() {
        let all = Variant::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Variant::Gradient));
    }

    #[test]
    fn test_variant_from_id_case_insensitive() {
        assert_eq!(Variant::from_id("STARFIELD"), Some(Variant::Starfield));
        assert_eq!(Variant::from_id("Gradient"), Some(Variant::Gradient));
        assert_eq!(Variant::from_id("nebula"), None);
    }

    #[test]
    fn test_variant_roundtrip() {
        for v in Variant::all() {
            assert_eq!(Variant::from_id(v.id()), Some(*v));
        }
    }

    #[test]
    fn test_variant_serialize() {
        assert_eq!(serde_json::to_string(&Variant::Starfield).unwrap(), "\"starfield\"");
        let parsed: Variant = serde_json::from_str("\"gradient\"").unwrap();
        assert_eq!(parsed, Variant::Gradient);
    }

    #[test]
    fn test_variant_names_distinct() {
        use std::collections::HashSet;
        let names: HashSet<_> = Variant::all().iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), Variant::all().len());
    }
}
