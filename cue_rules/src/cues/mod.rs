//! Cue definitions - the nine fixed togglable switches.

use serde::{Deserialize, Serialize};

/// A cue is a single togglable concept shown to the user.
///
/// The set of nine cues and their order is fixed at build time. The
/// declaration order here is canonical: it aligns each cue with its slot in
/// the cluster weight vectors and fixes the order cue ids appear in
/// persisted scenario rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    NatureCleanse,
    CosyCalm,
    FreshVitality,
    CleanWear,
    SweatAway,
    PlantPure,
    TouchSmooth,
    CareNight,
    BreatheAir,
}

impl Cue {
    /// Number of cues. Every weight vector has exactly this length.
    pub const COUNT: usize = 9;

    /// All cues in declaration order.
    pub const ALL: [Cue; Cue::COUNT] = [
        Cue::NatureCleanse,
        Cue::CosyCalm,
        Cue::FreshVitality,
        Cue::CleanWear,
        Cue::SweatAway,
        Cue::PlantPure,
        Cue::TouchSmooth,
        Cue::CareNight,
        Cue::BreatheAir,
    ];

    /// Fixed position of this cue, used to index weight vectors.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in persisted scenario records.
    pub fn id(self) -> &'static str {
        match self {
            Cue::NatureCleanse => "nature_cleanse",
            Cue::CosyCalm => "cosy_calm",
            Cue::FreshVitality => "fresh_vitality",
            Cue::CleanWear => "clean_wear",
            Cue::SweatAway => "sweat_away",
            Cue::PlantPure => "plant_pure",
            Cue::TouchSmooth => "touch_smooth",
            Cue::CareNight => "care_night",
            Cue::BreatheAir => "breathe_air",
        }
    }

    /// Display label for the interaction surface.
    pub fn label(self) -> &'static str {
        match self {
            Cue::NatureCleanse => "Nature's Cleanse",
            Cue::CosyCalm => "Cosy Calm",
            Cue::FreshVitality => "Fresh Vitality",
            Cue::CleanWear => "Clean Wear",
            Cue::SweatAway => "Sweat Away",
            Cue::PlantPure => "Plant Pure",
            Cue::TouchSmooth => "Touch Smooth",
            Cue::CareNight => "Care Night",
            Cue::BreatheAir => "Breathe Air",
        }
    }

    /// Parse a stored identifier back into a cue.
    ///
    /// Returns `None` for unknown identifiers. Callers at external
    /// boundaries (store rows, user input) turn that into a typed error, so
    /// an unknown id can never reach scoring.
    pub fn from_id(id: &str) -> Option<Cue> {
        Cue::ALL.into_iter().find(|cue| cue.id() == id)
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (position, cue) in Cue::ALL.iter().enumerate() {
            assert_eq!(cue.index(), position);
        }
        assert_eq!(Cue::ALL.len(), Cue::COUNT);
    }

    #[test]
    fn test_id_round_trip() {
        for cue in Cue::ALL {
            assert_eq!(Cue::from_id(cue.id()), Some(cue));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Cue::from_id("fresh_socks"), None);
        assert_eq!(Cue::from_id(""), None);
        assert_eq!(Cue::from_id("Nature's Cleanse"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Cue::NatureCleanse.label(), "Nature's Cleanse");
        assert_eq!(Cue::BreatheAir.label(), "Breathe Air");
    }

    #[test]
    fn test_display_prints_id() {
        assert_eq!(Cue::CleanWear.to_string(), "clean_wear");
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Cue::SweatAway).unwrap();
        assert_eq!(json, "\"sweat_away\"");

        let cue: Cue = serde_json::from_str("\"plant_pure\"").unwrap();
        assert_eq!(cue, Cue::PlantPure);
    }
}
