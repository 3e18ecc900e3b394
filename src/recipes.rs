//! # Voicing Recipes
//!
//! Per-chord-type catalogs of named voicing templates.
//!
//! A recipe lists semitone offsets from the chord root for each hand. Offsets
//! above 11 are allowed; the engine only uses them modulo 12 and chooses the
//! octave itself.
//!
//! ## Styles
//! - `shell` - Guide tones (3rd and 7th) with a little color on top
//! - `rootless-a` / `rootless-b` - Bill Evans style rootless voicings, 3rd or 7th on the bottom
//! - `quartal` - Stacked fourths
//! - `full` - Root and fifth in the left hand
//!
//! ## Catalog YAML
//! A catalog can replace the built-in table. Keys are chord-type codes:
//! ```yaml
//! maj7:
//!   - id: maj7-shell
//!     name: Shell (3-7)
//!     style: shell
//!     left-hand: [4, 11]
//!     right-hand: [2, 7]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::VoicingError;
use crate::theory::ChordType;

/// Voicing style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoicingStyle {
    Shell,
    RootlessA,
    RootlessB,
    Quartal,
    Full,
}

impl VoicingStyle {
    pub const ALL: [VoicingStyle; 5] = [
        VoicingStyle::Shell,
        VoicingStyle::RootlessA,
        VoicingStyle::RootlessB,
        VoicingStyle::Quartal,
        VoicingStyle::Full,
    ];

    pub fn code(self) -> &'static str {
        match self {
            VoicingStyle::Shell => "shell",
            VoicingStyle::RootlessA => "rootless-a",
            VoicingStyle::RootlessB => "rootless-b",
            VoicingStyle::Quartal => "quartal",
            VoicingStyle::Full => "full",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VoicingStyle::Shell => "Shell/Guide Tones",
            VoicingStyle::RootlessA => "Rootless Type A",
            VoicingStyle::RootlessB => "Rootless Type B",
            VoicingStyle::Quartal => "Quartal/Sus",
            VoicingStyle::Full => "Full (with Root)",
        }
    }
}

impl fmt::Display for VoicingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VoicingStyle {
    type Err = VoicingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VoicingStyle::ALL
            .iter()
            .copied()
            .find(|style| style.code() == trimmed)
            .ok_or_else(|| VoicingError::UnknownStyle(trimmed.to_string()))
    }
}

/// A named voicing template for one chord type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicingRecipe {
    pub id: String,
    pub name: String,
    pub style: VoicingStyle,
    #[serde(alias = "left-hand", default)]
    pub left_hand: Vec<i32>,
    #[serde(alias = "right-hand", default)]
    pub right_hand: Vec<i32>,
    #[serde(default)]
    pub description: String,
}

impl VoicingRecipe {
    pub fn new(
        id: &str,
        name: &str,
        style: VoicingStyle,
        left_hand: &[i32],
        right_hand: &[i32],
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            style,
            left_hand: left_hand.to_vec(),
            right_hand: right_hand.to_vec(),
            description: description.to_string(),
        }
    }
}

/// Recipe lists keyed by chord type, in registration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoicingCatalog {
    recipes: BTreeMap<ChordType, Vec<VoicingRecipe>>,
}

impl VoicingCatalog {
    /// Empty catalog. Use [`VoicingCatalog::insert`] to register recipes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from YAML (chord-type code → recipe list).
    pub fn from_yaml(source: &str) -> Result<Self, VoicingError> {
        serde_yaml::from_str(source).map_err(|e| VoicingError::CatalogError(e.to_string()))
    }

    /// Append a recipe to a chord type's list.
    pub fn insert(&mut self, chord_type: ChordType, recipe: VoicingRecipe) {
        self.recipes.entry(chord_type).or_default().push(recipe);
    }

    /// Every recipe registered for a chord type.
    pub fn recipes_for(&self, chord_type: ChordType) -> &[VoicingRecipe] {
        self.recipes
            .get(&chord_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recipes of a chord type whose style is in `styles`; an empty filter matches all.
    pub fn matching(&self, chord_type: ChordType, styles: &[VoicingStyle]) -> Vec<&VoicingRecipe> {
        self.recipes_for(chord_type)
            .iter()
            .filter(|r| styles.is_empty() || styles.contains(&r.style))
            .collect()
    }

    /// Find a recipe by id across all chord types.
    pub fn find(&self, id: &str) -> Option<(ChordType, &VoicingRecipe)> {
        self.recipes
            .iter()
            .find_map(|(ct, list)| list.iter().find(|r| r.id == id).map(|r| (*ct, r)))
    }

    /// Fail unless every chord type has at least one recipe.
    pub fn validate(&self) -> Result<(), VoicingError> {
        match ChordType::ALL
            .iter()
            .find(|ct| self.recipes_for(**ct).is_empty())
        {
            Some(&chord_type) => Err(VoicingError::MissingRecipes { chord_type }),
            None => Ok(()),
        }
    }

    /// The standard recipe table.
    pub fn builtin() -> Self {
        use VoicingStyle::*;

        let mut catalog = Self::new();
        let mut add = |ct: ChordType,
                       id: &str,
                       name: &str,
                       style: VoicingStyle,
                       lh: &[i32],
                       rh: &[i32],
                       description: &str| {
            catalog.insert(ct, VoicingRecipe::new(id, name, style, lh, rh, description));
        };

        add(ChordType::Maj7, "maj7-shell", "Shell (3-7)", Shell, &[4, 11], &[2, 7], "Basic guide tones, essential maj7 sound");
        add(ChordType::Maj7, "maj7-rootless-a", "Rootless A", RootlessA, &[4, 7, 11, 2], &[6], "Classic Bill Evans voicing");
        add(ChordType::Maj7, "maj7-rootless-b", "Rootless B", RootlessB, &[11, 2, 4, 7], &[9], "Inverted rootless voicing");
        add(ChordType::Maj7, "maj7-full", "Full Voicing", Full, &[0, 7], &[4, 11, 2], "With root in bass");

        for (ct, prefix) in [(ChordType::Maj6, "maj6"), (ChordType::Six, "6")] {
            add(ct, &format!("{}-shell", prefix), "Shell (3-6)", Shell, &[4, 9], &[2, 7], "Guide tones for 6th chord");
            add(ct, &format!("{}-full", prefix), "Full Voicing", Full, &[0, 7], &[4, 9, 2], "Complete 6/9 sound");
        }

        add(ChordType::Min7, "m7-shell", "Shell (b3-b7)", Shell, &[3, 10], &[2, 7], "Essential minor 7th guide tones");
        add(ChordType::Min7, "m7-rootless-a", "Rootless A", RootlessA, &[3, 7, 10, 2], &[5], "Rootless voicing for ii chord");
        add(ChordType::Min7, "m7-rootless-b", "Rootless B", RootlessB, &[10, 2, 3, 7], &[9], "Inverted rootless minor");
        add(ChordType::Min7, "m7-quartal", "Quartal", Quartal, &[10, 2, 7], &[3, 10], "Modern stacked 4ths sound");
        add(ChordType::Min7, "m7-full", "Full Voicing", Full, &[0, 7], &[3, 10, 2], "With root in bass");

        add(ChordType::Min6, "m6-shell", "Shell (b3-6)", Shell, &[3, 9], &[2, 7], "Minor 6th guide tones");
        add(ChordType::Min6, "m6-full", "Full Voicing", Full, &[0, 7], &[3, 9, 2], "Tonic minor sound");

        add(ChordType::MinMaj7, "mMaj7-shell", "Shell (b3-7)", Shell, &[3, 11], &[2, 7], "Dramatic minor major 7 sound");
        add(ChordType::MinMaj7, "mMaj7-full", "Full Voicing", Full, &[0, 7], &[3, 11, 2], "With root, cinematic");

        add(ChordType::Dom7, "7-shell", "Shell (3-b7)", Shell, &[4, 10], &[2, 9], "Essential dominant guide tones");
        add(ChordType::Dom7, "7-shell-inv", "Shell (b7-3)", Shell, &[10, 4], &[2, 9], "Inverted shell voicing");
        add(ChordType::Dom7, "7-rootless-a", "Rootless A", RootlessA, &[4, 9, 10, 2], &[], "Classic dominant rootless");
        add(ChordType::Dom7, "7-rootless-b", "Rootless B", RootlessB, &[10, 2, 4, 9], &[], "Inverted dominant rootless");
        add(ChordType::Dom7, "7-full", "Full Voicing", Full, &[0, 7], &[4, 10, 2], "With root in bass");

        add(ChordType::Dom7Flat9, "7b9-shell", "Shell (3-b7-b9)", Shell, &[4, 10], &[1, 8], "Dark dominant sound");
        add(ChordType::Dom7Flat9, "7b9-rootless", "Rootless", RootlessA, &[4, 8, 10, 1], &[], "V to minor voicing");
        add(ChordType::Dom7Flat9, "7b9-full", "Full Voicing", Full, &[0], &[4, 10, 1, 8], "Complete altered sound");

        add(ChordType::Dom7Sharp9, "7#9-shell", "Shell (3-b7-#9)", Shell, &[4, 10], &[3, 8], "The Hendrix chord");
        add(ChordType::Dom7Sharp9, "7#9-rootless", "Rootless", RootlessA, &[4, 8, 10, 3], &[], "Bluesy altered voicing");
        add(ChordType::Dom7Sharp9, "7#9-full", "Full Voicing", Full, &[0], &[4, 10, 3], "Powerful blues sound");

        add(ChordType::Dom7Sharp5, "7#5-shell", "Shell (3-b7)", Shell, &[4, 10], &[8, 2], "Augmented dominant");
        add(ChordType::Dom7Sharp5, "7#5-full", "Full Voicing", Full, &[0, 8], &[4, 10, 2], "Strong augmented pull");

        add(ChordType::Dom7Flat13, "7b13-shell", "Shell (3-b7-b13)", Shell, &[4, 10], &[2, 8], "Rich approach sound");
        add(ChordType::Dom7Flat13, "7b13-rootless", "Rootless", RootlessA, &[4, 8, 10, 2], &[], "Smooth voice leading option");
        add(ChordType::Dom7Flat13, "7b13-full", "Full Voicing", Full, &[0], &[4, 10, 2, 8], "Complete b13 color");

        add(ChordType::Dom7Alt, "7alt-shell", "Shell (3-b7)", Shell, &[4, 10], &[1, 8], "Maximum tension shell");
        add(ChordType::Dom7Alt, "7alt-rootless", "Rootless", RootlessA, &[4, 8, 10, 1], &[3], "Full altered voicing");
        add(ChordType::Dom7Alt, "7alt-tritone", "Tritone Sub", RootlessB, &[10, 1, 4, 8], &[3], "Think tritone substitution");

        add(ChordType::HalfDim7, "m7b5-shell", "Shell (b3-b7)", Shell, &[3, 10], &[6, 2], "Half-diminished guide tones");
        add(ChordType::HalfDim7, "m7b5-rootless", "Rootless", RootlessA, &[3, 6, 10, 2], &[5], "ii chord in minor");
        add(ChordType::HalfDim7, "m7b5-full", "Full Voicing", Full, &[0, 6], &[3, 10, 2], "With root and b5");

        add(ChordType::Dim7, "dim7-shell", "Shell", Shell, &[3, 9], &[6, 0], "Symmetric diminished");
        add(ChordType::Dim7, "dim7-full", "Full Voicing", Full, &[0, 6], &[3, 9], "Complete dim7 stack");

        add(ChordType::Dom7Sus, "7sus-shell", "Shell (4-b7)", Shell, &[5, 10], &[2, 7], "Suspended guide tones");
        add(ChordType::Dom7Sus, "7sus-quartal", "Quartal", Quartal, &[10, 2, 7], &[5, 0], "Stacked 4ths, very \"So What\"");
        add(ChordType::Dom7Sus, "7sus-full", "Full Voicing", Full, &[0, 7], &[5, 10, 2], "With root");

        add(ChordType::Dom9Sus, "9sus-shell", "Shell (4-b7-9)", Shell, &[5, 10], &[2, 9], "Rich suspended sound");
        add(ChordType::Dom9Sus, "9sus-quartal", "Quartal", Quartal, &[10, 2, 7], &[5, 9], "Open quartal voicing");
        add(ChordType::Dom9Sus, "9sus-full", "Full Voicing", Full, &[0, 7], &[5, 10, 2, 9], "Complete 9sus4 sound");

        catalog
    }
}
