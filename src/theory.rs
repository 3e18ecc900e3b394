//! # Theory Tables
//!
//! Static music-theory data used by the rest of the crate.
//!
//! ## Contents
//! - [`NoteName`] - The 17 pitch-class spellings (naturals, sharps, flats)
//! - [`ChordType`] - Closed set of supported chord qualities
//! - [`ChordDefinition`] - Defining intervals and available tensions per chord type
//! - [`ChordCategory`] - Grouping used by the chord reference view
//! - Interval and scale-degree display names
//! - Chord symbol formatting (`Dm7`, `G7(b9)`)
//!
//! Nothing in this module computes anything beyond table lookups.
//!
//! ## Interval Reference
//! ```text
//!  0 R    1 b9   2 9    3 #9/b3   4 3    5 11
//!  6 #11  7 5    8 b13  9 13     10 b7  11 7
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VoicingError;

/// Pitch-class spelling.
///
/// Both enharmonic spellings of each black key are representable. Which one the
/// engine produces is controlled by the session's `prefer_flats` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "Db")]
    DFlat,
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    EFlat,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "Gb")]
    GFlat,
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "Ab")]
    AFlat,
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "Bb")]
    BFlat,
    B,
}

impl NoteName {
    /// Sharp spellings indexed by pitch class.
    pub const SHARPS: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Flat spellings indexed by pitch class.
    pub const FLATS: [NoteName; 12] = [
        NoteName::C,
        NoteName::DFlat,
        NoteName::D,
        NoteName::EFlat,
        NoteName::E,
        NoteName::F,
        NoteName::GFlat,
        NoteName::G,
        NoteName::AFlat,
        NoteName::A,
        NoteName::BFlat,
        NoteName::B,
    ];

    /// The spelling table for a session.
    pub fn spellings(prefer_flats: bool) -> &'static [NoteName; 12] {
        if prefer_flats {
            &Self::FLATS
        } else {
            &Self::SHARPS
        }
    }

    /// Pitch class (0-11, C = 0).
    pub fn pitch_class(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp | NoteName::DFlat => 1,
            NoteName::D => 2,
            NoteName::DSharp | NoteName::EFlat => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp | NoteName::GFlat => 6,
            NoteName::G => 7,
            NoteName::GSharp | NoteName::AFlat => 8,
            NoteName::A => 9,
            NoteName::ASharp | NoteName::BFlat => 10,
            NoteName::B => 11,
        }
    }

    /// Spell a pitch class. Any integer is accepted and reduced modulo 12.
    pub fn from_pitch_class(pitch_class: i32, prefer_flats: bool) -> NoteName {
        Self::spellings(prefer_flats)[pitch_class.rem_euclid(12) as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::DFlat => "Db",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::EFlat => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::GFlat => "Gb",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::AFlat => "Ab",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::BFlat => "Bb",
            NoteName::B => "B",
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = VoicingError;

    /// Parse a spelling like "C", "F#", "Bb".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NoteName::SHARPS
            .iter()
            .chain(NoteName::FLATS.iter())
            .copied()
            .find(|name| name.as_str() == trimmed)
            .ok_or_else(|| VoicingError::UnknownNote(trimmed.to_string()))
    }
}

/// Supported chord qualities.
///
/// The set is closed: every variant must have a definition and at least one
/// voicing recipe. Serialized with the short codes used in recipe catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChordType {
    #[serde(rename = "maj7")]
    Maj7,
    #[serde(rename = "maj6")]
    Maj6,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "m7")]
    Min7,
    #[serde(rename = "m6")]
    Min6,
    #[serde(rename = "mMaj7")]
    MinMaj7,
    #[serde(rename = "7")]
    Dom7,
    #[serde(rename = "7b9")]
    Dom7Flat9,
    #[serde(rename = "7#9")]
    Dom7Sharp9,
    #[serde(rename = "7#5")]
    Dom7Sharp5,
    #[serde(rename = "7b13")]
    Dom7Flat13,
    #[serde(rename = "7alt")]
    Dom7Alt,
    #[serde(rename = "m7b5")]
    HalfDim7,
    #[serde(rename = "dim7")]
    Dim7,
    #[serde(rename = "7sus")]
    Dom7Sus,
    #[serde(rename = "9sus")]
    Dom9Sus,
}

impl ChordType {
    pub const ALL: [ChordType; 16] = [
        ChordType::Maj7,
        ChordType::Maj6,
        ChordType::Six,
        ChordType::Min7,
        ChordType::Min6,
        ChordType::MinMaj7,
        ChordType::Dom7,
        ChordType::Dom7Flat9,
        ChordType::Dom7Sharp9,
        ChordType::Dom7Sharp5,
        ChordType::Dom7Flat13,
        ChordType::Dom7Alt,
        ChordType::HalfDim7,
        ChordType::Dim7,
        ChordType::Dom7Sus,
        ChordType::Dom9Sus,
    ];

    /// Catalog code ("maj7", "7b9", ...).
    pub fn code(self) -> &'static str {
        match self {
            ChordType::Maj7 => "maj7",
            ChordType::Maj6 => "maj6",
            ChordType::Six => "6",
            ChordType::Min7 => "m7",
            ChordType::Min6 => "m6",
            ChordType::MinMaj7 => "mMaj7",
            ChordType::Dom7 => "7",
            ChordType::Dom7Flat9 => "7b9",
            ChordType::Dom7Sharp9 => "7#9",
            ChordType::Dom7Sharp5 => "7#5",
            ChordType::Dom7Flat13 => "7b13",
            ChordType::Dom7Alt => "7alt",
            ChordType::HalfDim7 => "m7b5",
            ChordType::Dim7 => "dim7",
            ChordType::Dom7Sus => "7sus",
            ChordType::Dom9Sus => "9sus",
        }
    }

    /// Minor-third family (minor, half-diminished, diminished).
    pub fn is_minor(self) -> bool {
        matches!(
            self,
            ChordType::Min7
                | ChordType::Min6
                | ChordType::MinMaj7
                | ChordType::HalfDim7
                | ChordType::Dim7
        )
    }

    pub fn category(self) -> ChordCategory {
        match self {
            ChordType::Maj7 | ChordType::Maj6 | ChordType::Six => ChordCategory::Major,
            ChordType::Min7 | ChordType::Min6 | ChordType::MinMaj7 => ChordCategory::Minor,
            ChordType::Dom7
            | ChordType::Dom7Flat9
            | ChordType::Dom7Sharp9
            | ChordType::Dom7Sharp5
            | ChordType::Dom7Flat13
            | ChordType::Dom7Alt => ChordCategory::Dominant,
            ChordType::HalfDim7 | ChordType::Dim7 => ChordCategory::Diminished,
            ChordType::Dom7Sus | ChordType::Dom9Sus => ChordCategory::Suspended,
        }
    }

    /// Suffix appended to the root in a chord symbol (`G` + `7(b9)`).
    pub fn symbol_suffix(self) -> &'static str {
        match self {
            ChordType::Maj7 => "maj7",
            ChordType::Maj6 | ChordType::Six => "6",
            ChordType::Min7 => "m7",
            ChordType::Min6 => "m6",
            ChordType::MinMaj7 => "m(maj7)",
            ChordType::Dom7 => "7",
            ChordType::Dom7Flat9 => "7(b9)",
            ChordType::Dom7Sharp9 => "7(#9)",
            ChordType::Dom7Sharp5 => "7(#5)",
            ChordType::Dom7Flat13 => "7(b13)",
            ChordType::Dom7Alt => "7alt",
            ChordType::HalfDim7 => "m7b5",
            ChordType::Dim7 => "°7",
            ChordType::Dom7Sus => "7sus4",
            ChordType::Dom9Sus => "9sus4",
        }
    }

    /// Full definition of this chord type.
    pub fn definition(self) -> ChordDefinition {
        let (name, short_name, intervals, tensions, description): (
            &'static str,
            &'static str,
            &'static [i32],
            &'static [i32],
            &'static str,
        ) = match self {
            ChordType::Maj7 => (
                "Major 7th",
                "maj7",
                &[0, 4, 7, 11],
                &[2, 6, 9],
                "Bright, stable major sound with major 7th",
            ),
            ChordType::Maj6 | ChordType::Six => (
                "Major 6th",
                "6",
                &[0, 4, 7, 9],
                &[2],
                "Classic major sound, less \"jazzy\" than maj7",
            ),
            ChordType::Min7 => (
                "Minor 7th",
                "m7",
                &[0, 3, 7, 10],
                &[2, 5, 9],
                "Warm minor sound, very common in jazz",
            ),
            ChordType::Min6 => (
                "Minor 6th",
                "m6",
                &[0, 3, 7, 9],
                &[2],
                "Minor with major 6th, tonic minor sound",
            ),
            ChordType::MinMaj7 => (
                "Minor Major 7th",
                "m(maj7)",
                &[0, 3, 7, 11],
                &[2, 9],
                "Dramatic minor sound with major 7th tension",
            ),
            ChordType::Dom7 => (
                "Dominant 7th",
                "7",
                &[0, 4, 7, 10],
                &[2, 9],
                "The classic V chord, creates tension/resolution",
            ),
            ChordType::Dom7Flat9 => (
                "Dominant 7 flat 9",
                "7(b9)",
                &[0, 4, 7, 10, 1],
                &[8],
                "Dark dominant, common on V to minor",
            ),
            ChordType::Dom7Sharp9 => (
                "Dominant 7 sharp 9",
                "7(#9)",
                &[0, 4, 7, 10, 3],
                &[8],
                "The \"Hendrix chord\", bluesy and aggressive",
            ),
            ChordType::Dom7Sharp5 => (
                "Dominant 7 sharp 5",
                "7(#5)",
                &[0, 4, 8, 10],
                &[2, 1],
                "Augmented dominant, creates strong pull",
            ),
            ChordType::Dom7Flat13 => (
                "Dominant 7 flat 13",
                "7(b13)",
                &[0, 4, 7, 10, 8],
                &[2],
                "Rich altered sound, common approach chord",
            ),
            ChordType::Dom7Alt => (
                "Altered Dominant",
                "7alt",
                &[0, 4, 8, 10, 1, 3],
                &[],
                "Fully altered dominant, maximum tension",
            ),
            ChordType::HalfDim7 => (
                "Half-Diminished",
                "ø7",
                &[0, 3, 6, 10],
                &[2, 5, 8],
                "The ii chord in minor keys",
            ),
            ChordType::Dim7 => (
                "Diminished 7th",
                "°7",
                &[0, 3, 6, 9],
                &[],
                "Symmetric, can resolve multiple ways",
            ),
            ChordType::Dom7Sus => (
                "Dominant 7 sus4",
                "7sus4",
                &[0, 5, 7, 10],
                &[2, 9],
                "Suspended dominant, delays resolution",
            ),
            ChordType::Dom9Sus => (
                "Dominant 9 sus4",
                "9sus4",
                &[0, 5, 7, 10, 2],
                &[9],
                "Rich suspended sound with 9th",
            ),
        };

        ChordDefinition {
            chord_type: self,
            name,
            short_name,
            intervals,
            tensions,
            description,
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ChordType {
    type Err = VoicingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ChordType::ALL
            .iter()
            .copied()
            .find(|ct| ct.code() == trimmed)
            .ok_or_else(|| VoicingError::UnknownChordType(trimmed.to_string()))
    }
}

/// Defining tones and reference tensions of a chord type.
///
/// `intervals` always starts with the root (0). `tensions` are for display only;
/// the engine never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDefinition {
    pub chord_type: ChordType,
    pub name: &'static str,
    pub short_name: &'static str,
    pub intervals: &'static [i32],
    pub tensions: &'static [i32],
    pub description: &'static str,
}

/// Chord family grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChordCategory {
    Major,
    Minor,
    Dominant,
    Diminished,
    Suspended,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 5] = [
        ChordCategory::Major,
        ChordCategory::Minor,
        ChordCategory::Dominant,
        ChordCategory::Diminished,
        ChordCategory::Suspended,
    ];

    /// Chord types of this category in table order.
    pub fn chord_types(self) -> Vec<ChordType> {
        ChordType::ALL
            .iter()
            .copied()
            .filter(|ct| ct.category() == self)
            .collect()
    }
}

/// Generic interval name for a semitone offset (0-11, reduced modulo 12).
pub fn interval_name(interval: i32) -> &'static str {
    match interval.rem_euclid(12) {
        0 => "R",
        1 => "b2",
        2 => "2/9",
        3 => "b3/#9",
        4 => "3",
        5 => "4/11",
        6 => "b5/#11",
        7 => "5",
        8 => "#5/b13",
        9 => "6/13",
        10 => "b7",
        _ => "7",
    }
}

/// Scale-degree name of an interval in the context of a chord.
///
/// Offset 3 reads as "b3" on minor-family chords and "#9" otherwise.
///
/// # Examples
/// ```
/// use pianovoice::{degree_name, ChordType};
///
/// assert_eq!(degree_name(3, ChordType::Min7), "b3");
/// assert_eq!(degree_name(3, ChordType::Dom7Sharp9), "#9");
/// assert_eq!(degree_name(14, ChordType::Maj7), "9");
/// ```
pub fn degree_name(interval: i32, chord_type: ChordType) -> &'static str {
    match interval.rem_euclid(12) {
        0 => "R",
        1 => "b9",
        2 => "9",
        3 if chord_type.is_minor() => "b3",
        3 => "#9",
        4 => "3",
        5 => "11",
        6 => "#11",
        7 => "5",
        8 => "b13",
        9 => "13",
        10 => "b7",
        _ => "7",
    }
}

/// Chord symbol such as `Dm7`, `G7(b9)` or `B°7`.
pub fn format_chord_symbol(root: NoteName, chord_type: ChordType) -> String {
    format!("{}{}", root, chord_type.symbol_suffix())
}
