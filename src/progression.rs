//! # Progression Generator
//!
//! Expands progression templates (scale degree + chord type) into concrete
//! chords in a key, and stretches them to a bar count.
//!
//! ## Degree Roots
//! Degrees map onto the major scale of the key (1 = tonic, 2 = major 2nd, ...,
//! 7 = major 7th). A template chord may be marked *flatted*, which lowers its
//! root one more semitone (the bVII of a backdoor cadence, the bVI of Coltrane
//! changes).
//!
//! ## Example
//! ```rust
//! use pianovoice::{realize_progression, template_by_id, NoteName};
//!
//! let template = template_by_id("ii-v-i-major").unwrap();
//! let chords = realize_progression(template, NoteName::C, true);
//! let symbols: Vec<&str> = chords.iter().map(|c| c.symbol.as_str()).collect();
//!
//! assert_eq!(symbols, vec!["Dm7", "G7", "Cmaj7"]);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::pitch::{degree_root, transpose};
use crate::theory::ChordType::*;
use crate::theory::{format_chord_symbol, ChordType, NoteName};

/// One chord of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionChord {
    /// Scale degree, 1-7.
    pub degree: u8,
    pub chord_type: ChordType,
    /// Roman-numeral display symbol such as `iim7`.
    pub symbol: &'static str,
    /// Root sits a semitone below the diatonic degree. `degree` still names
    /// the diatonic degree before flattening, so Coltrane's bVImaj7 is degree 6.
    pub flatted: bool,
}

impl ProgressionChord {
    pub const fn diatonic(degree: u8, chord_type: ChordType, symbol: &'static str) -> Self {
        Self {
            degree,
            chord_type,
            symbol,
            flatted: false,
        }
    }

    pub const fn flatted(degree: u8, chord_type: ChordType, symbol: &'static str) -> Self {
        Self {
            degree,
            chord_type,
            symbol,
            flatted: true,
        }
    }
}

/// A named chord sequence in scale degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub chords: &'static [ProgressionChord],
    pub description: &'static str,
}

/// A template chord placed in a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedChord {
    pub root: NoteName,
    pub chord_type: ChordType,
    /// Chord symbol in the key, e.g. `Dm7`.
    pub symbol: String,
    /// Roman-numeral symbol from the template, e.g. `iim7`.
    pub numeral: &'static str,
    pub degree: u8,
}

static TEMPLATES: [ProgressionTemplate; 11] = [
    ProgressionTemplate {
        id: "ii-v-i-major",
        name: "ii-V-I (Major)",
        short_name: "ii-V-I",
        chords: &[
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
        ],
        description: "The most common jazz progression",
    },
    ProgressionTemplate {
        id: "ii-v-i-minor",
        name: "ii-V-i (Minor)",
        short_name: "ii-V-i",
        chords: &[
            ProgressionChord::diatonic(2, HalfDim7, "iiø7"),
            ProgressionChord::diatonic(5, Dom7Flat9, "V7b9"),
            ProgressionChord::diatonic(1, Min7, "im7"),
        ],
        description: "Minor key ii-V-i with altered dominant",
    },
    ProgressionTemplate {
        id: "i-vi-ii-v",
        name: "I-vi-ii-V (Turnaround)",
        short_name: "Turnaround",
        chords: &[
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
            ProgressionChord::diatonic(6, Min7, "vim7"),
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
        ],
        description: "Classic turnaround progression",
    },
    ProgressionTemplate {
        id: "iii-vi-ii-v",
        name: "iii-vi-ii-V",
        short_name: "iii-vi-ii-V",
        chords: &[
            ProgressionChord::diatonic(3, Min7, "iiim7"),
            ProgressionChord::diatonic(6, Dom7, "VI7"),
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
        ],
        description: "Extended turnaround with secondary dominant",
    },
    ProgressionTemplate {
        id: "backdoor",
        name: "Backdoor (iv-bVII-I)",
        short_name: "Backdoor",
        chords: &[
            ProgressionChord::diatonic(4, Min7, "ivm7"),
            ProgressionChord::flatted(7, Dom7, "bVII7"),
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
        ],
        description: "Backdoor resolution via bVII",
    },
    ProgressionTemplate {
        id: "sus-cadence",
        name: "Sus Cadence (ii-V9sus-I)",
        short_name: "Sus Cadence",
        chords: &[
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom9Sus, "V9sus"),
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
        ],
        description: "Smooth sus4 resolution",
    },
    ProgressionTemplate {
        id: "rhythm-changes-a",
        name: "Rhythm Changes A",
        short_name: "Rhythm A",
        chords: &[
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
            ProgressionChord::diatonic(6, Dom7, "VI7"),
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
            ProgressionChord::diatonic(6, Dom7, "VI7"),
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
        ],
        description: "First 8 bars of rhythm changes",
    },
    ProgressionTemplate {
        id: "minor-blues",
        name: "Minor Blues (first 4)",
        short_name: "Minor Blues",
        chords: &[
            ProgressionChord::diatonic(1, Min7, "im7"),
            ProgressionChord::diatonic(4, Min7, "ivm7"),
            ProgressionChord::diatonic(1, Min7, "im7"),
            ProgressionChord::diatonic(1, Min7, "im7"),
        ],
        description: "First 4 bars of minor blues",
    },
    ProgressionTemplate {
        id: "coltrane-turnaround",
        name: "Coltrane Changes",
        short_name: "Coltrane",
        chords: &[
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
            ProgressionChord::flatted(3, Dom7, "V7/bVI"),
            ProgressionChord::flatted(6, Maj7, "bVImaj7"),
            ProgressionChord::diatonic(5, Dom7, "V7"),
        ],
        description: "Giant Steps-style changes (simplified)",
    },
    ProgressionTemplate {
        id: "altered-ii-v-i",
        name: "Altered ii-V-I",
        short_name: "Altered ii-V-I",
        chords: &[
            ProgressionChord::diatonic(2, Min7, "iim7"),
            ProgressionChord::diatonic(5, Dom7Alt, "V7alt"),
            ProgressionChord::diatonic(1, Maj7, "Imaj7"),
        ],
        description: "ii-V-I with fully altered dominant",
    },
    ProgressionTemplate {
        id: "minor-cliche",
        name: "Minor Line Cliche",
        short_name: "Minor Cliche",
        chords: &[
            ProgressionChord::diatonic(1, Min7, "im7"),
            ProgressionChord::diatonic(1, MinMaj7, "im(maj7)"),
            ProgressionChord::diatonic(1, Min7, "im7"),
            ProgressionChord::diatonic(1, Min6, "im6"),
        ],
        description: "Descending chromatic line on minor",
    },
];

/// All built-in templates.
pub fn templates() -> &'static [ProgressionTemplate] {
    &TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static ProgressionTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Progression id that asks for a uniformly random template.
pub const RANDOM_PROGRESSION: &str = "random";

/// Uniformly random built-in template.
pub fn random_template<R: Rng + ?Sized>(rng: &mut R) -> &'static ProgressionTemplate {
    TEMPLATES.choose(rng).unwrap_or(&TEMPLATES[0])
}

/// Place every chord of a template in `key`.
pub fn realize_progression(
    template: &ProgressionTemplate,
    key: NoteName,
    prefer_flats: bool,
) -> Vec<RealizedChord> {
    template
        .chords
        .iter()
        .map(|chord| {
            let mut root = degree_root(key, chord.degree, prefer_flats);
            if chord.flatted {
                root = transpose(root, -1, prefer_flats);
            }
            RealizedChord {
                root,
                chord_type: chord.chord_type,
                symbol: format_chord_symbol(root, chord.chord_type),
                numeral: chord.symbol,
                degree: chord.degree,
            }
        })
        .collect()
}

/// Repeat or truncate `chords` to exactly `target_bars` entries.
///
/// An empty input stays empty.
pub fn extend_progression(chords: &[RealizedChord], target_bars: usize) -> Vec<RealizedChord> {
    chords.iter().cycle().take(target_bars).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn symbols(chords: &[RealizedChord]) -> Vec<&str> {
        chords.iter().map(|c| c.symbol.as_str()).collect()
    }

    #[test]
    fn test_random_template_draws_from_builtins() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen: Vec<&str> = Vec::new();
        for _ in 0..200 {
            let template = random_template(&mut rng);
            assert!(templates().iter().any(|t| t.id == template.id));
            if !seen.contains(&template.id) {
                seen.push(template.id);
            }
        }
        assert!(seen.len() > 1);
        assert!(template_by_id(RANDOM_PROGRESSION).is_none());
    }

    #[test]
    fn test_template_ids_are_unique() {
        let mut ids: Vec<&str> = templates().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn test_ii_v_i_in_f() {
        let chords = realize_progression(template_by_id("ii-v-i-major").unwrap(), NoteName::F, true);
        assert_eq!(symbols(&chords), vec!["Gm7", "C7", "Fmaj7"]);
        assert_eq!(chords[0].numeral, "iim7");
        assert_eq!(chords[0].degree, 2);
    }

    #[test]
    fn test_backdoor_flattens_seventh() {
        let chords = realize_progression(template_by_id("backdoor").unwrap(), NoteName::C, true);
        assert_eq!(symbols(&chords), vec!["Fm7", "Bb7", "Cmaj7"]);

        let sharps = realize_progression(template_by_id("backdoor").unwrap(), NoteName::C, false);
        assert_eq!(sharps[1].root, NoteName::ASharp);
    }

    #[test]
    fn test_coltrane_changes() {
        let chords = realize_progression(
            template_by_id("coltrane-turnaround").unwrap(),
            NoteName::C,
            true,
        );
        assert_eq!(symbols(&chords), vec!["Cmaj7", "Eb7", "Abmaj7", "G7"]);
        // flatted chords keep their diatonic degree
        assert_eq!(chords[2].numeral, "bVImaj7");
        assert_eq!(chords[2].degree, 6);
    }

    #[test]
    fn test_minor_ii_v_i_in_sharp_key() {
        let chords = realize_progression(template_by_id("ii-v-i-minor").unwrap(), NoteName::E, false);
        assert_eq!(symbols(&chords), vec!["F#m7b5", "B7(b9)", "Em7"]);
    }

    #[test]
    fn test_extend_repeats_from_start() {
        let chords = realize_progression(template_by_id("ii-v-i-major").unwrap(), NoteName::C, true);
        let extended = extend_progression(&chords, 8);
        assert_eq!(
            symbols(&extended),
            vec!["Dm7", "G7", "Cmaj7", "Dm7", "G7", "Cmaj7", "Dm7", "G7"]
        );
    }

    #[test]
    fn test_extend_truncates() {
        let chords = realize_progression(template_by_id("rhythm-changes-a").unwrap(), NoteName::BFlat, true);
        let truncated = extend_progression(&chords, 3);
        assert_eq!(truncated, chords[..3].to_vec());
        assert!(extend_progression(&chords, 0).is_empty());
    }

    #[test]
    fn test_extend_empty_input() {
        assert!(extend_progression(&[], 8).is_empty());
    }

    #[test]
    fn test_unknown_template() {
        assert!(template_by_id("giant-steps-full").is_none());
    }
}
