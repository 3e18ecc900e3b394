//! # Voicing Realization Engine
//!
//! Turns an abstract chord plus a voicing recipe into concrete pitches for each
//! hand, and picks recipes and hand positions across a progression.
//!
//! ## Registers
//! ```text
//! Left hand   [36, 55]  C2 .. G3
//! Right hand  [55, 84]  G3 .. C6
//! ```
//! The two windows share G3 so rootless voicings can sit close together.
//!
//! ## Placement
//! Each hand interval is reduced to a pitch class and placed at the octave
//! nearest that hand's anchor, folded into the window. Notes within one hand are
//! placed in recipe order. A note that does not land above the previous one is
//! raised an octave. When there is no room above, the notes already placed are
//! moved down an octave if they all fit; otherwise the note goes an octave below
//! its raised position and is folded back into the window. That last case is the
//! only one where recipe order and pitch order can disagree. Each hand is
//! finally sorted by pitch, and no pitch is ever emitted twice within a hand.
//!
//! ## Selection
//! - Smooth: minimize [`voice_leading_distance`] from the previous voicing over
//!   every matching recipe × [`Anchors::grid`]; first minimum wins.
//! - Random: uniform recipe, uniform anchor pair from the same grid.
//!
//! ## Example
//! ```rust
//! use pianovoice::{realize_voicing, Anchors, ChordType, NoteName, VoicingRecipe, VoicingStyle};
//!
//! let recipe = VoicingRecipe::new("shell", "Shell", VoicingStyle::Shell, &[4, 11], &[2, 7], "");
//! let voicing = realize_voicing(NoteName::C, ChordType::Maj7, &recipe, true, Anchors::default());
//!
//! assert_eq!(voicing.left_hand_pitches(), vec![40, 47]); // E2 B2
//! assert_eq!(voicing.right_hand_pitches(), vec![62, 67]); // D4 G4
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::VoicingError;
use crate::pitch::{format_notes, Note, OCTAVE};
use crate::recipes::{VoicingCatalog, VoicingRecipe, VoicingStyle};
use crate::theory::{format_chord_symbol, ChordType, NoteName};

/// Inclusive pitch window for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandRange {
    pub low: i32,
    pub high: i32,
}

/// C2 to G3.
pub const LEFT_HAND_RANGE: HandRange = HandRange { low: 36, high: 55 };

/// G3 to C6.
pub const RIGHT_HAND_RANGE: HandRange = HandRange { low: 55, high: 84 };

/// C3.
pub const DEFAULT_LEFT_ANCHOR: i32 = 48;

/// G4.
pub const DEFAULT_RIGHT_ANCHOR: i32 = 67;

/// Alternate left-hand anchors tried by smooth selection: A2, C3, Eb3.
pub const LEFT_ANCHORS: [i32; 3] = [45, 48, 51];

/// Alternate right-hand anchors tried by smooth selection: E4, G4, Bb4.
pub const RIGHT_ANCHORS: [i32; 3] = [64, 67, 70];

/// Distance charged for a previous note when the candidate has no notes at all.
pub const MISSING_NOTE_PENALTY: i32 = 12;

/// Windows are at most two octaves wide, so folding never needs more shifts.
const MAX_OCTAVE_SHIFTS: usize = 2;

impl HandRange {
    pub fn contains(&self, pitch: i32) -> bool {
        (self.low..=self.high).contains(&pitch)
    }

    /// Shift by whole octaves until inside the window.
    fn fold(&self, mut pitch: i32) -> i32 {
        for _ in 0..MAX_OCTAVE_SHIFTS {
            if pitch < self.low {
                pitch += OCTAVE;
            } else if pitch > self.high {
                pitch -= OCTAVE;
            } else {
                break;
            }
        }
        pitch
    }

    /// Pitch of `pitch_class` closest to `anchor`, folded into the window.
    ///
    /// The anchor itself is first clamped into the window. A tritone tie
    /// resolves upward.
    fn nearest(&self, pitch_class: i32, anchor: i32) -> i32 {
        let anchor = anchor.clamp(self.low, self.high);
        let above = anchor + (pitch_class - anchor).rem_euclid(OCTAVE);
        let pitch = if above - anchor > OCTAVE / 2 {
            above - OCTAVE
        } else {
            above
        };
        self.fold(pitch)
    }

    /// Every pitch of a pitch class inside the window, ascending.
    fn positions(&self, pitch_class: i32) -> impl Iterator<Item = i32> + '_ {
        (self.low..=self.high).filter(move |p| p.rem_euclid(OCTAVE) == pitch_class)
    }
}

/// Hand anchor pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchors {
    pub left: i32,
    pub right: i32,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_ANCHOR,
            right: DEFAULT_RIGHT_ANCHOR,
        }
    }
}

impl Anchors {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// The 3 × 3 candidate grid, left anchor outermost.
    pub fn grid() -> impl Iterator<Item = Anchors> {
        LEFT_ANCHORS
            .into_iter()
            .flat_map(|left| RIGHT_ANCHORS.into_iter().map(move |right| Anchors { left, right }))
    }
}

/// A realized voicing: concrete notes for each hand, both ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub root: NoteName,
    pub chord_type: ChordType,
    pub recipe: VoicingRecipe,
    pub left_hand: Vec<Note>,
    pub right_hand: Vec<Note>,
}

impl Voicing {
    /// Both hands merged, ascending.
    pub fn all_notes(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .left_hand
            .iter()
            .chain(self.right_hand.iter())
            .copied()
            .collect();
        notes.sort_by_key(|n| n.pitch);
        notes
    }

    pub fn left_hand_pitches(&self) -> Vec<i32> {
        self.left_hand.iter().map(|n| n.pitch).collect()
    }

    pub fn right_hand_pitches(&self) -> Vec<i32> {
        self.right_hand.iter().map(|n| n.pitch).collect()
    }

    pub fn symbol(&self) -> String {
        format_chord_symbol(self.root, self.chord_type)
    }

    /// One-line summary such as `Cmaj7  LH: E2 B2  RH: D4 G4`.
    pub fn describe(&self) -> String {
        format!(
            "{}  LH: {}  RH: {}",
            self.symbol(),
            format_notes(&self.left_hand),
            format_notes(&self.right_hand)
        )
    }
}

/// Realize a recipe on a root at the given anchors.
///
/// Pure and deterministic. Empty interval lists give an empty hand.
pub fn realize_voicing(
    root: NoteName,
    chord_type: ChordType,
    recipe: &VoicingRecipe,
    prefer_flats: bool,
    anchors: Anchors,
) -> Voicing {
    let root_pc = root.pitch_class();
    let spell = |pitches: Vec<i32>| -> Vec<Note> {
        pitches
            .into_iter()
            .map(|p| Note::from_pitch(p, prefer_flats))
            .collect()
    };

    Voicing {
        root,
        chord_type,
        recipe: recipe.clone(),
        left_hand: spell(place_hand(
            root_pc,
            &recipe.left_hand,
            LEFT_HAND_RANGE,
            anchors.left,
        )),
        right_hand: spell(place_hand(
            root_pc,
            &recipe.right_hand,
            RIGHT_HAND_RANGE,
            anchors.right,
        )),
    }
}

/// Place one hand's intervals, returning ascending pitches.
fn place_hand(root_pc: i32, intervals: &[i32], range: HandRange, anchor: i32) -> Vec<i32> {
    let mut placed: Vec<i32> = Vec::with_capacity(intervals.len());

    for &interval in intervals {
        // reduce before adding so catalog intervals near i32::MAX cannot overflow
        let pitch_class = (root_pc + interval.rem_euclid(OCTAVE)).rem_euclid(OCTAVE);
        let mut pitch = range.nearest(pitch_class, anchor);

        if let Some(&previous) = placed.last() {
            if pitch <= previous {
                pitch = uncrowd(pitch, previous, &mut placed, range);
            }
        }

        if placed.contains(&pitch) {
            let free = range
                .positions(pitch_class)
                .filter(|p| !placed.contains(p))
                .min_by_key(|p| (p - pitch).abs());
            match free {
                Some(free) => pitch = free,
                None => {
                    warn!(interval, "no free octave left in hand window, dropping note");
                    continue;
                }
            }
        }

        placed.push(pitch);
    }

    placed.sort_unstable();
    placed
}

/// Resolve a note that landed at or below the previous note of its hand.
fn uncrowd(pitch: i32, previous: i32, placed: &mut [i32], range: HandRange) -> i32 {
    let mut raised = pitch;
    for _ in 0..MAX_OCTAVE_SHIFTS {
        if raised > previous {
            break;
        }
        raised += OCTAVE;
    }
    if raised > previous && raised <= range.high {
        return raised;
    }

    // No room above: re-seat the earlier notes an octave down if they all fit.
    if pitch > previous - OCTAVE && placed.iter().all(|&p| p - OCTAVE >= range.low) {
        for p in placed.iter_mut() {
            *p -= OCTAVE;
        }
        return pitch;
    }

    // Register pressure: an octave under the raised pitch. Ordering against the
    // previous note is not guaranteed here.
    range.fold(pitch - OCTAVE)
}

/// Sum over previous notes of the distance to the nearest candidate note.
///
/// Order-insensitive within each voicing, zero for identical pitch sets. A
/// previous note costs [`MISSING_NOTE_PENALTY`] when the candidate is empty.
pub fn voice_leading_distance(previous: &Voicing, candidate: &Voicing) -> i32 {
    let candidate_pitches: Vec<i32> = candidate.all_notes().iter().map(|n| n.pitch).collect();

    previous
        .left_hand
        .iter()
        .chain(previous.right_hand.iter())
        .map(|note| {
            candidate_pitches
                .iter()
                .map(|p| (p - note.pitch).abs())
                .min()
                .unwrap_or(MISSING_NOTE_PENALTY)
        })
        .sum()
}

/// Recipe selection over a validated catalog.
#[derive(Debug, Clone)]
pub struct VoicingEngine {
    catalog: VoicingCatalog,
}

impl VoicingEngine {
    /// Wrap a catalog, failing fast if any chord type has no recipes.
    pub fn new(catalog: VoicingCatalog) -> Result<Self, VoicingError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// Engine over the built-in recipe table.
    pub fn builtin() -> Result<Self, VoicingError> {
        Self::new(VoicingCatalog::builtin())
    }

    pub fn catalog(&self) -> &VoicingCatalog {
        &self.catalog
    }

    /// Recipes eligible for a chord under a style filter.
    ///
    /// Falls back to the chord type's first recipe when the filter matches
    /// nothing.
    pub fn candidate_recipes(
        &self,
        chord_type: ChordType,
        styles: &[VoicingStyle],
    ) -> Result<Vec<&VoicingRecipe>, VoicingError> {
        let matching = self.catalog.matching(chord_type, styles);
        if !matching.is_empty() {
            return Ok(matching);
        }

        let first = self
            .catalog
            .recipes_for(chord_type)
            .first()
            .ok_or(VoicingError::MissingRecipes { chord_type })?;
        warn!(
            chord_type = chord_type.code(),
            fallback = first.id.as_str(),
            "no recipe matches style filter, using first registered recipe"
        );
        Ok(vec![first])
    }

    /// Pick the voicing that moves least from `previous`.
    ///
    /// Without a previous voicing the first eligible recipe is realized at the
    /// default anchors.
    pub fn choose_smooth_voicing(
        &self,
        root: NoteName,
        chord_type: ChordType,
        previous: Option<&Voicing>,
        styles: &[VoicingStyle],
        prefer_flats: bool,
    ) -> Result<Voicing, VoicingError> {
        let recipes = self.candidate_recipes(chord_type, styles)?;

        let previous = match previous {
            Some(previous) => previous,
            None => {
                return Ok(realize_voicing(
                    root,
                    chord_type,
                    recipes[0],
                    prefer_flats,
                    Anchors::default(),
                ))
            }
        };

        let mut best: Option<(i32, Voicing)> = None;
        for recipe in recipes {
            for anchors in Anchors::grid() {
                let candidate = realize_voicing(root, chord_type, recipe, prefer_flats, anchors);
                let distance = voice_leading_distance(previous, &candidate);
                if best.as_ref().map_or(true, |(d, _)| distance < *d) {
                    best = Some((distance, candidate));
                }
            }
        }

        match best {
            Some((distance, voicing)) => {
                debug!(
                    chord = %voicing.symbol(),
                    recipe = voicing.recipe.id.as_str(),
                    distance,
                    "selected smooth voicing"
                );
                Ok(voicing)
            }
            None => Err(VoicingError::MissingRecipes { chord_type }),
        }
    }

    /// Uniformly random eligible recipe at a uniformly random anchor pair.
    pub fn choose_random_voicing<R: Rng + ?Sized>(
        &self,
        root: NoteName,
        chord_type: ChordType,
        styles: &[VoicingStyle],
        prefer_flats: bool,
        rng: &mut R,
    ) -> Result<Voicing, VoicingError> {
        let recipes = self.candidate_recipes(chord_type, styles)?;
        let recipe = recipes
            .choose(rng)
            .ok_or(VoicingError::MissingRecipes { chord_type })?;
        let left = *LEFT_ANCHORS.choose(rng).unwrap_or(&DEFAULT_LEFT_ANCHOR);
        let right = *RIGHT_ANCHORS.choose(rng).unwrap_or(&DEFAULT_RIGHT_ANCHOR);

        debug!(
            chord_type = chord_type.code(),
            recipe = recipe.id.as_str(),
            left,
            right,
            "selected random voicing"
        );
        Ok(realize_voicing(
            root,
            chord_type,
            recipe,
            prefer_flats,
            Anchors::new(left, right),
        ))
    }

    /// Voice a chord sequence left to right, each step seeing the previous result.
    ///
    /// `rng` is only consulted when `smooth` is false.
    pub fn generate_progression_voicings<R: Rng + ?Sized>(
        &self,
        chords: &[(NoteName, ChordType)],
        smooth: bool,
        styles: &[VoicingStyle],
        prefer_flats: bool,
        rng: &mut R,
    ) -> Result<Vec<Voicing>, VoicingError> {
        if smooth {
            return self.generate_smooth_voicings(chords, styles, prefer_flats);
        }

        let mut voicings: Vec<Voicing> = Vec::with_capacity(chords.len());
        for &(root, chord_type) in chords {
            voicings.push(self.choose_random_voicing(root, chord_type, styles, prefer_flats, rng)?);
        }
        Ok(voicings)
    }

    /// Smooth voice leading over a chord sequence; needs no randomness.
    pub fn generate_smooth_voicings(
        &self,
        chords: &[(NoteName, ChordType)],
        styles: &[VoicingStyle],
        prefer_flats: bool,
    ) -> Result<Vec<Voicing>, VoicingError> {
        let mut voicings: Vec<Voicing> = Vec::with_capacity(chords.len());

        for &(root, chord_type) in chords {
            let voicing =
                self.choose_smooth_voicing(root, chord_type, voicings.last(), styles, prefer_flats)?;
            voicings.push(voicing);
        }

        Ok(voicings)
    }

    /// Every recipe of a chord type realized at the default anchors.
    pub fn chord_reference(
        &self,
        root: NoteName,
        chord_type: ChordType,
        prefer_flats: bool,
    ) -> Vec<Voicing> {
        self.catalog
            .recipes_for(chord_type)
            .iter()
            .map(|recipe| realize_voicing(root, chord_type, recipe, prefer_flats, Anchors::default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn recipe(lh: &[i32], rh: &[i32]) -> VoicingRecipe {
        VoicingRecipe::new("test", "Test", VoicingStyle::Shell, lh, rh, "")
    }

    fn pitches(voicing: &Voicing) -> Vec<i32> {
        voicing.all_notes().iter().map(|n| n.pitch).collect()
    }

    #[test]
    fn test_nearest_prefers_closest_octave() {
        // E near C3 is E3, B near C3 is B2
        assert_eq!(LEFT_HAND_RANGE.nearest(4, 48), 52);
        assert_eq!(LEFT_HAND_RANGE.nearest(11, 48), 47);
        // tritone tie goes up
        assert_eq!(LEFT_HAND_RANGE.nearest(6, 48), 54);
        // anchors outside the window are clamped first
        assert_eq!(LEFT_HAND_RANGE.nearest(0, 100), 48);
        assert_eq!(RIGHT_HAND_RANGE.nearest(0, 0), 60);
    }

    #[test]
    fn test_fold_is_bounded() {
        assert_eq!(LEFT_HAND_RANGE.fold(30), 42);
        assert_eq!(LEFT_HAND_RANGE.fold(60), 48);
        assert_eq!(LEFT_HAND_RANGE.fold(40), 40);
    }

    #[test]
    fn test_cmaj7_shell() {
        let voicing = realize_voicing(
            NoteName::C,
            ChordType::Maj7,
            &recipe(&[4, 11], &[2, 7]),
            true,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![40, 47]);
        assert_eq!(voicing.right_hand_pitches(), vec![62, 67]);
        assert_eq!(voicing.describe(), "Cmaj7  LH: E2 B2  RH: D4 G4");
    }

    #[test]
    fn test_crowded_stack_moves_down() {
        // C7 rootless A: E A Bb D
        let voicing = realize_voicing(
            NoteName::C,
            ChordType::Dom7,
            &recipe(&[4, 9, 10, 2], &[]),
            true,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![40, 45, 46, 50]);
        assert!(voicing.right_hand.is_empty());
    }

    #[test]
    fn test_register_pressure_keeps_window_and_uniqueness() {
        // G7 rootless A: B E F A. The A has no room above F and B2 cannot drop
        // below C2, so it falls under the stack; output is still sorted.
        let voicing = realize_voicing(
            NoteName::G,
            ChordType::Dom7,
            &recipe(&[4, 9, 10, 2], &[]),
            true,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![45, 47, 52, 53]);
    }

    #[test]
    fn test_repeated_pitch_class_takes_other_octave() {
        let voicing = realize_voicing(
            NoteName::C,
            ChordType::Maj7,
            &recipe(&[0, 12], &[]),
            true,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![36, 48]);
    }

    #[test]
    fn test_pitch_class_used_up_is_dropped() {
        // G# fits only once in the left-hand window (44)
        let voicing = realize_voicing(
            NoteName::C,
            ChordType::Maj7,
            &recipe(&[8, 20], &[]),
            true,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![44]);
    }

    #[test]
    fn test_extreme_intervals_reduce_to_pitch_class() {
        // i32::MAX ≡ 7 and i32::MIN ≡ 4 (mod 12); on B these are F# and D#
        let voicing = realize_voicing(
            NoteName::B,
            ChordType::Dom7,
            &recipe(&[i32::MAX], &[i32::MIN]),
            false,
            Anchors::default(),
        );
        assert_eq!(voicing.left_hand_pitches(), vec![54]);
        assert_eq!(voicing.right_hand_pitches(), vec![63]);
    }

    #[test]
    fn test_distance_basics() {
        let a = realize_voicing(NoteName::C, ChordType::Maj7, &recipe(&[4, 11], &[2, 7]), true, Anchors::default());
        assert_eq!(voice_leading_distance(&a, &a), 0);

        let empty = realize_voicing(NoteName::C, ChordType::Maj7, &recipe(&[], &[]), true, Anchors::default());
        assert_eq!(voice_leading_distance(&a, &empty), 4 * MISSING_NOTE_PENALTY);
        assert_eq!(voice_leading_distance(&empty, &a), 0);
    }

    #[test]
    fn test_distance_ignores_note_order() {
        let a = realize_voicing(NoteName::D, ChordType::Min7, &recipe(&[3, 10], &[2, 7]), true, Anchors::default());
        let b = realize_voicing(NoteName::G, ChordType::Dom7, &recipe(&[10, 4], &[2, 9]), true, Anchors::default());
        let mut reversed = a.clone();
        reversed.left_hand.reverse();
        reversed.right_hand.reverse();
        assert_eq!(
            voice_leading_distance(&a, &b),
            voice_leading_distance(&reversed, &b)
        );
    }

    #[test]
    fn test_first_smooth_voicing_uses_first_recipe_at_default_anchors() {
        let engine = VoicingEngine::builtin().unwrap();
        let voicing = engine
            .choose_smooth_voicing(NoteName::C, ChordType::Maj7, None, &[], true)
            .unwrap();
        assert_eq!(voicing.recipe.id, "maj7-shell");
        assert_eq!(pitches(&voicing), vec![40, 47, 62, 67]);
    }

    #[test]
    fn test_style_filter_falls_back_to_first_recipe() {
        let engine = VoicingEngine::builtin().unwrap();
        let voicing = engine
            .choose_smooth_voicing(NoteName::B, ChordType::Dim7, None, &[VoicingStyle::Quartal], true)
            .unwrap();
        assert_eq!(voicing.recipe.id, "dim7-shell");
    }

    #[test]
    fn test_smooth_never_increases_distance_over_default() {
        let engine = VoicingEngine::builtin().unwrap();
        let previous = engine
            .choose_smooth_voicing(NoteName::D, ChordType::Min7, None, &[], true)
            .unwrap();
        let chosen = engine
            .choose_smooth_voicing(NoteName::G, ChordType::Dom7, Some(&previous), &[], true)
            .unwrap();
        let chosen_distance = voice_leading_distance(&previous, &chosen);
        for recipe in engine.catalog().recipes_for(ChordType::Dom7) {
            for anchors in Anchors::grid() {
                let other = realize_voicing(NoteName::G, ChordType::Dom7, recipe, true, anchors);
                assert!(chosen_distance <= voice_leading_distance(&previous, &other));
            }
        }
    }

    #[test]
    fn test_random_voicing_is_reproducible_with_seed() {
        let engine = VoicingEngine::builtin().unwrap();
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            let va = engine
                .choose_random_voicing(NoteName::F, ChordType::Min7, &[VoicingStyle::RootlessA, VoicingStyle::Full], true, &mut a)
                .unwrap();
            let vb = engine
                .choose_random_voicing(NoteName::F, ChordType::Min7, &[VoicingStyle::RootlessA, VoicingStyle::Full], true, &mut b)
                .unwrap();
            assert_eq!(va, vb);
            assert!(matches!(va.recipe.style, VoicingStyle::RootlessA | VoicingStyle::Full));
        }
    }

    #[test]
    fn test_random_voicing_without_recipes_is_an_error() {
        let mut catalog = VoicingCatalog::new();
        catalog.insert(ChordType::Maj7, recipe(&[4, 11], &[]));
        // bypass validation to exercise the runtime check
        let engine = VoicingEngine { catalog };
        let mut rng = Pcg32::seed_from_u64(1);
        let result = engine.choose_random_voicing(NoteName::C, ChordType::Dom7, &[], true, &mut rng);
        assert_eq!(
            result,
            Err(VoicingError::MissingRecipes {
                chord_type: ChordType::Dom7
            })
        );
        assert!(engine
            .choose_smooth_voicing(NoteName::C, ChordType::Dom7, None, &[], true)
            .is_err());
    }

    #[test]
    fn test_smooth_voicings_match_smooth_progression_mode() {
        let engine = VoicingEngine::builtin().unwrap();
        let chords = [
            (NoteName::D, ChordType::Min7),
            (NoteName::G, ChordType::Dom7),
            (NoteName::C, ChordType::Maj7),
        ];
        let styles = [VoicingStyle::Shell];
        let mut rng = Pcg32::seed_from_u64(3);
        let via_mode = engine
            .generate_progression_voicings(&chords, true, &styles, true, &mut rng)
            .unwrap();
        let smooth = engine.generate_smooth_voicings(&chords, &styles, true).unwrap();
        assert_eq!(smooth, via_mode);
        assert_eq!(smooth.len(), 3);
    }

    #[test]
    fn test_chord_reference_lists_every_recipe() {
        let engine = VoicingEngine::builtin().unwrap();
        let voicings = engine.chord_reference(NoteName::EFlat, ChordType::Min7, true);
        assert_eq!(voicings.len(), 5);
        assert!(voicings.iter().all(|v| v.root == NoteName::EFlat));
    }
}
