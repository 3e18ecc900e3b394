pub mod drill;
pub mod engine;
pub mod error;
pub mod pitch;
pub mod progression;
pub mod recipes;
pub mod theory;

pub use drill::{generate_drill, Drill, PracticeMode, PracticeSettings};
pub use engine::{
    realize_voicing, voice_leading_distance, Anchors, HandRange, Voicing, VoicingEngine,
    LEFT_HAND_RANGE, RIGHT_HAND_RANGE,
};
pub use error::*;
pub use pitch::{degree_root, format_notes, pitch_of, transpose, Note};
pub use progression::{
    extend_progression, random_template, realize_progression, template_by_id, templates,
    ProgressionChord, ProgressionTemplate, RealizedChord, RANDOM_PROGRESSION,
};
pub use recipes::{VoicingCatalog, VoicingRecipe, VoicingStyle};
pub use theory::{
    degree_name, format_chord_symbol, interval_name, ChordCategory, ChordDefinition, ChordType,
    NoteName,
};

/// Voice a template in a key with the built-in recipes, smoothly.
///
/// This is the shortest path from a progression id to playable voicings.
///
/// ```rust
/// use pianovoice::{voice_progression, NoteName};
///
/// let voicings = voice_progression("ii-v-i-major", NoteName::C, 4)?;
/// assert_eq!(voicings.len(), 4);
/// # Ok::<(), pianovoice::VoicingError>(())
/// ```
pub fn voice_progression(
    progression_id: &str,
    key: NoteName,
    bars: usize,
) -> Result<Vec<Voicing>, VoicingError> {
    let template = template_by_id(progression_id)
        .ok_or_else(|| VoicingError::UnknownProgression(progression_id.to_string()))?;
    let engine = VoicingEngine::builtin()?;
    let chords = extend_progression(&realize_progression(template, key, true), bars);
    let pairs: Vec<(NoteName, ChordType)> = chords.iter().map(|c| (c.root, c.chord_type)).collect();
    engine.generate_smooth_voicings(&pairs, &[], true)
}
