//! Pitch arithmetic.
//!
//! Pitches are semitone numbers on the MIDI scale (C4 = 60). A [`Note`] caches
//! its spelled name and octave, but the pitch is the only source of truth.
//!
//! ## Pitch Reference
//! - C2 = 36, G3 = 55, C3 = 48, C4 = 60, G4 = 67, C6 = 84
//! - octave = pitch div 12 - 1
//! - pitch class = pitch mod 12

use serde::Serialize;
use std::fmt;

use crate::theory::NoteName;

/// Semitones per octave.
pub const OCTAVE: i32 = 12;

/// Octave numbering offset: pitch 0 is C-1.
const OCTAVE_OFFSET: i32 = 1;

/// Major-scale semitone offsets for degrees 1-7.
pub const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A pitched note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub name: NoteName,
    pub octave: i32,
    pub pitch: i32,
}

impl Note {
    /// Build a note from a pitch, spelled with the session's enharmonic preference.
    ///
    /// # Examples
    /// ```
    /// use pianovoice::{Note, NoteName};
    ///
    /// let note = Note::from_pitch(61, true);
    /// assert_eq!(note.name, NoteName::DFlat);
    /// assert_eq!(note.octave, 4);
    /// assert_eq!(Note::from_pitch(61, false).name, NoteName::CSharp);
    /// ```
    pub fn from_pitch(pitch: i32, prefer_flats: bool) -> Self {
        Self {
            name: NoteName::from_pitch_class(pitch, prefer_flats),
            octave: pitch.div_euclid(OCTAVE) - OCTAVE_OFFSET,
            pitch,
        }
    }

    pub fn pitch_class(&self) -> i32 {
        self.pitch.rem_euclid(OCTAVE)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Pitch of a spelled note in an octave (`pitch_of(C, 4) == 60`).
pub fn pitch_of(name: NoteName, octave: i32) -> i32 {
    (octave + OCTAVE_OFFSET) * OCTAVE + name.pitch_class()
}

/// Transpose a note name by any number of semitones, wrapping modulo 12.
pub fn transpose(name: NoteName, semitones: i32, prefer_flats: bool) -> NoteName {
    NoteName::from_pitch_class(name.pitch_class() + semitones, prefer_flats)
}

/// Root of a scale degree (1-7) of the major scale on `key`.
///
/// Degrees beyond 7 cycle (8 is the tonic again).
///
/// # Examples
/// ```
/// use pianovoice::{degree_root, NoteName};
///
/// assert_eq!(degree_root(NoteName::C, 2, true), NoteName::D);
/// assert_eq!(degree_root(NoteName::F, 4, true), NoteName::BFlat);
/// assert_eq!(degree_root(NoteName::C, 9, true), NoteName::D);
/// ```
pub fn degree_root(key: NoteName, degree: u8, prefer_flats: bool) -> NoteName {
    let index = (degree as i32 - 1).rem_euclid(MAJOR_SCALE.len() as i32) as usize;
    transpose(key, MAJOR_SCALE[index], prefer_flats)
}

/// Space-separated note list such as `E2 B2 D4 G4`.
pub fn format_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_to_note() {
        let c4 = Note::from_pitch(60, true);
        assert_eq!(c4.name, NoteName::C);
        assert_eq!(c4.octave, 4);

        let b2 = Note::from_pitch(47, true);
        assert_eq!(b2.to_string(), "B2");

        let c2 = Note::from_pitch(36, true);
        assert_eq!(c2.octave, 2);
    }

    #[test]
    fn test_name_octave_consistent_with_pitch() {
        for pitch in 0..128 {
            for prefer_flats in [true, false] {
                let note = Note::from_pitch(pitch, prefer_flats);
                assert_eq!(pitch_of(note.name, note.octave), pitch);
            }
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(transpose(NoteName::B, 1, true), NoteName::C);
        assert_eq!(transpose(NoteName::C, -1, true), NoteName::B);
        assert_eq!(transpose(NoteName::C, 10, true), NoteName::BFlat);
        assert_eq!(transpose(NoteName::C, 10, false), NoteName::ASharp);
        assert_eq!(transpose(NoteName::FSharp, 24, true), NoteName::GFlat);
    }

    #[test]
    fn test_degree_roots_in_c() {
        let roots: Vec<NoteName> = (1..=7).map(|d| degree_root(NoteName::C, d, true)).collect();
        assert_eq!(
            roots,
            vec![
                NoteName::C,
                NoteName::D,
                NoteName::E,
                NoteName::F,
                NoteName::G,
                NoteName::A,
                NoteName::B
            ]
        );
    }

    #[test]
    fn test_format_notes() {
        let notes = [Note::from_pitch(40, true), Note::from_pitch(47, true)];
        assert_eq!(format_notes(&notes), "E2 B2");
        assert_eq!(format_notes(&[]), "");
    }
}
