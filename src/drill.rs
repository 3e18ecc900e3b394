//! # Practice Drills
//!
//! The settings record for a practice session and the one-shot pipeline that
//! turns it into chords and voicings:
//!
//! ```text
//! PracticeSettings ──► key (fixed or random) ──► template (by id, `random`, first as fallback)
//!                  ──► realize_progression ──► extend_progression(bars)
//!                  ──► VoicingEngine::generate_progression_voicings ──► Drill
//! ```
//!
//! Settings are plain values passed in on every regeneration; nothing here
//! keeps state between calls. Playback timing stays with the caller, which can
//! read the per-chord period from [`PracticeSettings::beat_interval`].
//!
//! ## Settings YAML
//! ```yaml
//! key: Eb
//! progression-id: backdoor
//! bars: 8
//! voicing-styles: [shell, rootless-b]
//! smooth: true
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::engine::{Voicing, VoicingEngine};
use crate::error::VoicingError;
use crate::progression::{
    extend_progression, random_template, realize_progression, template_by_id, templates,
    RealizedChord, RANDOM_PROGRESSION,
};
use crate::recipes::VoicingStyle;
use crate::theory::NoteName;

/// Accompaniment uses the selected styles; solo always voices with the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    #[default]
    Accompaniment,
    Solo,
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PracticeSettings {
    pub key: NoteName,
    pub prefer_flats: bool,
    pub progression_id: String,
    pub bars: usize,
    pub mode: PracticeMode,
    pub voicing_styles: Vec<VoicingStyle>,
    pub smooth: bool,
    pub auto_advance: bool,
    pub tempo_bpm: u16,
    pub random_key_per_loop: bool,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            key: NoteName::C,
            prefer_flats: true,
            progression_id: "ii-v-i-major".to_string(),
            bars: 4,
            mode: PracticeMode::Accompaniment,
            voicing_styles: vec![VoicingStyle::Shell, VoicingStyle::RootlessA],
            smooth: true,
            auto_advance: false,
            tempo_bpm: 60,
            random_key_per_loop: false,
        }
    }
}

impl PracticeSettings {
    /// Parse settings from YAML; missing fields take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, VoicingError> {
        let settings: Self =
            serde_yaml::from_str(source).map_err(|e| VoicingError::SettingsError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), VoicingError> {
        if self.bars == 0 {
            return Err(VoicingError::SettingsError(
                "bars must be at least 1".to_string(),
            ));
        }
        if self.tempo_bpm == 0 {
            return Err(VoicingError::SettingsError(
                "tempo-bpm must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Style filter actually passed to the engine.
    pub fn effective_styles(&self) -> Vec<VoicingStyle> {
        match self.mode {
            PracticeMode::Solo => vec![VoicingStyle::Full],
            PracticeMode::Accompaniment => self.voicing_styles.clone(),
        }
    }

    /// Time each chord stays active under auto-advance.
    pub fn beat_interval(&self) -> Duration {
        Duration::from_secs(60) / u32::from(self.tempo_bpm.max(1))
    }
}

/// One generated drill: chords and their voicings, index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub key: NoteName,
    pub progression_id: &'static str,
    pub chords: Vec<RealizedChord>,
    pub voicings: Vec<Voicing>,
}

impl Drill {
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chord/voicing pairs in playing order.
    pub fn steps(&self) -> impl Iterator<Item = (&RealizedChord, &Voicing)> {
        self.chords.iter().zip(self.voicings.iter())
    }
}

/// Generate a drill from settings.
pub fn generate_drill<R: Rng + ?Sized>(
    settings: &PracticeSettings,
    engine: &VoicingEngine,
    rng: &mut R,
) -> Result<Drill, VoicingError> {
    settings.validate()?;

    let key = if settings.random_key_per_loop {
        *NoteName::spellings(settings.prefer_flats)
            .choose(rng)
            .unwrap_or(&settings.key)
    } else {
        settings.key
    };

    let template = match template_by_id(&settings.progression_id) {
        Some(template) => template,
        None if settings.progression_id == RANDOM_PROGRESSION => random_template(rng),
        None => {
            let fallback = &templates()[0];
            warn!(
                requested = settings.progression_id.as_str(),
                fallback = fallback.id,
                "unknown progression, using default"
            );
            fallback
        }
    };

    let chords = extend_progression(
        &realize_progression(template, key, settings.prefer_flats),
        settings.bars,
    );
    let roots: Vec<(NoteName, _)> = chords.iter().map(|c| (c.root, c.chord_type)).collect();
    let voicings = engine.generate_progression_voicings(
        &roots,
        settings.smooth,
        &settings.effective_styles(),
        settings.prefer_flats,
        rng,
    )?;

    info!(
        key = key.as_str(),
        progression = template.id,
        bars = chords.len(),
        smooth = settings.smooth,
        "generated drill"
    );

    Ok(Drill {
        key,
        progression_id: template.id,
        chords,
        voicings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn engine() -> VoicingEngine {
        VoicingEngine::builtin().unwrap()
    }

    #[test]
    fn test_default_settings_drill() {
        let mut rng = Pcg32::seed_from_u64(0);
        let drill = generate_drill(&PracticeSettings::default(), &engine(), &mut rng).unwrap();
        assert_eq!(drill.len(), 4);
        assert_eq!(drill.voicings.len(), 4);
        assert_eq!(drill.key, NoteName::C);
        assert_eq!(drill.chords[3].symbol, "Dm7");
        for (chord, voicing) in drill.steps() {
            assert_eq!(chord.root, voicing.root);
            assert!(matches!(
                voicing.recipe.style,
                VoicingStyle::Shell | VoicingStyle::RootlessA
            ));
        }
    }

    #[test]
    fn test_solo_mode_uses_full_voicings() {
        let settings = PracticeSettings {
            mode: PracticeMode::Solo,
            ..PracticeSettings::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        let drill = generate_drill(&settings, &engine(), &mut rng).unwrap();
        assert!(drill
            .voicings
            .iter()
            .all(|v| v.recipe.style == VoicingStyle::Full));
    }

    #[test]
    fn test_unknown_progression_falls_back_to_first() {
        let settings = PracticeSettings {
            progression_id: "nope".to_string(),
            bars: 3,
            ..PracticeSettings::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        let drill = generate_drill(&settings, &engine(), &mut rng).unwrap();
        assert_eq!(drill.progression_id, "ii-v-i-major");
    }

    #[test]
    fn test_random_progression_picks_a_builtin_template() {
        let settings = PracticeSettings {
            progression_id: RANDOM_PROGRESSION.to_string(),
            ..PracticeSettings::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let mut seen: Vec<&str> = Vec::new();
        for _ in 0..50 {
            let drill = generate_drill(&settings, &engine(), &mut rng).unwrap();
            assert!(template_by_id(drill.progression_id).is_some());
            assert_eq!(drill.len(), 4);
            if !seen.contains(&drill.progression_id) {
                seen.push(drill.progression_id);
            }
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_key_is_spelled_by_preference() {
        let settings = PracticeSettings {
            random_key_per_loop: true,
            prefer_flats: false,
            ..PracticeSettings::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            let drill = generate_drill(&settings, &engine(), &mut rng).unwrap();
            assert!(NoteName::SHARPS.contains(&drill.key));
        }
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r#"
key: Eb
progression-id: backdoor
bars: 8
voicing-styles: [shell, rootless-b]
tempo-bpm: 120
"#;
        let settings = PracticeSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.key, NoteName::EFlat);
        assert_eq!(settings.progression_id, "backdoor");
        assert_eq!(settings.bars, 8);
        assert_eq!(
            settings.voicing_styles,
            vec![VoicingStyle::Shell, VoicingStyle::RootlessB]
        );
        assert!(settings.smooth);
        assert_eq!(settings.beat_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_settings_reject_zero_bars() {
        let result = PracticeSettings::from_yaml("bars: 0");
        assert!(matches!(result, Err(VoicingError::SettingsError(_))));

        let result = PracticeSettings::from_yaml("key: H");
        assert!(matches!(result, Err(VoicingError::SettingsError(_))));
    }
}
