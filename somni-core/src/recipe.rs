//! Weighted audio recipe generation
//!
//! Builds the night's track mixture from the stored chronotype, the freshly
//! classified persona, and any explicit sound-preference signals. The output
//! recipe parametrizes the external audio-generation service, which turns
//! each track descriptor into a playable asset.
//!
//! Generation is a fixed pipeline: persona base recipe, one chronotype bonus
//! track, optional preference re-weighting, then unconditional normalization
//! so the weights always sum to 1.0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chronotype::Chronotype;
use crate::persona::Persona;
use crate::{Error, Result};

/// Weight multiplier for a liked track kind
const LIKE_MULTIPLIER: f64 = 1.3;
/// Weight multiplier for a disliked track kind
const DISLIKE_MULTIPLIER: f64 = 0.5;

/// Audio track kinds the generation service understands
///
/// Serialized as the human-readable names the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    #[serde(rename = "Pink Noise")]
    PinkNoise,
    #[serde(rename = "Forest Sounds")]
    ForestSounds,
    #[serde(rename = "Whale Songs")]
    WhaleSongs,
    #[serde(rename = "Gentle Piano")]
    GentlePiano,
    #[serde(rename = "Guided Meditation")]
    GuidedMeditation,
    #[serde(rename = "Sleep Story")]
    SleepStory,
    #[serde(rename = "ASMR Triggers")]
    AsmrTriggers,
    #[serde(rename = "Deep Breathing Pacer")]
    DeepBreathingPacer,
    #[serde(rename = "Binaural Beats")]
    BinauralBeats,
    #[serde(rename = "Rain on a Tent")]
    RainOnATent,
    #[serde(rename = "Morning Birds")]
    MorningBirds,
    #[serde(rename = "Crickets")]
    Crickets,
    #[serde(rename = "Distant Thunder")]
    DistantThunder,
    #[serde(rename = "Underwater")]
    Underwater,
}

impl TrackKind {
    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TrackKind::PinkNoise => "Pink Noise",
            TrackKind::ForestSounds => "Forest Sounds",
            TrackKind::WhaleSongs => "Whale Songs",
            TrackKind::GentlePiano => "Gentle Piano",
            TrackKind::GuidedMeditation => "Guided Meditation",
            TrackKind::SleepStory => "Sleep Story",
            TrackKind::AsmrTriggers => "ASMR Triggers",
            TrackKind::DeepBreathingPacer => "Deep Breathing Pacer",
            TrackKind::BinauralBeats => "Binaural Beats",
            TrackKind::RainOnATent => "Rain on a Tent",
            TrackKind::MorningBirds => "Morning Birds",
            TrackKind::Crickets => "Crickets",
            TrackKind::DistantThunder => "Distant Thunder",
            TrackKind::Underwater => "Underwater",
        }
    }

    /// Parse a track kind from its display name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::all_variants()
            .iter()
            .find(|kind| kind.display_name().to_lowercase() == lowered)
            .copied()
    }

    /// All track kinds, base kinds first, chronotype bonus kinds last
    pub fn all_variants() -> &'static [TrackKind] {
        &[
            TrackKind::PinkNoise,
            TrackKind::ForestSounds,
            TrackKind::WhaleSongs,
            TrackKind::GentlePiano,
            TrackKind::GuidedMeditation,
            TrackKind::SleepStory,
            TrackKind::AsmrTriggers,
            TrackKind::DeepBreathingPacer,
            TrackKind::BinauralBeats,
            TrackKind::RainOnATent,
            TrackKind::MorningBirds,
            TrackKind::Crickets,
            TrackKind::DistantThunder,
            TrackKind::Underwater,
        ]
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One weighted track descriptor within a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Track kind handed to the audio-generation service
    #[serde(rename = "type")]
    pub kind: TrackKind,
    /// Relative weight, normalized to sum to 1.0 across the recipe
    pub weight: f64,
    /// Nominal asset duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl AudioTrack {
    fn new(kind: TrackKind, weight: f64, duration: u32) -> Self {
        AudioTrack {
            kind,
            weight,
            duration: Some(duration),
        }
    }
}

/// Ordered weighted track list driving downstream audio generation
pub type Recipe = Vec<AudioTrack>;

/// User reaction to one recognized sound family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Like,
    #[default]
    Neutral,
    Dislike,
}

/// Explicit sound-preference signals from the onboarding survey
///
/// Only four track kinds are preference-sensitive; everything else keeps its
/// recipe weight regardless of taste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundPreferences {
    #[serde(default)]
    pub gentle_music: Preference,
    #[serde(default)]
    pub nature_sounds: Preference,
    #[serde(default)]
    pub whispering_voice: Preference,
    #[serde(default)]
    pub white_noise: Preference,
}

impl SoundPreferences {
    /// Preference signal covering the given track kind, if any
    pub fn for_kind(&self, kind: TrackKind) -> Option<Preference> {
        match kind {
            TrackKind::GentlePiano => Some(self.gentle_music),
            TrackKind::ForestSounds => Some(self.nature_sounds),
            TrackKind::AsmrTriggers => Some(self.whispering_voice),
            TrackKind::PinkNoise => Some(self.white_noise),
            _ => None,
        }
    }
}

/// Fixed starting track list for a persona, raw weights summing to 1.0
fn base_recipe(persona: Persona) -> Recipe {
    match persona {
        Persona::StressMelter => vec![
            AudioTrack::new(TrackKind::GuidedMeditation, 0.5, 600),
            AudioTrack::new(TrackKind::GentlePiano, 0.3, 1800),
            AudioTrack::new(TrackKind::RainOnATent, 0.2, 3600),
        ],
        Persona::MindQuieter => vec![
            AudioTrack::new(TrackKind::SleepStory, 0.6, 900),
            AudioTrack::new(TrackKind::ForestSounds, 0.4, 3600),
        ],
        Persona::DeepSleeper => vec![
            AudioTrack::new(TrackKind::PinkNoise, 0.5, 7200),
            AudioTrack::new(TrackKind::BinauralBeats, 0.3, 3600),
            AudioTrack::new(TrackKind::WhaleSongs, 0.2, 1800),
        ],
    }
}

/// Chronotype-specific bonus track appended after the base recipe
fn bonus_track(chronotype: Chronotype) -> AudioTrack {
    match chronotype {
        Chronotype::Lion => AudioTrack::new(TrackKind::MorningBirds, 0.1, 900),
        Chronotype::Bear => AudioTrack::new(TrackKind::Crickets, 0.1, 1800),
        Chronotype::Wolf => AudioTrack::new(TrackKind::DistantThunder, 0.1, 1200),
        Chronotype::Dolphin => AudioTrack::new(TrackKind::Underwater, 0.1, 1800),
    }
}

/// Re-weight preference-sensitive tracks before normalization
fn apply_preferences(tracks: &mut [AudioTrack], preferences: &SoundPreferences) {
    for track in tracks.iter_mut() {
        match preferences.for_kind(track.kind) {
            Some(Preference::Like) => track.weight *= LIKE_MULTIPLIER,
            Some(Preference::Dislike) => track.weight *= DISLIKE_MULTIPLIER,
            Some(Preference::Neutral) | None => {}
        }
    }
}

/// Scale all weights so they sum to 1.0
fn normalize_weights(tracks: &mut [AudioTrack]) {
    let total: f64 = tracks.iter().map(|track| track.weight).sum();
    if total <= 0.0 {
        return;
    }
    for track in tracks.iter_mut() {
        track.weight /= total;
    }
}

/// Generate the night's audio recipe.
///
/// Pure function over its three inputs. The base recipe is selected by
/// persona, the chronotype (when known) appends exactly one bonus track, and
/// supplied preferences re-weight the four preference-sensitive kinds.
/// Normalization always runs, preferences or not: the bonus track alone
/// pushes the raw sum past 1.0.
///
/// # Arguments
/// * `chronotype` - The user's stored chronotype; `None` when onboarding
///   never produced one, in which case no bonus track is appended
/// * `persona` - Tonight's persona from [`crate::persona::classify_persona`]
/// * `preferences` - Optional explicit sound-preference signals
pub fn generate_recipe(
    chronotype: Option<Chronotype>,
    persona: Persona,
    preferences: Option<&SoundPreferences>,
) -> Recipe {
    let mut tracks = base_recipe(persona);

    if let Some(chronotype) = chronotype {
        tracks.push(bonus_track(chronotype));
    }

    if let Some(preferences) = preferences {
        apply_preferences(&mut tracks, preferences);
    }

    normalize_weights(&mut tracks);

    debug!("Generated {} recipe with {} tracks", persona, tracks.len());

    tracks
}

/// Generate a recipe from raw stored values.
///
/// Boundary variant of [`generate_recipe`] for callers holding the
/// chronotype and persona as strings.
///
/// # Errors
/// Returns [`Error::UnknownPersona`] when the persona is not one of the
/// three recognized values; defaulting here would mask upstream
/// classification bugs. An unrecognized chronotype string merely drops the
/// bonus track.
pub fn generate_recipe_for(
    chronotype: &str,
    persona: &str,
    preferences: Option<&SoundPreferences>,
) -> Result<Recipe> {
    let persona = Persona::from_str(persona)
        .ok_or_else(|| Error::UnknownPersona(persona.to_string()))?;
    let chronotype = Chronotype::from_str(chronotype);
    Ok(generate_recipe(chronotype, persona, preferences))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn total_weight(recipe: &Recipe) -> f64 {
        recipe.iter().map(|track| track.weight).sum()
    }

    #[test]
    fn test_base_recipes_sum_to_one() {
        for &persona in Persona::all_variants() {
            let recipe = base_recipe(persona);
            assert!(
                (total_weight(&recipe) - 1.0).abs() < TOLERANCE,
                "{} base recipe should sum to 1.0",
                persona
            );
        }
    }

    #[test]
    fn test_bonus_track_per_chronotype() {
        assert_eq!(bonus_track(Chronotype::Lion).kind, TrackKind::MorningBirds);
        assert_eq!(bonus_track(Chronotype::Bear).kind, TrackKind::Crickets);
        assert_eq!(bonus_track(Chronotype::Wolf).kind, TrackKind::DistantThunder);
        assert_eq!(bonus_track(Chronotype::Dolphin).kind, TrackKind::Underwater);
    }

    #[test]
    fn test_mind_quieter_bear_example() {
        let recipe = generate_recipe(Some(Chronotype::Bear), Persona::MindQuieter, None);
        assert_eq!(recipe.len(), 3);
        assert_eq!(recipe[0].kind, TrackKind::SleepStory);
        assert_eq!(recipe[1].kind, TrackKind::ForestSounds);
        assert_eq!(recipe[2].kind, TrackKind::Crickets);
        assert!((recipe[0].weight - 0.6 / 1.1).abs() < TOLERANCE);
        assert!((recipe[1].weight - 0.4 / 1.1).abs() < TOLERANCE);
        assert!((recipe[2].weight - 0.1 / 1.1).abs() < TOLERANCE);
    }

    #[test]
    fn test_no_chronotype_means_no_bonus_track() {
        let recipe = generate_recipe(None, Persona::DeepSleeper, None);
        assert_eq!(recipe.len(), 3);
        assert!((total_weight(&recipe) - 1.0).abs() < TOLERANCE);
        // Base weights already summed to 1.0, so normalization is identity
        assert!((recipe[0].weight - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_normalization_invariant() {
        let chronotypes = [
            None,
            Some(Chronotype::Lion),
            Some(Chronotype::Bear),
            Some(Chronotype::Wolf),
            Some(Chronotype::Dolphin),
        ];
        let preference_sets = [
            None,
            Some(SoundPreferences::default()),
            Some(SoundPreferences {
                gentle_music: Preference::Like,
                nature_sounds: Preference::Dislike,
                whispering_voice: Preference::Like,
                white_noise: Preference::Dislike,
            }),
        ];
        for &persona in Persona::all_variants() {
            for chronotype in chronotypes {
                for preferences in &preference_sets {
                    let recipe = generate_recipe(chronotype, persona, preferences.as_ref());
                    assert!(
                        (total_weight(&recipe) - 1.0).abs() < TOLERANCE,
                        "weights must sum to 1.0 for {} / {:?}",
                        persona,
                        chronotype
                    );
                    for track in &recipe {
                        assert!(track.weight > 0.0 && track.weight < 1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_like_raises_normalized_weight() {
        let neutral = generate_recipe(Some(Chronotype::Lion), Persona::StressMelter, None);
        let liked = generate_recipe(
            Some(Chronotype::Lion),
            Persona::StressMelter,
            Some(&SoundPreferences {
                gentle_music: Preference::Like,
                ..SoundPreferences::default()
            }),
        );
        let neutral_piano = neutral
            .iter()
            .find(|track| track.kind == TrackKind::GentlePiano)
            .unwrap();
        let liked_piano = liked
            .iter()
            .find(|track| track.kind == TrackKind::GentlePiano)
            .unwrap();
        assert!(liked_piano.weight > neutral_piano.weight);
    }

    #[test]
    fn test_dislike_lowers_normalized_weight() {
        let neutral = generate_recipe(Some(Chronotype::Dolphin), Persona::DeepSleeper, None);
        let disliked = generate_recipe(
            Some(Chronotype::Dolphin),
            Persona::DeepSleeper,
            Some(&SoundPreferences {
                white_noise: Preference::Dislike,
                ..SoundPreferences::default()
            }),
        );
        let neutral_noise = neutral
            .iter()
            .find(|track| track.kind == TrackKind::PinkNoise)
            .unwrap();
        let disliked_noise = disliked
            .iter()
            .find(|track| track.kind == TrackKind::PinkNoise)
            .unwrap();
        assert!(disliked_noise.weight < neutral_noise.weight);
    }

    #[test]
    fn test_preferences_only_touch_mapped_kinds() {
        let preferences = SoundPreferences {
            gentle_music: Preference::Dislike,
            ..SoundPreferences::default()
        };
        // Deep Sleeper contains no Gentle Piano, so the recipe is unchanged
        let with = generate_recipe(None, Persona::DeepSleeper, Some(&preferences));
        let without = generate_recipe(None, Persona::DeepSleeper, None);
        assert_eq!(with, without);
    }

    #[test]
    fn test_unknown_persona_is_rejected() {
        let result = generate_recipe_for("Bear", "not-a-persona", None);
        assert!(matches!(result, Err(Error::UnknownPersona(_))));
    }

    #[test]
    fn test_unknown_chronotype_drops_bonus() {
        let recipe = generate_recipe_for("Owl", "Mind Quieter", None).unwrap();
        assert_eq!(recipe.len(), 2);
        assert!((total_weight(&recipe) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_track_kind_round_trip() {
        for kind in TrackKind::all_variants() {
            assert_eq!(TrackKind::from_str(kind.display_name()), Some(*kind));
        }
        assert_eq!(TrackKind::from_str("rain on a tent"), Some(TrackKind::RainOnATent));
        assert_eq!(TrackKind::from_str("Vuvuzela"), None);
    }
}
