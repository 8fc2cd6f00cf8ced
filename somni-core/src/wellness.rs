//! Sleep-quality heuristics and generation-parameter selection
//!
//! Works over the user's long-form sleep profile and their recent session
//! history: picks the sound category, intensity, and duration for ad-hoc
//! audio generation, renders the matching text prompt, and scores a finished
//! session against the profile's targets.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Assumed average quality when no recent sessions exist
const DEFAULT_AVG_QUALITY: f64 = 75.0;
/// Average quality below which category selection favors masking sounds
const POOR_QUALITY_THRESHOLD: f64 = 60.0;

/// Sleep-score component weights
const DURATION_WEIGHT: f64 = 0.3;
const QUALITY_WEIGHT: f64 = 0.4;
const TIMING_WEIGHT: f64 = 0.2;
const CONSISTENCY_WEIGHT: f64 = 0.1;
/// Placeholder consistency score until multi-session streaks are tracked
const DEFAULT_CONSISTENCY_SCORE: f64 = 75.0;

/// Broad sound category for ad-hoc generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCategory {
    Nature,
    WhiteNoise,
    Asmr,
    Ambient,
}

/// Perceptual complexity of the generated soundscape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// When the generated audio will be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Evening,
    Night,
    Morning,
}

/// Self-described sleeping environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepEnvironment {
    Quiet,
    City,
    Rural,
}

/// Long-standing sleep issues from the profile survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepIssue {
    TroubleFallingAsleep,
    FrequentWaking,
    EarlyWaking,
    RestlessSleep,
    StressAnxiety,
}

/// Environment-driven rendering hints for the generation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalFactor {
    NoiseMasking,
    ConsistentVolume,
    VeryGentle,
    LowVolume,
    NaturalVariance,
    OrganicSounds,
}

/// Issue- and schedule-driven rendering hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalizedElement {
    ProgressiveRelaxation,
    SlowingTempo,
    ContinuousLoop,
    StableFrequencies,
    DeepBassTones,
    GroundingSounds,
    BreathingRhythm,
    HeartRateSync,
    EarlySleeperOptimized,
    NightOwlOptimized,
}

/// Permanent sleep profile captured during onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepProfile {
    /// Preferred bedtime
    pub bedtime: NaiveTime,
    /// Preferred sleep duration in minutes
    #[serde(rename = "preferredDuration")]
    pub preferred_duration_min: u32,
    /// Sound categories in preference order, most preferred first
    pub sound_preferences: Vec<SoundCategory>,
    pub sleep_environment: Option<SleepEnvironment>,
    /// Self-rated stress on a 1-10 scale
    pub stress_level: Option<u8>,
    pub sleep_issues: Vec<SleepIssue>,
}

/// One recorded sleep session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSession {
    pub start_time: Option<DateTime<Utc>>,
    /// Recorded duration in minutes
    #[serde(rename = "duration")]
    pub duration_min: Option<u32>,
    /// Self-rated quality on a 1-100 scale
    pub quality: Option<u8>,
}

/// Selected parameters for one ad-hoc audio generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioGenerationParams {
    pub category: SoundCategory,
    pub intensity: Intensity,
    /// Target length in minutes
    #[serde(rename = "duration")]
    pub duration_min: u32,
    pub environmental_factors: Vec<EnvironmentalFactor>,
    pub personalized_elements: Vec<PersonalizedElement>,
}

/// Select generation parameters from the profile and recent history.
///
/// Average recent quality steers category choice (poor sleepers get the
/// most consistently effective masking categories), stress and quality
/// together pick the intensity, and the time of day overrides both for
/// morning and late-night playback. Sessions without a recorded quality
/// count as zero toward the average, matching how the history is stored.
pub fn generate_audio_parameters(
    profile: &SleepProfile,
    recent_sessions: &[SleepSession],
    time_of_day: TimeOfDay,
) -> AudioGenerationParams {
    let avg_quality = if recent_sessions.is_empty() {
        DEFAULT_AVG_QUALITY
    } else {
        recent_sessions
            .iter()
            .map(|session| session.quality.unwrap_or(0) as f64)
            .sum::<f64>()
            / recent_sessions.len() as f64
    };

    let mut category = profile
        .sound_preferences
        .first()
        .copied()
        .unwrap_or(SoundCategory::Nature);

    if avg_quality < POOR_QUALITY_THRESHOLD {
        if profile.sound_preferences.contains(&SoundCategory::WhiteNoise) {
            category = SoundCategory::WhiteNoise;
        } else if profile.sound_preferences.contains(&SoundCategory::Nature) {
            category = SoundCategory::Nature;
        }
    }

    let mut intensity = Intensity::Medium;
    let high_stress = profile.stress_level.is_some_and(|level| level >= 8)
        || profile.sleep_issues.contains(&SleepIssue::StressAnxiety);
    if high_stress {
        intensity = Intensity::Low;
    } else if profile.stress_level.is_some_and(|level| level <= 3) && avg_quality >= 80.0 {
        intensity = Intensity::High;
    }

    match time_of_day {
        TimeOfDay::Morning => {
            intensity = Intensity::High;
            category = SoundCategory::Nature;
        }
        TimeOfDay::Night => intensity = Intensity::Low,
        TimeOfDay::Evening => {}
    }

    // Whole hours of preferred sleep, clamped to a 30-180 minute asset
    let base_hours = profile.preferred_duration_min / 60;
    let duration_min = (base_hours * 60).clamp(30, 180);

    let environmental_factors = match profile.sleep_environment {
        Some(SleepEnvironment::City) => vec![
            EnvironmentalFactor::NoiseMasking,
            EnvironmentalFactor::ConsistentVolume,
        ],
        Some(SleepEnvironment::Quiet) => vec![
            EnvironmentalFactor::VeryGentle,
            EnvironmentalFactor::LowVolume,
        ],
        Some(SleepEnvironment::Rural) => vec![
            EnvironmentalFactor::NaturalVariance,
            EnvironmentalFactor::OrganicSounds,
        ],
        None => Vec::new(),
    };

    let mut personalized_elements = Vec::new();
    if profile.sleep_issues.contains(&SleepIssue::TroubleFallingAsleep) {
        personalized_elements.push(PersonalizedElement::ProgressiveRelaxation);
        personalized_elements.push(PersonalizedElement::SlowingTempo);
    }
    if profile.sleep_issues.contains(&SleepIssue::FrequentWaking) {
        personalized_elements.push(PersonalizedElement::ContinuousLoop);
        personalized_elements.push(PersonalizedElement::StableFrequencies);
    }
    if profile.sleep_issues.contains(&SleepIssue::RestlessSleep) {
        personalized_elements.push(PersonalizedElement::DeepBassTones);
        personalized_elements.push(PersonalizedElement::GroundingSounds);
    }
    if profile.sleep_issues.contains(&SleepIssue::StressAnxiety) {
        personalized_elements.push(PersonalizedElement::BreathingRhythm);
        personalized_elements.push(PersonalizedElement::HeartRateSync);
    }

    // Bedtimes after midnight wrap to small hour values; the first few hours
    // of the day count as night-owl territory, not an early bedtime.
    let bedtime_hour = profile.bedtime.hour();
    if (4..=21).contains(&bedtime_hour) {
        personalized_elements.push(PersonalizedElement::EarlySleeperOptimized);
    } else if bedtime_hour < 4 {
        personalized_elements.push(PersonalizedElement::NightOwlOptimized);
    }

    AudioGenerationParams {
        category,
        intensity,
        duration_min,
        environmental_factors,
        personalized_elements,
    }
}

fn base_prompt(category: SoundCategory, intensity: Intensity) -> &'static str {
    match (category, intensity) {
        (SoundCategory::Nature, Intensity::Low) => {
            "Gentle rainfall on leaves with soft wind through trees"
        }
        (SoundCategory::Nature, Intensity::Medium) => {
            "Flowing stream with distant bird calls and rustling foliage"
        }
        (SoundCategory::Nature, Intensity::High) => {
            "Ocean waves with seagulls and coastal wind patterns"
        }
        (SoundCategory::WhiteNoise, Intensity::Low) => {
            "Soft, consistent white noise with minimal variation"
        }
        (SoundCategory::WhiteNoise, Intensity::Medium) => {
            "Balanced pink noise with gentle frequency modulation"
        }
        (SoundCategory::WhiteNoise, Intensity::High) => {
            "Rich brown noise with harmonic overtones"
        }
        (SoundCategory::Asmr, Intensity::Low) => {
            "Whispered affirmations with gentle breathing sounds"
        }
        (SoundCategory::Asmr, Intensity::Medium) => {
            "Soft tapping and brushing with caring whispers"
        }
        (SoundCategory::Asmr, Intensity::High) => {
            "Detailed tactile sounds with immersive 3D audio"
        }
        (SoundCategory::Ambient, Intensity::Low) => {
            "Ethereal drones with slowly evolving harmonics"
        }
        (SoundCategory::Ambient, Intensity::Medium) => {
            "Spacious soundscapes with celestial tones"
        }
        (SoundCategory::Ambient, Intensity::High) => {
            "Complex atmospheric textures with deep resonance"
        }
    }
}

/// Render the text prompt for one generation request.
pub fn generate_sleep_prompt(params: &AudioGenerationParams) -> String {
    let mut prompt = String::from(base_prompt(params.category, params.intensity));

    if params
        .environmental_factors
        .contains(&EnvironmentalFactor::NoiseMasking)
    {
        prompt.push_str(", designed to mask urban noise and distractions");
    }
    if params
        .environmental_factors
        .contains(&EnvironmentalFactor::VeryGentle)
    {
        prompt.push_str(", extremely gentle and unobtrusive");
    }
    if params
        .environmental_factors
        .contains(&EnvironmentalFactor::NaturalVariance)
    {
        prompt.push_str(", with natural organic variations and subtle changes");
    }

    if params
        .personalized_elements
        .contains(&PersonalizedElement::ProgressiveRelaxation)
    {
        prompt.push_str(", gradually slowing and becoming more peaceful over time");
    }
    if params
        .personalized_elements
        .contains(&PersonalizedElement::ContinuousLoop)
    {
        prompt.push_str(", seamlessly looping without jarring transitions");
    }
    if params
        .personalized_elements
        .contains(&PersonalizedElement::BreathingRhythm)
    {
        prompt.push_str(", synchronized with natural breathing patterns for relaxation");
    }
    if params
        .personalized_elements
        .contains(&PersonalizedElement::DeepBassTones)
    {
        prompt.push_str(", featuring grounding low-frequency elements");
    }

    prompt.push_str(&format!(
        ". Duration: {} minutes. Optimized for deep, restorative sleep.",
        params.duration_min
    ));

    prompt
}

/// Score a finished session against the profile's targets, 0-100.
///
/// Weighted blend of duration fit, self-rated quality, bedtime adherence,
/// and a constant consistency placeholder. Missing session fields simply
/// contribute nothing to their component.
pub fn calculate_sleep_score(session: &SleepSession, profile: &SleepProfile) -> u8 {
    let mut score = 0.0;

    if let Some(duration) = session.duration_min {
        if profile.preferred_duration_min > 0 {
            let ratio = duration as f64 / profile.preferred_duration_min as f64;
            let duration_score = (100.0 - (ratio - 1.0).abs() * 100.0).max(0.0);
            score += duration_score * DURATION_WEIGHT;
        }
    }

    if let Some(quality) = session.quality {
        score += quality as f64 * QUALITY_WEIGHT;
    }

    if let Some(start) = session.start_time {
        let timing_diff = (start.hour() as i32 - profile.bedtime.hour() as i32).abs();
        let timing_score = (100.0 - timing_diff as f64 * 10.0).max(0.0);
        score += timing_score * TIMING_WEIGHT;
    }

    score += DEFAULT_CONSISTENCY_SCORE * CONSISTENCY_WEIGHT;

    score.round().clamp(0.0, 100.0) as u8
}
