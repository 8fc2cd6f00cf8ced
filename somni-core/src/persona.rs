//! Nightly persona classification from the daily mood check-in
//!
//! Combines the user's permanent "biggest sleep challenge" (captured once
//! during onboarding) with the evening's stress level and thought state to
//! pick the night's therapeutic-sound persona. Runs fresh every night.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Permanent biggest-sleep-challenge attribute, captured during onboarding
///
/// Stored by the caller as the letter code of the questionnaire option that
/// selected it, so parsing accepts both letter codes and descriptive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepChallenge {
    /// Difficulty falling asleep (option A)
    FallingAsleep,
    /// Waking up frequently during the night (option B)
    FrequentWaking,
    /// Waking up too early and being unable to get back to sleep (option C)
    WakingEarly,
    /// Feeling tired even after a full night's sleep (option D)
    NonRestorative,
}

impl SleepChallenge {
    /// Parse a stored challenge value
    ///
    /// Accepts the questionnaire letter code ('A'-'D') or the descriptive
    /// snake_case name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "falling_asleep" => Ok(SleepChallenge::FallingAsleep),
            "b" | "waking_frequently" | "frequent_waking" => Ok(SleepChallenge::FrequentWaking),
            "c" | "waking_early" => Ok(SleepChallenge::WakingEarly),
            "d" | "feeling_tired" | "non_restorative" => Ok(SleepChallenge::NonRestorative),
            _ => Err(Error::UnknownAnswer(s.to_string())),
        }
    }

    /// Questionnaire letter code for this challenge
    pub fn code(&self) -> &'static str {
        match self {
            SleepChallenge::FallingAsleep => "A",
            SleepChallenge::FrequentWaking => "B",
            SleepChallenge::WakingEarly => "C",
            SleepChallenge::NonRestorative => "D",
        }
    }
}

/// Self-reported stress level from the evening check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(StressLevel::Low),
            "medium" => Ok(StressLevel::Medium),
            "high" => Ok(StressLevel::High),
            _ => Err(Error::InvalidInput(format!("unrecognized stress level: {}", s))),
        }
    }
}

/// Self-reported thought state from the evening check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThoughtsState {
    Calm,
    Busy,
    Racing,
}

impl ThoughtsState {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calm" => Ok(ThoughtsState::Calm),
            "busy" => Ok(ThoughtsState::Busy),
            "racing" => Ok(ThoughtsState::Racing),
            _ => Err(Error::InvalidInput(format!("unrecognized thought state: {}", s))),
        }
    }
}

/// One evening's mood check-in, created fresh each night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckIn {
    pub stress_level: StressLevel,
    pub thoughts_state: ThoughtsState,
}

/// Nightly therapeutic-sound persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Stress Melter")]
    StressMelter,
    #[serde(rename = "Mind Quieter")]
    MindQuieter,
    #[serde(rename = "Deep Sleeper")]
    DeepSleeper,
}

impl Persona {
    /// Parse a stored persona value (lenient, case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stress melter" | "stress_melter" => Some(Persona::StressMelter),
            "mind quieter" | "mind_quieter" => Some(Persona::MindQuieter),
            "deep sleeper" | "deep_sleeper" => Some(Persona::DeepSleeper),
            _ => None,
        }
    }

    /// Parse a stored persona value, rejecting unrecognized ones
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownPersona(s.to_string()))
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::StressMelter => "Stress Melter",
            Persona::MindQuieter => "Mind Quieter",
            Persona::DeepSleeper => "Deep Sleeper",
        }
    }

    /// All personas in decision precedence order
    pub fn all_variants() -> &'static [Persona] {
        &[
            Persona::StressMelter,
            Persona::MindQuieter,
            Persona::DeepSleeper,
        ]
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify tonight's persona from the permanent challenge and the check-in.
///
/// Three accumulators are scored and then compared in a fixed precedence
/// order rather than by plain maximum: Stress Melter wins any tie it is part
/// of, and Mind Quieter wins ties against Deep Sleeper. The all-zero
/// quiescent state (challenge D, low stress, calm thoughts) therefore
/// resolves to Stress Melter.
pub fn classify_persona(challenge: SleepChallenge, checkin: &DailyCheckIn) -> Persona {
    let mut mind_quieter = 0;
    let mut stress_melter = 0;
    let mut deep_sleeper = 0;

    // Permanent challenge points
    match challenge {
        SleepChallenge::FallingAsleep | SleepChallenge::WakingEarly => mind_quieter += 3,
        SleepChallenge::FrequentWaking => deep_sleeper += 3,
        SleepChallenge::NonRestorative => {}
    }

    // Daily stress points
    match checkin.stress_level {
        StressLevel::Medium => stress_melter += 1,
        StressLevel::High => stress_melter += 3,
        StressLevel::Low => {}
    }

    // Current thoughts points
    if checkin.thoughts_state == ThoughtsState::Racing {
        mind_quieter += 3;
    }

    let persona = if stress_melter >= mind_quieter && stress_melter >= deep_sleeper {
        Persona::StressMelter
    } else if mind_quieter >= deep_sleeper {
        Persona::MindQuieter
    } else {
        Persona::DeepSleeper
    };

    debug!(
        "Persona classified as {} (mind_quieter={}, stress_melter={}, deep_sleeper={})",
        persona, mind_quieter, stress_melter, deep_sleeper
    );

    persona
}

/// Classify tonight's persona from raw stored codes.
///
/// Boundary variant of [`classify_persona`] for callers holding the
/// challenge and check-in values as strings.
pub fn classify_persona_codes(challenge: &str, stress: &str, thoughts: &str) -> Result<Persona> {
    let challenge = SleepChallenge::parse(challenge)?;
    let checkin = DailyCheckIn {
        stress_level: StressLevel::parse(stress)?,
        thoughts_state: ThoughtsState::parse(thoughts)?,
    };
    Ok(classify_persona(challenge, &checkin))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(stress: StressLevel, thoughts: ThoughtsState) -> DailyCheckIn {
        DailyCheckIn {
            stress_level: stress,
            thoughts_state: thoughts,
        }
    }

    #[test]
    fn test_quiescent_state_defaults_to_stress_melter() {
        let persona = classify_persona(
            SleepChallenge::NonRestorative,
            &checkin(StressLevel::Low, ThoughtsState::Calm),
        );
        assert_eq!(persona, Persona::StressMelter);
    }

    #[test]
    fn test_three_way_tie_goes_to_stress_melter() {
        // FrequentWaking 3, high stress 3, racing thoughts 3
        let persona = classify_persona(
            SleepChallenge::FrequentWaking,
            &checkin(StressLevel::High, ThoughtsState::Racing),
        );
        assert_eq!(persona, Persona::StressMelter);
    }

    #[test]
    fn test_racing_thoughts_pick_mind_quieter() {
        let persona = classify_persona(
            SleepChallenge::NonRestorative,
            &checkin(StressLevel::Low, ThoughtsState::Racing),
        );
        assert_eq!(persona, Persona::MindQuieter);
    }

    #[test]
    fn test_mind_quieter_beats_deep_sleeper_on_tie() {
        // FrequentWaking gives Deep Sleeper 3, racing thoughts give Mind Quieter 3
        let persona = classify_persona(
            SleepChallenge::FrequentWaking,
            &checkin(StressLevel::Low, ThoughtsState::Racing),
        );
        assert_eq!(persona, Persona::MindQuieter);
    }

    #[test]
    fn test_frequent_waking_picks_deep_sleeper() {
        let persona = classify_persona(
            SleepChallenge::FrequentWaking,
            &checkin(StressLevel::Low, ThoughtsState::Calm),
        );
        assert_eq!(persona, Persona::DeepSleeper);
    }

    #[test]
    fn test_high_stress_overrides_challenge() {
        // Mind Quieter 3 from the challenge, Stress Melter 3 from stress; tie
        // falls to Stress Melter by precedence
        let persona = classify_persona(
            SleepChallenge::FallingAsleep,
            &checkin(StressLevel::High, ThoughtsState::Calm),
        );
        assert_eq!(persona, Persona::StressMelter);
    }

    #[test]
    fn test_code_boundary() {
        let persona = classify_persona_codes("B", "low", "calm").unwrap();
        assert_eq!(persona, Persona::DeepSleeper);

        let persona = classify_persona_codes("falling_asleep", "low", "racing").unwrap();
        assert_eq!(persona, Persona::MindQuieter);

        assert!(classify_persona_codes("E", "low", "calm").is_err());
        assert!(classify_persona_codes("A", "severe", "calm").is_err());
        assert!(classify_persona_codes("A", "low", "spiraling").is_err());
    }

    #[test]
    fn test_persona_parse() {
        assert_eq!(Persona::from_str("Stress Melter"), Some(Persona::StressMelter));
        assert_eq!(Persona::from_str("deep_sleeper"), Some(Persona::DeepSleeper));
        assert_eq!(Persona::from_str("Night Owl"), None);
        assert!(matches!(
            Persona::parse("Night Owl"),
            Err(crate::Error::UnknownPersona(_))
        ));
    }
}
