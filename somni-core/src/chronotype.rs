//! Chronotype classification from the onboarding questionnaire
//!
//! Maps the five multiple-choice questionnaire answers to one of four
//! chronotype categories plus a per-category score breakdown. Each question
//! carries a hand-tuned point table reflecting its evidentiary strength:
//! the natural-rhythm question dominates at 10 points, the relaxation
//! preference question contributes only a small Dolphin signal.
//!
//! Classification runs once during onboarding; the caller persists the
//! result and feeds it back into recipe generation every night.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Number of questions in the chronotype questionnaire
pub const QUESTION_COUNT: usize = 5;

/// Multiple-choice option identifier for one questionnaire slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    A,
    B,
    C,
    D,
}

impl Answer {
    /// Parse an option code as captured by the questionnaire UI
    ///
    /// Accepts upper- and lowercase single letters. Codes outside A-D are
    /// rejected rather than silently scoring zero.
    pub fn parse(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Answer::A),
            "B" => Ok(Answer::B),
            "C" => Ok(Answer::C),
            "D" => Ok(Answer::D),
            _ => Err(Error::UnknownAnswer(code.to_string())),
        }
    }

    /// Canonical option code
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::A => "A",
            Answer::B => "B",
            Answer::C => "C",
            Answer::D => "D",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sleep-wake rhythm categories
///
/// - Lion: early risers, most alert in the morning
/// - Bear: energy follows the sun, the most common type
/// - Wolf: night owls who hit their stride in the evening
/// - Dolphin: light, often irregular sleepers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chronotype {
    Lion,
    Bear,
    Wolf,
    Dolphin,
}

/// Display copy for a chronotype result screen
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChronotypeDescription {
    pub title: &'static str,
    pub summary: &'static str,
}

impl Chronotype {
    /// Parse a stored chronotype value (lenient, case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lion" => Some(Chronotype::Lion),
            "bear" => Some(Chronotype::Bear),
            "wolf" => Some(Chronotype::Wolf),
            "dolphin" => Some(Chronotype::Dolphin),
            _ => None,
        }
    }

    /// Parse a stored chronotype value, rejecting unrecognized ones
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownChronotype(s.to_string()))
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Chronotype::Lion => "Lion",
            Chronotype::Bear => "Bear",
            Chronotype::Wolf => "Wolf",
            Chronotype::Dolphin => "Dolphin",
        }
    }

    /// All chronotypes in classification evaluation order
    pub fn all_variants() -> &'static [Chronotype] {
        &[
            Chronotype::Lion,
            Chronotype::Bear,
            Chronotype::Wolf,
            Chronotype::Dolphin,
        ]
    }

    /// Result-screen copy for this chronotype
    pub fn description(&self) -> ChronotypeDescription {
        match self {
            Chronotype::Lion => ChronotypeDescription {
                title: "The Lion",
                summary: "Early risers who are most productive in the morning. \
                          Lions are natural leaders who prefer structure and routine.",
            },
            Chronotype::Bear => ChronotypeDescription {
                title: "The Bear",
                summary: "Most people fall into this category. Bears follow the sun \
                          and have steady energy throughout the day.",
            },
            Chronotype::Wolf => ChronotypeDescription {
                title: "The Wolf",
                summary: "Night owls who come alive in the evening. Wolves are \
                          creative and prefer working later in the day.",
            },
            Chronotype::Dolphin => ChronotypeDescription {
                title: "The Dolphin",
                summary: "Light sleepers who are often perfectionists. Dolphins are \
                          intelligent but may struggle with sleep quality.",
            },
        }
    }
}

impl std::fmt::Display for Chronotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-chronotype score accumulators
///
/// All four categories are always present. Scores start at zero and are only
/// ever incremented within a single classification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChronotypeScores {
    pub lion: u32,
    pub bear: u32,
    pub wolf: u32,
    pub dolphin: u32,
}

impl ChronotypeScores {
    /// Accumulated score for one chronotype
    pub fn score(&self, chronotype: Chronotype) -> u32 {
        match chronotype {
            Chronotype::Lion => self.lion,
            Chronotype::Bear => self.bear,
            Chronotype::Wolf => self.wolf,
            Chronotype::Dolphin => self.dolphin,
        }
    }

    fn add(&mut self, chronotype: Chronotype, points: u32) {
        match chronotype {
            Chronotype::Lion => self.lion += points,
            Chronotype::Bear => self.bear += points,
            Chronotype::Wolf => self.wolf += points,
            Chronotype::Dolphin => self.dolphin += points,
        }
    }
}

/// Outcome of a chronotype classification run
///
/// Immutable once computed; the caller persists it for the lifetime of the
/// user's onboarding and reads it back for nightly recipe generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronotypeResult {
    /// Winning chronotype
    #[serde(rename = "type")]
    pub chronotype: Chronotype,
    /// Full score breakdown behind the winner
    pub scores: ChronotypeScores,
}

/// Classify a user's chronotype from their five questionnaire answers.
///
/// Pure function: identical answers always produce an identical result,
/// score breakdown included.
///
/// # Arguments
/// * `answers` - The five answers in question order
///
/// # Errors
/// Returns [`Error::InvalidInput`] unless exactly five answers are given.
/// A short sequence indicates an incomplete questionnaire flow in the
/// caller and must not be scored.
pub fn classify_chronotype(answers: &[Answer]) -> Result<ChronotypeResult> {
    if answers.len() != QUESTION_COUNT {
        return Err(Error::InvalidInput(format!(
            "expected exactly {} answers, got {}",
            QUESTION_COUNT,
            answers.len()
        )));
    }

    let mut scores = ChronotypeScores::default();

    // Question 1: natural rhythm (highest weight)
    match answers[0] {
        Answer::A => scores.add(Chronotype::Lion, 10),
        Answer::B => scores.add(Chronotype::Bear, 10),
        Answer::C => scores.add(Chronotype::Wolf, 10),
        Answer::D => scores.add(Chronotype::Dolphin, 10),
    }

    // Question 2: sleep quality over the past month
    match answers[1] {
        Answer::A => scores.add(Chronotype::Bear, 5),
        Answer::B => {
            scores.add(Chronotype::Bear, 3);
            scores.add(Chronotype::Lion, 2);
        }
        Answer::C => {
            scores.add(Chronotype::Wolf, 3);
            scores.add(Chronotype::Dolphin, 3);
        }
        Answer::D => scores.add(Chronotype::Dolphin, 5),
    }

    // Question 3: biggest sleep challenge
    match answers[2] {
        Answer::A => scores.add(Chronotype::Wolf, 5),
        Answer::B => scores.add(Chronotype::Dolphin, 5),
        Answer::C => scores.add(Chronotype::Lion, 5),
        Answer::D => {
            scores.add(Chronotype::Wolf, 1);
            scores.add(Chronotype::Dolphin, 1);
        }
    }

    // Question 4: challenge response style
    match answers[3] {
        Answer::A => {
            scores.add(Chronotype::Lion, 2);
            scores.add(Chronotype::Bear, 2);
        }
        Answer::B => {
            scores.add(Chronotype::Dolphin, 3);
            scores.add(Chronotype::Wolf, 1);
        }
        Answer::C => scores.add(Chronotype::Wolf, 2),
        Answer::D => {}
    }

    // Question 5: relaxation sound preference (low weight)
    if answers[4] == Answer::D {
        scores.add(Chronotype::Dolphin, 2);
    }

    // Fixed evaluation order with strict comparison: equal top scores resolve
    // to the earliest type, and Bear stands if nothing scores. Question 1
    // always awards points, so the Bear seed is a fallback only.
    let mut winner = Chronotype::Bear;
    let mut max_score = 0;
    for &chronotype in Chronotype::all_variants() {
        let score = scores.score(chronotype);
        if score > max_score {
            max_score = score;
            winner = chronotype;
        }
    }

    debug!("Chronotype classified as {} (scores: {:?})", winner, scores);

    Ok(ChronotypeResult {
        chronotype: winner,
        scores,
    })
}

/// Classify a chronotype from raw option codes.
///
/// Boundary variant of [`classify_chronotype`] for callers holding the
/// answers as strings. Every code must be one of A-D; anything else is
/// rejected with [`Error::UnknownAnswer`].
pub fn classify_chronotype_codes(codes: &[&str]) -> Result<ChronotypeResult> {
    let answers = codes
        .iter()
        .map(|code| Answer::parse(code))
        .collect::<Result<Vec<_>>>()?;
    classify_chronotype(&answers)
}
