//! # Somni Core Library
//!
//! The personalization engine for the Somni sleep-wellness application:
//! - Chronotype classification from the onboarding questionnaire
//! - Nightly persona classification from the daily mood check-in
//! - Weighted audio recipe generation for downstream sound synthesis
//! - Prompt shaping for the text-to-speech and sound-generation services
//! - Sleep-quality heuristics over the session history
//!
//! Every function here is pure, synchronous, and free of shared state.
//! Persistence, HTTP, and the external audio services belong to the calling
//! layers; they pass stored values in explicitly and persist the results.

pub mod chronotype;
pub mod error;
pub mod persona;
pub mod prompts;
pub mod questions;
pub mod recipe;
pub mod wellness;

pub use chronotype::{
    classify_chronotype, classify_chronotype_codes, Answer, Chronotype, ChronotypeResult,
    ChronotypeScores,
};
pub use error::{Error, Result};
pub use persona::{
    classify_persona, classify_persona_codes, DailyCheckIn, Persona, SleepChallenge, StressLevel,
    ThoughtsState,
};
pub use recipe::{
    generate_recipe, generate_recipe_for, AudioTrack, Preference, Recipe, SoundPreferences,
    TrackKind,
};
