//! Prompt shaping for the external audio-generation collaborators
//!
//! Voice-based tracks carry a narration script for the text-to-speech
//! service; everything else carries a text-to-sound generation prompt.

use crate::persona::Persona;
use crate::recipe::TrackKind;

const STRESS_MELTER_MEDITATION: &str = "Take a deep breath in... and slowly let it out. \
    You are safe, you are calm, you are at peace. \
    Feel the tension leaving your shoulders with each exhale. Let go of the day's worries. \
    They have no place here in this moment of tranquility. Your body is becoming heavy and relaxed, \
    sinking into comfort. With each breath, you drift deeper into peaceful rest.";

const MIND_QUIETER_MEDITATION: &str = "Imagine your thoughts as leaves floating down a gentle stream. \
    Watch them drift by without judgment, without attachment. Some thoughts may try to pull you along, \
    but you remain on the peaceful shore, simply observing. The stream flows endlessly, \
    carrying away all the mental chatter of the day. You are the calm observer, \
    peaceful and still, ready for restful sleep.";

const DEEP_SLEEPER_MEDITATION: &str = "Feel your body becoming wonderfully heavy, like you're sinking into the most comfortable bed. \
    Every muscle is releasing, every nerve is calming. You're entering the deepest, most restorative sleep. \
    Your breathing slows, your heartbeat steadies, and your mind becomes beautifully quiet. \
    This is your time for complete restoration and healing rest.";

const SLEEP_STORY: &str = "Once upon a time, in a peaceful meadow surrounded by gentle hills, \
    there stood an old oak tree. Its branches swayed softly in the evening breeze, \
    and beneath its canopy, the grass was soft and warm. \
    As twilight painted the sky in shades of purple and gold, \
    a sense of deep tranquility settled over the land. \
    The flowers closed their petals for the night, \
    and the world prepared for restful sleep. \
    You too can feel this peaceful energy, \
    letting it carry you gently into dreams...";

const BREATHING_PACER: &str = "Breathe in slowly for four counts... two... three... four... \
    Now hold for four counts... two... three... four... \
    And breathe out slowly for six counts... two... three... four... five... six... \
    Continue this rhythm, letting each breath bring you deeper into relaxation...";

/// Whether a track kind is narrated rather than synthesized as sound
pub fn is_voice_track(kind: TrackKind) -> bool {
    matches!(
        kind,
        TrackKind::GuidedMeditation | TrackKind::SleepStory | TrackKind::DeepBreathingPacer
    )
}

/// Narration script for a voice-based track
///
/// Guided meditations are persona-specific; stories and breathing pacers are
/// shared. Returns `None` for non-voice kinds.
pub fn narration_script(kind: TrackKind, persona: Persona) -> Option<&'static str> {
    match kind {
        TrackKind::GuidedMeditation => Some(match persona {
            Persona::StressMelter => STRESS_MELTER_MEDITATION,
            Persona::MindQuieter => MIND_QUIETER_MEDITATION,
            Persona::DeepSleeper => DEEP_SLEEPER_MEDITATION,
        }),
        TrackKind::SleepStory => Some(SLEEP_STORY),
        TrackKind::DeepBreathingPacer => Some(BREATHING_PACER),
        _ => None,
    }
}

/// Text-to-sound generation prompt for a track kind
pub fn sound_prompt(kind: TrackKind) -> &'static str {
    match kind {
        TrackKind::PinkNoise => {
            "Gentle pink noise, soft continuous sound for deep sleep, \
             muffled white noise with lower frequencies"
        }
        TrackKind::ForestSounds => {
            "Peaceful forest ambience with gentle rustling leaves, \
             distant bird calls, soft wind through trees"
        }
        TrackKind::WhaleSongs => {
            "Calming whale songs, deep ocean sounds, distant whale calls echoing underwater"
        }
        TrackKind::GentlePiano => {
            "Soft, slow piano melody for relaxation, gentle keys, peaceful classical style"
        }
        TrackKind::AsmrTriggers => {
            "Gentle tapping sounds, soft brushing, light scratching for ASMR relaxation"
        }
        TrackKind::BinauralBeats => {
            "Delta wave binaural beats for deep sleep, low frequency healing tones"
        }
        TrackKind::RainOnATent => {
            "Gentle rain falling on canvas tent, soft pattering, cozy camping sounds"
        }
        TrackKind::MorningBirds => {
            "Gentle dawn chorus, soft bird songs, peaceful morning nature sounds"
        }
        TrackKind::Crickets => {
            "Soft cricket chirping, evening nature sounds, gentle insect ambience"
        }
        TrackKind::DistantThunder => {
            "Soft distant thunder, gentle rumbling, peaceful storm ambience"
        }
        TrackKind::Underwater => {
            "Gentle underwater sounds, soft bubbles, peaceful ocean depths"
        }
        // Voice kinds still need a sound bed behind the narration
        TrackKind::GuidedMeditation | TrackKind::SleepStory | TrackKind::DeepBreathingPacer => {
            "Peaceful ambient sounds for relaxation and sleep"
        }
    }
}
