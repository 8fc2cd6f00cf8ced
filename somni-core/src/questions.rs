//! Canonical onboarding questionnaire definitions
//!
//! Keeps the question wording next to the scoring rules in
//! [`crate::chronotype`] so UI layers cannot drift from the classifier.

use crate::chronotype::Answer;

/// One selectable option within a questionnaire slot
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub answer: Answer,
    pub text: &'static str,
    pub hint: &'static str,
}

/// A single questionnaire slot with its four options
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub title: &'static str,
    pub prompt: &'static str,
    pub options: [QuestionOption; 4],
}

/// The five chronotype questions, in scoring order
pub fn questionnaire() -> &'static [Question; 5] {
    &QUESTIONS
}

static QUESTIONS: [Question; 5] = [
    Question {
        title: "What's Your Natural Rhythm?",
        prompt: "Which of these sounds most like your natural rhythm, especially on days off?",
        options: [
            QuestionOption {
                answer: Answer::A,
                text: "I'm an early bird, most alert in the morning.",
                hint: "Morning person",
            },
            QuestionOption {
                answer: Answer::B,
                text: "My energy follows the sun; up in the morning, tired after sunset.",
                hint: "Balanced rhythm",
            },
            QuestionOption {
                answer: Answer::C,
                text: "I'm a night owl, hitting my stride in the evening.",
                hint: "Evening person",
            },
            QuestionOption {
                answer: Answer::D,
                text: "I'm a very light sleeper; my schedule is often unpredictable.",
                hint: "Irregular schedule",
            },
        ],
    },
    Question {
        title: "Sleep Quality Assessment",
        prompt: "Over the past month, how would you rate your sleep quality overall?",
        options: [
            QuestionOption {
                answer: Answer::A,
                text: "Very Good",
                hint: "Consistently restful sleep",
            },
            QuestionOption {
                answer: Answer::B,
                text: "Fairly Good",
                hint: "Generally satisfactory",
            },
            QuestionOption {
                answer: Answer::C,
                text: "Fairly Bad",
                hint: "Often disrupted",
            },
            QuestionOption {
                answer: Answer::D,
                text: "Very Bad",
                hint: "Consistently poor",
            },
        ],
    },
    Question {
        title: "Primary Sleep Challenge",
        prompt: "What is your single biggest challenge with sleep?",
        options: [
            QuestionOption {
                answer: Answer::A,
                text: "Difficulty falling asleep",
                hint: "Takes a long time to drift off",
            },
            QuestionOption {
                answer: Answer::B,
                text: "Waking up frequently during the night",
                hint: "Interrupted sleep",
            },
            QuestionOption {
                answer: Answer::C,
                text: "Waking up too early and being unable to get back to sleep",
                hint: "Early morning awakening",
            },
            QuestionOption {
                answer: Answer::D,
                text: "Feeling tired even after a full night's sleep",
                hint: "Non-restorative sleep",
            },
        ],
    },
    Question {
        title: "Challenge Response Style",
        prompt: "When facing a new challenge, you are more likely to...",
        options: [
            QuestionOption {
                answer: Answer::A,
                text: "Plan carefully and stick to the plan",
                hint: "Structured approach",
            },
            QuestionOption {
                answer: Answer::B,
                text: "Worry about what might go wrong",
                hint: "Cautious mindset",
            },
            QuestionOption {
                answer: Answer::C,
                text: "Jump in and figure it out as I go",
                hint: "Adaptive approach",
            },
            QuestionOption {
                answer: Answer::D,
                text: "Research thoroughly before acting",
                hint: "Analytical approach",
            },
        ],
    },
    Question {
        title: "Relaxation Preferences",
        prompt: "Which type of sound do you generally find most relaxing?",
        options: [
            QuestionOption {
                answer: Answer::A,
                text: "A person speaking calmly",
                hint: "Guided meditation or stories",
            },
            QuestionOption {
                answer: Answer::B,
                text: "Musical sounds",
                hint: "Like gentle piano",
            },
            QuestionOption {
                answer: Answer::C,
                text: "Nature sounds",
                hint: "Forest or ocean waves",
            },
            QuestionOption {
                answer: Answer::D,
                text: "Simple background noise",
                hint: "Rain or fan sounds",
            },
        ],
    },
];
