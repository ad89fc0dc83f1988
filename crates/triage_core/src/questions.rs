//! Static prompts and options for the three questions.

use serde::Serialize;

use crate::{Answer, ContactMethod, LocalConcern, ResourceType, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    #[serde(serialize_with = "serialize_answer")]
    pub value: Answer,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub description: &'static str,
    pub options: &'static [QuestionOption],
}

fn serialize_answer<S: serde::Serializer>(answer: &Answer, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(answer.as_str())
}

static RESOURCE_TYPE: Question = Question {
    text: "What type of support are you looking for?",
    description: "Choose the option that best fits your current needs",
    options: &[
        QuestionOption {
            value: Answer::ResourceType(ResourceType::National),
            icon: "🇺🇸",
            title: "National Hotline",
            description: "24/7 crisis support available nationwide",
        },
        QuestionOption {
            value: Answer::ResourceType(ResourceType::Local),
            icon: "📍",
            title: "Local Resources",
            description: "Community-based support in your area",
        },
    ],
};

static CONCERN: Question = Question {
    text: "What are you experiencing right now?",
    description: "This helps us find the most appropriate resources for you",
    options: &[
        QuestionOption {
            value: Answer::Concern(LocalConcern::Crisis),
            icon: "🚨",
            title: "Crisis Situation",
            description: "Immediate danger or severe distress",
        },
        QuestionOption {
            value: Answer::Concern(LocalConcern::Burnout),
            icon: "🔥",
            title: "Burnout",
            description: "Work-related or caregiver exhaustion",
        },
        QuestionOption {
            value: Answer::Concern(LocalConcern::General),
            icon: "💭",
            title: "General Support",
            description: "Stress, anxiety, or other concerns",
        },
    ],
};

static CONTACT_METHOD: Question = Question {
    text: "How would you prefer to connect?",
    description: "Choose your preferred way to get support",
    options: &[
        QuestionOption {
            value: Answer::ContactMethod(ContactMethod::Phone),
            icon: "📞",
            title: "Phone Call",
            description: "Speak with someone directly",
        },
        QuestionOption {
            value: Answer::ContactMethod(ContactMethod::Text),
            icon: "💬",
            title: "Text Message",
            description: "Text-based support and counseling",
        },
    ],
};

/// The question asked at `step`, `None` at results.
pub fn question(step: Step) -> Option<&'static Question> {
    match step {
        Step::One => Some(&RESOURCE_TYPE),
        Step::Two => Some(&CONCERN),
        Step::Three => Some(&CONTACT_METHOD),
        Step::Results => None,
    }
}
