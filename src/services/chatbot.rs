//! Rule-based support chatbot.
//!
//! A message is case-folded and tested against [`RULES`] top to bottom; the
//! first rule with a keyword appearing as a whole word (or phrase) wins, so
//! "log" does not fire on "psychologist". Inflections are listed as separate
//! keywords. Crisis keywords are checked first so that a message asking for
//! help while mentioning self-harm always gets the crisis resources. Mood
//! rules come before the generic "help"/"support" rule. Anything unmatched,
//! including empty input, gets [`FALLBACK`].
//!
//! Matching is lexical only. Negation is not understood: "I don't feel good"
//! still hits the positive-mood rule.

use serde::Serialize;

use crate::models::chat::{ChatReply, ReplyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Crisis,
    Anxiety,
    Sadness,
    Stress,
    PositiveMood,
    MoodTracking,
    Breathing,
    Grounding,
    SelfCare,
    Support,
    General,
}

struct Template {
    text: &'static str,
    suggestions: &'static [&'static str],
    kind: ReplyKind,
}

impl Template {
    fn to_reply(&self) -> ChatReply {
        ChatReply {
            response_text: self.text.to_string(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
            kind: self.kind,
        }
    }
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
    template: Template,
}

// ── Rule table (priority order) ─────────────────────────────────────────

const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Crisis,
        keywords: &[
            "crisis",
            "emergency",
            "suicide",
            "suicidal",
            "hurt myself",
            "hurting myself",
            "kill myself",
            "killing myself",
            "end it all",
            "want to die",
            "not worth living",
        ],
        template: Template {
            text: "I'm concerned about you. If you're having thoughts of hurting yourself, please reach out for immediate help:\n\n• **Crisis Text Line**: Text HOME to 741741\n• **988 Suicide & Crisis Lifeline**: Call or text 988\n• **Emergency Services**: 911\n\nYou're not alone, and help is available.",
            suggestions: &[
                "I need immediate help",
                "I'm not sure if I'm in crisis",
                "Thank you for caring",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::Anxiety,
        keywords: &[
            "anxious",
            "anxiety",
            "panic",
            "panicking",
            "panicked",
            "nervous",
            "worried",
            "worry",
            "worrying",
        ],
        template: Template {
            text: "I understand you're feeling anxious. That's completely normal. Here are some techniques that might help:\n\n• Take 5 deep breaths slowly\n• Try the 5-4-3-2-1 grounding technique\n• Practice progressive muscle relaxation\n• Remember: this feeling will pass",
            suggestions: &[
                "Tell me more about your anxiety",
                "I need breathing exercises",
                "What's the 5-4-3-2-1 technique?",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::Sadness,
        keywords: &[
            "sad",
            "sadness",
            "depressed",
            "depression",
            "down",
            "hopeless",
            "miserable",
        ],
        template: Template {
            text: "I'm sorry you're feeling down. It's okay to have these feelings. Here are some gentle suggestions:\n\n• Reach out to someone you trust\n• Try a small, enjoyable activity\n• Practice self-compassion\n• Consider professional help if needed",
            suggestions: &[
                "I need someone to talk to",
                "What activities might help?",
                "How do I practice self-compassion?",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::Stress,
        keywords: &[
            "stress",
            "stressed",
            "stressful",
            "stressing",
            "overwhelmed",
            "overwhelming",
            "burnout",
            "burned out",
            "burnt out",
            "pressure",
        ],
        template: Template {
            text: "Stress can be overwhelming. Let's work through this together:\n\n• Identify what's causing your stress\n• Break tasks into smaller steps\n• Practice mindfulness or meditation\n• Take regular breaks",
            suggestions: &[
                "Help me identify stress sources",
                "Teach me mindfulness",
                "I need stress management tips",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::PositiveMood,
        keywords: &["happy", "happier", "good", "great", "wonderful", "amazing"],
        template: Template {
            text: "That's wonderful to hear! 😊 It's great that you're feeling positive. Consider:\n\n• What contributed to this good feeling?\n• How can you build on this positive energy?\n• Remember this feeling for difficult times",
            suggestions: &[
                "How do I maintain this feeling?",
                "I want to track this positive mood",
                "What made me feel good?",
            ],
            kind: ReplyKind::Suggestion,
        },
    },
    Rule {
        topic: Topic::MoodTracking,
        keywords: &[
            "track",
            "tracking",
            "tracker",
            "mood",
            "moods",
            "log",
            "logging",
        ],
        template: Template {
            text: "Great! Mood tracking is an excellent way to understand your patterns. You can:\n\n• Log your daily mood in the app\n• Note what triggers different emotions\n• Track patterns over time\n• Share insights with your healthcare provider",
            suggestions: &[
                "How do I log my mood?",
                "What should I track?",
                "How do I see my patterns?",
            ],
            kind: ReplyKind::Suggestion,
        },
    },
    Rule {
        topic: Topic::Breathing,
        keywords: &["breathing", "breathe", "breath"],
        template: Template {
            text: "Let's do a breathing exercise together! 🌬️\n\nI can guide you through a calming breathing exercise that helps reduce stress and anxiety. Would you like to start?",
            suggestions: &[
                "Start breathing exercise",
                "Tell me about breathing techniques",
                "I need other help",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::Grounding,
        keywords: &["grounding", "5-4-3-2-1"],
        template: Template {
            text: "**5-4-3-2-1 Grounding Technique:** 🌍\n\n• **5** things you can see\n• **4** things you can touch\n• **3** things you can hear\n• **2** things you can smell\n• **1** thing you can taste\n\nThis helps bring you back to the present moment.",
            suggestions: &[
                "Let's do this together",
                "I need other grounding techniques",
                "This helped, thank you",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::SelfCare,
        keywords: &["self-care", "self care"],
        template: Template {
            text: "Self-care is so important! Here are some ideas:\n\n• Take a warm bath or shower\n• Go for a gentle walk\n• Listen to your favorite music\n• Practice gratitude\n• Get enough sleep\n• Eat nourishing foods",
            suggestions: &[
                "More self-care ideas",
                "How do I start a routine?",
                "I don't have time for self-care",
            ],
            kind: ReplyKind::Resource,
        },
    },
    Rule {
        topic: Topic::Support,
        keywords: &["help", "support", "supported"],
        template: Template {
            text: "I'm here to support you! I can help with:\n\n• Mood tracking and insights\n• Breathing and relaxation exercises\n• Stress management techniques\n• Self-care suggestions\n• Crisis resources\n\nWhat would be most helpful right now?",
            suggestions: &[
                "Mood tracking help",
                "Relaxation techniques",
                "Self-care ideas",
                "Crisis resources",
            ],
            kind: ReplyKind::Suggestion,
        },
    },
];

const FALLBACK: Template = Template {
    text: "I'm here to listen and support you. I can help with mood tracking, stress management, breathing exercises, and general mental health guidance. What's on your mind?",
    suggestions: &[
        "I need help with anxiety",
        "I want to track my mood",
        "I need breathing exercises",
        "I'm feeling overwhelmed",
    ],
    kind: ReplyKind::Text,
};

const GREETING: Template = Template {
    text: "Hi! I'm your mental health companion. I'm here to help you with mood tracking, provide support, and offer guidance. How are you feeling today?",
    suggestions: &[
        "I'm feeling anxious",
        "I need help with stress",
        "I want to track my mood",
        "I'm having a tough day",
    ],
    kind: ReplyKind::Text,
};

fn matching_rule(message: &str) -> Option<&'static Rule> {
    let normalized = message.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| contains_word(&normalized, kw)))
}

/// True if `needle` occurs in `haystack` with no letter or digit directly
/// on either side.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Which topic a message is routed to.
pub fn classify(message: &str) -> Topic {
    matching_rule(message).map_or(Topic::General, |rule| rule.topic)
}

pub fn respond_to_message(message: &str) -> ChatReply {
    matching_rule(message).map_or_else(|| FALLBACK.to_reply(), |rule| rule.template.to_reply())
}

/// Opening message of every chat session.
pub fn greeting() -> ChatReply {
    GREETING.to_reply()
}
