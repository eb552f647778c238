use rand::seq::SliceRandom;
use serde::Serialize;

const TIPS: &[&str] = &[
    "Take deep breaths and focus on the present moment",
    "Practice gratitude by writing down three things you're thankful for",
    "Connect with a friend or family member",
    "Engage in physical activity, even a short walk",
    "Try mindfulness or meditation for a few minutes",
    "Listen to calming music or nature sounds",
    "Write in a journal about your feelings",
    "Practice self-compassion and be kind to yourself",
    "Get adequate sleep and maintain a regular sleep schedule",
    "Eat nutritious meals and stay hydrated",
    "Limit exposure to negative news or social media",
    "Spend time in nature if possible",
    "Engage in activities you enjoy",
    "Practice relaxation techniques like progressive muscle relaxation",
];

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyResources {
    pub crisis_helpline: &'static str,
    pub text_line: &'static str,
    pub emergency: &'static str,
    pub message: &'static str,
}

/// `count` distinct tips in random order; asking for more than exist
/// returns all of them.
pub fn tips(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    TIPS.choose_multiple(&mut rng, count.min(TIPS.len()))
        .copied()
        .collect()
}

pub fn emergency_resources() -> EmergencyResources {
    EmergencyResources {
        crisis_helpline: "988 (Suicide & Crisis Lifeline)",
        text_line: "Text HOME to 741741 (Crisis Text Line)",
        emergency: "911 (Emergency Services)",
        message: "If you're in immediate danger, please call emergency services or go to your nearest emergency room.",
    }
}
