//! Canned-response budgeting assistant
//!
//! Matches a free-text question against a short keyword list and answers
//! with a fixed reply. There is no language understanding beyond
//! case-insensitive substring checks.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Which canned reply a question maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantTopic {
    Budget,
    Tips,
    Help,
    Unknown,
}

/// Keywords in match order, the first one found wins
const KEYWORDS: [(&str, AssistantTopic); 3] = [
    ("budget", AssistantTopic::Budget),
    ("tips", AssistantTopic::Tips),
    ("help", AssistantTopic::Help),
];

impl AssistantTopic {
    pub fn reply(self) -> &'static str {
        match self {
            Self::Budget => "Make sure your expenses don't exceed your budget!",
            Self::Tips => "Track your expenses regularly to stay within your budget.",
            Self::Help => "How can I assist you with your budgeting?",
            Self::Unknown => {
                "I'm not sure how to answer that. Try asking about budget tips or general help!"
            }
        }
    }
}

impl fmt::Display for AssistantTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reply())
    }
}

/// Pick the reply topic for a question
///
/// Returns `None` for empty or whitespace-only input, in which case callers
/// keep whatever reply they were already showing.
pub fn respond(question: &str) -> Option<AssistantTopic> {
    let question = question.trim();
    if question.is_empty() {
        return None;
    }

    let lowered = question.to_lowercase();
    let topic = KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, topic)| *topic)
        .unwrap_or(AssistantTopic::Unknown);

    debug!(?topic, "assistant matched question");
    Some(topic)
}
