//! Offline responder: keyword buckets of canned replies, no network.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::backend::{GenerateError, Generator};

/// Minimum fuzzy score before a bucket is considered a match at all.
const MIN_FUZZY_SCORE: i64 = 50;

struct Topic {
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

/// Checked in order; the first substring hit wins, like the original bank.
const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["code", "python", "javascript", "programming", "debug"],
        replies: &[
            "I'd be happy to help you with coding! Could you share the specific code you're working with or describe the problem you're trying to solve?",
            "Programming questions are my specialty! What language are you working with and what would you like assistance with?",
            "Let's debug that together! Please share your code snippet and I'll help you identify any issues and suggest improvements.",
        ],
    },
    Topic {
        keywords: &["story", "creative", "write"],
        replies: &[
            "I love creative writing! What genre or theme interests you? I can help you craft an engaging story with compelling characters and plot.",
            "Let's create something amazing together! Would you like me to write a short story, help with character development, or brainstorm plot ideas?",
            "Creative writing is one of my favorite activities! What kind of story are you envisioning - adventure, mystery, sci-fi, romance, or something else?",
        ],
    },
    Topic {
        keywords: &["quantum", "explain", "how does"],
        replies: &[
            "Great question! I'd be happy to break down complex topics into easy-to-understand explanations. What specifically would you like me to explain?",
            "I love explaining technical concepts! I can provide detailed explanations with examples and analogies to make it crystal clear.",
            "Technical topics are fascinating! Let me explain this in a way that's both comprehensive and easy to follow.",
        ],
    },
    Topic {
        keywords: &["marketing", "business", "startup"],
        replies: &[
            "I can help you brainstorm innovative marketing strategies! What's your target audience and what kind of business or product are you promoting?",
            "Marketing is all about connecting with your audience authentically. Tell me about your business and I'll suggest some creative approaches!",
            "Let's develop a marketing strategy that stands out! What industry are you in and what are your main goals?",
        ],
    },
    Topic {
        keywords: &["hello", "hi", "hey"],
        replies: &[
            "Hello! I'm excited to help you today. Whether you need help with coding, creative writing, explanations, or just want to have an interesting conversation, I'm here for you!",
            "Hi there! I'm your assistant, ready to tackle any questions or projects you have. What can I help you with today?",
            "Hey! Great to meet you. I'm here to assist with anything from technical questions to creative projects. What's on your mind?",
        ],
    },
];

const DEFAULT_REPLIES: &[&str] = &[
    "That's a fascinating topic! I'd love to dive deeper into this with you. Could you tell me more about what specific aspect interests you most?",
    "Interesting question! I can help you explore this further. What particular angle or approach would you like me to focus on?",
    "I'm intrigued by your question! Let me provide you with a comprehensive response that addresses your needs.",
    "Great point! I can offer you several perspectives on this. Would you like me to start with the fundamentals or dive into more advanced concepts?",
    "That's something I can definitely help with! Let me break this down for you in a clear and useful way.",
];

/// Picks a canned reply for a prompt. Bucket choice is substring-first,
/// then best fuzzy keyword score; the reply within a bucket is a stable
/// hash of the prompt, so the same prompt always gets the same reply.
pub struct CannedResponder;

impl CannedResponder {
    pub fn new() -> Self {
        Self
    }

    fn pick_topic(prompt: &str) -> Option<&'static Topic> {
        let lowered = prompt.to_lowercase();
        for topic in TOPICS {
            if topic.keywords.iter().any(|k| lowered.contains(k)) {
                return Some(topic);
            }
        }
        let matcher = SkimMatcherV2::default();
        TOPICS
            .iter()
            .filter_map(|topic| {
                topic
                    .keywords
                    .iter()
                    .filter_map(|k| matcher.fuzzy_match(&lowered, k))
                    .max()
                    .map(|score| (score, topic))
            })
            .filter(|(score, _)| *score >= MIN_FUZZY_SCORE)
            .max_by_key(|(score, _)| *score)
            .map(|(_, topic)| topic)
    }

    fn pick_reply(prompt: &str, replies: &'static [&'static str]) -> &'static str {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        replies[(hasher.finish() % replies.len() as u64) as usize]
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for CannedResponder {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let replies = Self::pick_topic(prompt).map_or(DEFAULT_REPLIES, |t| t.replies);
        Ok(Self::pick_reply(prompt, replies).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_prompts_land_in_their_bucket() {
        let reply = CannedResponder.generate("help me debug my python code").unwrap();
        assert!(TOPICS[0].replies.contains(&reply.as_str()));

        let reply = CannedResponder.generate("write me a story").unwrap();
        assert!(TOPICS[1].replies.contains(&reply.as_str()));

        let reply = CannedResponder.generate("explain quantum computing").unwrap();
        assert!(TOPICS[2].replies.contains(&reply.as_str()));
    }

    #[test]
    fn unmatched_prompts_fall_back_to_the_default_bank() {
        let reply = CannedResponder.generate("zzz qqq").unwrap();
        assert!(DEFAULT_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn same_prompt_always_gets_the_same_reply() {
        let a = CannedResponder.generate("tell me about gardening").unwrap();
        let b = CannedResponder.generate("tell me about gardening").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn never_fails() {
        assert!(CannedResponder.generate("").is_ok());
    }
}
