//! Reply texts and streamed delivery.
//!
//! Replies are never generated. A normal turn is an acknowledgment followed
//! by the next scripted prompt, unchanged.

use std::time::Duration;

/// Receives successive fragments of a reply.
pub type ChunkSink<'a> = dyn FnMut(&str) + Send + 'a;

const ACKNOWLEDGMENTS: &[&str] = &[
    "Thank you for sharing that.",
    "I appreciate you telling me.",
    "Thanks, that's helpful.",
    "Got it, thank you.",
    "Thank you, that helps me understand.",
];

pub const GREETING: &str = "Hello, and thank you for reaching out. I'll ask a few short \
questions about your child so our care team can understand what's been going on. If you \
are ever worried about your child's immediate safety, call 911 or the 988 Suicide & Crisis \
Lifeline right away.";

pub const REASK: &str = "I didn't catch an answer there.";

pub const COMPLETION_MESSAGE: &str = "Thank you for answering all of the questions. Your \
responses have been recorded, and our care team will review them to recommend next steps \
for your child.";

pub const CRISIS_MESSAGE: &str = "Thank you for telling me. What you've shared suggests your \
child may be at risk, and their safety comes first. If there is any immediate danger, call \
911 or go to the nearest emergency room now. You can call or text 988 to reach the Suicide & \
Crisis Lifeline at any time, or text HOME to 741741 to reach the Crisis Text Line. A member of \
our clinical team will follow up with you as soon as possible.";

/// Acknowledgment for an answer, picked by its length so the same answer
/// always gets the same text.
pub fn acknowledgment(raw: &str) -> &'static str {
    ACKNOWLEDGMENTS[raw.trim().chars().count() % ACKNOWLEDGMENTS.len()]
}

/// Acknowledgment and the next prompt. Nothing follows the prompt.
pub fn compose(raw: &str, next_prompt: &str) -> String {
    format!("{}\n\n{}", acknowledgment(raw), next_prompt)
}

pub fn reask(prompt: &str) -> String {
    format!("{REASK}\n\n{prompt}")
}

pub fn opening(first_prompt: &str) -> String {
    format!("{GREETING}\n\n{first_prompt}")
}

/// Emit `message` word by word with a pause between segments. The
/// segments concatenate back to `message` exactly.
pub async fn stream(message: &str, sink: &mut ChunkSink<'_>, delay: Duration) {
    for segment in message.split_inclusive(' ') {
        sink(segment);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
