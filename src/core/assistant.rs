//! Scripted assistant replies for the chat panel.

/// Canned reply for a user message.
pub fn reply(input: &str) -> &'static str {
    let lowered = input.to_lowercase();
    if lowered.contains("hello") {
        "Hello! How can I assist you with your coding today?"
    } else if lowered.contains("help") {
        "I'm here to help! What specific coding question do you have?"
    } else {
        "I understand you're asking about coding. Could you please provide more details or specify your question?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(
            reply("Hello there"),
            "Hello! How can I assist you with your coding today?"
        );
    }

    #[test]
    fn test_help_request() {
        assert_eq!(
            reply("I need HELP"),
            "I'm here to help! What specific coding question do you have?"
        );
        // Greeting wins over help.
        assert!(reply("hello, help").starts_with("Hello!"));
    }

    #[test]
    fn test_fallback() {
        assert!(reply("how do lifetimes work").starts_with("I understand"));
    }
}
