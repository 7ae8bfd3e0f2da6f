//! Prompt templates for the wellness assistant.

/// Topics offered as one-step shortcuts.
pub const QUICK_TOPICS: [&str; 8] = [
    "Nutrition Advice",
    "Exercise Routine",
    "Sleep Improvement",
    "Stress Management",
    "Mental Wellness",
    "Weight Management",
    "Chronic Condition Tips",
    "General Wellness",
];

/// Resolve a quick topic from a 1-based index or a case-insensitive label.
pub fn quick_topic(selector: &str) -> Option<&'static str> {
    let selector = selector.trim();
    if let Ok(n) = selector.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| QUICK_TOPICS.get(i)).copied();
    }
    QUICK_TOPICS
        .iter()
        .copied()
        .find(|topic| topic.eq_ignore_ascii_case(selector))
}

/// The user turn recorded when a quick topic is chosen.
pub fn topic_request(label: &str) -> String {
    format!("I need advice about {label}")
}

/// Prompt for a quick topic. Carries no conversation history.
pub fn topic_prompt(label: &str) -> String {
    format!(
        "You are a professional health and wellness assistant. Provide detailed, practical, \
and scientifically-backed advice about {label}.

Include:
1. Key recommendations
2. Practical tips
3. Common mistakes to avoid
4. When to consult a professional

Format the response in clear, easy-to-follow markdown with bullet points and proper spacing."
    )
}

/// Prompt for a free-form question, embedding the recent context lines.
pub fn submission_prompt(context: &[String], query: &str) -> String {
    let context = context.join("\n");
    format!(
        "Context from previous conversation:
{context}

As a health and wellness expert, provide a detailed, practical response to the user's query:
\"{query}\"

Guidelines:
1. Be professional yet friendly
2. Provide evidence-based recommendations
3. Suggest actionable steps
4. Mention when professional help might be needed
5. Use markdown formatting for readability
6. Keep responses concise but comprehensive"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_topic_by_index() {
        assert_eq!(quick_topic("1"), Some("Nutrition Advice"));
        assert_eq!(quick_topic(" 8 "), Some("General Wellness"));
        assert_eq!(quick_topic("0"), None);
        assert_eq!(quick_topic("9"), None);
    }

    #[test]
    fn quick_topic_by_label() {
        assert_eq!(quick_topic("sleep improvement"), Some("Sleep Improvement"));
        assert_eq!(quick_topic("Yoga"), None);
    }

    #[test]
    fn topic_request_wording() {
        assert_eq!(
            topic_request("Stress Management"),
            "I need advice about Stress Management"
        );
    }

    #[test]
    fn topic_prompt_names_topic_and_sections() {
        let prompt = topic_prompt("Exercise Routine");
        assert!(prompt.contains("advice about Exercise Routine."));
        assert!(prompt.contains("3. Common mistakes to avoid"));
        assert!(!prompt.contains("Context from previous conversation"));
    }

    #[test]
    fn submission_prompt_embeds_context_and_query() {
        let context = vec![
            "assistant: Hello!".to_string(),
            "user: sleep tips".to_string(),
        ];
        let prompt = submission_prompt(&context, "sleep tips");
        assert!(prompt.starts_with(
            "Context from previous conversation:\nassistant: Hello!\nuser: sleep tips\n"
        ));
        assert!(prompt.contains("\"sleep tips\""));
        assert!(prompt.ends_with("6. Keep responses concise but comprehensive"));
    }
}
