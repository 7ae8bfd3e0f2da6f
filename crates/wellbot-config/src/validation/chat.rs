//! Validation for the `[chat]` and `[display]` sections.

use crate::schema::WellbotConfig;

use super::helpers::validate_range;

/// Validate conversation constraints.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &WellbotConfig) {
    validate_range(
        errors,
        "chat.context_turns",
        config.chat.context_turns,
        0,
        100,
    );
    validate_range(errors, "chat.max_words", config.chat.max_words, 1, 10_000);
}

/// Validate display constraints.
pub(crate) fn validate_display(errors: &mut Vec<String>, config: &WellbotConfig) {
    validate_range(
        errors,
        "display.reveal_delay_ms",
        config.display.reveal_delay_ms,
        0,
        1000,
    );
}
