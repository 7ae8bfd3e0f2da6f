//! Validation for the `[ai]` section.

use crate::schema::WellbotConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_ai(errors: &mut Vec<String>, config: &WellbotConfig) {
    validate_non_empty(errors, "ai.model", &config.ai.model);
    validate_non_empty(errors, "ai.api_key_env", &config.ai.api_key_env);
    validate_range(errors, "ai.max_tokens", config.ai.max_tokens, 1, 65536);
    validate_range_f64(errors, "ai.temperature", config.ai.temperature, 0.0, 2.0);
    validate_range(errors, "ai.timeout_secs", config.ai.timeout_secs, 1, 600);
}
