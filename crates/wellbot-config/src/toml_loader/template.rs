//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# wellbot configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[ai]
# model = "gemini-2.5-flash"
# api_key_env = "GOOGLE_API_KEY"   # environment variable holding the key
# max_tokens = 4096                # 1-65536
# temperature = 0.7                # 0.0-2.0
# timeout_secs = 60                # 1-600

[chat]
# greeting = "Hello! I'm your Health & Wellness Assistant. How can I help you today? 😊"
# context_turns = 6                # 0-100, recent turns sent with each question
# mode = "none"                    # none, bulletize, truncate
# max_words = 150                  # 1-10000, used when mode = "truncate"

[display]
# reveal_delay_ms = 30             # 0-1000, 0 disables the typing effect
# color = true

[logging]
# level = "WARNING"                 # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
