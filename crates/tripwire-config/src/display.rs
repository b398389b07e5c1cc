use crate::Config;

/// Settings as (name, value) rows for operator display, token masked
pub fn settings_rows(config: &Config) -> Vec<(&'static str, String)> {
    let keywords = if config.keywords.is_empty() {
        "(none)".to_string()
    } else {
        config.keywords.join(", ")
    };

    let target = if config.target_username.is_empty() {
        "(any)".to_string()
    } else {
        config.target_username.clone()
    };

    vec![
        ("keywords", keywords),
        ("response", config.response.clone()),
        ("scan_interval", format!("{}s", config.scan_interval)),
        ("message_area", config.message_area.to_string()),
        ("username_area", config.username_area.to_string()),
        ("case_sensitive", config.case_sensitive.to_string()),
        ("discord_token", mask(&config.discord_token)),
        ("channel_id", config.channel_id.clone()),
        ("ocr_resolution", config.ocr_resolution.to_string()),
        ("ocr_config", config.ocr_config.clone()),
        ("target_username", target),
        ("sessions_recorded", config.session_history.len().to_string()),
    ]
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
