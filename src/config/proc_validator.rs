//! Configuration validation with aggregated errors.
//! - logging level invariants
//! - custom grammar: every field present, separators distinct

use tracing::{error, info};

use crate::config::settings::{ServiceConfig, SettingsConfig};
use crate::token::grammar::GrammarKind;

/// Returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_grammar(&cfg.grammar, &mut errors);

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        error!("configuration validation errors ({}):", errors.len());
        for e in &errors {
            error!(" - {}", e);
        }
        Err(errors)
    }
}

/// SETTINGS VALIDATION
fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if let Some(logging) = &settings.logging {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' invalid; allowed: {:?}",
                logging.level, valid
            ));
        }
    }
}

/// GRAMMAR VALIDATION
fn validate_grammar(grammar: &GrammarKind, errors: &mut Vec<String>) {
    let GrammarKind::Custom {
        audience_field,
        expires_on_field,
        key_value_separator,
        pair_separator,
    } = grammar
    else {
        return;
    };

    for (name, value) in [
        ("audience_field", audience_field),
        ("expires_on_field", expires_on_field),
        ("key_value_separator", key_value_separator),
        ("pair_separator", pair_separator),
    ] {
        if value.is_empty() {
            errors.push(format!("grammar.{} cannot be empty", name));
        }
    }

    if !pair_separator.is_empty() && key_value_separator == pair_separator {
        errors.push(format!(
            "grammar.key_value_separator and grammar.pair_separator must differ (both '{}')",
            pair_separator
        ));
    }
}
