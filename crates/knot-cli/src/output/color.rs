//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan    (vertex names)
//!   - Success:   green   (completed writes)
//!   - Emphasis:  bold    (section headers, matrix labels)
//!   - Muted:     dimmed  (infinite cells, indices)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "info" color (cyan) to text, used for vertex names.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply bold style to text (for section headers).
pub fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Apply dimmed style to text.
pub fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Symbol for an infinite distance, with ASCII fallback.
pub fn infinity_symbol(config: &OutputConfig) -> &'static str {
    if config.use_ascii { "inf" } else { "∞" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_config_leaves_text_alone() {
        let config = OutputConfig::new(false, false);
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(info("A", &config), "A");
        assert_eq!(bold("Edges", &config), "Edges");
        assert_eq!(dimmed("∞", &config), "∞");
    }

    #[test]
    fn test_colors_wrap_text() {
        colored::control::set_override(true);
        let config = OutputConfig::new(false, true);
        let styled = info("A", &config);
        colored::control::unset_override();

        assert!(styled.contains('A'));
        assert_ne!(styled, "A");
    }

    #[test]
    fn test_infinity_symbol() {
        assert_eq!(infinity_symbol(&OutputConfig::new(false, false)), "∞");
        assert_eq!(infinity_symbol(&OutputConfig::new(true, false)), "inf");
    }
}
