//! Color output support for terminal messages
//!
//! Status lines printed around the tables (export results, warnings, station
//! status) go through [`Colorizer`] so `--no-color` and the config switch are
//! honored in one place.

use nu_ansi_term::Color;

use crate::provider::StationStatus;

/// Color scheme for output highlighting
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    /// Enable colors
    enabled: bool,
}

impl Colorizer {
    /// Create a new colorizer
    ///
    /// # Arguments
    /// * `enabled` - Enable color output
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Colorize text as success (green)
    pub fn success(&self, text: &str) -> String {
        self.paint(Color::Green, text)
    }

    /// Colorize text as error (red), prefixed with `Error: `
    pub fn error(&self, text: &str) -> String {
        self.paint(Color::Red, &format!("Error: {text}"))
    }

    /// Colorize text as warning (yellow)
    pub fn warning(&self, text: &str) -> String {
        self.paint(Color::Yellow, text)
    }

    /// Colorize text as info (blue)
    pub fn info(&self, text: &str) -> String {
        self.paint(Color::Blue, text)
    }

    /// Colorize a station status label
    pub fn station_status(&self, status: StationStatus) -> String {
        let color = match status {
            StationStatus::Online => Color::Green,
            StationStatus::Offline => Color::Red,
            StationStatus::Maintenance => Color::Yellow,
        };
        self.paint(color, status.label())
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorizer_no_colors() {
        let colorizer = Colorizer::new(false);
        let result = colorizer.error("test error");
        assert_eq!(result, "Error: test error");
        assert!(!result.contains("\x1b"));
    }

    #[test]
    fn test_colorizer_with_colors() {
        let colorizer = Colorizer::new(true);
        let result = colorizer.success("test");
        assert!(result.contains("\x1b"));
        assert!(result.contains("test"));
    }

    #[test]
    fn test_station_status_plain() {
        let colorizer = Colorizer::new(false);
        assert_eq!(
            colorizer.station_status(StationStatus::Online),
            StationStatus::Online.label()
        );
    }
}
