use crate::domain::{Pattern, presets};

/// Cycles through the preset patterns seeded with the G key
pub struct PatternPicker {
    patterns: Vec<Pattern>,
    selected: usize,
}

impl PatternPicker {
    pub fn new() -> Self {
        Self {
            patterns: presets::all_patterns(),
            selected: 0,
        }
    }

    pub fn current(&self) -> &Pattern {
        &self.patterns[self.selected]
    }

    /// Select the next preset, wrapping after the last
    pub fn next(&mut self) -> &Pattern {
        self.selected = (self.selected + 1) % self.patterns.len();
        self.current()
    }
}

impl Default for PatternPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_preset() {
        assert_eq!(PatternPicker::new().current().name, "Block");
    }

    #[test]
    fn test_next_visits_every_preset_and_wraps() {
        let mut picker = PatternPicker::new();
        let count = presets::all_patterns().len();
        let names: Vec<_> = (0..count).map(|_| picker.next().name).collect();
        assert!(names.contains(&"R-pentomino"));
        assert_eq!(names.last(), Some(&"Block"));
    }
}
