//! Formatting of captured output buffers.

/// Whether captured output has surrounding whitespace removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrimPolicy {
    /// Strip leading and trailing whitespace, including the final newline.
    #[default]
    Trim,
    /// Return the text exactly as the command wrote it.
    Preserve,
}

impl TrimPolicy {
    /// Applies this policy to captured text.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Trim => text.trim().to_string(),
            Self::Preserve => text.to_string(),
        }
    }

    /// Maps a boolean "trim output" setting onto a policy.
    #[must_use]
    pub fn from_flag(trim: bool) -> Self {
        if trim {
            Self::Trim
        } else {
            Self::Preserve
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trims() {
        assert_eq!(TrimPolicy::default(), TrimPolicy::Trim);
    }

    #[test]
    fn trim_strips_surrounding_whitespace() {
        assert_eq!(TrimPolicy::Trim.apply("  x\n"), "x");
        assert_eq!(TrimPolicy::Trim.apply("a\nb\n\n"), "a\nb");
    }

    #[test]
    fn preserve_keeps_trailing_newline() {
        assert_eq!(TrimPolicy::Preserve.apply("x\n"), "x\n");
    }

    #[test]
    fn from_flag_maps_both_ways() {
        assert_eq!(TrimPolicy::from_flag(true), TrimPolicy::Trim);
        assert_eq!(TrimPolicy::from_flag(false), TrimPolicy::Preserve);
    }
}
