//! Number format types

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Create a number format from a format string
    ///
    /// `"General"` (any case) maps back to [`NumberFormat::General`].
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        let format = format.into();
        if format.eq_ignore_ascii_case("general") {
            NumberFormat::General
        } else {
            NumberFormat::Custom(format)
        }
    }

    /// Check if this is the general format
    pub fn is_general(&self) -> bool {
        matches!(self, NumberFormat::General)
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::Custom(s) => s,
        }
    }

    /// Check if this is a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::General => false,
            NumberFormat::Custom(s) => {
                // Date/time placeholders outside of quoted literals
                let mut in_quotes = false;
                s.chars().any(|c| {
                    if c == '"' {
                        in_quotes = !in_quotes;
                        return false;
                    }
                    !in_quotes && matches!(c.to_ascii_lowercase(), 'y' | 'm' | 'd' | 'h' | 's')
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_date_format() {
        assert!(NumberFormat::from_string("yyyy-mm-dd hh:mm:ss").is_date_format());
        assert!(NumberFormat::from_string("d/m/yy").is_date_format());
        assert!(!NumberFormat::from_string("#,##0.00").is_date_format());
        assert!(!NumberFormat::from_string("0 \"days\"").is_date_format());
        assert!(!NumberFormat::General.is_date_format());
    }

    #[test]
    fn test_general_round_trip() {
        assert_eq!(NumberFormat::from_string("general"), NumberFormat::General);
        assert_eq!(NumberFormat::General.format_string(), "General");
    }
}
