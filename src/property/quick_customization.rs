//! Visibility of a property in the quick customization panel

/// Whether a property shows up in the quick customization panel, a reduced
/// grid presenting only the most useful properties of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickCustomizationVisibility {
    /// Let the panel decide based on the property type
    #[default]
    Default,
    /// Always shown
    Visible,
    /// Never shown
    Hidden,
}

impl QuickCustomizationVisibility {
    /// Stable identifier used in serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickCustomizationVisibility::Default => "default",
            QuickCustomizationVisibility::Visible => "visible",
            QuickCustomizationVisibility::Hidden => "hidden",
        }
    }

    /// Parse a serialized identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(QuickCustomizationVisibility::Default),
            "visible" => Some(QuickCustomizationVisibility::Visible),
            "hidden" => Some(QuickCustomizationVisibility::Hidden),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for visibility in [
            QuickCustomizationVisibility::Default,
            QuickCustomizationVisibility::Visible,
            QuickCustomizationVisibility::Hidden,
        ] {
            assert_eq!(
                QuickCustomizationVisibility::parse(visibility.as_str()),
                Some(visibility)
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(QuickCustomizationVisibility::parse("sometimes"), None);
    }
}
