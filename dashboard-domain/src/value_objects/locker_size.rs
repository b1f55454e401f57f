// Locker size value object

/// Marker size used when the size text matches none of the known labels.
pub const DEFAULT_MARKER_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockerSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl LockerSize {
    /// Extracts the first run of the letters S/M/L/X from the raw size text
    /// and matches it exactly against the known labels. The run is taken
    /// whole, so "XL" can never be read as a bare "X" (and a bare "X" or any
    /// longer run like "SM" matches nothing).
    pub fn parse(text: &str) -> Option<Self> {
        let run: String = text
            .chars()
            .skip_while(|c| !matches!(c, 'S' | 'M' | 'L' | 'X'))
            .take_while(|c| matches!(c, 'S' | 'M' | 'L' | 'X'))
            .collect();
        match run.as_str() {
            "S" => Some(LockerSize::Small),
            "M" => Some(LockerSize::Medium),
            "L" => Some(LockerSize::Large),
            "XL" => Some(LockerSize::ExtraLarge),
            _ => None,
        }
    }

    pub fn marker_size(&self) -> u32 {
        match self {
            LockerSize::Small => 14,
            LockerSize::Medium => 22,
            LockerSize::Large => 32,
            LockerSize::ExtraLarge => 42,
        }
    }
}

/// Marker scale for a raw size text, falling back to the default for
/// anything unparseable.
pub fn marker_size_for(text: &str) -> u32 {
    LockerSize::parse(text)
        .map(|size| size.marker_size())
        .unwrap_or(DEFAULT_MARKER_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_marker_sizes() {
        assert_eq!(marker_size_for("S"), 14);
        assert_eq!(marker_size_for("M"), 22);
        assert_eq!(marker_size_for("L"), 32);
        assert_eq!(marker_size_for("XL"), 42);
    }

    #[test]
    fn labels_embedded_in_surrounding_text_still_parse() {
        assert_eq!(marker_size_for("M - Medium"), 22);
        assert_eq!(marker_size_for("XL - Extra Large"), 42);
    }

    #[test]
    fn extra_large_is_not_misread_as_x() {
        assert_eq!(LockerSize::parse("XL"), Some(LockerSize::ExtraLarge));
        assert_eq!(LockerSize::parse("X"), None);
        assert_eq!(marker_size_for("X"), DEFAULT_MARKER_SIZE);
    }

    #[test]
    fn unknown_or_empty_text_falls_back_to_default() {
        assert_eq!(marker_size_for(""), DEFAULT_MARKER_SIZE);
        assert_eq!(marker_size_for("unknown"), DEFAULT_MARKER_SIZE);
        assert_eq!(marker_size_for("LX"), DEFAULT_MARKER_SIZE);
        assert_eq!(marker_size_for("SM"), DEFAULT_MARKER_SIZE);
    }
}
