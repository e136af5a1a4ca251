//! Accent Theme
//!
//! Process-wide immutable styling configuration for the rotating accent
//! card. The palette is a fixed-size array so it is non-empty by
//! construction; components never hard-code colors from it.

/// One accent: a gradient color pairing for decorative emphasis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

impl Accent {
    /// CSS background value for this accent.
    pub fn gradient(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

/// Fixed palette the rotation timer cycles through.
pub const ACCENT_PALETTE: [Accent; 5] = [
    Accent { from: "#f472b6", to: "#fde047" }, // pink -> yellow
    Accent { from: "#2dd4bf", to: "#93c5fd" }, // teal -> blue
    Accent { from: "#c084fc", to: "#f9a8d4" }, // purple -> pink
    Accent { from: "#fb923c", to: "#fca5a5" }, // orange -> red
    Accent { from: "#4ade80", to: "#5eead4" }, // green -> teal
];

/// Period of the accent rotation timer, in milliseconds.
pub const ACCENT_PERIOD_MS: u32 = 2500;

/// Fill color for the chart bars.
pub const BAR_FILL: &str = "#8884d8";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_nonempty() {
        assert!(!ACCENT_PALETTE.is_empty());
    }

    #[test]
    fn test_gradient_css() {
        let accent = Accent { from: "#000000", to: "#ffffff" };
        assert_eq!(
            accent.gradient(),
            "linear-gradient(135deg, #000000, #ffffff)"
        );
    }
}
