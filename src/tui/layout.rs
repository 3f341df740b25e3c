//! Width breakpoints for layout decisions
//!
//! All width thresholds live here so render code never compares raw columns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Columns given to the navigation sidebar
    pub fn sidebar_width(&self) -> u16 {
        match self {
            Breakpoint::Compact => 18,
            Breakpoint::Normal => 24,
            Breakpoint::Wide | Breakpoint::UltraWide => 28,
        }
    }

    /// Whether tips and aside fields get their own column
    pub fn shows_aside(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    /// Whether the logs strip is drawn below the content
    pub fn shows_logs(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Normal));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn aside_column_needs_a_wide_terminal() {
        assert!(!Breakpoint::Normal.shows_aside());
        assert!(Breakpoint::Wide.shows_aside());
        assert!(!Breakpoint::Compact.shows_logs());
        assert!(Breakpoint::Compact.sidebar_width() < Breakpoint::Wide.sidebar_width());
    }
}
