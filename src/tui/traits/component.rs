//! Base component identity and the focus ring

/// Focusable areas of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentId {
    /// Sidebar menu
    #[default]
    Nav,
    /// Widgets of the current panel
    Form,
    /// Rendered panel output
    Output,
    /// Logs strip
    Logs,
}

impl ComponentId {
    /// Tab order between areas when not editing a form
    pub fn next_focus(self) -> Self {
        match self {
            Self::Nav => Self::Form,
            Self::Form => Self::Output,
            Self::Output => Self::Logs,
            Self::Logs => Self::Nav,
        }
    }

    pub fn prev_focus(self) -> Self {
        match self {
            Self::Nav => Self::Logs,
            Self::Form => Self::Nav,
            Self::Output => Self::Form,
            Self::Logs => Self::Output,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Nav => "menu",
            Self::Form => "form",
            Self::Output => "output",
            Self::Logs => "logs",
        }
    }
}

/// Anything that occupies a slot in the focus ring
pub trait Component {
    fn id(&self) -> ComponentId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_round_trips() {
        let mut id = ComponentId::Nav;
        for _ in 0..4 {
            id = id.next_focus();
        }
        assert_eq!(id, ComponentId::Nav);
        assert_eq!(ComponentId::Form.prev_focus(), ComponentId::Nav);
        assert_eq!(ComponentId::Nav.prev_focus().next_focus(), ComponentId::Nav);
    }
}
