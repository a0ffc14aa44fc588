//! The seven great powers and their default map colors.

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Power {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

/// All seven powers in standard order.
pub const ALL_POWERS: [Power; 7] = [
    Power::Austria,
    Power::England,
    Power::France,
    Power::Germany,
    Power::Italy,
    Power::Russia,
    Power::Turkey,
];

impl Power {
    /// Returns the faction key used in board snapshots.
    pub const fn name(self) -> &'static str {
        match self {
            Power::Austria => "Austria-Hungary",
            Power::England => "England",
            Power::France => "France",
            Power::Germany => "Germany",
            Power::Italy => "Italy",
            Power::Russia => "Russia",
            Power::Turkey => "Turkey",
        }
    }

    /// Returns the default fill color for territories and tokens.
    pub const fn color(self) -> &'static str {
        match self {
            Power::Austria => "#a41a10",
            Power::England => "#1010a3",
            Power::France => "#126dc0",
            Power::Germany => "#5d5d5d",
            Power::Italy => "#30a310",
            Power::Russia => "#7110a2",
            Power::Turkey => "#e6e617",
        }
    }

    /// Parses a power from its faction key.
    pub fn from_name(name: &str) -> Option<Power> {
        ALL_POWERS.iter().copied().find(|p| p.name() == name)
    }
}
