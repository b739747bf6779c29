//! Standard/discount price switch.

/// Which of the two parallel price lists is on show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    Standard,
    Discount,
}

impl PriceMode {
    /// A checked switch shows standard prices, an unchecked one discount prices.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            PriceMode::Standard
        } else {
            PriceMode::Discount
        }
    }

    /// Visibility of one `(standard, discount)` pair. Exactly one side is visible.
    pub fn pair_visibility(self) -> (bool, bool) {
        match self {
            PriceMode::Standard => (true, false),
            PriceMode::Discount => (false, true),
        }
    }
}

/// Number of complete `(standard, discount)` pairs that can be toggled.
pub fn paired_len(standard: usize, discount: usize) -> usize {
    standard.min(discount)
}
