use strum_macros::{EnumCount, EnumIter};

#[derive(EnumCount, EnumIter, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}
