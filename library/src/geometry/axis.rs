use strum_macros::{EnumCount, EnumIter};

/// Component order used whenever a vector is spelled out as text.
#[derive(EnumCount, EnumIter, Copy, Clone, Default, Debug, PartialEq)]
pub(crate) enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_iteration_order() {
        let actual: Vec<usize> = Axis::iter().map(|axis| axis.as_index()).collect();
        assert_eq!(actual, vec![0, 1, 2]);
        assert_eq!(Axis::COUNT, 3);
    }
}
