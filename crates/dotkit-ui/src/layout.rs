//! Layout helpers: centering and row spans.

/// Compute centered position of a child within a parent.
pub fn center(parent_size: u32, child_size: u32) -> i32 {
    ((parent_size as i32 - child_size as i32) / 2).max(0)
}

/// Total length of a row of `n` items, each `item` long with `margin`
/// padding on both of its sides.
pub fn slotted_span(n: u32, item: u32, margin: u32) -> u32 {
    n * (item + margin * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_smaller_child() {
        assert_eq!(center(100, 40), 30);
    }

    #[test]
    fn center_equal_sizes() {
        assert_eq!(center(50, 50), 0);
    }

    #[test]
    fn center_oversized_child_clamps_to_zero() {
        assert_eq!(center(40, 100), 0);
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(center(10, 5), 2);
    }

    #[test]
    fn slotted_span_counts_both_margins() {
        // Three 16px items with 8px on each side: 3 * 32.
        assert_eq!(slotted_span(3, 16, 8), 96);
    }

    #[test]
    fn slotted_span_empty_row() {
        assert_eq!(slotted_span(0, 16, 8), 0);
    }

    #[test]
    fn slotted_span_no_margin() {
        assert_eq!(slotted_span(4, 10, 0), 40);
    }
}
