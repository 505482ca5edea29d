//! Quantity input parsing.

/// Outcome of parsing a typed quantity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyInput {
    /// Unparseable or sub-minimum input: force the display back to `1`,
    /// mutate nothing.
    Reset,
    /// A usable quantity to feed into `set_qty`.
    Set(u32),
}

/// Parse a typed quantity string.
///
/// Anything that is not an integer >= 1 resets the input display; the cart
/// itself is never touched on that path.
pub fn parse_qty_input(raw: &str) -> QtyInput {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => QtyInput::Set(value.min(i64::from(u32::MAX)) as u32),
        _ => QtyInput::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_quantity_is_set() {
        assert_eq!(parse_qty_input("3"), QtyInput::Set(3));
        assert_eq!(parse_qty_input(" 12 "), QtyInput::Set(12));
    }

    #[test]
    fn zero_and_negative_reset() {
        assert_eq!(parse_qty_input("0"), QtyInput::Reset);
        assert_eq!(parse_qty_input("-4"), QtyInput::Reset);
    }

    #[test]
    fn non_numeric_resets() {
        assert_eq!(parse_qty_input(""), QtyInput::Reset);
        assert_eq!(parse_qty_input("abc"), QtyInput::Reset);
        assert_eq!(parse_qty_input("1.5"), QtyInput::Reset);
    }
}
