//! Display helpers shared by templates and the CLI.

/// Label a count with a noun, adding an `s` unless the count is exactly one.
///
/// ```
/// use sole_core::pluralize;
///
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// assert_eq!(pluralize("Color", 0), "0 Colors");
/// ```
#[must_use]
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_plural() {
        assert_eq!(pluralize("Color", 2), "2 Colors");
        assert_eq!(pluralize("Color", 12), "12 Colors");
    }

    #[test]
    fn test_zero_is_plural() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
    }
}
