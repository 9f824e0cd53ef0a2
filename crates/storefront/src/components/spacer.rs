//! Fixed-size blank layout primitive.

use std::fmt;

/// A blank block of `size` x `size` pixels.
///
/// Renders as an empty SVG so the dimension comes from presentation
/// attributes; the CSP forbids inline `style` attributes. Display output is
/// trusted markup and is embedded in templates with `|safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    pub size: u32,
}

impl Spacer {
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self { size }
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg class="spacer" width="{size}" height="{size}" aria-hidden="true" focusable="false"></svg>"#,
            size = self.size
        )
    }
}
