//! Indentation configuration for code generation.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self(4);

    /// Indentation of `width` spaces. Zero disables indentation.
    pub const fn spaces(width: u8) -> Self {
        Self(width)
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        " ".repeat(usize::from(self.0))
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
