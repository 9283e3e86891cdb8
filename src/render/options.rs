//! Rendering options and configuration.

/// Options for the text listing of instruction trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Digits after the decimal point for numeric arguments
    pub precision: usize,

    /// Spaces of indentation per nesting level
    pub indent_width: usize,

    /// Append the instruction payload (path data, text) when present
    pub include_data: bool,

    /// Omit the synthetic root container line
    pub skip_root: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numeric precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable payload output.
    pub fn with_data(mut self, include: bool) -> Self {
        self.include_data = include;
        self
    }

    /// Enable or disable the root container line.
    pub fn with_skip_root(mut self, skip: bool) -> Self {
        self.skip_root = skip;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            indent_width: 2,
            include_data: true,
            skip_root: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_precision(4)
            .with_indent(4)
            .with_data(false)
            .with_skip_root(true);

        assert_eq!(options.precision, 4);
        assert_eq!(options.indent_width, 4);
        assert!(!options.include_data);
        assert!(options.skip_root);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.precision, 2);
        assert!(options.include_data);
    }
}
