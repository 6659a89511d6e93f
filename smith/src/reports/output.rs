//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects output into a string, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput(pub String);

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.0.push_str(&format!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.0.push_str(&format!("{}: {}\n", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.0.push_str(&format!("  - {}\n", text));
    }

    fn added_item(&mut self, text: &str) {
        self.0.push_str(&format!("  + {}\n", text));
    }

    fn error(&mut self, msg: &str) {
        self.0.push_str(&format!("error: {}\n", msg));
    }

    fn divider(&mut self, label: &str) {
        self.0.push_str(&format!("── {} ──\n", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push_str(&format!("{}\n", text));
    }

    fn newline(&mut self) {
        self.0.push('\n');
    }
}
