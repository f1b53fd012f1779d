/// The text the user is composing.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn set(&mut self, text: impl Into<String>) {
        self.value = text.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the trimmed text and clears the buffer. Blank input yields
    /// `None` and leaves the buffer as it was.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_string();
        self.value.clear();
        Some(message)
    }
}
