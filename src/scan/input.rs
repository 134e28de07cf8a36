use crate::domain::{ScanMode, ScanRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Text,
}

/// Editable fields of the pending scan request.
#[derive(Debug, Clone, Default)]
pub struct InputPanel {
    mode: ScanMode,
    email: String,
    text: String,
    focus: Field,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mode: ScanMode, email: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mode,
            email: email.into(),
            text: text.into(),
            focus: Field::Email,
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Switching to inbox mode keeps the message text but stops sending it.
    pub fn set_mode(&mut self, mode: ScanMode) {
        self.mode = mode;
        if mode == ScanMode::Inbox {
            self.focus = Field::Email;
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The only validation performed client-side. Email syntax is left to
    /// the service.
    pub fn can_submit(&self, scanning: bool) -> bool {
        !scanning
            && !self.email.is_empty()
            && (self.mode == ScanMode::Inbox || !self.text.is_empty())
    }

    /// Builds a fresh request from the current fields.
    pub fn request(&self) -> Option<ScanRequest> {
        if !self.can_submit(false) {
            return None;
        }
        let email = self.email.clone();
        Some(match self.mode {
            ScanMode::Message => ScanRequest::Message {
                email,
                text: self.text.clone(),
            },
            ScanMode::Inbox => ScanRequest::Inbox { email },
        })
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (Field::Email, ScanMode::Message) => Field::Text,
            _ => Field::Email,
        };
    }

    pub fn push_char(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn insert_newline(&mut self) {
        if self.focus == Field::Text {
            self.text.push('\n');
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Text => &mut self.text,
        }
    }
}
