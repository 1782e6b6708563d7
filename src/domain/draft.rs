/// In-progress email held by the compose form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Draft {
    pub fn push_body_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(line);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
