//! Transport-agnostic command results.
//!
//! A handler never touches the output buffer directly. It returns one of the
//! four results below and the host applies it.

/// Result of running a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The output buffer becomes this text.
    NewOutput(String),
    /// Reset the visible output area.
    Clear,
    /// Leave the output buffer untouched.
    NoChange,
    /// The input line was not accepted. The host keeps it so the user can
    /// correct it, and the output buffer stays as it was.
    Rejected,
}

impl CommandResult {
    /// Creates a new-output result.
    pub fn output(text: impl Into<String>) -> Self {
        Self::NewOutput(text.into())
    }

    /// Creates a result that appends `text` to the current buffer.
    pub fn append(current: &str, text: &str) -> Self {
        let mut out = String::with_capacity(current.len() + text.len());
        out.push_str(current);
        out.push_str(text);
        Self::NewOutput(out)
    }

    /// Returns the buffer the host should display after this result.
    pub fn apply(&self, buffer: String) -> String {
        match self {
            Self::NewOutput(text) => text.clone(),
            Self::Clear => String::new(),
            Self::NoChange | Self::Rejected => buffer,
        }
    }

    /// Returns false when the input line must be left for correction.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Returns true if applying this result can change the buffer.
    pub fn changes_output(&self) -> bool {
        matches!(self, Self::NewOutput(_) | Self::Clear)
    }

    /// Short label used in logs and headless reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NewOutput(_) => "new_output",
            Self::Clear => "clear",
            Self::NoChange => "no_change",
            Self::Rejected => "rejected",
        }
    }
}
