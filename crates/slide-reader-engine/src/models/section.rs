/// A heading-delimited chunk of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Cleaned heading text, or `None` when no heading precedes the chunk.
    pub subtitle: Option<String>,
    /// Raw lines of the chunk joined with `\n`, blank lines kept as empty lines.
    pub content: String,
}

impl Section {
    pub fn new(subtitle: Option<String>, lines: &[String]) -> Self {
        Self {
            subtitle,
            content: lines.join("\n"),
        }
    }
}
