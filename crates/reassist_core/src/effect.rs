#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move to another route; the shell answers with `Msg::LocationChanged`.
    Navigate { path: String },
    /// Transient message for the user. Nothing is written anywhere.
    Notify { message: String },
    /// Scroll the landing page to a named section.
    SectionNav { target: String },
}
