//! Named constants for wire-visible symbol and style literals.

/// Emoticon symbols with first-class names.
///
/// The emoticon builder accepts any symbol string; these constants are a
/// convenience, not a whitelist.
pub mod emoticon {
    /// The standard favorite/star icon.
    pub const YELLOW_STAR: &str = "yellow-star";
}

/// Inline CSS values for styled rich-text spans.
pub mod style {
    /// Dark green text.
    pub const DARK_GREEN: &str = "color: rgb(0,128,0);";
    /// Gray text.
    pub const GRAY: &str = "color: rgb(153,153,153);";
}
