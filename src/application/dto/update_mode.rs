/// How an edited record is applied to an existing part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Only non-empty fields are sent; nothing is cleared
    Sparse,
    /// Every modeled field is sent, empty values included
    Overwrite,
}

impl UpdateMode {
    /// Operation name used in messages and errors
    pub fn operation(self) -> &'static str {
        match self {
            UpdateMode::Sparse => "update",
            UpdateMode::Overwrite => "set",
        }
    }
}
