/// Light/dark palette. Persisted as `"true"` (dark) or `"false"` (light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything other than the literal `"false"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("false") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{1F319}",
            Self::Light => "\u{2600}\u{FE0F}",
        }
    }

    pub fn label(self) -> String {
        format!("{} Theme", self.icon())
    }
}
