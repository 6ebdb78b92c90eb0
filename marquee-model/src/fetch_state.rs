use std::fmt::{Display, Formatter};

/// Coarse lifecycle of a remote request as surfaced to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Loading => "LOADING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }
}

impl Display for FetchState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
