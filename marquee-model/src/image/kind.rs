/// Which artwork slot of a title an image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageKind {
    /// Portrait key art (2:3)
    #[default]
    Poster,
    /// Landscape hero art (16:9)
    Backdrop,
}

impl ImageKind {
    /// Pixel size requested from the placeholder service for this slot.
    pub const fn placeholder_dimensions(self) -> (u32, u32) {
        match self {
            Self::Poster => (300, 450),
            Self::Backdrop => (1280, 720),
        }
    }
}
