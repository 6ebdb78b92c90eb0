/// Final artwork URLs for a title once resolution has run.
///
/// Unlike the optional fields on [`crate::Movie`], both URLs are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedImages {
    pub poster: String,
    pub backdrop: String,
}

impl ResolvedImages {
    /// Landscape art for hero banners; backdrop first, poster if it is blank.
    pub fn hero(&self) -> &str {
        if self.backdrop.is_empty() {
            &self.poster
        } else {
            &self.backdrop
        }
    }
}
