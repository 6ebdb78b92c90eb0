use marquee_model::ImageKind;

/// Root of the TMDB image CDN. A size token and the relative path follow it.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// CDN renditions the resolver requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmdbImageSize {
    /// 500px wide poster
    PosterW500,
    /// Full resolution, used for backdrops
    Original,
}

impl TmdbImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TmdbImageSize::PosterW500 => "w500",
            TmdbImageSize::Original => "original",
        }
    }

    /// Size the resolver requests for each artwork slot.
    ///
    /// Posters come from the 500px rendition; backdrops use the original so
    /// hero banners stay sharp on wide screens.
    pub fn for_kind(kind: ImageKind) -> Self {
        match kind {
            ImageKind::Poster => TmdbImageSize::PosterW500,
            ImageKind::Backdrop => TmdbImageSize::Original,
        }
    }

    /// `<base>/<size>` with the relative path appended verbatim.
    pub fn url(&self, base: &str, path: &str) -> String {
        format!("{}/{}{}", base.trim_end_matches('/'), self.as_str(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_path_verbatim() {
        assert_eq!(
            TmdbImageSize::PosterW500.url(TMDB_IMAGE_BASE, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            TmdbImageSize::Original.url("https://cdn.test/t/p/", "/x.jpg"),
            "https://cdn.test/t/p/original/x.jpg"
        );
    }

    #[test]
    fn kinds_map_to_expected_tokens() {
        assert_eq!(TmdbImageSize::for_kind(ImageKind::Poster).as_str(), "w500");
        assert_eq!(
            TmdbImageSize::for_kind(ImageKind::Backdrop).as_str(),
            "original"
        );
    }
}
