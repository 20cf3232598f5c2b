//! Image style tags for placeholder rendering.

use serde::Serialize;

/// The decoration styles recognized by the placeholder renderer.
///
/// Parsing is permissive: tags outside the recognized set fall through to
/// [`ImageStyle::Realistic`], matching the service's lenient treatment of
/// client-supplied style strings.
///
/// # Examples
///
/// ```
/// use atelier_core::ImageStyle;
///
/// assert_eq!(ImageStyle::from_tag("anime"), ImageStyle::Anime);
/// assert_eq!(ImageStyle::from_tag("watercolor"), ImageStyle::Realistic);
/// assert_eq!(ImageStyle::DigitalArt.to_string(), "digital-art");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ImageStyle {
    /// Single outlined frame near the canvas edges
    #[default]
    #[display("realistic")]
    Realistic,
    /// Concentric outlined ellipses
    #[display("anime")]
    Anime,
    /// Evenly pitched grid lines
    #[display("digital-art")]
    DigitalArt,
    /// Concentric outlined rectangles
    #[display("cartoon")]
    Cartoon,
}

impl ImageStyle {
    /// Maps a client-supplied tag onto a decoration style.
    ///
    /// Unrecognized tags map to [`ImageStyle::Realistic`] rather than an
    /// error; the raw tag is still echoed back to the client unchanged.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "anime" => ImageStyle::Anime,
            "digital-art" => ImageStyle::DigitalArt,
            "cartoon" => ImageStyle::Cartoon,
            _ => ImageStyle::Realistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_map_to_their_styles() {
        assert_eq!(ImageStyle::from_tag("realistic"), ImageStyle::Realistic);
        assert_eq!(ImageStyle::from_tag("anime"), ImageStyle::Anime);
        assert_eq!(ImageStyle::from_tag("digital-art"), ImageStyle::DigitalArt);
        assert_eq!(ImageStyle::from_tag("cartoon"), ImageStyle::Cartoon);
    }

    #[test]
    fn unknown_tags_fall_through_to_realistic() {
        assert_eq!(ImageStyle::from_tag(""), ImageStyle::Realistic);
        assert_eq!(ImageStyle::from_tag("van-gogh"), ImageStyle::Realistic);
        assert_eq!(ImageStyle::from_tag("ANIME"), ImageStyle::Realistic);
    }

    #[test]
    fn display_matches_wire_tags() {
        assert_eq!(ImageStyle::Realistic.to_string(), "realistic");
        assert_eq!(ImageStyle::Anime.to_string(), "anime");
        assert_eq!(ImageStyle::DigitalArt.to_string(), "digital-art");
        assert_eq!(ImageStyle::Cartoon.to_string(), "cartoon");
    }
}
