use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum LayoutPreset {
    #[strum(serialize = "A4_LANDSCAPE_REV3")]
    A4LandscapeRev3,
    #[strum(serialize = "A4_LANDSCAPE_REV4")]
    A4LandscapeRev4,
}
