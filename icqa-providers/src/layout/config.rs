//! Data-driven layout configuration.
//!
//! The per-field geometry and typography of a certificate document live in a
//! table selected by a preset identifier; the engine itself carries no
//! coordinates. Base premise of the shipped presets: 2480 x 1748 px, a 300 DPI
//! A4-landscape canvas.

use super::model::{Accent, FieldId, FontToken};

/// Final hand-tuned revision: labels and values shifted right, photo shifted
/// left for clearance next to the wide fields.
pub const A4_LANDSCAPE_REV4: &str = "A4_LANDSCAPE_REV4";

/// Prior revision kept for documents printed before the spacing change.
pub const A4_LANDSCAPE_REV3: &str = "A4_LANDSCAPE_REV3";

const BASE_WIDTH: u32 = 2480;
const BASE_HEIGHT: u32 = 1748;

const BODY_PARAGRAPHS: [&str; 2] = [
    "The above person obtains this certificate by passing the domestic private \
     qualification test and confirms that the obtained private qualification after \
     passing the document examination by the {verifying_body} has been replaced with \
     the international private certificate and is being qualified and managed.",
    "This certification is issued to {holder_name} upon request for whatever legal \
     purpose it may serve him/her best.",
];

/// Geometry and typography of one labeled field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldSlot {
    pub field: FieldId,
    pub label: String,
    pub label_x: u32,
    pub label_y: u32,
    pub value_x: u32,
    pub value_y: u32,
    pub value_width: u32,
    pub value_height: u32,
    pub accent: Accent,
    pub font: FontToken,
    /// 1 truncates without wrapping, 2 wraps and clamps.
    pub max_lines: usize,
    /// Fixed per-line character capacity; overflow is dropped silently.
    pub line_capacity: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PhotoSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub placeholder: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParagraphSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub font: FontToken,
    /// Body templates; `{verifying_body}` and `{holder_name}` are interpolated.
    pub paragraphs: Vec<String>,
}

/// Complete configuration consumed by [`super::render`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LayoutConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: String,
    pub verifying_body: String,
    pub photo: PhotoSlot,
    pub paragraph: ParagraphSlot,
    pub fields: Vec<FieldSlot>,
}

impl LayoutConfig {
    /// Looks up a preset by its string identifier.
    pub fn preset(identifier: &str, verifying_body: &str) -> Option<Self> {
        match identifier {
            A4_LANDSCAPE_REV4 => Some(Self::a4_landscape(340, 740, 1600, verifying_body)),
            A4_LANDSCAPE_REV3 => Some(Self::a4_landscape(300, 700, 1700, verifying_body)),
            _ => None,
        }
    }

    fn a4_landscape(label_x: u32, value_x: u32, photo_x: u32, verifying_body: &str) -> Self {
        // Wide fields sit next to the photo; keep a 40 px safety margin.
        let narrow = 500;
        let wide = photo_x - value_x - 40;

        let slot = |field: FieldId,
                    label: &str,
                    label_y: u32,
                    value_y: u32,
                    width: u32,
                    height: u32,
                    accent: Accent,
                    font: FontToken,
                    max_lines: usize| FieldSlot {
            field,
            label: label.to_owned(),
            label_x,
            label_y,
            value_x,
            value_y,
            value_width: width,
            value_height: height,
            accent,
            font,
            max_lines,
            line_capacity: (width * 2 / font.px()) as usize,
        };

        Self {
            canvas_width: BASE_WIDTH,
            canvas_height: BASE_HEIGHT,
            background: "certificate_bg.png".to_owned(),
            verifying_body: verifying_body.to_owned(),
            photo: PhotoSlot {
                x: photo_x,
                y: 420,
                width: 420,
                height: 520,
                placeholder: "Photo Area".to_owned(),
            },
            paragraph: ParagraphSlot {
                x: 520,
                y: 1020,
                width: 1440,
                height: 180,
                font: FontToken::Paragraph,
                paragraphs: BODY_PARAGRAPHS.iter().map(|text| (*text).to_owned()).collect(),
            },
            fields: vec![
                slot(
                    FieldId::IcqaNumber,
                    "ICQA Number :",
                    420,
                    416,
                    narrow,
                    34,
                    Accent::Primary,
                    FontToken::IcqaNumber,
                    1,
                ),
                slot(
                    FieldId::Name,
                    "Name :",
                    470,
                    464,
                    wide,
                    34,
                    Accent::Secondary,
                    FontToken::Name,
                    1,
                ),
                slot(
                    FieldId::DateOfBirth,
                    "Date of Birth :",
                    520,
                    520,
                    narrow,
                    34,
                    Accent::Plain,
                    FontToken::Value,
                    1,
                ),
                slot(
                    FieldId::NcqaNumber,
                    "NCQA Number :",
                    570,
                    570,
                    narrow,
                    34,
                    Accent::Plain,
                    FontToken::Value,
                    1,
                ),
                slot(
                    FieldId::QualificationType,
                    "Qualification type :",
                    620,
                    620,
                    wide,
                    34,
                    Accent::Secondary,
                    FontToken::Value,
                    1,
                ),
                slot(
                    FieldId::IssueDate,
                    "Date Issue :",
                    670,
                    670,
                    narrow,
                    34,
                    Accent::Plain,
                    FontToken::Value,
                    1,
                ),
                slot(
                    FieldId::EducationDepartment,
                    "Education Department :",
                    720,
                    716,
                    wide,
                    68,
                    Accent::Secondary,
                    FontToken::Value,
                    2,
                ),
                slot(
                    FieldId::IssuingOffice,
                    "Issuing Office :",
                    790,
                    786,
                    wide,
                    68,
                    Accent::Secondary,
                    FontToken::Value,
                    2,
                ),
                slot(
                    FieldId::IssuingCountry,
                    "Issuing Country :",
                    860,
                    860,
                    narrow,
                    34,
                    Accent::Secondary,
                    FontToken::Value,
                    1,
                ),
                slot(
                    FieldId::ExpirationDate,
                    "Expiration Date :",
                    910,
                    910,
                    narrow,
                    34,
                    Accent::Plain,
                    FontToken::Value,
                    1,
                ),
                // Sits below the photo, so it may run wider than the side fields.
                slot(
                    FieldId::VerifiedBody,
                    "Verified Body :",
                    960,
                    960,
                    1000,
                    34,
                    Accent::Plain,
                    FontToken::Value,
                    1,
                ),
            ],
        }
    }
}
