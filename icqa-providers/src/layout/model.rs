//! Element tree emitted by the layout engine.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The eleven fixed fields of a rendered certificate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldId {
    #[strum(serialize = "ICQA_NUMBER")]
    IcqaNumber,
    #[strum(serialize = "NAME")]
    Name,
    #[strum(serialize = "DATE_OF_BIRTH")]
    DateOfBirth,
    #[strum(serialize = "NCQA_NUMBER")]
    NcqaNumber,
    #[strum(serialize = "QUALIFICATION_TYPE")]
    QualificationType,
    #[strum(serialize = "ISSUE_DATE")]
    IssueDate,
    #[strum(serialize = "EDUCATION_DEPARTMENT")]
    EducationDepartment,
    #[strum(serialize = "ISSUING_OFFICE")]
    IssuingOffice,
    #[strum(serialize = "ISSUING_COUNTRY")]
    IssuingCountry,
    #[strum(serialize = "EXPIRATION_DATE")]
    ExpirationDate,
    #[strum(serialize = "VERIFIED_BODY")]
    VerifiedBody,
}

/// Accent category of a rendered value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Accent {
    Plain,
    Primary,
    Secondary,
}

/// Font-size token; consumers map tokens to concrete typography.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontToken {
    Label,
    Value,
    Name,
    IcqaNumber,
    Paragraph,
}

impl FontToken {
    /// Nominal pixel size on the unscaled canvas.
    pub fn px(&self) -> u32 {
        match self {
            Self::Label => 30,
            Self::Value => 32,
            Self::Name => 40,
            Self::IcqaNumber => 36,
            Self::Paragraph => 26,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhotoContent {
    Image { source: String },
    Placeholder { text: String },
}

/// One positioned element of the certificate canvas.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Element {
    Background {
        source: String,
    },
    Label {
        field: FieldId,
        x: u32,
        y: u32,
        text: String,
        font: FontToken,
    },
    Value {
        field: FieldId,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        lines: Vec<String>,
        accent: Accent,
        font: FontToken,
    },
    Photo {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        content: PhotoContent,
    },
    /// Boilerplate body text, clipped to its box (overflow hidden).
    Paragraph {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        font: FontToken,
        paragraphs: Vec<String>,
    },
}

/// The rendered certificate document.
///
/// Geometry is always expressed at the base resolution; `scale` is the single
/// multiplicative factor a presentation surface applies to the whole canvas.
/// Preview and print therefore share one element tree by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub elements: Vec<Element>,
}

impl Canvas {
    /// Uniformly scales the canvas for on-screen preview; the element tree is
    /// left untouched. Print consumers use the canvas at scale 1.0.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}
