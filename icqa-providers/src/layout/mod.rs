//! Deterministic certificate layout engine.
//!
//! Maps a certificate record onto a fixed-size canvas using the per-field
//! geometry table of a [`LayoutConfig`]. Rendering is a pure function: no I/O,
//! no clock, identical inputs always produce an identical element tree. The
//! same tree serves on-screen preview (via [`Canvas::scaled`]) and 1:1 print
//! output, which keeps the two pixel-for-pixel consistent.

use crate::common_models::certificate::Certificate;

pub mod config;
pub mod model;

#[cfg(test)]
mod test;

pub use config::{FieldSlot, LayoutConfig, ParagraphSlot, PhotoSlot};
pub use model::{Accent, Canvas, Element, FieldId, FontToken, PhotoContent};

/// Renders a certificate onto the configured canvas at scale 1.0.
pub fn render(certificate: &Certificate, config: &LayoutConfig) -> Canvas {
    let mut elements = Vec::with_capacity(config.fields.len() * 2 + 3);

    elements.push(Element::Background {
        source: config.background.clone(),
    });

    for slot in &config.fields {
        elements.push(Element::Label {
            field: slot.field,
            x: slot.label_x,
            y: slot.label_y,
            text: slot.label.clone(),
            font: FontToken::Label,
        });
        elements.push(Element::Value {
            field: slot.field,
            x: slot.value_x,
            y: slot.value_y,
            width: slot.value_width,
            height: slot.value_height,
            lines: fit_lines(&field_value(certificate, config, slot.field), slot),
            accent: slot.accent,
            font: slot.font,
        });
    }

    elements.push(Element::Photo {
        x: config.photo.x,
        y: config.photo.y,
        width: config.photo.width,
        height: config.photo.height,
        content: if certificate.photo_url.is_empty() {
            PhotoContent::Placeholder {
                text: config.photo.placeholder.clone(),
            }
        } else {
            PhotoContent::Image {
                source: certificate.photo_url.clone(),
            }
        },
    });

    elements.push(Element::Paragraph {
        x: config.paragraph.x,
        y: config.paragraph.y,
        width: config.paragraph.width,
        height: config.paragraph.height,
        font: config.paragraph.font,
        paragraphs: config
            .paragraph
            .paragraphs
            .iter()
            .map(|template| {
                template
                    .replace("{verifying_body}", &config.verifying_body)
                    .replace("{holder_name}", &certificate.name.to_uppercase())
            })
            .collect(),
    });

    Canvas {
        width: config.canvas_width,
        height: config.canvas_height,
        scale: 1.0,
        elements,
    }
}

fn field_value(certificate: &Certificate, config: &LayoutConfig, field: FieldId) -> String {
    match field {
        FieldId::IcqaNumber => certificate.icqa_number.clone(),
        FieldId::Name => certificate.name.to_uppercase(),
        FieldId::DateOfBirth => certificate.dob.clone(),
        FieldId::NcqaNumber => certificate.ncqa_number.clone(),
        FieldId::QualificationType => certificate.qualification_type.clone(),
        FieldId::IssueDate => certificate.issue_date.clone(),
        FieldId::EducationDepartment => certificate.edu_dept.clone(),
        FieldId::IssuingOffice => certificate.issuing_office.clone(),
        FieldId::IssuingCountry => certificate.issuing_country.clone(),
        FieldId::ExpirationDate => {
            if certificate.expiration_date.is_empty() {
                "N/A".to_owned()
            } else {
                certificate.expiration_date.clone()
            }
        }
        FieldId::VerifiedBody => config.verifying_body.clone(),
    }
}

// Fixed character capacities stand in for text measurement: single-line slots
// hard-truncate, two-line slots wrap on whitespace and clamp.
fn fit_lines(text: &str, slot: &FieldSlot) -> Vec<String> {
    if slot.max_lines <= 1 {
        return vec![clip(text, slot.line_capacity)];
    }
    wrap_clamped(text, slot.line_capacity, slot.max_lines)
}

fn clip(text: &str, capacity: usize) -> String {
    text.chars().take(capacity).collect()
}

fn wrap_clamped(text: &str, capacity: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = clip(word, capacity);
        let fits = if current.is_empty() {
            word.chars().count() <= capacity
        } else {
            current.chars().count() + 1 + word.chars().count() <= capacity
        };

        if fits {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            return lines;
        }
        current = word;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
