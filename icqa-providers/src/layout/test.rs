use time::macros::datetime;
use uuid::Uuid;

use super::config::{A4_LANDSCAPE_REV3, A4_LANDSCAPE_REV4};
use super::{render, Element, LayoutConfig, PhotoContent};
use crate::common_models::certificate::{Certificate, CertificateData};

const VERIFYING_BODY: &str = "International Civil Qualification Association";

fn certificate() -> Certificate {
    Certificate::from_data(
        Uuid::nil().into(),
        CertificateData {
            icqa_number: "GC01-24".to_owned(),
            name: "An Chang Nam".to_owned(),
            dob: "JUL 13, 1952".to_owned(),
            ncqa_number: "414".to_owned(),
            qualification_type: "Psychological Counselor Level 1".to_owned(),
            issue_date: "DEC 06, 2021".to_owned(),
            edu_dept: "International Lifelong Education Center".to_owned(),
            issuing_office: "International Lifelong Education Center".to_owned(),
            issuing_country: "Korea".to_owned(),
            expiration_date: "DEC 06, 2025".to_owned(),
            photo_url: String::new(),
            ..Default::default()
        },
        datetime!(2024-01-01 0:00 UTC),
    )
}

fn config() -> LayoutConfig {
    LayoutConfig::preset(A4_LANDSCAPE_REV4, VERIFYING_BODY).unwrap()
}

#[test]
fn rendering_is_deterministic() {
    let certificate = certificate();
    let config = config();

    let first = serde_json::to_string(&render(&certificate, &config)).unwrap();
    let second = serde_json::to_string(&render(&certificate, &config)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn emits_background_labels_values_photo_and_paragraph() {
    let canvas = render(&certificate(), &config());

    // 11 labels + 11 values + background + photo + paragraph
    assert_eq!(canvas.elements.len(), 25);
    assert_eq!(canvas.width, 2480);
    assert_eq!(canvas.height, 1748);
    assert_eq!(canvas.scale, 1.0);
}

#[test]
fn photo_change_touches_only_the_photo_element() {
    let without_photo = certificate();
    let mut with_photo = without_photo.clone();
    with_photo.photo_url = "https://picsum.photos/300/400".to_owned();

    let config = config();
    let before = render(&without_photo, &config);
    let after = render(&with_photo, &config);

    let differing: Vec<_> = before
        .elements
        .iter()
        .zip(&after.elements)
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(differing.len(), 1);
    assert!(matches!(
        differing[0].0,
        Element::Photo {
            content: PhotoContent::Placeholder { .. },
            ..
        }
    ));
    assert!(matches!(
        differing[0].1,
        Element::Photo {
            content: PhotoContent::Image { .. },
            ..
        }
    ));
}

#[test]
fn missing_expiration_renders_placeholder() {
    let mut certificate = certificate();
    certificate.expiration_date = String::new();

    let canvas = render(&certificate, &config());
    let expiration = canvas
        .elements
        .iter()
        .find_map(|element| match element {
            Element::Value {
                field: super::FieldId::ExpirationDate,
                lines,
                ..
            } => Some(lines),
            _ => None,
        })
        .unwrap();

    assert_eq!(expiration, &vec!["N/A".to_owned()]);
}

#[test]
fn holder_name_is_uppercased_in_value_and_paragraph() {
    let canvas = render(&certificate(), &config());

    let name_lines = canvas
        .elements
        .iter()
        .find_map(|element| match element {
            Element::Value {
                field: super::FieldId::Name,
                lines,
                ..
            } => Some(lines),
            _ => None,
        })
        .unwrap();
    assert_eq!(name_lines, &vec!["AN CHANG NAM".to_owned()]);

    let paragraphs = canvas
        .elements
        .iter()
        .find_map(|element| match element {
            Element::Paragraph { paragraphs, .. } => Some(paragraphs),
            _ => None,
        })
        .unwrap();
    assert!(paragraphs[0].contains(VERIFYING_BODY));
    assert!(paragraphs[1].contains("AN CHANG NAM"));
}

#[test]
fn single_line_fields_truncate_without_wrapping() {
    let mut certificate = certificate();
    certificate.qualification_type = "Q".repeat(200);

    let canvas = render(&certificate, &config());
    let lines = canvas
        .elements
        .iter()
        .find_map(|element| match element {
            Element::Value {
                field: super::FieldId::QualificationType,
                lines,
                ..
            } => Some(lines),
            _ => None,
        })
        .unwrap();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].chars().count() < 200);
}

#[test]
fn two_line_fields_wrap_and_clamp() {
    let mut certificate = certificate();
    certificate.edu_dept = "Center ".repeat(40).trim_end().to_owned();

    let canvas = render(&certificate, &config());
    let lines = canvas
        .elements
        .iter()
        .find_map(|element| match element {
            Element::Value {
                field: super::FieldId::EducationDepartment,
                lines,
                ..
            } => Some(lines),
            _ => None,
        })
        .unwrap();

    assert_eq!(lines.len(), 2);
}

#[test]
fn scaling_touches_only_the_scale_factor() {
    let canvas = render(&certificate(), &config());
    let preview = canvas.clone().scaled(0.5);

    assert_eq!(preview.scale, 0.5);
    assert_eq!(preview.width, canvas.width);
    assert_eq!(preview.height, canvas.height);
    assert_eq!(preview.elements, canvas.elements);
}

#[test]
fn presets_resolve_by_identifier() {
    let rev4 = LayoutConfig::preset(A4_LANDSCAPE_REV4, VERIFYING_BODY).unwrap();
    let rev3 = LayoutConfig::preset(A4_LANDSCAPE_REV3, VERIFYING_BODY).unwrap();

    assert_ne!(rev4, rev3);
    assert_eq!(rev4.photo.x, 1600);
    assert_eq!(rev3.photo.x, 1700);
    assert!(LayoutConfig::preset("A4_PORTRAIT", VERIFYING_BODY).is_none());
}
