//! First-run demo records, kept for parity with the legacy registry data.

use icqa_providers::common_models::certificate::{CertificateData, CertificateStatus};

pub fn demo_certificates() -> Vec<CertificateData> {
    vec![
        CertificateData {
            icqa_number: "GC01-24".to_string(),
            name: "AN CHANG NAM".to_string(),
            dob: "JUL 13, 1952".to_string(),
            ncqa_number: "414".to_string(),
            qualification_type: "Psychological Counselor Level 1".to_string(),
            issue_date: "DEC 06, 2021".to_string(),
            edu_dept: "International Lifelong Education Center".to_string(),
            issuing_office: "International Lifelong Education Center".to_string(),
            issuing_country: "Korea".to_string(),
            expiration_date: "DEC 06, 2025".to_string(),
            photo_url: "https://picsum.photos/300/400".to_string(),
            status: CertificateStatus::Active,
        },
        CertificateData {
            icqa_number: "GC02-99".to_string(),
            name: "JANE DOE".to_string(),
            dob: "JAN 01, 1980".to_string(),
            ncqa_number: "882".to_string(),
            qualification_type: "Art Therapist Level 2".to_string(),
            issue_date: "JAN 15, 2020".to_string(),
            edu_dept: "Seoul Art Academy".to_string(),
            issuing_office: "Seoul Main Office".to_string(),
            issuing_country: "Korea".to_string(),
            expiration_date: "JAN 15, 2021".to_string(),
            photo_url: "https://picsum.photos/300/401".to_string(),
            status: CertificateStatus::Expired,
        },
    ]
}
