use std::sync::Arc;

use icqa_core::IcqaCore;
use icqa_providers::common_models::certificate::{
    CertificateData, CertificateFilter, CertificatePatch, CertificateStatus, StatusFilter,
};
use icqa_providers::date_format;
use icqa_providers::record_storage::imp::file::FileStorage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // File-backed storage keeps the registry across runs, the way a browser
    // profile keeps local storage.
    let storage_dir = std::env::temp_dir().join("icqa-issuance-demo");
    let core = IcqaCore::new(None, Arc::new(FileStorage::new(&storage_dir)))?;

    let staff = core
        .session_service
        .login("staff@icqa.org", "password")?
        .expect("directory login failed");
    println!("signed in as {} ({})", staff.name, staff.role);

    let issue_date = date_format::to_display("2024-03-01").into_inner();
    let created = core.certificate_service.create(CertificateData {
        icqa_number: "GC05-31".to_string(),
        name: "Maria Santos".to_string(),
        dob: date_format::to_display("1990-09-21").into_inner(),
        ncqa_number: "733".to_string(),
        qualification_type: "Language Instructor Level 2".to_string(),
        issue_date,
        edu_dept: "Manila Language Institute".to_string(),
        issuing_office: "Manila Main Office".to_string(),
        issuing_country: "Philippines".to_string(),
        expiration_date: date_format::to_display("2028-03-01").into_inner(),
        ..Default::default()
    })?;
    println!("issued {} to {}", created.icqa_number, created.name);

    let revoked = core.certificate_service.update(
        &created.id,
        CertificatePatch {
            status: Some(CertificateStatus::Revoked),
            ..Default::default()
        },
    )?;
    println!("revoked {} at {}", revoked.icqa_number, revoked.updated_at);

    let filter = CertificateFilter {
        status: StatusFilter::Only(CertificateStatus::Revoked),
        ..Default::default()
    };
    for certificate in core.certificate_service.get_all(Some(&filter))? {
        println!("revoked on file: {} / {}", certificate.icqa_number, certificate.name);
    }

    core.certificate_service.delete(&created.id)?;
    core.session_service.logout()?;
    println!("registry stored under {}", storage_dir.display());

    Ok(())
}
