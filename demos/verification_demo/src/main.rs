use std::collections::HashMap;
use std::sync::Arc;

use icqa_core::model::LayoutPreset;
use icqa_core::service::verification_service::VerificationOutcome;
use icqa_core::IcqaCore;
use icqa_providers::record_storage::imp::in_memory::InMemoryStorage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // `None` initializes the core with the default configuration, demo seed
    // data included
    let core = IcqaCore::new(None, Arc::new(InMemoryStorage::new(HashMap::new())))?;

    for (icqa_number, name) in [
        ("GC01-24", "AN CHANG NAM"),
        ("GC02-99", "JANE DOE"),
        ("GC99-00", "NOBODY"),
    ] {
        match core.verification_service.verify(icqa_number, name)? {
            VerificationOutcome::Verified(certificate) => {
                println!("{icqa_number} / {name}: valid ({})", certificate.qualification_type);

                let document = core
                    .certificate_service
                    .render_document(&certificate.id, &LayoutPreset::A4LandscapeRev4)?;
                let preview = document.clone().scaled(0.5);
                println!(
                    "  rendered {} elements at {}x{}, preview scale {}",
                    document.elements.len(),
                    document.width,
                    document.height,
                    preview.scale
                );
            }
            VerificationOutcome::Lapsed(_) => {
                println!("{icqa_number} / {name}: certificate has expired or is invalid");
            }
            VerificationOutcome::NotFound => {
                println!("{icqa_number} / {name}: certificate not found");
            }
        }
    }

    Ok(())
}
