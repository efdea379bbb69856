//! The **ICQA Core** is a library for issuing, managing and publicly verifying
//! qualification certificates.
//!
//! Staff create and edit certificate records; anyone can verify a certificate
//! by its ICQA number and holder name and obtain a print-faithful rendering of
//! the document. Persistence is a local key-value blob store; there is no
//! backend and no network protocol.
//!
//! ## Repository structure
//!
//! The library consists of two crates:
//!
//! * **Providers**: modular implementations
//!   * Record storage (in-memory and file-backed)
//!   * Date normalization between display and editable representations
//!   * The data-driven certificate layout engine
//! * **Core**: a service layer orchestrating the providers
//!   * [Certificate service][cs] for the record store contract and document
//!     rendering
//!   * [Verification service][vs] for the public verification gate
//!   * [Session service][ss] for login, profile and password management
//!
//! ## Getting started
//!
//! Initialize the core with a storage backend; `None` selects the default
//! configuration (demo seed data included):
//!
//! ```ignore rust
//! let storage = Arc::new(InMemoryStorage::new(HashMap::new()));
//! let core = IcqaCore::new(None, storage).unwrap();
//! ```
//!
//! Then start using the services, e.g.:
//!
//! ```ignore rust
//! let outcome = core
//!     .verification_service
//!     .verify("GC01-24", "AN CHANG NAM")
//!     .expect("verification failed");
//! ```
//!
//! See the **/demos** directory in the repository for complete walkthroughs.
//!
//! [cs]: ../icqa_core/service/certificate_service/struct.CertificateService.html
//! [ss]: ../icqa_core/service/session_service/struct.SessionService.html
//! [vs]: ../icqa_core/service/verification_service/struct.VerificationService.html

use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use icqa_providers::record_storage::{imp::in_memory::InMemoryStorage, RecordStorage};

use config::IcqaCoreConfig;
use service::certificate_service::CertificateService;
use service::session_service::SessionService;
use service::verification_service::VerificationService;

pub mod config;
pub mod model;
pub mod seed;
pub mod service;

pub struct IcqaCore {
    pub certificate_service: Arc<CertificateService>,
    pub verification_service: VerificationService,
    pub session_service: SessionService,
}

impl Default for IcqaCore {
    fn default() -> Self {
        Self::new(None, Arc::new(InMemoryStorage::new(HashMap::new()))).unwrap()
    }
}

impl IcqaCore {
    pub fn new(
        config: Option<IcqaCoreConfig>,
        storage: Arc<dyn RecordStorage>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = config.unwrap_or_default();

        // initialize the record store service
        let certificate_service = Arc::new(CertificateService::new(
            storage.clone(),
            config.storage_config.certificate_collection_key,
            config.registry_config.verifying_body,
        ));

        if config.registry_config.seed_demo_records {
            certificate_service.seed_if_missing(seed::demo_certificates())?;
        }

        // initialize the public verification gate
        let verification_service = VerificationService::new(certificate_service.clone());

        // initialize the session/access gate
        let session_service = SessionService::new(
            storage,
            config.storage_config.session_key,
            config.directory,
        );

        Ok(Self {
            certificate_service,
            verification_service,
            session_service,
        })
    }
}
