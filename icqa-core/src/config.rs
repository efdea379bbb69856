use icqa_providers::common_models::user::{User, UserRole};
use uuid::Uuid;
use zeroize::Zeroizing;

pub const DEFAULT_VERIFYING_BODY: &str = "International Civil Qualification Association";

pub struct IcqaCoreConfig {
    pub storage_config: StorageConfig,
    pub registry_config: RegistryConfig,
    /// Static staff directory checked by the session gate.
    pub directory: Vec<DirectoryAccount>,
}

pub struct StorageConfig {
    pub certificate_collection_key: String,
    pub session_key: String,
}

pub struct RegistryConfig {
    pub verifying_body: String,
    pub seed_demo_records: bool,
}

pub struct DirectoryAccount {
    pub user: User,
    pub password: Zeroizing<String>,
}

impl Default for IcqaCoreConfig {
    fn default() -> Self {
        Self {
            storage_config: StorageConfig {
                certificate_collection_key: "icqa_certificates_v1".to_string(),
                session_key: "icqa_user".to_string(),
            },
            registry_config: RegistryConfig {
                verifying_body: DEFAULT_VERIFYING_BODY.to_string(),
                seed_demo_records: true,
            },
            directory: vec![
                DirectoryAccount {
                    user: User {
                        id: Uuid::new_v4().into(),
                        email: "admin@icqa.org".to_string(),
                        name: "Admin User".to_string(),
                        role: UserRole::Admin,
                    },
                    password: Zeroizing::new("password".to_string()),
                },
                DirectoryAccount {
                    user: User {
                        id: Uuid::new_v4().into(),
                        email: "staff@icqa.org".to_string(),
                        name: "Staff User".to_string(),
                        role: UserRole::Staff,
                    },
                    password: Zeroizing::new("password".to_string()),
                },
            ],
        }
    }
}
