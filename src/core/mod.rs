// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app_config;
pub mod configuration;
pub mod events;
pub mod member;
pub mod project;
pub mod project_config;
pub mod project_manager;

pub use app_config::AppConfig;
pub use configuration::Configuration;
pub use events::{ElementId, PropertyChangeEvent, PropertyChangeListener, PropertyChangeSupport, PropertyValue};
pub use member::{MemberKind, ProjectMember};
pub use project::{Project, ProjectInfo};
pub use project_config::{find_project_root, ManifestMember, ProjectManifest};
pub use project_manager::ProjectManager;
