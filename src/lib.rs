// UML Project Library
// Project members, XML persistence and explorer event forwarding for UML modeling projects

// Core infrastructure - projects, members, configuration and notifications
pub mod core;

// Explorer - narrows notifications into tree-view updates
pub mod explorer;

// Operations - persistence and member discovery
pub mod operations;

// Utilities - helper functions and tools
pub mod utilities;

// Error types shared across modules
pub mod error;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use crate::core::{AppConfig, Configuration, MemberKind, Project, ProjectManager, ProjectManifest, ProjectMember};
pub use error::{ProjectError, SaveError};
pub use explorer::{ExplorerEvent, ExplorerEventAdaptor, TreeModelListener};
pub use operations::{add_xml_file_to_writer, MemberScanner, ProjectWriter};
pub use constants::*;
