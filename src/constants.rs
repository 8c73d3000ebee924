// Application constants
// Property names shared by notification sources and the explorer adaptor

/// Project manager property fired when the active project changes
pub const CURRENT_PROJECT_PROPERTY: &str = "currentProject";

/// Project manager property fired when the save state changes
pub const SAVE_STATE_PROPERTY: &str = "saveState";

/// Configuration key: render stereotypes with guillemots
pub const KEY_USE_GUILLEMOTS: &str = "notation.guillemots";

/// Configuration key: show stereotypes in the explorer
pub const KEY_SHOW_STEREOTYPES: &str = "notation.show-stereotypes";

// Model event names
pub const MODEL_STRUCTURE_CHANGED: &str = "umlModelStructureChanged";
pub const MODEL_ELEMENT_ADDED: &str = "modelElementAdded";
pub const MODEL_ELEMENT_REMOVED: &str = "modelElementRemoved";
pub const MODEL_ELEMENT_CHANGED: &str = "modelElementChanged";

/// Widest padding applied when including an XML fragment
pub const MAX_INDENT: usize = 42;

/// Environment variable overriding project root detection
pub const PROJECT_ROOT_ENV: &str = "UML_PROJECT_ROOT";
