// Explorer module
// Turns configuration, project and model notifications into tree updates

pub mod adaptor;

pub use adaptor::{ExplorerEvent, ExplorerEventAdaptor, TreeModelListener};
