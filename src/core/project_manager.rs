// Project Manager
// Owns the current project and announces project lifecycle changes

use std::rc::Rc;

use super::events::{PropertyChangeEvent, PropertyChangeListener, PropertyChangeSupport, PropertyValue};
use super::project::Project;
use crate::constants::{CURRENT_PROJECT_PROPERTY, SAVE_STATE_PROPERTY};

/// Holds the project being edited and whether it has unsaved changes
#[derive(Debug, Default)]
pub struct ProjectManager {
    current: Option<Project>,
    needs_save: bool,
    support: PropertyChangeSupport,
}

impl ProjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn current_project_mut(&mut self) -> Option<&mut Project> {
        self.current.as_mut()
    }

    /// Make `project` current and return the previous one.
    ///
    /// Fires `currentProject` with the base names of both projects. A new
    /// project starts out saved.
    pub fn set_current_project(&mut self, project: Option<Project>) -> Option<Project> {
        let old_value = self.current.as_ref().map(|p| PropertyValue::Text(p.base_name()));
        let new_value = project.as_ref().map(|p| PropertyValue::Text(p.base_name()));

        if let Some(project) = &project {
            log::info!("Current project is now {}", project.base_name());
        }

        let previous = std::mem::replace(&mut self.current, project);
        self.needs_save = false;
        self.support.fire(&PropertyChangeEvent::new(
            CURRENT_PROJECT_PROPERTY,
            old_value,
            new_value,
        ));
        previous
    }

    pub fn needs_save(&self) -> bool {
        self.needs_save
    }

    /// Mark the current project dirty or saved; fires `saveState` on change
    pub fn set_needs_save(&mut self, needs_save: bool) {
        if self.needs_save == needs_save {
            return;
        }
        self.needs_save = needs_save;
        self.support.fire(&PropertyChangeEvent::new(
            SAVE_STATE_PROPERTY,
            Some(PropertyValue::Flag(!needs_save)),
            Some(PropertyValue::Flag(needs_save)),
        ));
    }

    pub fn add_listener(&self, listener: Rc<dyn PropertyChangeListener>) {
        self.support.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Rc<dyn PropertyChangeListener>) -> bool {
        self.support.remove_listener(listener)
    }
}
