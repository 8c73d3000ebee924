// Explorer Event Adaptor
// Every notification bound for the explorer tree passes through here first

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{
    CURRENT_PROJECT_PROPERTY, KEY_SHOW_STEREOTYPES, KEY_USE_GUILLEMOTS, MODEL_ELEMENT_ADDED,
    MODEL_ELEMENT_CHANGED, MODEL_ELEMENT_REMOVED, MODEL_STRUCTURE_CHANGED, SAVE_STATE_PROPERTY,
};
use crate::core::{
    Configuration, ProjectManager, PropertyChangeEvent, PropertyChangeListener, PropertyChangeSupport,
    PropertyValue,
};

/// The explorer's tree model, as seen by the adaptor
pub trait TreeModelListener {
    /// The whole tree needs rebuilding
    fn structure_changed(&self);

    fn element_added(&self, element: Option<&PropertyValue>);

    fn element_removed(&self, element: Option<&PropertyValue>);

    fn element_changed(&self, element: Option<&PropertyValue>);
}

/// Tree update derived from a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    StructureChanged,
    ElementAdded(Option<PropertyValue>),
    ElementRemoved(Option<PropertyValue>),
    ElementChanged(Option<PropertyValue>),
}

impl ExplorerEvent {
    /// Deliver this event to a tree model
    pub fn dispatch(&self, tree: &dyn TreeModelListener) {
        match self {
            ExplorerEvent::StructureChanged => tree.structure_changed(),
            ExplorerEvent::ElementAdded(v) => tree.element_added(v.as_ref()),
            ExplorerEvent::ElementRemoved(v) => tree.element_removed(v.as_ref()),
            ExplorerEvent::ElementChanged(v) => tree.element_changed(v.as_ref()),
        }
    }
}

/// Forwards a narrowed set of notifications to at most one tree model.
///
/// Owned by whoever builds the explorer. While no tree model is set every
/// notification is dropped.
#[derive(Default)]
pub struct ExplorerEventAdaptor {
    tree_model: RefCell<Option<Rc<dyn TreeModelListener>>>,
}

impl ExplorerEventAdaptor {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create an adaptor subscribed to the notation settings, the project
    /// manager and the model event source
    pub fn attach(
        configuration: &Configuration,
        project_manager: &ProjectManager,
        model_events: &PropertyChangeSupport,
    ) -> Rc<Self> {
        let adaptor = Self::new();
        let listener: Rc<dyn PropertyChangeListener> = adaptor.clone();

        configuration.add_listener(KEY_USE_GUILLEMOTS, listener.clone());
        configuration.add_listener(KEY_SHOW_STEREOTYPES, listener.clone());
        project_manager.add_listener(listener.clone());
        model_events.add_listener(listener);

        adaptor
    }

    /// Undo the subscriptions made by `attach`
    pub fn detach(
        self: &Rc<Self>,
        configuration: &Configuration,
        project_manager: &ProjectManager,
        model_events: &PropertyChangeSupport,
    ) {
        let listener: Rc<dyn PropertyChangeListener> = self.clone();

        configuration.remove_listener(KEY_USE_GUILLEMOTS, &listener);
        configuration.remove_listener(KEY_SHOW_STEREOTYPES, &listener);
        project_manager.remove_listener(&listener);
        model_events.remove_listener(&listener);
    }

    /// Set the tree model that receives events, replacing any previous one
    pub fn set_tree_model(&self, tree_model: Option<Rc<dyn TreeModelListener>>) {
        *self.tree_model.borrow_mut() = tree_model;
    }

    pub fn has_tree_model(&self) -> bool {
        self.tree_model.borrow().is_some()
    }

    /// Map a notification to the tree update it calls for, if any
    pub fn translate(event: &PropertyChangeEvent) -> Option<ExplorerEvent> {
        let property = event.property.as_str();

        if property == SAVE_STATE_PROPERTY {
            return None;
        }

        if property == CURRENT_PROJECT_PROPERTY {
            return event.new_value.as_ref().map(|_| ExplorerEvent::StructureChanged);
        }

        if event.is_changed_property(KEY_USE_GUILLEMOTS)
            || event.is_changed_property(KEY_SHOW_STEREOTYPES)
            || property == MODEL_STRUCTURE_CHANGED
        {
            return Some(ExplorerEvent::StructureChanged);
        }

        let value = event.new_value.clone();
        match property {
            MODEL_ELEMENT_ADDED => Some(ExplorerEvent::ElementAdded(value)),
            MODEL_ELEMENT_REMOVED => Some(ExplorerEvent::ElementRemoved(value)),
            MODEL_ELEMENT_CHANGED => Some(ExplorerEvent::ElementChanged(value)),
            _ => None,
        }
    }

    pub fn structure_changed(&self) {
        self.forward(&ExplorerEvent::StructureChanged);
    }

    pub fn model_element_added(&self, element: PropertyValue) {
        self.forward(&ExplorerEvent::ElementAdded(Some(element)));
    }

    pub fn model_element_removed(&self, element: PropertyValue) {
        self.forward(&ExplorerEvent::ElementRemoved(Some(element)));
    }

    pub fn model_element_changed(&self, element: PropertyValue) {
        self.forward(&ExplorerEvent::ElementChanged(Some(element)));
    }

    fn forward(&self, event: &ExplorerEvent) {
        // Release the slot before calling out so the tree may replace itself
        let tree = self.tree_model.borrow().clone();
        match tree {
            Some(tree) => event.dispatch(tree.as_ref()),
            None => log::trace!("No tree model, dropping {:?}", event),
        }
    }
}

impl PropertyChangeListener for ExplorerEventAdaptor {
    fn property_change(&self, event: &PropertyChangeEvent) {
        if !self.has_tree_model() {
            return;
        }
        if let Some(explorer_event) = Self::translate(event) {
            self.forward(&explorer_event);
        }
    }
}
