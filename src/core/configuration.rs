// Runtime Configuration
// User settings with per-key change notification

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::app_config::AppConfig;
use super::events::{PropertyChangeEvent, PropertyChangeListener, PropertyChangeSupport, PropertyValue};
use crate::constants::{KEY_SHOW_STEREOTYPES, KEY_USE_GUILLEMOTS};

/// Runtime settings store.
///
/// Listeners subscribe to a single key and only hear about real changes.
#[derive(Debug, Default)]
pub struct Configuration {
    values: RefCell<HashMap<String, PropertyValue>>,
    listeners: RefCell<HashMap<String, Rc<PropertyChangeSupport>>>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the notation settings from the compiled defaults
    pub fn from_app_config(config: &AppConfig) -> Self {
        let configuration = Self::new();
        {
            let mut values = configuration.values.borrow_mut();
            values.insert(
                KEY_USE_GUILLEMOTS.to_string(),
                PropertyValue::Flag(config.notation.use_guillemots),
            );
            values.insert(
                KEY_SHOW_STEREOTYPES.to_string(),
                PropertyValue::Flag(config.notation.show_stereotypes),
            );
        }
        configuration
    }

    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.values.borrow().get(key).cloned()
    }

    /// Read a flag; missing or non-flag values read as false
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(PropertyValue::Flag(true)))
    }

    pub fn set_flag(&self, key: &str, value: bool) {
        self.set(key, PropertyValue::Flag(value));
    }

    /// Store a value, notifying the key's listeners if it changed
    pub fn set(&self, key: &str, value: PropertyValue) {
        let old_value = self
            .values
            .borrow_mut()
            .insert(key.to_string(), value.clone());

        if old_value.as_ref() == Some(&value) {
            return;
        }

        log::debug!("Configuration {} changed to {:?}", key, value);
        let support = self.listeners.borrow().get(key).cloned();
        if let Some(support) = support {
            support.fire(&PropertyChangeEvent::new(key, old_value, Some(value)));
        }
    }

    /// Subscribe to changes of one key
    pub fn add_listener(&self, key: &str, listener: Rc<dyn PropertyChangeListener>) {
        self.listeners
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .add_listener(listener);
    }

    pub fn remove_listener(&self, key: &str, listener: &Rc<dyn PropertyChangeListener>) -> bool {
        let support = self.listeners.borrow().get(key).cloned();
        support.map_or(false, |s| s.remove_listener(listener))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<PropertyChangeEvent>>,
    }

    impl PropertyChangeListener for Recorder {
        fn property_change(&self, event: &PropertyChangeEvent) {
            self.seen.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_seeded_from_app_config() {
        let mut app_config = AppConfig::default();
        app_config.notation.use_guillemots = true;
        app_config.notation.show_stereotypes = false;

        let configuration = Configuration::from_app_config(&app_config);

        assert!(configuration.flag(KEY_USE_GUILLEMOTS));
        assert!(!configuration.flag(KEY_SHOW_STEREOTYPES));
        assert!(!configuration.flag("unknown"));
    }

    #[test]
    fn test_listeners_hear_only_their_key() {
        let configuration = Configuration::new();
        let recorder = Rc::new(Recorder::default());
        configuration.add_listener(KEY_USE_GUILLEMOTS, recorder.clone());

        configuration.set_flag(KEY_SHOW_STEREOTYPES, true);
        configuration.set_flag(KEY_USE_GUILLEMOTS, true);

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].property, KEY_USE_GUILLEMOTS);
        assert_eq!(seen[0].old_value, None);
        assert_eq!(seen[0].new_value, Some(PropertyValue::Flag(true)));
    }

    #[test]
    fn test_unchanged_value_is_silent() {
        let configuration = Configuration::new();
        let recorder = Rc::new(Recorder::default());
        configuration.add_listener("k", recorder.clone());

        configuration.set("k", PropertyValue::Text("a".to_string()));
        configuration.set("k", PropertyValue::Text("a".to_string()));
        configuration.set("k", PropertyValue::Text("b".to_string()));

        assert_eq!(recorder.seen.borrow().len(), 2);
    }

    #[test]
    fn test_remove_listener() {
        let configuration = Configuration::new();
        let recorder = Rc::new(Recorder::default());
        let handle: Rc<dyn PropertyChangeListener> = recorder.clone();
        configuration.add_listener("k", handle.clone());

        assert!(configuration.remove_listener("k", &handle));
        assert!(!configuration.remove_listener("other", &handle));

        configuration.set_flag("k", true);
        assert!(recorder.seen.borrow().is_empty());
    }
}
