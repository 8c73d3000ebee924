// Property Change Notifications
// Event types and the listener list shared by every notification source

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Identifier of a model element carried by model events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value carried by a property change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
    Element(ElementId),
}

/// A named property changed from one value to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChangeEvent {
    pub property: String,
    pub old_value: Option<PropertyValue>,
    pub new_value: Option<PropertyValue>,
}

impl PropertyChangeEvent {
    pub fn new(
        property: impl Into<String>,
        old_value: Option<PropertyValue>,
        new_value: Option<PropertyValue>,
    ) -> Self {
        Self {
            property: property.into(),
            old_value,
            new_value,
        }
    }

    /// Model event about a single element
    pub fn element(property: impl Into<String>, element: ElementId) -> Self {
        Self::new(property, None, Some(PropertyValue::Element(element)))
    }

    /// True if this event reports an actual change of `property`
    pub fn is_changed_property(&self, property: &str) -> bool {
        self.property == property && self.old_value != self.new_value
    }
}

/// Receives property change notifications
pub trait PropertyChangeListener {
    fn property_change(&self, event: &PropertyChangeEvent);
}

/// Ordered list of listeners for one notification source.
///
/// Not thread safe. Listeners may subscribe or unsubscribe while an event
/// is being delivered; the change applies from the next event on.
#[derive(Default)]
pub struct PropertyChangeSupport {
    listeners: RefCell<Vec<Rc<dyn PropertyChangeListener>>>,
}

impl PropertyChangeSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: Rc<dyn PropertyChangeListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Remove a listener by identity. Returns false if it was not registered.
    pub fn remove_listener(&self, listener: &Rc<dyn PropertyChangeListener>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| !same_listener(l, listener));
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver an event to every listener, in registration order
    pub fn fire(&self, event: &PropertyChangeEvent) {
        let snapshot: Vec<_> = self.listeners.borrow().clone();
        for listener in snapshot {
            listener.property_change(event);
        }
    }
}

impl fmt::Debug for PropertyChangeSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChangeSupport")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Compare listeners by address, ignoring vtables
pub(crate) fn same_listener(a: &Rc<dyn PropertyChangeListener>, b: &Rc<dyn PropertyChangeListener>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl PropertyChangeListener for Recorder {
        fn property_change(&self, event: &PropertyChangeEvent) {
            self.seen.borrow_mut().push(event.property.clone());
        }
    }

    #[test]
    fn test_fire_in_registration_order() {
        let support = PropertyChangeSupport::new();
        let first = Rc::new(Recorder::default());
        let second = Rc::new(Recorder::default());
        support.add_listener(first.clone());
        support.add_listener(second.clone());

        support.fire(&PropertyChangeEvent::new("a", None, None));

        assert_eq!(*first.seen.borrow(), vec!["a".to_string()]);
        assert_eq!(*second.seen.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_remove_listener_by_identity() {
        let support = PropertyChangeSupport::new();
        let recorder = Rc::new(Recorder::default());
        let handle: Rc<dyn PropertyChangeListener> = recorder.clone();
        support.add_listener(handle.clone());

        assert!(support.remove_listener(&handle));
        assert!(!support.remove_listener(&handle));

        support.fire(&PropertyChangeEvent::new("a", None, None));
        assert!(recorder.seen.borrow().is_empty());
    }

    struct Unsubscriber {
        support: Rc<PropertyChangeSupport>,
        me: RefCell<Option<Rc<dyn PropertyChangeListener>>>,
        calls: RefCell<usize>,
    }

    impl PropertyChangeListener for Unsubscriber {
        fn property_change(&self, _event: &PropertyChangeEvent) {
            *self.calls.borrow_mut() += 1;
            if let Some(me) = self.me.borrow_mut().take() {
                self.support.remove_listener(&me);
            }
        }
    }

    #[test]
    fn test_listener_may_unsubscribe_during_delivery() {
        let support = Rc::new(PropertyChangeSupport::new());
        let listener = Rc::new(Unsubscriber {
            support: support.clone(),
            me: RefCell::new(None),
            calls: RefCell::new(0),
        });
        let handle: Rc<dyn PropertyChangeListener> = listener.clone();
        *listener.me.borrow_mut() = Some(handle.clone());
        support.add_listener(handle);

        support.fire(&PropertyChangeEvent::new("a", None, None));
        support.fire(&PropertyChangeEvent::new("b", None, None));

        assert_eq!(*listener.calls.borrow(), 1);
        assert_eq!(support.listener_count(), 0);
    }

    #[test]
    fn test_is_changed_property() {
        let changed = PropertyChangeEvent::new(
            "k",
            Some(PropertyValue::Flag(false)),
            Some(PropertyValue::Flag(true)),
        );
        let same = PropertyChangeEvent::new(
            "k",
            Some(PropertyValue::Flag(true)),
            Some(PropertyValue::Flag(true)),
        );

        assert!(changed.is_changed_property("k"));
        assert!(!changed.is_changed_property("other"));
        assert!(!same.is_changed_property("k"));
    }
}
