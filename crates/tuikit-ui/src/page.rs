use std::fmt;

use tuikit_core::Result;

use crate::action::Action;
use crate::element::{Element, ElementId, Invocation};
use crate::value::Value;

/// Identity of a page within its [`Menu`](crate::Menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageId(pub(crate) u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// A named, ordered collection of elements with an optional selection.
#[derive(Debug)]
pub struct Page {
    id: PageId,
    label: String,
    elements: Vec<Element>,
    selected: Option<usize>,
    default_padding: Option<String>,
    next_serial: u32,
}

impl Page {
    pub(crate) fn new(id: PageId, label: String) -> Self {
        Self {
            id,
            label,
            elements: Vec::new(),
            selected: None,
            default_padding: None,
            next_serial: 0,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Fixed left padding for left-aligned elements.
    pub fn default_padding(&self) -> Option<&str> {
        self.default_padding.as_deref()
    }

    pub fn set_default_padding(&mut self, padding: Option<String>) {
        self.default_padding = padding;
    }

    // -- elements --

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Position of the element with `id`, if it belongs to this page.
    pub fn position(&self, id: ElementId) -> Option<usize> {
        if id.page != self.id {
            return None;
        }
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Append a new element with no action and return it for configuration.
    pub fn add_element(&mut self, label: impl Into<String>) -> &mut Element {
        let id = ElementId {
            page: self.id,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.elements.push(Element::new(id, label.into()));
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    /// Append an element bound to `action`, rejecting a payload that does not
    /// fit the action's arity. Nothing is added on error.
    pub fn try_add_element(
        &mut self,
        label: impl Into<String>,
        action: Action,
        payload: Option<Value>,
    ) -> Result<&mut Element> {
        let label = label.into();
        if let Err(e) = action.check(payload.as_ref()) {
            log::warn!("rejected element {label:?} on {}: {e}", self.id);
            return Err(e);
        }
        let element = self.add_element(label);
        element.set_action(action);
        if let Some(p) = payload {
            element.set_payload(p);
        }
        Ok(element)
    }

    /// Remove the element at `index`. The selection keeps pointing at the
    /// same element, or becomes `None` if that element was removed.
    pub fn remove_element(&mut self, index: usize) -> Option<Element> {
        if index >= self.elements.len() {
            return None;
        }
        let removed = self.elements.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(removed)
    }

    pub fn remove_element_by_id(&mut self, id: ElementId) -> Option<Element> {
        let index = self.position(id)?;
        self.remove_element(index)
    }

    // -- selection --

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|i| self.elements.get(i))
    }

    /// Select by position. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.elements.len() {
            self.selected = Some(index);
        }
    }

    /// Select by identity. Ids from other pages are ignored.
    pub fn select_id(&mut self, id: ElementId) {
        if let Some(index) = self.position(id) {
            self.selected = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selection up. From no selection this selects the last
    /// element; at the first element it stays put. Returns whether the
    /// selection changed.
    pub fn select_prev(&mut self) -> bool {
        let next = match self.selected {
            None if !self.elements.is_empty() => Some(self.elements.len() - 1),
            Some(s) if s > 0 => Some(s - 1),
            _ => return false,
        };
        self.selected = next;
        true
    }

    /// Move the selection down. From no selection this selects the first
    /// element; at the last element it stays put. Returns whether the
    /// selection changed.
    pub fn select_next(&mut self) -> bool {
        let next = match self.selected {
            None if !self.elements.is_empty() => Some(0),
            Some(s) if s + 1 < self.elements.len() => Some(s + 1),
            _ => return false,
        };
        self.selected = next;
        true
    }

    /// Invoke the element at `index`. `Ok(None)` if there is no such element.
    pub fn invoke(&mut self, index: usize) -> Result<Option<Invocation>> {
        match self.elements.get_mut(index) {
            Some(element) => element.invoke().map(Some),
            None => Ok(None),
        }
    }
}
