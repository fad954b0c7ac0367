use tuikit_core::{Result, Style};

use crate::action::{Action, Arity, Nav};
use crate::page::PageId;
use crate::value::Value;

/// Horizontal alignment of an element line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Identity of an element: the owning page plus a per-page serial number.
///
/// Labels may repeat; ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub(crate) page: PageId,
    pub(crate) serial: u32,
}

impl ElementId {
    /// The page this element belongs to.
    pub fn page(self) -> PageId {
        self.page
    }
}

/// What happened when an element was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The action ran and asked for this navigation.
    Called(Nav),
    /// The element has no bound action.
    Unbound,
}

/// A single menu entry.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    label: String,
    action: Option<Action>,
    payload: Option<Value>,
    style: Style,
    align: Alignment,
    status: String,
}

impl Element {
    pub(crate) fn new(id: ElementId, label: String) -> Self {
        Self {
            id,
            label,
            action: None,
            payload: None,
            style: Style::NONE,
            align: Alignment::Left,
            status: String::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The owning page.
    pub fn page(&self) -> PageId {
        self.id.page
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Free-form status text shown after the label.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// The bound action's arity, if any.
    pub fn arity(&self) -> Option<Arity> {
        self.action.as_ref().map(Action::arity)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn set_action(&mut self, action: Action) -> &mut Self {
        self.action = Some(action);
        self
    }

    pub fn clear_action(&mut self) -> &mut Self {
        self.action = None;
        self
    }

    pub fn set_payload(&mut self, payload: impl Into<Value>) -> &mut Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn clear_payload(&mut self) -> &mut Self {
        self.payload = None;
        self
    }

    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    pub fn set_align(&mut self, align: Alignment) -> &mut Self {
        self.align = align;
        self
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status = status.into();
        self
    }

    /// Check that the payload fits the bound action.
    pub fn check(&self) -> Result<()> {
        match &self.action {
            Some(action) => action.check(self.payload.as_ref()),
            None => Ok(()),
        }
    }

    /// Run the bound action through the invocation adapter.
    pub fn invoke(&mut self) -> Result<Invocation> {
        let Some(action) = self.action.as_mut() else {
            return Ok(Invocation::Unbound);
        };
        log::debug!("invoking {:?} ({:?})", self.label, action.arity());
        action.invoke(self.payload.as_ref()).map(Invocation::Called)
    }
}
