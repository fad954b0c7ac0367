//! Menu pages for tuikit: elements, pages, selection, numeric input and the
//! key-driven navigation state machine.

mod action;
mod element;
mod menu;
mod page;
mod prompt;
mod render;
mod value;

pub use action::{Action, Arity, IntoNav, Nav};
pub use element::{Alignment, Element, ElementId, Invocation};
pub use menu::{Menu, MenuAction, MenuConfig, MenuKeys, MenuStyle, PageRef, UNTITLED_PAGE};
pub use page::{Page, PageId};
pub use prompt::{Input, NumberPrompt, PROMPT};
pub use value::Value;
