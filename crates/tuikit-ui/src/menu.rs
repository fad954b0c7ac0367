use tuikit_core::{Effect, Error, Key, Model, Result, Style};

use crate::action::Nav;
use crate::element::Invocation;
use crate::page::{Page, PageId};
use crate::prompt::{Input, NumberPrompt};

/// Configuration for a [`Menu`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Name shown in the header.
    pub name: String,
    pub show_name: bool,
    /// Show the 1-based current page number in the header.
    pub show_page_index: bool,
    /// Show the current page label in the header.
    pub show_page_name: bool,
    /// Prefix each element line with its 1-based number.
    pub show_index: bool,
    /// Fixed header text replacing the generated one.
    pub header: Option<String>,
    /// Wait for a keypress after an action runs, before redrawing.
    pub pause_after_invoke: bool,
    /// Key bindings.
    pub keys: MenuKeys,
    /// Visual style.
    pub style: MenuStyle,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            name: "Untitled UI".to_string(),
            show_name: true,
            show_page_index: true,
            show_page_name: true,
            show_index: true,
            header: None,
            pause_after_invoke: false,
            keys: MenuKeys::default(),
            style: MenuStyle::default(),
        }
    }
}

/// Key bindings for menu navigation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuKeys {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    /// Previous page.
    pub left: Vec<Key>,
    /// Next page.
    pub right: Vec<Key>,
    /// Activate the selected element.
    pub invoke: Vec<Key>,
    pub cancel: Vec<Key>,
}

impl MenuKeys {
    /// Whether `key` appears in any binding.
    pub fn binds(&self, key: Key) -> bool {
        [
            &self.up,
            &self.down,
            &self.left,
            &self.right,
            &self.invoke,
            &self.cancel,
        ]
        .iter()
        .any(|keys| keys.contains(&key))
    }
}

impl Default for MenuKeys {
    fn default() -> Self {
        Self {
            up: vec![Key::Up],
            down: vec![Key::Down],
            left: vec![Key::Left, Key::Char('a')],
            right: vec![Key::Right, Key::Char('d')],
            invoke: vec![Key::Enter],
            cancel: vec![Key::Backspace],
        }
    }
}

/// Visual style for a menu.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuStyle {
    /// Merged into the style of the selected element.
    pub selected: Style,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            selected: Style::INVERTED,
        }
    }
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Nothing changed.
    Pass,
    /// The selection moved.
    Move,
    /// The current page changed.
    Turn,
    /// The element at this index ran its action.
    Invoke(usize),
    /// The element at this index was activated but has no action.
    Unbound(usize),
    /// An action asked to end the session.
    Quit,
}

/// A page designated by identity or by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef<'a> {
    Id(PageId),
    Label(&'a str),
}

impl From<PageId> for PageRef<'_> {
    fn from(id: PageId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for PageRef<'a> {
    fn from(label: &'a str) -> Self {
        Self::Label(label)
    }
}

impl<'a> From<&'a String> for PageRef<'a> {
    fn from(label: &'a String) -> Self {
        Self::Label(label)
    }
}

/// Label of the page a [`Menu`] adds for itself when run with no pages.
pub const UNTITLED_PAGE: &str = "Untitled page";

/// The navigation state machine: owns the pages and the current-page
/// cursor, and turns keys into selection moves, page turns and invocations.
///
/// `current` is `Some(i)` with `i < pages.len()` whenever there are pages,
/// and `None` otherwise.
#[derive(Debug)]
pub struct Menu {
    pages: Vec<Page>,
    current: Option<usize>,
    next_page: u32,
    config: MenuConfig,
    prompt: NumberPrompt,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

impl Menu {
    /// Create an empty menu.
    pub fn new(config: MenuConfig) -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            next_page: 0,
            config,
            prompt: NumberPrompt::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MenuConfig {
        &mut self.config
    }

    /// The numeric input collector used by [`Model::update`].
    pub fn prompt(&self) -> &NumberPrompt {
        &self.prompt
    }

    // -- pages --

    /// Append an empty page. The first page added becomes current.
    pub fn add_page(&mut self, label: impl Into<String>) -> &mut Page {
        let id = PageId(self.next_page);
        self.next_page += 1;
        self.pages.push(Page::new(id, label.into()));
        if self.pages.len() == 1 {
            self.current = Some(0);
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id() == id)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id() == id)
    }

    /// First page with this label.
    pub fn page_by_label(&self, label: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.label() == label)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.map(|i| &self.pages[i])
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.current.map(|i| &mut self.pages[i])
    }

    /// Make `id` the current page. Unknown ids are ignored.
    pub fn goto(&mut self, id: PageId) {
        if let Some(i) = self.position(id) {
            self.current = Some(i);
            log::debug!("goto {id} (index {i})");
        }
    }

    /// Make the page at `idx` current. Out-of-range indices are ignored;
    /// there is no clamping or wraparound.
    pub fn set_current_index(&mut self, idx: usize) {
        if idx < self.pages.len() {
            self.current = Some(idx);
            log::debug!("current page index {idx}");
        }
    }

    /// Remove a page.
    ///
    /// By id, a page that is not present is silently ignored (`Ok(None)`).
    /// By label, the first match is removed and no match is
    /// [`Error::NotFound`].
    pub fn delete_page<'a>(&mut self, target: impl Into<PageRef<'a>>) -> Result<Option<Page>> {
        let pos = match target.into() {
            PageRef::Id(id) => match self.position(id) {
                Some(pos) => pos,
                None => return Ok(None),
            },
            PageRef::Label(label) => self
                .pages
                .iter()
                .position(|p| p.label() == label)
                .ok_or_else(|| Error::NotFound(label.to_string()))?,
        };
        let page = self.pages.remove(pos);
        self.current = match self.current {
            _ if self.pages.is_empty() => None,
            Some(c) if pos < c => Some(c - 1),
            Some(c) => Some(c.min(self.pages.len() - 1)),
            None => None,
        };
        log::debug!("deleted {} {:?}", page.id(), page.label());
        Ok(Some(page))
    }

    fn position(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }

    // -- transitions --

    /// Apply one key to the current page.
    ///
    /// Navigation mistakes are dropped silently; the only error is an
    /// element whose payload does not fit its action.
    pub fn handle_key(&mut self, key: Key) -> Result<MenuAction> {
        let Some(cur) = self.current else {
            return Ok(MenuAction::Pass);
        };
        let keys = &self.config.keys;

        if keys.invoke.contains(&key) {
            return match self.pages[cur].selected() {
                Some(s) => self.activate(s),
                None => Ok(MenuAction::Pass),
            };
        }
        if keys.right.contains(&key) {
            return Ok(self.turn(1));
        }
        if keys.left.contains(&key) {
            return Ok(self.turn(-1));
        }
        if keys.up.contains(&key) {
            return Ok(moved(self.pages[cur].select_prev()));
        }
        if keys.down.contains(&key) {
            return Ok(moved(self.pages[cur].select_next()));
        }
        if keys.cancel.contains(&key) {
            return Ok(MenuAction::Pass);
        }
        match key {
            Key::Digit(d) => self.select_number(d.into()),
            _ => Ok(MenuAction::Pass),
        }
    }

    /// Invoke element `k` (1-based) of the current page, regardless of the
    /// selection. Numbers outside `1..=len` are ignored.
    pub fn select_number(&mut self, k: usize) -> Result<MenuAction> {
        let Some(cur) = self.current else {
            return Ok(MenuAction::Pass);
        };
        if k == 0 || k > self.pages[cur].len() {
            return Ok(MenuAction::Pass);
        }
        self.activate(k - 1)
    }

    /// Step the current page by `delta`, clearing the selection on the page
    /// being left. Stepping past either end leaves the index unchanged.
    fn turn(&mut self, delta: isize) -> MenuAction {
        let Some(cur) = self.current else {
            return MenuAction::Pass;
        };
        self.pages[cur].clear_selection();
        match cur.checked_add_signed(delta) {
            Some(next) if next < self.pages.len() => {
                self.current = Some(next);
                log::debug!("turned to page index {next}");
                MenuAction::Turn
            }
            _ => MenuAction::Pass,
        }
    }

    fn activate(&mut self, index: usize) -> Result<MenuAction> {
        let Some(cur) = self.current else {
            return Ok(MenuAction::Pass);
        };
        match self.pages[cur].invoke(index)? {
            Some(Invocation::Called(nav)) => Ok(self.apply(nav, index)),
            Some(Invocation::Unbound) => Ok(MenuAction::Unbound(index)),
            None => Ok(MenuAction::Pass),
        }
    }

    fn apply(&mut self, nav: Nav, index: usize) -> MenuAction {
        match nav {
            Nav::Stay => {}
            Nav::Goto(id) => self.goto(id),
            Nav::GotoIndex(i) => self.set_current_index(i),
            Nav::Next => {
                self.turn(1);
            }
            Nav::Prev => {
                self.turn(-1);
            }
            Nav::Quit => return MenuAction::Quit,
        }
        MenuAction::Invoke(index)
    }
}

fn moved(changed: bool) -> MenuAction {
    if changed {
        MenuAction::Move
    } else {
        MenuAction::Pass
    }
}

impl Model for Menu {
    fn init(&mut self) {
        if self.pages.is_empty() {
            self.add_page(UNTITLED_PAGE);
        }
    }

    /// Digits go through the number prompt and are committed by the invoke
    /// bindings. A digit bound to a navigation key skips the prompt.
    fn update(&mut self, key: Key) -> Result<Option<Effect>> {
        let keys = &self.config.keys;
        let input = if key.digit().is_some() && keys.binds(key) && !keys.invoke.contains(&key) {
            self.prompt.cancel();
            Some(Input::Key(key))
        } else {
            self.prompt.feed(key, &keys.invoke)
        };
        let Some(input) = input else {
            return Ok(None);
        };
        let action = match input {
            Input::Key(key) => self.handle_key(key)?,
            Input::Number(k) => self.select_number(k)?,
        };
        Ok(match action {
            MenuAction::Quit => Some(Effect::End),
            MenuAction::Invoke(_) if self.config.pause_after_invoke => Some(Effect::Pause),
            _ => None,
        })
    }

    fn draw(&self, width: usize) -> Vec<String> {
        let mut lines = self.render(width);
        lines.push(self.prompt.line());
        lines
    }
}
