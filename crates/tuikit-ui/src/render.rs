//! Text rendering of a [`Menu`]: header block plus one line per element.

use tuikit_core::{RESET, Style, style_to_code};
use unicode_width::UnicodeWidthStr;

use crate::element::{Alignment, Element};
use crate::menu::Menu;

impl Menu {
    /// The header text.
    ///
    /// Unless a fixed header is configured it reads
    /// ` P: <page label>\n <name> <page number>/<page count>\n`, with each
    /// fragment dropped when its flag is off.
    pub fn header(&self) -> String {
        let config = self.config();
        if let Some(header) = &config.header {
            return header.clone();
        }

        let mut out = String::from(" P: ");
        if config.show_page_name {
            if let Some(page) = self.current_page() {
                out.push_str(page.label());
                out.push('\n');
            }
        }
        out.push(' ');
        if config.show_name {
            out.push_str(&config.name);
            out.push(' ');
        }
        if config.show_page_index {
            let number = self.current_index().map_or(0, |i| i + 1);
            out.push_str(&number.to_string());
        }
        out.push('/');
        out.push_str(&self.pages().len().to_string());
        out.push('\n');
        out
    }

    /// Render the current page as display lines. Does not mutate anything.
    ///
    /// `width` is the terminal column count used for centre/right alignment;
    /// `0` (unknown) disables alignment padding.
    pub fn render(&self, width: usize) -> Vec<String> {
        let mut lines: Vec<String> = self.header().lines().map(str::to_owned).collect();
        lines.push(String::new());

        let Some(page) = self.current_page() else {
            return lines;
        };
        let config = self.config();
        let selected = page.selected();
        for (i, element) in page.elements().iter().enumerate() {
            let mut style = element.style();
            if selected == Some(i) {
                style |= config.style.selected;
            }
            let index = config.show_index.then_some(i + 1);
            lines.push(element_line(
                element,
                index,
                style,
                page.default_padding(),
                width,
            ));
        }
        lines
    }
}

/// `padding + style prefix + "NN: " + label [+ " " + status] + reset`.
fn element_line(
    element: &Element,
    index: Option<usize>,
    style: Style,
    default_padding: Option<&str>,
    width: usize,
) -> String {
    let mut text = String::new();
    if let Some(n) = index {
        text.push_str(&format!("{n:>2}: "));
    }
    text.push_str(element.label());
    if !element.status().is_empty() {
        text.push(' ');
        text.push_str(element.status());
    }

    let padding = padding(element.align(), text.width(), width, default_padding);
    let prefix = style_to_code(style);
    let reset = if prefix.is_empty() { "" } else { RESET };
    format!("{padding}{prefix}{text}{reset}")
}

fn padding(align: Alignment, text_width: usize, width: usize, default: Option<&str>) -> String {
    let spare = width.saturating_sub(text_width);
    match align {
        Alignment::Left => default.unwrap_or_default().to_owned(),
        Alignment::Center => " ".repeat(spare / 2),
        Alignment::Right => " ".repeat(spare),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuConfig;

    fn menu() -> Menu {
        let mut menu = Menu::new(MenuConfig {
            name: "Demo".into(),
            ..MenuConfig::default()
        });
        let page = menu.add_page("main");
        page.add_element("first");
        page.add_element("second").set_status("[on]");
        menu.add_page("other");
        menu
    }

    #[test]
    fn header_shape() {
        let menu = menu();
        assert_eq!(menu.header(), " P: main\n Demo 1/2\n");
    }

    #[test]
    fn header_flags_drop_fragments() {
        let mut menu = menu();
        menu.config_mut().show_page_name = false;
        assert_eq!(menu.header(), " P:  Demo 1/2\n");
        menu.config_mut().show_name = false;
        assert_eq!(menu.header(), " P:  1/2\n");
        menu.config_mut().show_page_index = false;
        assert_eq!(menu.header(), " P:  /2\n");
    }

    #[test]
    fn header_without_pages() {
        let menu = Menu::default();
        assert_eq!(menu.header(), " P:  Untitled UI 0/0\n");
        assert_eq!(menu.render(80), vec![" P:  Untitled UI 0/0", ""]);
    }

    #[test]
    fn fixed_header_replaces_generated_one() {
        let mut menu = menu();
        menu.config_mut().header = Some("== Settings ==".into());
        assert_eq!(menu.render(0)[0], "== Settings ==");
    }

    #[test]
    fn plain_lines() {
        let menu = menu();
        assert_eq!(
            menu.render(0),
            vec![" P: main", " Demo 1/2", "", " 1: first", " 2: second [on]"]
        );
    }

    #[test]
    fn selection_and_styles() {
        let mut menu = menu();
        {
            let page = menu.current_page_mut().unwrap();
            page.element_mut(0).unwrap().set_style(Style::RED);
            page.select(1);
        }
        let lines = menu.render(0);
        assert_eq!(lines[3], "\x1b[0;31m 1: first\x1b[0m");
        assert_eq!(lines[4], "\x1b[0;7m 2: second [on]\x1b[0m");

        // Selected style merges as a set.
        menu.current_page_mut()
            .unwrap()
            .element_mut(1)
            .unwrap()
            .set_style(Style::INVERTED | Style::BOLD);
        assert_eq!(menu.render(0)[4], "\x1b[0;1;7m 2: second [on]\x1b[0m");
    }

    #[test]
    fn render_is_pure() {
        let mut menu = menu();
        menu.current_page_mut().unwrap().select(0);
        let before = menu.render(40);
        assert_eq!(menu.render(40), before);
        assert_eq!(menu.current_page().unwrap().selected(), Some(0));
    }

    #[test]
    fn alignment() {
        let mut menu = Menu::new(MenuConfig {
            show_index: false,
            ..MenuConfig::default()
        });
        let page = menu.add_page("p");
        page.set_default_padding(Some("  ".into()));
        page.add_element("left");
        page.add_element("mid").set_align(Alignment::Center);
        page.add_element("right").set_align(Alignment::Right);
        page.add_element("日本").set_align(Alignment::Right);

        let lines = menu.render(11);
        assert_eq!(lines[3], "  left");
        assert_eq!(lines[4], "    mid");
        assert_eq!(lines[5], "      right");
        // Wide characters count two columns each.
        assert_eq!(lines[6], "       日本");

        // Unknown or too-small width: no alignment padding.
        let lines = menu.render(0);
        assert_eq!(lines[4], "mid");
        assert_eq!(lines[5], "right");
        assert_eq!(menu.render(3)[5], "right");
        assert_eq!(lines[3], "  left");
    }
}
