//! Shared demo menu used by the `menu` binary.
//!
//! Demonstrates: several pages, page turning with arrows or `a`/`d`, numeric
//! and arrow+Enter activation, all three action arities, styles, alignment,
//! status text and actions that navigate.

use tuikit_core::Style;
use tuikit_ui::{Action, Alignment, Menu, MenuConfig, Nav, Value};

/// Build the demo menu.
pub fn build_menu(config: MenuConfig) -> Menu {
    let mut menu = Menu::new(config);

    let home = menu.add_page("testpage").id();
    let second = menu.add_page("secpage").id();
    let third = menu.add_page("page3").id();

    if let Some(page) = menu.page_mut(home) {
        page.add_element("switch to page 3")
            .set_action(Action::unary(|v: &Value| match v.as_page() {
                Some(id) => Nav::Goto(id),
                None => Nav::Stay,
            }))
            .set_payload(third);
        page.add_element("hello")
            .set_action(Action::nullary(|| println!("test")));
        page.add_element("add")
            .set_action(Action::variadic(2, |args: &[Value]| {
                let sum: f64 = args.iter().filter_map(Value::as_float).sum();
                println!("{sum}");
            }))
            .set_payload((2, 3));
        page.add_element("im red!").set_style(Style::RED);
        page.add_element("bold and underlined")
            .set_style(Style::BOLD | Style::UNDERSCORE);
        page.add_element("quit")
            .set_action(Action::nullary(|| Nav::Quit))
            .set_style(Style::GRAY_BRIGHT);
    }

    if let Some(page) = menu.page_mut(second) {
        page.add_element("say")
            .set_action(Action::variadic(5, |args: &[Value]| {
                for v in args {
                    println!("{v}");
                }
            }))
            .set_payload((1, 2, 3, 4, 5));
        page.add_element("echo")
            .set_action(Action::unary(|v: &Value| println!("{v}")))
            .set_payload(("a", "whole", "tuple"));
        page.add_element("smth").set_status("(no action)");
        page.add_element("centred").set_align(Alignment::Center);
        page.add_element("right").set_align(Alignment::Right);
    }

    if let Some(page) = menu.page_mut(third) {
        page.set_default_padding(Some("  ".into()));
        page.add_element("page3 smth");
        page.add_element("to page 1")
            .set_action(Action::unary(|v: &Value| {
                v.as_page().map_or(Nav::Stay, Nav::Goto)
            }))
            .set_payload(home);
        page.add_element("previous page")
            .set_action(Action::nullary(|| Nav::Prev));
    }

    menu
}
