//! Demo screens built from the layout operators.
//!
//! Each builder snapshots the shared state, so a provider tree reflects the
//! state at build time; handlers capture the shared handle and mutate it when
//! pressed. Rebuild after a press to see the effect.

use crate::state::{PosState, Screen, Shared, Size, lock};
use core_config::ListConfig;
use core_model::{OnPress, Rectangle, Severity, Tile};
use core_strip::{
    BoxedStrip, ContainedStripInfo, StripProviderExt, container_strip, downward_strip,
    empty_strip, leftward_strip, list_strip, tile_strip, upward_strip,
};
use core_render::text::format_price;
use std::sync::Arc;
use tracing::info;

/// Menu items offered on the ordering screen, price in cents.
pub const MENU: &[(&str, i64)] = &[
    ("Burger", 299),
    ("Cheeseburger", 349),
    ("Fries", 199),
    ("Nuggets", 449),
    ("Salad", 399),
    ("Wrap", 429),
    ("Shake", 279),
    ("Soda", 149),
    ("Coffee", 129),
    ("Cookie", 99),
    ("Pie", 149),
];

fn handler<F>(state: &Shared, action: &'static str, f: F) -> OnPress
where
    F: Fn(&mut PosState) + Send + Sync + 'static,
{
    let state = Arc::clone(state);
    OnPress::new(move |tile| {
        info!(
            target: "ui.press",
            action,
            tile = tile.text().unwrap_or_default(),
            "button_pressed"
        );
        f(&mut lock(&state));
    })
}

pub fn build(screen: Screen, state: &Shared, list: &ListConfig) -> BoxedStrip {
    match screen {
        Screen::Ordering => ordering(state, list),
        Screen::Numpad => numpad(state),
        Screen::Message => message(state),
        Screen::Total => total(state),
    }
}

pub fn numpad(state: &Shared) -> BoxedStrip {
    let value = lock(state).numpad_value.clone();
    let digit = |d: u8| {
        Tile::button(handler(state, "numpad_digit", move |s| s.add_digit(d)))
            .with_label(d.to_string())
    };

    container_strip([
        ContainedStripInfo::new(
            Rectangle::new(3, 2, 4, 1),
            tile_strip([Tile::label(value)
                .with_width(4)
                .with_severity(Severity::Info)]),
        ),
        ContainedStripInfo::new(
            Rectangle::new(3, 4, 4, 4),
            tile_strip([
                digit(1),
                digit(2),
                digit(3),
                Tile::button(handler(state, "numpad_cancel", PosState::cancel))
                    .with_label("Cancel")
                    .with_icon("pi pi-arrow-left")
                    .with_severity(Severity::Info)
                    .with_height(2),
                digit(4),
                digit(5),
                digit(6),
                digit(7),
                digit(8),
                digit(9),
                Tile::button(handler(state, "numpad_submit", |s| {
                    s.submit_numpad();
                    info!(target: "ui.press", value = ?s.numpad_submitted, "numpad_submitted");
                }))
                .with_label("Enter")
                .with_icon("pi pi-arrow-right")
                .with_severity(Severity::Success)
                .with_height(2),
                Tile::button(handler(state, "numpad_backspace", PosState::backspace))
                    .with_label("BS")
                    .with_icon("pi pi-delete-left")
                    .with_severity(Severity::Danger),
                digit(0),
                Tile::button(handler(state, "numpad_decimal", PosState::add_decimal))
                    .with_label(".")
                    .with_severity(Severity::Secondary),
            ]),
        ),
    ])
    .boxed()
}

pub fn message(state: &Shared) -> BoxedStrip {
    let (text, options) = {
        let s = lock(state);
        (s.message_text.clone(), s.message_options.clone())
    };
    let span = u16::try_from(4 / options.len().max(1)).unwrap_or(1);
    let last = options.len().saturating_sub(1);
    let buttons: Vec<Tile> = options
        .iter()
        .rev()
        .enumerate()
        .map(|(index, label)| {
            let choice = label.clone();
            let severity = if index == last {
                Severity::Primary
            } else {
                Severity::Secondary
            };
            Tile::button(handler(state, "message_answer", move |s| s.answer(&choice)))
                .with_label(label.clone())
                .with_severity(severity)
                .with_width(span)
        })
        .collect();

    container_strip([ContainedStripInfo::new(
        Rectangle::new(3, 3, 4, 4),
        downward_strip([
            tile_strip([Tile::label(text).with_span(4, 2)]).boxed(),
            leftward_strip([tile_strip(buttons).boxed()]).boxed(),
        ]),
    )])
    .boxed()
}

/// Totalling screen: the order total and a way back to ordering.
pub fn total(state: &Shared) -> BoxedStrip {
    let (total, lines) = {
        let s = lock(state);
        (s.total(), s.order.len())
    };

    container_strip([
        ContainedStripInfo::new(
            Rectangle::new(9, 0, 1, 1),
            tile_strip([Tile::button(handler(state, "totalling_back", PosState::cancel))
                .with_label("Back")
                .with_severity(Severity::Info)]),
        ),
        ContainedStripInfo::new(
            Rectangle::new(3, 4, 4, 2),
            downward_strip([
                tile_strip([Tile::label(format!("Total: {}", format_price(total)))
                    .with_width(4)
                    .with_severity(Severity::Success)])
                .boxed(),
                tile_strip([Tile::label(format!("{lines} items")).with_width(4)]).boxed(),
            ]),
        ),
    ])
    .boxed()
}

pub fn ordering(state: &Shared, list: &ListConfig) -> BoxedStrip {
    let snapshot = lock(state).clone();

    let mut choices: Vec<Tile> = MENU
        .iter()
        .map(|&(name, cents)| {
            let tile = Tile::button(handler(state, "add_item", move |s| s.add_item(name, cents)))
                .with_label(name);
            if snapshot.show_prices {
                tile.with_price(cents)
            } else {
                tile
            }
        })
        .collect();
    choices.insert(
        0,
        Tile::toggle(
            snapshot.show_prices,
            handler(state, "show_prices", |s| s.show_prices = !s.show_prices),
        )
        .with_label("Show Prices"),
    );
    let mut menu = list_strip(
        choices,
        snapshot.choice_page,
        handler(state, "next_choice_page", PosState::next_choice_page),
    )
    .with_more_label(list.more_label.clone());
    if let Some(icon) = &list.more_icon {
        menu = menu.with_more_icon(icon.clone());
    }

    let counts = (1..=10u8).map(|n| {
        Tile::toggle(
            snapshot.count_selection == n,
            handler(state, "select_count", move |s| s.toggle_count(n)),
        )
        .with_label(n.to_string())
        .with_class("circle")
    });

    let tabs = [
        Tile::split_toggle(
            snapshot.split_tab("lunch"),
            handler(state, "select_split_tab", |s| s.press_split_tab("lunch")),
            "Lunch",
            "Dinner",
        ),
        Tile::toggle(
            snapshot.tab_selected("drinks"),
            handler(state, "select_tab", |s| s.select_tab("drinks")),
        )
        .with_label("Drinks"),
        Tile::toggle(
            snapshot.tab_selected("specials"),
            handler(state, "select_tab", |s| s.select_tab("specials")),
        )
        .with_label("Specials"),
        Tile::toggle(
            snapshot.tab_selected("gifts"),
            handler(state, "select_tab", |s| s.select_tab("gifts")),
        )
        .with_label("Gifts")
        .with_severity(Severity::Help),
    ]
    .map(|tile| {
        if tile.severity().is_some() {
            tile
        } else {
            tile.with_severity(Severity::Primary)
        }
    });

    let mut sizes: Vec<Tile> = Size::ALL
        .iter()
        .map(|&size| {
            Tile::toggle(
                snapshot.size_selection == Some(size),
                handler(state, "select_size", move |s| s.toggle_size(size)),
            )
            .with_label(size.name())
            .with_icon(size.icon())
        })
        .collect();
    sizes.insert(4, Tile::label("Lunch").with_severity(Severity::Success));

    let lines = snapshot.order.iter().map(|line| {
        let name = match line.size {
            Some(size) => format!("{} {} {}", line.count, size.name(), line.name),
            None => format!("{} {}", line.count, line.name),
        };
        Tile::label(format!("{name} {}", format_price(line.total())))
            .with_width(3)
            .with_severity(Severity::Secondary)
    });

    let actions = [
        Tile::button(handler(state, "open_numpad", |s| s.screen = Screen::Numpad))
            .with_label("Numpad")
            .with_icon("pi pi-calculator"),
        Tile::button(handler(state, "void_order", |s| {
            s.ask("Void this order?", &["Yes", "No"])
        }))
        .with_label("Void")
        .with_severity(Severity::Danger),
        Tile::button(handler(state, "cashout", PosState::start_totalling))
            .with_label("Cashout")
            .with_severity(Severity::Success),
    ];
    let total = Tile::label(format!("Total: {}", format_price(snapshot.total()))).with_width(3);

    container_strip([
        ContainedStripInfo::new(Rectangle::new(0, 0, 10, 2), menu),
        ContainedStripInfo::new(Rectangle::new(0, 2, 10, 1), tile_strip(counts)),
        ContainedStripInfo::new(Rectangle::new(0, 3, 10, 1), tile_strip(tabs)),
        ContainedStripInfo::new(Rectangle::new(0, 4, 1, 6), tile_strip(sizes)),
        ContainedStripInfo::new(
            Rectangle::new(1, 4, 9, 6),
            downward_strip([
                tile_strip(lines).boxed(),
                empty_strip().grow().boxed(),
                upward_strip([tile_strip(actions).boxed(), tile_strip([total]).boxed()]).boxed(),
            ]),
        ),
    ])
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::SplitToggleState;
    use core_render::{Frame, render_screen};
    use pretty_assertions::assert_eq;

    fn render(state: &Shared) -> Frame {
        let screen = lock(state).screen;
        let root = build(screen, state, &ListConfig::default());
        render_screen(&*root, Rectangle::new(0, 0, 10, 10))
    }

    fn press(state: &Shared, x: u16, y: u16) {
        let tile = render(state).tile_at(x, y).cloned();
        assert!(tile.is_some_and(|t| t.press()), "nothing pressable at ({x},{y})");
    }

    fn text_at(frame: &Frame, x: u16, y: u16) -> Option<String> {
        frame.tile_at(x, y).and_then(|t| t.text()).map(str::to_owned)
    }

    #[test]
    fn numpad_layout_and_entry() {
        let state = PosState {
            screen: Screen::Numpad,
            ..PosState::default()
        }
        .into_shared();
        let frame = render(&state);
        assert_eq!(text_at(&frame, 3, 2).as_deref(), Some("0"));
        assert_eq!(text_at(&frame, 6, 4).as_deref(), Some("Cancel"));
        assert_eq!(text_at(&frame, 6, 5).as_deref(), Some("Cancel"));
        assert_eq!(text_at(&frame, 3, 6).as_deref(), Some("7"));
        assert_eq!(text_at(&frame, 6, 7).as_deref(), Some("Enter"));
        assert_eq!(text_at(&frame, 3, 7).as_deref(), Some("BS"));

        press(&state, 4, 5); // 5
        press(&state, 5, 7); // .
        press(&state, 4, 4); // 2
        assert_eq!(text_at(&render(&state), 3, 2).as_deref(), Some("5.2"));

        press(&state, 6, 6); // Enter, lower half of the span
        let s = lock(&state);
        assert_eq!(s.numpad_submitted, Some(5.2));
        assert_eq!(s.screen, Screen::Ordering);
    }

    #[test]
    fn message_options_share_the_row() {
        let state = PosState {
            screen: Screen::Message,
            ..PosState::default()
        }
        .into_shared();
        lock(&state).add_item("Soda", 149);
        let frame = render(&state);
        assert_eq!(text_at(&frame, 6, 4).as_deref(), Some("Void this order?"));
        assert_eq!(text_at(&frame, 3, 5).as_deref(), Some("No"));
        assert_eq!(text_at(&frame, 5, 5).as_deref(), Some("Yes"));
        assert_eq!(
            frame.tile_at(5, 5).and_then(|t| t.severity()),
            Some(Severity::Primary)
        );

        press(&state, 6, 5);
        let s = lock(&state);
        assert!(s.order.is_empty());
        assert_eq!(s.screen, Screen::Ordering);
    }

    #[test]
    fn single_option_takes_full_width() {
        let state = PosState::default().into_shared();
        lock(&state).ask("Printer jammed", &["OK"]);
        let frame = render(&state);
        assert_eq!(frame.tile_at(3, 5).map(|t| t.width()), Some(4));
    }

    #[test]
    fn ordering_rows() {
        let state = PosState::default().into_shared();
        let frame = render(&state);
        assert_eq!(text_at(&frame, 0, 0).as_deref(), Some("Show Prices"));
        assert_eq!(text_at(&frame, 9, 0).as_deref(), Some("More"));
        assert_eq!(text_at(&frame, 0, 2).as_deref(), Some("1"));
        assert_eq!(text_at(&frame, 0, 3).as_deref(), Some("Lunch"));
        assert_eq!(text_at(&frame, 0, 8).as_deref(), Some("Lunch"));
        assert_eq!(text_at(&frame, 0, 9).as_deref(), Some("Senior"));
        // Actions stick to the bottom, total right above them.
        assert_eq!(text_at(&frame, 1, 9).as_deref(), Some("Numpad"));
        assert_eq!(text_at(&frame, 1, 8).as_deref(), Some("Total: $0.00"));
    }

    #[test]
    fn ordering_presses_update_state() {
        let state = PosState::default().into_shared();
        press(&state, 2, 2); // count 3
        press(&state, 0, 7); // Large
        press(&state, 3, 0); // Fries
        {
            let s = lock(&state);
            assert_eq!(s.order.len(), 1);
            assert_eq!(s.total(), 597);
        }
        let frame = render(&state);
        assert_eq!(
            text_at(&frame, 1, 4).as_deref(),
            Some("3 Large Fries $5.97")
        );
        assert_eq!(text_at(&frame, 1, 8).as_deref(), Some("Total: $5.97"));

        press(&state, 9, 0); // More
        assert_eq!(lock(&state).choice_page, 1);
        let frame = render(&state);
        assert_eq!(text_at(&frame, 0, 0).as_deref(), Some("Coffee"));

        press(&state, 0, 3);
        press(&state, 0, 3);
        assert_eq!(lock(&state).split_tab("lunch"), SplitToggleState::Bottom);

        press(&state, 2, 9); // Void
        assert_eq!(lock(&state).screen, Screen::Message);
    }

    #[test]
    fn cashout_opens_total_and_back_returns() {
        let state = PosState::default().into_shared();
        lock(&state).add_item("Pie", 149);
        press(&state, 3, 9); // Cashout
        assert_eq!(lock(&state).screen, Screen::Total);

        let frame = render(&state);
        assert_eq!(text_at(&frame, 3, 4).as_deref(), Some("Total: $1.49"));
        assert_eq!(text_at(&frame, 6, 5).as_deref(), Some("1 items"));
        assert_eq!(text_at(&frame, 9, 0).as_deref(), Some("Back"));

        press(&state, 9, 0);
        let s = lock(&state);
        assert_eq!(s.screen, Screen::Ordering);
        assert_eq!(s.order.len(), 1);
    }
}
