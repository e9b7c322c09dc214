//! Application state the demo screens are built from and press handlers
//! mutate.

use clap::ValueEnum;
use core_model::SplitToggleState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type Shared = Arc<Mutex<PosState>>;

/// Lock shared state; a poisoned lock still hands out the data since every
/// mutation here leaves it consistent.
pub fn lock(state: &Shared) -> MutexGuard<'_, PosState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Screen {
    #[default]
    Ordering,
    Numpad,
    Message,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    XSmall,
    Small,
    Medium,
    Large,
    Senior,
}

impl Size {
    pub const ALL: [Size; 5] = [
        Size::XSmall,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::Senior,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Size::XSmall => "X Small",
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Senior => "Senior",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Size::XSmall => "pi pi-angle-double-down",
            Size::Small => "pi pi-angle-down",
            Size::Medium => "pi pi-angle-right",
            Size::Large => "pi pi-angle-up",
            Size::Senior => "pi pi-angle-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub count: u8,
    pub size: Option<Size>,
    pub cents: i64,
}

impl OrderLine {
    pub fn total(&self) -> i64 {
        self.cents * i64::from(self.count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosState {
    pub screen: Screen,
    pub numpad_value: String,
    pub numpad_submitted: Option<f64>,
    pub message_text: String,
    pub message_options: Vec<String>,
    pub message_choice: Option<String>,
    pub choice_page: usize,
    pub count_selection: u8,
    pub size_selection: Option<Size>,
    pub selected_tab: Option<String>,
    pub show_prices: bool,
    pub order: Vec<OrderLine>,
}

impl Default for PosState {
    fn default() -> Self {
        Self {
            screen: Screen::Ordering,
            numpad_value: "0".to_string(),
            numpad_submitted: None,
            message_text: "Void this order?".to_string(),
            message_options: vec!["Yes".to_string(), "No".to_string()],
            message_choice: None,
            choice_page: 0,
            count_selection: 1,
            size_selection: None,
            selected_tab: None,
            show_prices: true,
            order: Vec::new(),
        }
    }
}

impl PosState {
    pub fn into_shared(self) -> Shared {
        Arc::new(Mutex::new(self))
    }

    /// Append a digit, dropping a leading zero unless it precedes the point.
    pub fn add_digit(&mut self, digit: u8) {
        let mut value = std::mem::take(&mut self.numpad_value);
        value.push(char::from(b'0' + digit.min(9)));
        if value.starts_with('0') && value.as_bytes().get(1) != Some(&b'.') {
            value.remove(0);
        }
        self.numpad_value = value;
    }

    /// Add the decimal point, moving it if there already is one.
    pub fn add_decimal(&mut self) {
        self.numpad_value = format!("{}.", self.numpad_value.replace('.', ""));
    }

    pub fn backspace(&mut self) {
        self.numpad_value.pop();
        if self.numpad_value.is_empty() {
            self.numpad_value.push('0');
        }
    }

    pub fn submit_numpad(&mut self) {
        self.numpad_submitted = self.numpad_value.parse().ok();
        self.numpad_value = "0".to_string();
        self.screen = Screen::Ordering;
    }

    pub fn cancel(&mut self) {
        self.screen = Screen::Ordering;
    }

    pub fn start_totalling(&mut self) {
        self.screen = Screen::Total;
    }

    pub fn ask(&mut self, text: impl Into<String>, options: &[&str]) {
        self.message_text = text.into();
        self.message_options = options.iter().map(|o| o.to_string()).collect();
        self.message_choice = None;
        self.screen = Screen::Message;
    }

    pub fn answer(&mut self, choice: &str) {
        if choice == "Yes" {
            self.order.clear();
        }
        self.message_choice = Some(choice.to_string());
        self.screen = Screen::Ordering;
    }

    pub fn next_choice_page(&mut self) {
        self.choice_page = self.choice_page.wrapping_add(1);
    }

    /// Select a count, or fall back to 1 when it is already selected.
    pub fn toggle_count(&mut self, count: u8) {
        self.count_selection = if self.count_selection == count { 1 } else { count };
    }

    pub fn toggle_size(&mut self, size: Size) {
        self.size_selection = if self.size_selection == Some(size) {
            None
        } else {
            Some(size)
        };
    }

    pub fn select_tab(&mut self, key: &str) {
        self.selected_tab = Some(key.to_string());
    }

    pub fn tab_selected(&self, key: &str) -> bool {
        self.selected_tab.as_deref() == Some(key)
    }

    /// State of the split tab `base`: `{base}0` is the top half, `{base}1`
    /// the bottom.
    pub fn split_tab(&self, base: &str) -> SplitToggleState {
        match self.selected_tab.as_deref().and_then(|t| t.strip_prefix(base)) {
            Some("0") => SplitToggleState::Top,
            Some("1") => SplitToggleState::Bottom,
            _ => SplitToggleState::Untoggled,
        }
    }

    pub fn press_split_tab(&mut self, base: &str) {
        let half = match self.split_tab(base).cycle() {
            SplitToggleState::Bottom => 1,
            _ => 0,
        };
        self.selected_tab = Some(format!("{base}{half}"));
    }

    /// Add an item using the pending count and size, then reset both.
    pub fn add_item(&mut self, name: &str, cents: i64) {
        self.order.push(OrderLine {
            name: name.to_string(),
            count: self.count_selection,
            size: self.size_selection,
            cents,
        });
        self.count_selection = 1;
        self.size_selection = None;
    }

    pub fn total(&self) -> i64 {
        self.order.iter().map(OrderLine::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numpad_editing() {
        let mut s = PosState::default();
        s.add_digit(0);
        assert_eq!(s.numpad_value, "0");
        s.add_digit(4);
        s.add_digit(2);
        assert_eq!(s.numpad_value, "42");
        s.add_decimal();
        s.add_digit(5);
        assert_eq!(s.numpad_value, "42.5");
        s.add_decimal();
        assert_eq!(s.numpad_value, "425.");
        s.backspace();
        s.backspace();
        s.backspace();
        s.backspace();
        assert_eq!(s.numpad_value, "0");
    }

    #[test]
    fn leading_zero_kept_before_point() {
        let mut s = PosState::default();
        s.add_decimal();
        assert_eq!(s.numpad_value, "0.");
        s.add_digit(7);
        assert_eq!(s.numpad_value, "0.7");
    }

    #[test]
    fn submit_parses_and_resets() {
        let mut s = PosState {
            screen: Screen::Numpad,
            numpad_value: "12.5".into(),
            ..PosState::default()
        };
        s.submit_numpad();
        assert_eq!(s.numpad_submitted, Some(12.5));
        assert_eq!(s.numpad_value, "0");
        assert_eq!(s.screen, Screen::Ordering);
    }

    #[test]
    fn split_tab_alternates_halves() {
        let mut s = PosState::default();
        assert_eq!(s.split_tab("lunch"), SplitToggleState::Untoggled);
        s.press_split_tab("lunch");
        assert_eq!(s.split_tab("lunch"), SplitToggleState::Top);
        s.press_split_tab("lunch");
        assert_eq!(s.split_tab("lunch"), SplitToggleState::Bottom);
        s.press_split_tab("lunch");
        assert_eq!(s.split_tab("lunch"), SplitToggleState::Top);
        s.select_tab("drinks");
        assert_eq!(s.split_tab("lunch"), SplitToggleState::Untoggled);
        assert!(s.tab_selected("drinks"));
    }

    #[test]
    fn count_and_size_apply_to_next_item() {
        let mut s = PosState::default();
        s.toggle_count(3);
        s.toggle_size(Size::Large);
        s.add_item("Fries", 199);
        assert_eq!(s.order[0].count, 3);
        assert_eq!(s.order[0].size, Some(Size::Large));
        assert_eq!(s.total(), 597);
        assert_eq!((s.count_selection, s.size_selection), (1, None));

        s.toggle_count(2);
        s.toggle_count(2);
        assert_eq!(s.count_selection, 1);
    }

    #[test]
    fn answering_yes_voids_order() {
        let mut s = PosState::default();
        s.add_item("Soda", 149);
        s.ask("Void this order?", &["Yes", "No"]);
        assert_eq!(s.screen, Screen::Message);
        s.answer("No");
        assert_eq!(s.order.len(), 1);
        s.answer("Yes");
        assert!(s.order.is_empty());
        assert_eq!(s.message_choice.as_deref(), Some("Yes"));
    }
}
