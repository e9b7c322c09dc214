//! Leaf content descriptors placed on the grid.
//!
//! A `Tile` never knows where it sits; the packing operator assigns positions.
//! Tiles are immutable values: every `with_*` method consumes the tile and
//! returns an updated copy, so a tile shared between two layouts can never be
//! changed underneath one of them.
//!
//! Press handlers are opaque [`OnPress`] handles. Nothing in the layout engine
//! invokes them; only a renderer or input layer reacting to a real press does.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Visual emphasis of a button or label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Help,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Help => "help",
            Severity::Info => "info",
        }
    }
}

/// Which half of a split toggle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitToggleState {
    #[default]
    Untoggled,
    Top,
    Bottom,
}

impl SplitToggleState {
    /// Next state for a press: untoggled selects the top half, then presses
    /// alternate between the two halves.
    pub fn cycle(self) -> Self {
        match self {
            SplitToggleState::Untoggled | SplitToggleState::Bottom => SplitToggleState::Top,
            SplitToggleState::Top => SplitToggleState::Bottom,
        }
    }
}

/// Shared press callback. Receives the tile that was pressed.
///
/// Two handles compare equal only when they wrap the same closure allocation.
#[derive(Clone)]
pub struct OnPress(Arc<dyn Fn(&Tile) + Send + Sync>);

impl OnPress {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Tile) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Handler that ignores presses.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn press(&self, tile: &Tile) {
        (self.0)(tile)
    }
}

impl fmt::Debug for OnPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnPress(..)")
    }
}

impl PartialEq for OnPress {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for OnPress {}

/// Plain pressable button. Label and icon may be used together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: Option<String>,
    pub icon: Option<String>,
    /// Price badge in minor currency units (cents).
    pub price: Option<i64>,
    pub on_press: OnPress,
}

/// Button with a latched on/off state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub state: bool,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub price: Option<i64>,
    pub on_press: OnPress,
}

/// Toggle split into a top and bottom half, at most one of which is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitToggle {
    pub state: SplitToggleState,
    pub top_label: String,
    pub bottom_label: String,
    pub top_price: Option<i64>,
    pub bottom_price: Option<i64>,
    pub on_press: OnPress,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Label {
        text: String,
    },
    Button(Button),
    Toggle(Toggle),
    SplitToggle(SplitToggle),
}

/// A single grid tile: its content plus the attributes shared by every kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    classes: BTreeSet<String>,
    width: u16,
    height: u16,
    severity: Option<Severity>,
}

impl Default for Tile {
    fn default() -> Self {
        Self::from_kind(TileKind::Empty)
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::from_kind(kind)
    }
}

impl Tile {
    fn from_kind(kind: TileKind) -> Self {
        Self {
            kind,
            classes: BTreeSet::new(),
            width: 1,
            height: 1,
            severity: None,
        }
    }

    pub fn empty() -> Self {
        Self::from_kind(TileKind::Empty)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::from_kind(TileKind::Label { text: text.into() })
    }

    /// Button without label or icon; add them with [`Tile::with_label`] /
    /// [`Tile::with_icon`].
    pub fn button(on_press: OnPress) -> Self {
        Self::from_kind(TileKind::Button(Button {
            label: None,
            icon: None,
            price: None,
            on_press,
        }))
    }

    pub fn toggle(state: bool, on_press: OnPress) -> Self {
        Self::from_kind(TileKind::Toggle(Toggle {
            state,
            label: None,
            icon: None,
            price: None,
            on_press,
        }))
    }

    pub fn split_toggle(
        state: SplitToggleState,
        on_press: OnPress,
        top_label: impl Into<String>,
        bottom_label: impl Into<String>,
    ) -> Self {
        Self::from_kind(TileKind::SplitToggle(SplitToggle {
            state,
            top_label: top_label.into(),
            bottom_label: bottom_label.into(),
            top_price: None,
            bottom_price: None,
            on_press,
        }))
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Horizontal span in grid cells (always >= 1).
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Vertical span in grid cells (always >= 1).
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, TileKind::Empty)
    }

    pub fn is_label(&self) -> bool {
        matches!(self.kind, TileKind::Label { .. })
    }

    pub fn is_button(&self) -> bool {
        matches!(self.kind, TileKind::Button(_))
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, TileKind::Toggle(_))
    }

    pub fn is_split_toggle(&self) -> bool {
        matches!(self.kind, TileKind::SplitToggle(_))
    }

    /// Primary text of the tile, if it has one. Split toggles report their
    /// top label.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TileKind::Empty => None,
            TileKind::Label { text } => Some(text),
            TileKind::Button(b) => b.label.as_deref(),
            TileKind::Toggle(t) => t.label.as_deref(),
            TileKind::SplitToggle(s) => Some(&s.top_label),
        }
    }

    pub fn on_press(&self) -> Option<&OnPress> {
        match &self.kind {
            TileKind::Button(b) => Some(&b.on_press),
            TileKind::Toggle(t) => Some(&t.on_press),
            TileKind::SplitToggle(s) => Some(&s.on_press),
            TileKind::Empty | TileKind::Label { .. } => None,
        }
    }

    /// Invoke the press handler, if any. Returns whether one ran.
    pub fn press(&self) -> bool {
        match self.on_press() {
            Some(handler) => {
                handler.press(self);
                true
            }
            None => false,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Set both spans. Zero is raised to one.
    pub fn with_span(self, width: u16, height: u16) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height.max(1);
        self
    }

    /// Set the label on buttons and toggles; other kinds are returned unchanged.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        match &mut self.kind {
            TileKind::Button(b) => b.label = Some(label.into()),
            TileKind::Toggle(t) => t.label = Some(label.into()),
            _ => {}
        }
        self
    }

    /// Set the icon on buttons and toggles; other kinds are returned unchanged.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        match &mut self.kind {
            TileKind::Button(b) => b.icon = Some(icon.into()),
            TileKind::Toggle(t) => t.icon = Some(icon.into()),
            _ => {}
        }
        self
    }

    /// Set the price badge on buttons and toggles; other kinds are returned
    /// unchanged.
    pub fn with_price(mut self, cents: i64) -> Self {
        match &mut self.kind {
            TileKind::Button(b) => b.price = Some(cents),
            TileKind::Toggle(t) => t.price = Some(cents),
            _ => {}
        }
        self
    }

    /// Set per-half prices on a split toggle; other kinds are returned unchanged.
    pub fn with_split_prices(mut self, top: Option<i64>, bottom: Option<i64>) -> Self {
        if let TileKind::SplitToggle(s) = &mut self.kind {
            s.top_price = top;
            s.bottom_price = bottom;
        }
        self
    }
}
