//! The strip provider abstraction.
//!
//! A [`StripProvider`] is a layout recipe: given the space its parent can
//! offer, it resolves into a [`ProvidedStrip`], a fixed-size grid region that
//! answers point queries. Every operator in this crate both consumes providers
//! (its children) and is one, so any operator can nest inside any other.
//!
//! Invariants:
//! * `ProvidedStrip::width() <= max_width` and `height() <= max_height` for the
//!   bounds it was resolved against (sizes are never negative).
//! * `get_tile` never panics. Coordinates outside the region answer
//!   [`Tile::empty`]; renderers probe arbitrary cells during resizes.
//! * Resolution is pure with respect to its output: resolving the same
//!   provider twice against the same bounds answers the same tiles.

use core_model::{Rectangle, Tile};
use std::fmt;
use std::sync::Arc;

/// Point query backing a resolved strip.
///
/// `width`/`height` are the size the parent is rendering this region at,
/// which may exceed the strip's own size when a stacking parent hands it
/// extra space. Implementations must answer `Tile::empty()` for any
/// coordinate they have no content for, including negative ones.
pub trait TileSource: Send + Sync {
    fn tile(&self, x: i32, y: i32, width: i32, height: i32) -> Tile;
}

struct EmptySource;

impl TileSource for EmptySource {
    fn tile(&self, _x: i32, _y: i32, _width: i32, _height: i32) -> Tile {
        Tile::empty()
    }
}

/// A resolved layout region, ready to be queried cell by cell.
#[derive(Clone)]
pub struct ProvidedStrip {
    width: i32,
    height: i32,
    grow: bool,
    source: Arc<dyn TileSource>,
}

impl fmt::Debug for ProvidedStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvidedStrip")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("grow", &self.grow)
            .finish_non_exhaustive()
    }
}

impl ProvidedStrip {
    pub fn new(width: i32, height: i32, source: impl TileSource + 'static) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            grow: false,
            source: Arc::new(source),
        }
    }

    /// A region of the given size holding nothing but empty tiles.
    pub fn empty(width: i32, height: i32) -> Self {
        Self::new(width, height, EmptySource)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a stacking parent should hand this strip a share of its spare
    /// space.
    #[inline]
    pub fn grows(&self) -> bool {
        self.grow
    }

    pub fn with_grow(mut self) -> Self {
        self.grow = true;
        self
    }

    /// The region as a rectangle at the origin, or `None` when it is empty.
    pub fn bounds(&self) -> Option<Rectangle> {
        Rectangle::try_new(0, 0, self.width, self.height).ok()
    }

    /// Tile at `(x, y)` when this strip is rendered at `width x height`.
    #[inline]
    pub fn get_tile(&self, x: i32, y: i32, width: i32, height: i32) -> Tile {
        self.source.tile(x, y, width, height)
    }
}

/// A layout recipe, resolved once per layout pass.
pub trait StripProvider: Send + Sync {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip;
}

pub type BoxedStrip = Box<dyn StripProvider>;

impl<P: StripProvider + ?Sized> StripProvider for Box<P> {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        (**self).resolve(max_width, max_height)
    }
}

impl<P: StripProvider + ?Sized> StripProvider for Arc<P> {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        (**self).resolve(max_width, max_height)
    }
}

/// Provider backed by a closure, for one-off layouts that need no operator.
pub struct FnStrip<F>(F);

/// Wrap a `(max_width, max_height) -> ProvidedStrip` closure as a provider.
pub fn from_fn<F>(f: F) -> FnStrip<F>
where
    F: Fn(i32, i32) -> ProvidedStrip + Send + Sync,
{
    FnStrip(f)
}

impl<F> StripProvider for FnStrip<F>
where
    F: Fn(i32, i32) -> ProvidedStrip + Send + Sync,
{
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        (self.0)(max_width, max_height)
    }
}

/// Combinators available on every sized provider.
pub trait StripProviderExt: StripProvider + Sized + 'static {
    fn boxed(self) -> BoxedStrip {
        Box::new(self)
    }

    fn grow(self) -> crate::Grow<Self> {
        crate::grow(self)
    }

    fn constrain_width(self, limit: i32) -> crate::ConstrainWidth<Self> {
        crate::constrain_width(limit, self)
    }

    fn constrain_height(self, limit: i32) -> crate::ConstrainHeight<Self> {
        crate::constrain_height(limit, self)
    }
}

impl<P: StripProvider + Sized + 'static> StripProviderExt for P {}
