//! Capabilities the engine needs from its surroundings.
//!
//! The engine never owns the switcher or its views. It queries the switcher through
//! [`TabSwitcherHost`], reads and mutates views through [`TabView`] and hands animation targets
//! to a [`ViewAnimator`].

use std::rc::Rc;

/// Anything with per-side padding in pixels.
pub trait Padded {
    fn padding_left(&self) -> i32;
    fn padding_top(&self) -> i32;
    fn padding_right(&self) -> i32;
    fn padding_bottom(&self) -> i32;
}

/// State of the tab switcher the geometry is computed for.
///
/// The padding is the padding of the switcher's container.
pub trait TabSwitcherHost: Padded {
    fn is_dragging_horizontally(&self) -> bool;
    fn is_toolbar_shown(&self) -> bool;
    fn toolbar_height(&self) -> i32;
    fn is_switcher_shown(&self) -> bool;
}

/// Margins of a view inside its parent, in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(margin: i32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

/// A view whose geometry the engine reads and writes.
///
/// `x`/`y` are the visual position (layout position plus translation). Pivot, scale and
/// rotation follow the usual 2D view transform: a view is scaled and rotated around its pivot,
/// which is relative to the view's own origin.
pub trait TabView: Padded {
    fn x(&self) -> f32;
    fn set_x(&mut self, x: f32);
    fn y(&self) -> f32;
    fn set_y(&mut self, y: f32);

    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn margins(&self) -> Margins;

    fn translation_x(&self) -> f32;
    fn set_translation_x(&mut self, translation: f32);
    fn translation_y(&self) -> f32;
    fn set_translation_y(&mut self, translation: f32);

    fn pivot_x(&self) -> f32;
    fn set_pivot_x(&mut self, pivot: f32);
    fn pivot_y(&self) -> f32;
    fn set_pivot_y(&mut self, pivot: f32);

    fn scale_x(&self) -> f32;
    fn set_scale_x(&mut self, scale: f32);
    fn scale_y(&self) -> f32;
    fn set_scale_y(&mut self, scale: f32);

    /// Rotation around the horizontal axis, in degrees.
    fn rotation_x(&self) -> f32;
    fn set_rotation_x(&mut self, degrees: f32);
    /// Rotation around the vertical axis, in degrees.
    fn rotation_y(&self) -> f32;
    fn set_rotation_y(&mut self, degrees: f32);
}

/// Sink for animation targets of a single view.
///
/// The engine only decides the target values; when and how the animation runs is up to the
/// implementation.
pub trait ViewAnimator {
    fn x(&mut self, x: f32) -> &mut Self;
    fn y(&mut self, y: f32) -> &mut Self;
    fn scale_x(&mut self, scale: f32) -> &mut Self;
    fn scale_y(&mut self, scale: f32) -> &mut Self;
    fn rotation_x(&mut self, degrees: f32) -> &mut Self;
    fn rotation_y(&mut self, degrees: f32) -> &mut Self;
}

/// A pointer event with a position on screen.
pub trait PointerEvent {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

impl<T: Padded + ?Sized> Padded for &T {
    fn padding_left(&self) -> i32 {
        (**self).padding_left()
    }

    fn padding_top(&self) -> i32 {
        (**self).padding_top()
    }

    fn padding_right(&self) -> i32 {
        (**self).padding_right()
    }

    fn padding_bottom(&self) -> i32 {
        (**self).padding_bottom()
    }
}

impl<T: TabSwitcherHost + ?Sized> TabSwitcherHost for &T {
    fn is_dragging_horizontally(&self) -> bool {
        (**self).is_dragging_horizontally()
    }

    fn is_toolbar_shown(&self) -> bool {
        (**self).is_toolbar_shown()
    }

    fn toolbar_height(&self) -> i32 {
        (**self).toolbar_height()
    }

    fn is_switcher_shown(&self) -> bool {
        (**self).is_switcher_shown()
    }
}

impl<T: Padded + ?Sized> Padded for Rc<T> {
    fn padding_left(&self) -> i32 {
        (**self).padding_left()
    }

    fn padding_top(&self) -> i32 {
        (**self).padding_top()
    }

    fn padding_right(&self) -> i32 {
        (**self).padding_right()
    }

    fn padding_bottom(&self) -> i32 {
        (**self).padding_bottom()
    }
}

impl<T: TabSwitcherHost + ?Sized> TabSwitcherHost for Rc<T> {
    fn is_dragging_horizontally(&self) -> bool {
        (**self).is_dragging_horizontally()
    }

    fn is_toolbar_shown(&self) -> bool {
        (**self).is_toolbar_shown()
    }

    fn toolbar_height(&self) -> i32 {
        (**self).toolbar_height()
    }

    fn is_switcher_shown(&self) -> bool {
        (**self).is_switcher_shown()
    }
}
