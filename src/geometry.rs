//! Plain-data implementations of the host traits.
//!
//! Hosts with their own view system implement the traits in [`crate::host`] directly. These
//! types cover everything else: headless layout, snapshots and tests.

use crate::axis::Orientation;
use crate::host::{Margins, Padded, PointerEvent, TabSwitcherHost, TabView, ViewAnimator};

/// Geometry of a single tab view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGeometry {
    /// Layout position of the left edge inside the parent.
    pub left: f32,
    /// Layout position of the top edge inside the parent.
    pub top: f32,
    pub width: i32,
    pub height: i32,
    pub margins: Margins,
    pub padding: Margins,
    pub translation_x: f32,
    pub translation_y: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl ViewGeometry {
    pub fn new(left: f32, top: f32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            margins: Margins::default(),
            padding: Margins::default(),
            translation_x: 0.,
            translation_y: 0.,
            pivot_x: 0.,
            pivot_y: 0.,
            scale_x: 1.,
            scale_y: 1.,
            rotation_x: 0.,
            rotation_y: 0.,
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }

    /// Returns where the view's left edge ends up on screen once the transform is applied.
    pub fn visual_left(&self) -> f32 {
        self.x() + self.pivot_x * (1. - self.scale_x)
    }

    /// Returns where the view's top edge ends up on screen once the transform is applied.
    pub fn visual_top(&self) -> f32 {
        self.y() + self.pivot_y * (1. - self.scale_y)
    }
}

impl Padded for ViewGeometry {
    fn padding_left(&self) -> i32 {
        self.padding.left
    }

    fn padding_top(&self) -> i32 {
        self.padding.top
    }

    fn padding_right(&self) -> i32 {
        self.padding.right
    }

    fn padding_bottom(&self) -> i32 {
        self.padding.bottom
    }
}

impl TabView for ViewGeometry {
    fn x(&self) -> f32 {
        self.left + self.translation_x
    }

    fn set_x(&mut self, x: f32) {
        self.translation_x = x - self.left;
    }

    fn y(&self) -> f32 {
        self.top + self.translation_y
    }

    fn set_y(&mut self, y: f32) {
        self.translation_y = y - self.top;
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn translation_x(&self) -> f32 {
        self.translation_x
    }

    fn set_translation_x(&mut self, translation: f32) {
        self.translation_x = translation;
    }

    fn translation_y(&self) -> f32 {
        self.translation_y
    }

    fn set_translation_y(&mut self, translation: f32) {
        self.translation_y = translation;
    }

    fn pivot_x(&self) -> f32 {
        self.pivot_x
    }

    fn set_pivot_x(&mut self, pivot: f32) {
        self.pivot_x = pivot;
    }

    fn pivot_y(&self) -> f32 {
        self.pivot_y
    }

    fn set_pivot_y(&mut self, pivot: f32) {
        self.pivot_y = pivot;
    }

    fn scale_x(&self) -> f32 {
        self.scale_x
    }

    fn set_scale_x(&mut self, scale: f32) {
        self.scale_x = scale;
    }

    fn scale_y(&self) -> f32 {
        self.scale_y
    }

    fn set_scale_y(&mut self, scale: f32) {
        self.scale_y = scale;
    }

    fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    fn set_rotation_x(&mut self, degrees: f32) {
        self.rotation_x = degrees;
    }

    fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    fn set_rotation_y(&mut self, degrees: f32) {
        self.rotation_y = degrees;
    }
}

/// Snapshot of the tab switcher state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HostContext {
    pub orientation: Orientation,
    pub toolbar_shown: bool,
    pub toolbar_height: i32,
    pub switcher_shown: bool,
    /// Padding of the switcher's container.
    pub padding: Margins,
}

impl HostContext {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn with_toolbar(mut self, height: i32) -> Self {
        self.toolbar_shown = true;
        self.toolbar_height = height;
        self
    }

    pub fn with_switcher_shown(mut self, shown: bool) -> Self {
        self.switcher_shown = shown;
        self
    }

    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }
}

impl Padded for HostContext {
    fn padding_left(&self) -> i32 {
        self.padding.left
    }

    fn padding_top(&self) -> i32 {
        self.padding.top
    }

    fn padding_right(&self) -> i32 {
        self.padding.right
    }

    fn padding_bottom(&self) -> i32 {
        self.padding.bottom
    }
}

impl TabSwitcherHost for HostContext {
    fn is_dragging_horizontally(&self) -> bool {
        self.orientation.is_horizontal()
    }

    fn is_toolbar_shown(&self) -> bool {
        self.toolbar_shown
    }

    fn toolbar_height(&self) -> i32 {
        self.toolbar_height
    }

    fn is_switcher_shown(&self) -> bool {
        self.switcher_shown
    }
}

/// Animator that records the last target set for every property.
///
/// Properties that were never targeted stay `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationTargets {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub rotation_x: Option<f32>,
    pub rotation_y: Option<f32>,
}

impl AnimationTargets {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the recorded targets to a view, as if the animation had finished.
    pub fn finish<V: TabView + ?Sized>(&self, view: &mut V) {
        if let Some(x) = self.x {
            view.set_x(x);
        }
        if let Some(y) = self.y {
            view.set_y(y);
        }
        if let Some(scale) = self.scale_x {
            view.set_scale_x(scale);
        }
        if let Some(scale) = self.scale_y {
            view.set_scale_y(scale);
        }
        if let Some(degrees) = self.rotation_x {
            view.set_rotation_x(degrees);
        }
        if let Some(degrees) = self.rotation_y {
            view.set_rotation_y(degrees);
        }
    }
}

impl ViewAnimator for AnimationTargets {
    fn x(&mut self, x: f32) -> &mut Self {
        self.x = Some(x);
        self
    }

    fn y(&mut self, y: f32) -> &mut Self {
        self.y = Some(y);
        self
    }

    fn scale_x(&mut self, scale: f32) -> &mut Self {
        self.scale_x = Some(scale);
        self
    }

    fn scale_y(&mut self, scale: f32) -> &mut Self {
        self.scale_y = Some(scale);
        self
    }

    fn rotation_x(&mut self, degrees: f32) -> &mut Self {
        self.rotation_x = Some(degrees);
        self
    }

    fn rotation_y(&mut self, degrees: f32) -> &mut Self {
        self.rotation_y = Some(degrees);
        self
    }
}

/// Position of a pointer event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl PointerEvent for Point {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}
