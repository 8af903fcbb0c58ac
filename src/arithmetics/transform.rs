use tracing::trace;

use super::properties::{AnimatorAxis, ViewAxis};
use super::Arithmetics;
use crate::axis::{Axis, Orientation};
use crate::host::{Padded as _, TabSwitcherHost, TabView, ViewAnimator};

impl<H: TabSwitcherHost> Arithmetics<H> {
    // =========================================================================
    // Scale
    // =========================================================================

    /// Returns the scale a tab needs to fit next to its margins.
    ///
    /// The view is shrunk by its horizontal margins and, if `include_padding` is set, by the
    /// container's horizontal padding. When dragging horizontally the stacked tabs take up room
    /// as well.
    ///
    /// A view without width has a scale of 1.
    pub fn scale<V: TabView + ?Sized>(&self, view: &V, include_padding: bool) -> f32 {
        self.scale_for(self.orientation(), view, include_padding)
    }

    fn scale_for<V: TabView + ?Sized>(
        &self,
        orientation: Orientation,
        view: &V,
        include_padding: bool,
    ) -> f32 {
        let width = view.width();
        if width <= 0 {
            trace!(width, "view has no width, not scaling");
            return 1.;
        }

        let width = width as f32;
        let margins = view.margins();
        let mut target_width = width + margins.left as f32 + margins.right as f32;

        if include_padding {
            target_width -= (self.host.padding_left() + self.host.padding_right()) as f32;
        }

        if orientation.is_horizontal() {
            target_width -= self.constants.stack_extent();
        }

        target_width / width
    }

    /// Sets the scale of a view on an axis.
    pub fn set_scale<V: TabView + ?Sized>(&self, axis: Axis, view: &mut V, scale: f32) {
        let resolved = self.resolve_axis(axis);
        (ViewAxis::<V>::along(resolved).scale.set)(view, scale);
    }

    /// Animates the scale of a view on an axis.
    pub fn animate_scale<A: ViewAnimator + ?Sized>(
        &self,
        axis: Axis,
        animator: &mut A,
        scale: f32,
    ) {
        let resolved = self.resolve_axis(axis);
        (AnimatorAxis::<A>::along(resolved).scale)(animator, scale);
    }

    // =========================================================================
    // Size
    // =========================================================================

    /// Returns the scaled size of a view on an axis, without the container's padding.
    pub fn size<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        self.size_with_padding(axis, view, false)
    }

    /// Returns the scaled size of a view on an axis.
    pub fn size_with_padding<V: TabView + ?Sized>(
        &self,
        axis: Axis,
        view: &V,
        include_padding: bool,
    ) -> f32 {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        self.scaled_size(resolved, orientation, view, include_padding)
    }

    pub(super) fn scaled_size<V: TabView + ?Sized>(
        &self,
        resolved: Axis,
        orientation: Orientation,
        view: &V,
        include_padding: bool,
    ) -> f32 {
        let size = (ViewAxis::<V>::along(resolved).size)(view) as f32;
        size * self.scale_for(orientation, view, include_padding)
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Returns the rotation of a view on an axis, in degrees.
    ///
    /// Unlike the setters this does not flip the sign when dragging horizontally.
    pub fn rotation<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        let resolved = self.resolve_axis(axis);
        (ViewAxis::<V>::along(resolved).rotation.get)(view)
    }

    /// Sets the rotation of a view on an axis, in degrees.
    pub fn set_rotation<V: TabView + ?Sized>(&self, axis: Axis, view: &mut V, angle: f32) {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        (ViewAxis::<V>::along(resolved).rotation.set)(view, oriented_angle(orientation, angle));
    }

    /// Animates the rotation of a view on an axis, in degrees.
    pub fn animate_rotation<A: ViewAnimator + ?Sized>(
        &self,
        axis: Axis,
        animator: &mut A,
        angle: f32,
    ) {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        (AnimatorAxis::<A>::along(resolved).rotation)(animator, oriented_angle(orientation, angle));
    }
}

/// Mirrors the rotation direction along with the physical axes.
fn oriented_angle(orientation: Orientation, angle: f32) -> f32 {
    if orientation.is_horizontal() {
        -angle
    } else {
        angle
    }
}
