use super::properties::{event_position, AnimatorAxis, ViewAxis};
use super::Arithmetics;
use crate::axis::{Axis, Gravity, Orientation};
use crate::error::{Error, Result};
use crate::host::{Padded, PointerEvent, TabSwitcherHost, TabView, ViewAnimator};

impl<H: TabSwitcherHost> Arithmetics<H> {
    // =========================================================================
    // Position
    // =========================================================================

    /// Returns the position of a pointer event on an axis.
    pub fn event_position<E: PointerEvent + ?Sized>(&self, axis: Axis, event: &E) -> f32 {
        let resolved = self.resolve_axis(axis);
        event_position::<E>(resolved)(event)
    }

    /// Returns the position of a view on an axis.
    ///
    /// On the dragging axis the position is relative to the area below the toolbar and the
    /// container's start padding. On the orthogonal axis it is relative to the view's margin and
    /// the middle of the container's padding, and when dragging horizontally it also accounts
    /// for half of the stacked tabs.
    pub fn position<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        let view_axis = ViewAxis::<V>::along(resolved);
        (view_axis.position.get)(view) - self.position_offset(resolved, orientation, view, true)
    }

    /// Sets the position of a view on an axis.
    ///
    /// This is the inverse of [`Self::position`].
    pub fn set_position<V: TabView + ?Sized>(&self, axis: Axis, view: &mut V, position: f32) {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        let view_axis = ViewAxis::<V>::along(resolved);
        let offset = self.position_offset(resolved, orientation, view, true);
        (view_axis.position.set)(view, position + offset);
    }

    /// Animates the position of a view on an axis.
    ///
    /// With `include_padding` the target is the same as [`Self::set_position`] would set.
    /// Without it the container's padding is left out of the target.
    pub fn animate_position<A, V>(
        &self,
        axis: Axis,
        animator: &mut A,
        view: &V,
        position: f32,
        include_padding: bool,
    ) where
        A: ViewAnimator + ?Sized,
        V: TabView + ?Sized,
    {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        let animator_axis = AnimatorAxis::<A>::along(resolved);
        let offset = self.position_offset(resolved, orientation, view, include_padding);
        (animator_axis.position)(animator, position + offset);
    }

    /// Returns the difference between the physical and the logical position of a view.
    fn position_offset<V: TabView + ?Sized>(
        &self,
        resolved: Axis,
        orientation: Orientation,
        view: &V,
        include_padding: bool,
    ) -> f32 {
        match resolved {
            Axis::Dragging => {
                let padding = if include_padding {
                    start_padding(resolved, &self.host) as f32
                } else {
                    0.
                };
                self.toolbar_offset() + padding
            }
            Axis::Orthogonal => {
                let margin = (ViewAxis::<V>::along(resolved).leading_margin)(view) as f32;
                let padding = if include_padding {
                    self.container_padding_offset()
                } else {
                    0.
                };
                margin + padding - self.stack_offset(orientation)
            }
        }
    }

    // =========================================================================
    // Padding
    // =========================================================================

    /// Returns the padding of a view on an axis.
    ///
    /// The gravity must be [`Gravity::Start`] or [`Gravity::End`]. The view can be a tab or the
    /// switcher's container.
    pub fn padding<P: Padded + ?Sized>(
        &self,
        axis: Axis,
        gravity: Gravity,
        view: &P,
    ) -> Result<i32> {
        let resolved = self.resolve_axis(axis);
        match gravity {
            Gravity::Start => Ok(start_padding(resolved, view)),
            Gravity::End => Ok(end_padding(resolved, view)),
            _ => Err(Error::invalid_argument(format!(
                "invalid gravity: {gravity}, expected start or end"
            ))),
        }
    }
}

fn start_padding<P: Padded + ?Sized>(resolved: Axis, view: &P) -> i32 {
    match resolved {
        Axis::Dragging => view.padding_top(),
        Axis::Orthogonal => view.padding_left(),
    }
}

fn end_padding<P: Padded + ?Sized>(resolved: Axis, view: &P) -> i32 {
    match resolved {
        Axis::Dragging => view.padding_bottom(),
        Axis::Orthogonal => view.padding_right(),
    }
}
