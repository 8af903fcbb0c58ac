use tracing::trace;

use super::properties::ViewAxis;
use super::Arithmetics;
use crate::axis::{Axis, Orientation};
use crate::host::{TabSwitcherHost, TabView};

impl<H: TabSwitcherHost> Arithmetics<H> {
    /// Returns the pivot a view normally has on an axis.
    ///
    /// The pivot is centered across the direction the tabs are stacked in and sits at the start
    /// along it.
    pub fn default_pivot<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        let (resolved, orientation) = self.resolve_with_orientation(axis);
        self.default_pivot_for(resolved, orientation, view)
    }

    fn default_pivot_for<V: TabView + ?Sized>(
        &self,
        resolved: Axis,
        orientation: Orientation,
        view: &V,
    ) -> f32 {
        match resolved {
            Axis::Dragging => 0.,
            Axis::Orthogonal => self.scaled_size(resolved, orientation, view, false) / 2.,
        }
    }

    /// Returns the pivot of a view on an axis while it is being closed.
    ///
    /// Closing tabs collapse toward a fixed anchor on the dragging axis.
    pub fn pivot_when_closing<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        match axis {
            Axis::Dragging => self.constants.max_tab_spacing(),
            Axis::Orthogonal => {
                let (resolved, orientation) = self.resolve_with_orientation(axis);
                self.default_pivot_for(resolved, orientation, view)
            }
        }
    }

    /// Returns the pivot of a view on an axis when overshooting at the start.
    pub fn pivot_on_overshoot_start<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        self.size(axis, view) / 2.
    }

    /// Returns the pivot of a view on an axis when overshooting at the end.
    pub fn pivot_on_overshoot_end<V: TabView + ?Sized>(&self, axis: Axis, view: &V) -> f32 {
        match axis {
            Axis::Dragging => self.constants.max_tab_spacing(),
            Axis::Orthogonal => self.size(axis, view) / 2.,
        }
    }

    /// Sets the pivot of a view on an axis without moving it on screen.
    ///
    /// `pivot` is relative to the tab including its margin (and, on the dragging axis, its title
    /// container). Scaling around a different pivot shifts the view, so the translation is
    /// compensated by the difference between the old and the new pivot.
    pub fn set_pivot<V: TabView + ?Sized>(&self, axis: Axis, view: &mut V, pivot: f32) {
        let resolved = self.resolve_axis(axis);
        let view_axis = ViewAxis::<V>::along(resolved);

        let mut origin = (view_axis.leading_margin)(view) as f32;
        if resolved == Axis::Dragging {
            origin += self.constants.tab_title_container_height() as f32;
        }

        let new_pivot = pivot - origin;
        let old_pivot = (view_axis.pivot.get)(view);
        let scale = (view_axis.scale.get)(view);
        let compensation = (old_pivot - new_pivot) * (1. - scale);
        trace!(?resolved, old_pivot, new_pivot, compensation, "setting pivot");

        let translation = (view_axis.translation.get)(view);
        (view_axis.translation.set)(view, translation + compensation);
        (view_axis.pivot.set)(view, new_pivot);
    }
}
