//! Position, size, pivot and rotation of the tabs of a tab switcher.
//!
//! ## Module Structure
//!
//! ```text
//! arithmetics/
//! ├── mod.rs        - Arithmetics struct, axis resolution, shared offsets
//! ├── properties.rs - resolved axis to view/animator property lookup
//! ├── position.rs   - position get/set/animate, padding
//! ├── transform.rs  - scale, size, rotation
//! └── pivot.rs      - pivots and pivot compensation
//! ```
//!
//! All operations take a logical [`Axis`]. Each one queries the host orientation exactly once,
//! resolves the axis against it and picks the physical properties from [`properties`].

mod pivot;
mod position;
mod properties;
mod transform;


use tracing::debug;

use crate::axis::{Axis, Orientation};
use crate::constants::LayoutConstants;
use crate::host::{Padded as _, TabSwitcherHost};

/// Calculates the geometry of a tab switcher's children.
///
/// The host is queried on every call and may change between calls. Views and the host are
/// owned elsewhere and must only be touched from the thread that owns them; the engine does no
/// synchronization of its own.
#[derive(Debug)]
pub struct Arithmetics<H: TabSwitcherHost> {
    /// The tab switcher the arithmetics are calculated for.
    host: H,
    constants: LayoutConstants,
}

impl<H: TabSwitcherHost> Arithmetics<H> {
    pub fn new(host: H, constants: LayoutConstants) -> Self {
        debug!(?constants, "creating tab switcher arithmetics");
        Self { host, constants }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    /// Returns the current drag orientation of the host.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_dragging_horizontally(self.host.is_dragging_horizontally())
    }

    /// Resolves a logical axis against the current orientation.
    ///
    /// Operations that need the orientation for more than the axis use
    /// [`Self::resolve_with_orientation`] so that they observe it only once.
    pub fn resolve_axis(&self, axis: Axis) -> Axis {
        self.resolve_with_orientation(axis).0
    }

    fn resolve_with_orientation(&self, axis: Axis) -> (Axis, Orientation) {
        let orientation = self.orientation();
        (axis.resolve(orientation), orientation)
    }

    // =========================================================================
    // Offsets shared between getters and setters
    // =========================================================================

    /// Offset of the tabs below the toolbar while the switcher is shown.
    fn toolbar_offset(&self) -> f32 {
        if self.host.is_toolbar_shown() && self.host.is_switcher_shown() {
            (self.host.toolbar_height() - self.constants.tab_inset()) as f32
        } else {
            0.
        }
    }

    /// Offset that centers the stacked tabs when dragging horizontally.
    fn stack_offset(&self, orientation: Orientation) -> f32 {
        if orientation.is_horizontal() {
            self.constants.stack_extent() / 2.
        } else {
            0.
        }
    }

    /// Offset of the container's horizontal padding on the orthogonal axis.
    fn container_padding_offset(&self) -> f32 {
        self.host.padding_left() as f32 / 2. - self.host.padding_right() as f32 / 2.
    }
}
