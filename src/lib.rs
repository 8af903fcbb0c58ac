//! Orientation-independent geometry for the tabs of a tab switcher overview.
//!
//! Tabs are swiped along a *dragging axis* and laid out across an *orthogonal axis*. Depending on
//! whether the switcher is dragged vertically or horizontally these map onto different physical
//! axes, so all the layout and animation code talks in terms of [`Axis`] and lets
//! [`Arithmetics`] translate that into X/Y view properties.
//!
//! The engine is single-threaded: it reads host state and mutates views in place, and must be
//! called from the thread that owns them.

pub mod arithmetics;
pub mod axis;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;

pub use arithmetics::Arithmetics;
pub use axis::{Axis, Gravity, Orientation};
pub use constants::LayoutConstants;
pub use error::{Error, Result};
pub use geometry::{AnimationTargets, HostContext, Point, ViewGeometry};
pub use host::{Margins, Padded, PointerEvent, TabSwitcherHost, TabView, ViewAnimator};
