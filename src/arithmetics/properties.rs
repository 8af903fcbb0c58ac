//! Lookup of the physical view properties behind a resolved axis.
//!
//! A resolved [`Axis::Dragging`] maps onto the Y properties of a view and a resolved
//! [`Axis::Orthogonal`] onto the X properties. Every operation of the engine picks its
//! accessors from here instead of branching on the axis itself.

use crate::axis::Axis;
use crate::host::{PointerEvent, TabView, ViewAnimator};

/// Getter/setter pair of one view property.
pub(super) struct Property<V: ?Sized> {
    pub get: fn(&V) -> f32,
    pub set: fn(&mut V, f32),
}

/// View properties along one physical axis.
pub(super) struct ViewAxis<V: ?Sized> {
    pub position: Property<V>,
    pub translation: Property<V>,
    pub pivot: Property<V>,
    pub scale: Property<V>,
    pub rotation: Property<V>,
    /// Unscaled extent of the view.
    pub size: fn(&V) -> i32,
    /// Margin in front of the view.
    pub leading_margin: fn(&V) -> i32,
}

impl<V: TabView + ?Sized> ViewAxis<V> {
    pub fn along(resolved: Axis) -> Self {
        match resolved {
            Axis::Dragging => Self {
                position: Property {
                    get: V::y,
                    set: V::set_y,
                },
                translation: Property {
                    get: V::translation_y,
                    set: V::set_translation_y,
                },
                pivot: Property {
                    get: V::pivot_y,
                    set: V::set_pivot_y,
                },
                scale: Property {
                    get: V::scale_y,
                    set: V::set_scale_y,
                },
                rotation: Property {
                    get: V::rotation_y,
                    set: V::set_rotation_y,
                },
                size: V::height,
                leading_margin: |view| view.margins().top,
            },
            Axis::Orthogonal => Self {
                position: Property {
                    get: V::x,
                    set: V::set_x,
                },
                translation: Property {
                    get: V::translation_x,
                    set: V::set_translation_x,
                },
                pivot: Property {
                    get: V::pivot_x,
                    set: V::set_pivot_x,
                },
                scale: Property {
                    get: V::scale_x,
                    set: V::set_scale_x,
                },
                rotation: Property {
                    get: V::rotation_x,
                    set: V::set_rotation_x,
                },
                size: V::width,
                leading_margin: |view| view.margins().left,
            },
        }
    }
}

/// Animator targets along one physical axis.
pub(super) struct AnimatorAxis<A: ?Sized> {
    pub position: fn(&mut A, f32) -> &mut A,
    pub scale: fn(&mut A, f32) -> &mut A,
    pub rotation: fn(&mut A, f32) -> &mut A,
}

impl<A: ViewAnimator + ?Sized> AnimatorAxis<A> {
    pub fn along(resolved: Axis) -> Self {
        match resolved {
            Axis::Dragging => Self {
                position: A::y,
                scale: A::scale_y,
                rotation: A::rotation_y,
            },
            Axis::Orthogonal => Self {
                position: A::x,
                scale: A::scale_x,
                rotation: A::rotation_x,
            },
        }
    }
}

pub(super) fn event_position<E: PointerEvent + ?Sized>(resolved: Axis) -> fn(&E) -> f32 {
    match resolved {
        Axis::Dragging => E::y,
        Axis::Orthogonal => E::x,
    }
}
