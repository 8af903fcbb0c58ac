use tabswitcher_config::{layout, Layout};

use crate::error::{Error, Result};

/// Dimensions the arithmetics are computed with.
///
/// Loaded once when an [`Arithmetics`](crate::Arithmetics) is created and never changed after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstants {
    /// Height of a tab's title container in pixels.
    tab_title_container_height: i32,
    /// Inset of tabs below the toolbar in pixels.
    tab_inset: i32,
    /// Number of tabs rendered as a compressed stack.
    stacked_tab_count: u32,
    /// Space between two stacked tabs in pixels.
    stacked_tab_spacing: f32,
    /// Maximum space between two neighboring tabs in pixels.
    max_tab_spacing: f32,
}

impl LayoutConstants {
    pub fn new(
        tab_title_container_height: i32,
        tab_inset: i32,
        stacked_tab_count: u32,
        stacked_tab_spacing: f32,
        max_tab_spacing: f32,
    ) -> Result<Self> {
        ensure_non_negative("tab title container height", tab_title_container_height)?;
        ensure_non_negative("tab inset", tab_inset)?;
        ensure_spacing("stacked tab spacing", stacked_tab_spacing)?;
        ensure_spacing("max tab spacing", max_tab_spacing)?;

        Ok(Self {
            tab_title_container_height,
            tab_inset,
            stacked_tab_count,
            stacked_tab_spacing,
            max_tab_spacing,
        })
    }

    pub fn tab_title_container_height(&self) -> i32 {
        self.tab_title_container_height
    }

    pub fn tab_inset(&self) -> i32 {
        self.tab_inset
    }

    pub fn stacked_tab_count(&self) -> u32 {
        self.stacked_tab_count
    }

    pub fn stacked_tab_spacing(&self) -> f32 {
        self.stacked_tab_spacing
    }

    pub fn max_tab_spacing(&self) -> f32 {
        self.max_tab_spacing
    }

    /// Returns the extent taken up by the stacked tabs.
    pub fn stack_extent(&self) -> f32 {
        self.stacked_tab_count as f32 * self.stacked_tab_spacing
    }
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            tab_title_container_height: layout::DEFAULT_TAB_TITLE_CONTAINER_HEIGHT,
            tab_inset: layout::DEFAULT_TAB_INSET,
            stacked_tab_count: layout::DEFAULT_STACKED_TAB_COUNT as u32,
            stacked_tab_spacing: layout::DEFAULT_STACKED_TAB_SPACING as f32,
            max_tab_spacing: layout::DEFAULT_MAX_TAB_SPACING as f32,
        }
    }
}

impl TryFrom<&Layout> for LayoutConstants {
    type Error = Error;

    fn try_from(layout: &Layout) -> Result<Self> {
        let stacked_tab_count = u32::try_from(layout.stacked_tab_count).map_err(|_| {
            Error::invalid_argument(format!(
                "stacked tab count must not be negative, got {}",
                layout.stacked_tab_count
            ))
        })?;

        Self::new(
            layout.tab_title_container_height,
            layout.tab_inset,
            stacked_tab_count,
            layout.stacked_tab_spacing as f32,
            layout.max_tab_spacing as f32,
        )
    }
}

fn ensure_non_negative(name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(Error::invalid_argument(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

fn ensure_spacing(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0. {
        return Err(Error::invalid_argument(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn default_matches_config_defaults() {
        let from_config = LayoutConstants::try_from(&Layout::default()).unwrap();
        assert_eq!(LayoutConstants::default(), from_config);
    }

    #[test]
    fn from_config() {
        let layout = Layout {
            tab_title_container_height: 56,
            tab_inset: 10,
            stacked_tab_count: 4,
            stacked_tab_spacing: 6,
            max_tab_spacing: 300,
        };
        let constants = LayoutConstants::try_from(&layout).unwrap();
        assert_eq!(constants.tab_title_container_height(), 56);
        assert_eq!(constants.tab_inset(), 10);
        assert_eq!(constants.stacked_tab_count(), 4);
        assert_eq!(constants.stacked_tab_spacing(), 6.);
        assert_eq!(constants.max_tab_spacing(), 300.);
        assert_eq!(constants.stack_extent(), 24.);
    }

    #[test]
    fn reject_negative_count() {
        let layout = Layout {
            stacked_tab_count: -1,
            ..Layout::default()
        };
        let err = LayoutConstants::try_from(&layout).unwrap_err();
        assert_snapshot!(err.to_string(), @"invalid argument: stacked tab count must not be negative, got -1");
    }

    #[test]
    fn reject_negative_inset() {
        let err = LayoutConstants::new(48, -8, 3, 4., 256.).unwrap_err();
        assert_snapshot!(err.to_string(), @"invalid argument: tab inset must not be negative, got -8");
    }

    #[test]
    fn reject_non_finite_spacing() {
        assert!(LayoutConstants::new(48, 8, 3, f32::NAN, 256.).is_err());
        assert!(LayoutConstants::new(48, 8, 3, 4., f32::INFINITY).is_err());
        assert!(LayoutConstants::new(48, 8, 3, -4., 256.).is_err());
    }
}
