/// Height of a tab's title container in pixels.
pub const DEFAULT_TAB_TITLE_CONTAINER_HEIGHT: i32 = 48;
/// Inset of tabs below the toolbar in pixels.
pub const DEFAULT_TAB_INSET: i32 = 8;
/// Number of tabs rendered as a compressed stack.
pub const DEFAULT_STACKED_TAB_COUNT: i32 = 3;
/// Space between two stacked tabs in pixels.
pub const DEFAULT_STACKED_TAB_SPACING: i32 = 4;
/// Maximum space between two neighboring tabs in pixels.
pub const DEFAULT_MAX_TAB_SPACING: i32 = 256;

/// Layout constants of the tab switcher.
///
/// Values are in integer pixels, the same way they would come out of a resource file. Range
/// checks happen when they are turned into the engine's constants.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    #[knuffel(child, unwrap(argument), default = DEFAULT_TAB_TITLE_CONTAINER_HEIGHT)]
    pub tab_title_container_height: i32,
    #[knuffel(child, unwrap(argument), default = DEFAULT_TAB_INSET)]
    pub tab_inset: i32,
    #[knuffel(child, unwrap(argument), default = DEFAULT_STACKED_TAB_COUNT)]
    pub stacked_tab_count: i32,
    #[knuffel(child, unwrap(argument), default = DEFAULT_STACKED_TAB_SPACING)]
    pub stacked_tab_spacing: i32,
    #[knuffel(child, unwrap(argument), default = DEFAULT_MAX_TAB_SPACING)]
    pub max_tab_spacing: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tab_title_container_height: DEFAULT_TAB_TITLE_CONTAINER_HEIGHT,
            tab_inset: DEFAULT_TAB_INSET,
            stacked_tab_count: DEFAULT_STACKED_TAB_COUNT,
            stacked_tab_spacing: DEFAULT_STACKED_TAB_SPACING,
            max_tab_spacing: DEFAULT_MAX_TAB_SPACING,
        }
    }
}
