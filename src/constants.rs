// DOM contract for the page markup. Each `[data-panel-nav]` root hosts one
// independent navigator.

// Navigator structure
pub const NAV_ROOT_SELECTOR: &str = "[data-panel-nav]";
pub const TRACK_SELECTOR: &str = ".panel-track"; // horizontally scrolling viewport
pub const PANEL_SELECTOR: &str = ".panel";
pub const DOT_SELECTOR: &str = ".panel-dot";
pub const PREV_SELECTOR: &str = ".panel-prev";
pub const NEXT_SELECTOR: &str = ".panel-next";

// Vertical page sections that fade in once scrolled into view
pub const SECTION_SELECTOR: &str = ".section";

// State classes toggled by the adapters; styling lives in the page CSS
pub const ACTIVE_CLASS: &str = "active";
pub const ENTERED_CLASS: &str = "entered";
pub const VISIBLE_CLASS: &str = "visible";

// `data-nav-duration-ms="600"` etc. on the navigator root
pub const CONFIG_ATTR_PREFIX: &str = "data-nav-";
