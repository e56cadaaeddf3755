
/// Public origin. Structured data always names it, whatever the build profile.
pub const SITE_URL: &str = "https://www.clifepharma.com";

pub const SITE_NAME: &str = "C Life Pharmaceuticals";
pub const SITE_TITLE: &str = "C Life Pharmaceuticals - A Vision For Healthier Lives";

/// Past this scroll depth the floating "back to top" button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Horizontal line (px from viewport top) a section must cross to be active.
pub const ACTIVE_LINE: f64 = 100.0;

/// Clearance for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: f64 = 80.0;

pub const HEADER_COMPACT_THRESHOLD: f64 = 50.0;

/// Fraction of a section that must intersect before it animates in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub const CONTACT_RECIPIENT: &str = "hr@clifepharmaceuticals.com";
