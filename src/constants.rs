// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Figma API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the Figma REST API.
pub const FIGMA_API_BASE_URL: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
pub const FIGMA_TOKEN_HEADER: &str = "X-Figma-Token";

/// Environment variable holding the personal access token.
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";

// ---------------------------------------------------------------------------
// HTTP surface
// ---------------------------------------------------------------------------

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

// ---------------------------------------------------------------------------
// Documentation layout
// ---------------------------------------------------------------------------

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "design-system-docs";

pub const INDEX_FILE: &str = "index.md";
pub const SECTION_INDEX_FILE: &str = "README.md";
pub const ASSETS_DIR: &str = "assets";
pub const STYLES_DIR: &str = "styles";
pub const COMPONENTS_DIR: &str = "components";

/// Name used for a path segment or heading whose source text is blank.
pub const UNTITLED: &str = "untitled";

/// Extension of every generated page.
pub const PAGE_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
