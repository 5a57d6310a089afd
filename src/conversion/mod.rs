/*!
 * Org to MDX conversion.
 *
 * This module contains the core conversion functionality. It is split into
 * several submodules:
 *
 * - `core`: Document converter that assembles the final output
 * - `translator`: Line-by-line translation with block mode tracking
 * - `inline`: Ordered inline markup rewrite rules
 * - `frontmatter`: Frontmatter block built from `#+` metadata lines
 * - `images`: Batch-wide image registry and import generation
 */

// Re-export main types for easier usage
pub use self::core::{convert, DocumentConverter, DEFAULT_SOURCE_ROOT};
pub use self::frontmatter::Frontmatter;
pub use self::images::{ImageRecord, ImageRegistry, DEFAULT_ASSET_PREFIX};
pub use self::inline::{rewrite_inline, InlineRule, INLINE_RULES};
pub use self::translator::{BlockMode, DocumentContext, LineTranslator};

// Submodules
pub mod core;
pub mod frontmatter;
pub mod images;
pub mod inline;
pub mod translator;
