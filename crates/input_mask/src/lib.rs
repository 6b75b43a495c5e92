//! # input_mask
//!
//! Caret-accurate masking/reconciliation engine for decimal text inputs.
//!
//! The engine keeps a text field's displayed string synchronized, on every
//! keystroke, with an underlying fixed-scale decimal amount. The display
//! always re-parses to a valid amount; the caret survives insertions,
//! deletions, and group-separator shifts; locale-style grouping/decimal
//! separators, sign framing, strict overwrite editing, and min/max
//! clamping are all handled in one configuration-gated pass.
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics or widget framework
//! - Layout or hit-testing systems
//! - Platform-specific event APIs
//!
//! Hosts capture their own events, let the widget apply the edit, and hand
//! the engine an [`EditIntent`] (text after the edit, classification,
//! pre-edit selection). The engine answers by forcing the reconciled text
//! and caret back through the [`TextSurface`] trait and reporting the
//! outcome through the valid/invalid callbacks.
//!
//! ## Integration
//!
//! ```
//! use input_mask::{BufferSurface, EditIntent, EditKind, MaskedInput};
//!
//! let mut input = MaskedInput::new(BufferSurface::new(), None, None).unwrap();
//! assert_eq!(input.text(), "$0.00");
//!
//! input.handle_edit(EditIntent::new(EditKind::Insert, 1, 1, "$40.00"));
//! assert_eq!(input.value(), "40.00");
//! assert_eq!(input.surface().caret(), 2);
//! ```

mod affix;
mod caret;
mod config;
mod engine;
mod error;
mod group;
mod strict;
mod surface;
mod text;
mod validate;

pub use amount_core::{Amount, AmountError};

pub use config::{DisplayOrder, FormatterConfig, FormatterOptions};
pub use engine::MaskedInput;
pub use error::{ConfigError, InitError, ValueError};
pub use surface::{BufferSurface, EditIntent, EditKind, TextSurface};

// Re-export the pure helpers for integration layers that need to reason
// about grouped bodies and caret boundaries themselves.
pub use group::{group_body, ungroup_body};
pub use text::{clamp_to_char_boundary, prev_char_boundary};
