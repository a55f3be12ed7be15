//! Constants used throughout the triage core crate.

use triage_types::Language;

/// Default REST listen address when none is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Language used for new conversations that do not ask for one.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Upper bound on a single message's length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2_000;
