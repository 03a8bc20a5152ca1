//! Session core for the Cornell Notes widget
//!
//! This crate provides the widget's state lifecycle and host contract:
//! - Configuration merging (partial host params over documented defaults)
//! - Snapshot reconstruction and serialization for session resume
//! - Fullscreen/resize signaling between controller and content
//! - The reporting contract toward the host (answer/score/state/xAPI)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`config`]: Defaulted configuration with recursive patch merge
//! - [`extras`]: Session metadata (title, previous state)
//! - [`snapshot`]: The persisted `{recall, notes, summary}` record
//! - [`signal`]: Named signals and the dispatching bus
//! - [`host`]: Injected host-service interfaces (fullscreen, chrome, titles)
//! - [`content`]: The content owner holding the three editable regions
//! - [`session`]: The outward-facing session controller
//! - [`xapi`]: Reporting statement types and builders
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser; DOM and Fullscreen API live in the glue crate
//! 2. **Injected Host Services**: Host capabilities are narrow traits,
//!    so tests run against fakes instead of a real host
//! 3. **Absorb, Don't Raise**: Missing config keys, missing snapshot keys,
//!    absent containers and unsupported fullscreen all fall back to
//!    documented defaults; no accessor returns an error

pub mod config;
pub mod content;
pub mod extras;
pub mod host;
pub mod session;
pub mod signal;
pub mod snapshot;
pub mod xapi;

// Re-export core types for convenience
pub use config::{Behaviour, Config, ConfigPatch, L10n};
pub use content::NotesContent;
pub use extras::{Extras, ExtrasPatch, Metadata};
pub use host::{FullscreenHandle, HostBindings, TitleSanitizer, WidgetChrome};
pub use session::SessionController;
pub use signal::{Signal, SignalBus};
pub use snapshot::{NotesSnapshot, RegionKind};
pub use xapi::{XapiEvent, XapiStatement};

/// Default widget title, used when extras carry no metadata title.
pub const DEFAULT_TITLE: &str = "Cornell Notes";
