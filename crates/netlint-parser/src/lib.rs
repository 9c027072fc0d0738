// netlint-parser: lifts raw device CLI text into the canonical ConfigModel.
//
// The Detector fingerprints the vendor dialect, the Registry dispatches to
// the matching DeviceParser, and each vendor parser produces a
// vendor-neutral model. NX-OS and EOS compose on top of the shared IOS
// line grammar rather than reimplementing it.

pub mod arista;
pub mod cisco;
pub mod detector;
pub mod error;
pub mod juniper;
pub mod registry;

// ── Primary re-exports ──────────────────────────────────────────────
pub use arista::EosParser;
pub use cisco::{IosParser, Lexer, NxosParser, Token, TokenKind};
pub use detector::Detector;
pub use error::ParseError;
pub use juniper::JunosParser;
pub use registry::{builtin_registry, parse, DeviceParser, Registry};
