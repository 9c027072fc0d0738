//! Parsers for the Cisco IOS family. NX-OS shares the IOS line grammar
//! and layers its platform-specific directives on top.

mod ios;
mod lexer;
mod nxos;

pub use ios::IosParser;
pub use lexer::{Lexer, Token, TokenKind};
pub use nxos::NxosParser;
