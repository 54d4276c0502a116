//! Shell-first HTML streaming.
//!
//! - `Shell` / `HeadContent` - Document wrapper around the page sections
//! - `StreamingSink` - Writes the shell, then named sections, in order
//! - `escape_html` / `escape_attr` - Escaping for text and attribute values

mod html;
mod shell;
mod sink;

pub use html::*;
pub use shell::*;
pub use sink::*;
