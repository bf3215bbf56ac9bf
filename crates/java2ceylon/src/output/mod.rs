//! Output writers - emit a compilation unit as Ceylon source.

pub mod ceylon;
pub mod context;
pub mod sink;

pub use ceylon::CeylonWriter;
pub use context::{Frame, LoopTail, Narrowing, TranslationContext};
pub use sink::Sink;
