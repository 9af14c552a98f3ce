//! Tab content
//!
//! - `page`: `TabPage`, one mounted screen per opened tab

pub mod page;

pub use page::TabPage;
