pub mod public;
mod router;
mod template;
pub use router::router;
pub(crate) use template::templates;
