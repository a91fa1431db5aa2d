// Readiness assessment: catalog → collector → scorer.
// Catalog, collector and scorer are synchronous and I/O-free; sessions and handlers are the async shell.

pub mod catalog;
pub mod collector;
pub mod error;
pub mod guidance;
pub mod handlers;
pub mod responses;
pub mod scoring;
pub mod sessions;
