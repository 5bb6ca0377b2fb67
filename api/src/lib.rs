// content records and the fetchers that load them
//
// every fetch_* function swallows upstream failures and returns an empty
// collection or a fixed fallback string, so pages never see an error

pub mod about;
pub mod blog;
pub mod client;
pub mod fetch;
pub mod project;
pub mod resume;
pub mod rich_text;
pub mod source;
pub mod text;

#[cfg(test)]
mod testing;

pub use client::{BackendClient, CmsClient};
pub use source::{CmsSource, RowSource};
