//! Request extractors that report rejections as [`common::AppError`].

mod json;
mod params;

pub use json::JsonBody;
pub use params::{PathParam, QueryParams};
