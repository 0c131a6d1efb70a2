pub mod request_config;
pub mod service;

pub use crate::domain::model::{
    ApiResponse, ItemsPayload, NormalizedItem, RequestKind, ResponseData, SlugRequest,
    UpstreamEntry,
};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
