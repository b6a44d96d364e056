pub mod client;
pub mod photo;

pub use client::{DEFAULT_BASE_URL, FetchError, MarsApiClient, PhotoSource};
pub use photo::MarsPhoto;
