//! Decoded response wrapper.
//!
//! [`ResourceResponse<T>`] pairs a decoded value with the [`ApiResponse`]
//! envelope it came from and implements `Deref<Target = T>`:
//!
//! ```rust,ignore
//! let groups = client.pipeline_groups().list(&ctx, "").await?;
//!
//! // Vec methods via Deref
//! for group in groups.iter() {
//!     println!("{}: {} pipelines", group.name, group.pipelines.len());
//! }
//!
//! // Envelope access
//! println!("status {}", groups.response().status);
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{ApiResponse, ClientError};

/// Result type returned by dispatches and resource operations.
pub type ApiResult<T> = Result<ResourceResponse<T>, ClientError>;

/// A decoded value together with its response envelope.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    response: ApiResponse,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, response: ApiResponse) -> Self {
        Self { data, response }
    }

    /// Consumes the response and returns the decoded value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the value and envelope.
    #[must_use]
    pub fn into_parts(self) -> (T, ApiResponse) {
        (self.data, self.response)
    }

    /// Returns a reference to the decoded value.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the response envelope.
    #[must_use]
    pub const fn response(&self) -> &ApiResponse {
        &self.response
    }

    /// Maps the decoded value, keeping the envelope.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
