//! The seam between the I/O-free core and whatever performs HTTP.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one request and returns the complete response.
///
/// Implementations must read the whole body and release the underlying
/// connection before returning, on success and on error. Non-2xx statuses are
/// data, not errors: only failures to obtain a response map to
/// `ApiError::Transport`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
