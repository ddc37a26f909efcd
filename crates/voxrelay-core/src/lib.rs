#![allow(clippy::must_use_candidate)]

//! Types shared by the relay stages and the HTTP front door

mod error;
mod timing;
mod upstream;

pub use error::{ErrorBody, HttpError};
pub use timing::{Timed, timed};
pub use upstream::upstream_error_message;
