use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};

use log::error;

use super::error::CapabilityError;

/// Runs a call into the stamina capability, converting a panic into
/// [`CapabilityError::Panicked`]. Failures are logged at error severity
/// before being handed back, so callers only pick their fail-open value.
pub fn guarded_call<T, F>(operation: &'static str, call: F) -> Result<T, CapabilityError>
where
    F: FnOnce() -> Result<T, CapabilityError>,
{
    let result = match catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => Err(CapabilityError::Panicked(panic_detail(payload.as_ref()))),
    };

    if let Err(err) = &result {
        error!("Stamina capability call `{}` failed: {}", operation, err);
    }

    result
}

pub(crate) fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
