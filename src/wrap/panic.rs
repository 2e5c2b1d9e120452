use std::any::Any;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Payload of a caught panic, kept exactly as it was raised
///
/// The payload sits behind a mutex so the type is `Sync` and can travel
/// inside an `anyhow::Error`. The text, when there is any, is read once up front.
pub struct Panic {
    payload: Mutex<Box<dyn Any + Send + 'static>>,
    message: Option<String>,
}

impl Panic {
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            Some(s.to_string())
        } else {
            payload.downcast_ref::<String>().cloned()
        };

        Self {
            payload: Mutex::new(payload),
            message,
        }
    }

    /// Give the payload back, e.g. to resume unwinding with it
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the payload as a `V`, or get the `Panic` back unchanged
    pub fn downcast<V: Any>(self) -> Result<Box<V>, Self> {
        let message = self.message;
        let payload = self
            .payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        payload.downcast::<V>().map_err(|payload| Self {
            payload: Mutex::new(payload),
            message,
        })
    }

    pub fn is<V: Any>(&self) -> bool {
        self.with_payload(|payload| payload.is::<V>())
    }

    /// Borrow the payload for the duration of `f`
    pub fn with_payload<R>(&self, f: impl FnOnce(&(dyn Any + Send + 'static)) -> R) -> R {
        let guard = self.payload.lock().unwrap_or_else(PoisonError::into_inner);
        f(&**guard)
    }

    /// Text of the panic when it was raised with a string message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("unknown panic"))
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Panic")
            .field(&self.message().unwrap_or("unknown panic"))
            .finish()
    }
}

impl std::error::Error for Panic {}

impl serde::Serialize for Panic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
