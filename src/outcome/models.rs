/// Outcome of a wrapped computation
///
/// Exactly one side carries a payload: `data` on success, `error` on failure.
/// The other side always reads as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an Outcome may be a Failure, which should be inspected"]
pub enum Outcome<T, E = anyhow::Error> {
    /// The computation produced a value
    Success { data: T },

    /// The computation failed with the captured cause
    Failure { error: E },
}

impl<T, E> Outcome<T, E> {
    pub fn success(data: T) -> Self {
        Outcome::Success { data }
    }

    pub fn failure(error: E) -> Self {
        Outcome::Failure { error }
    }

    /// Discriminant, `true` for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Produced value, `None` on failure
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Captured cause, `None` on success
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success { data } => Ok(data),
            Outcome::Failure { error } => Err(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success { data } => Outcome::Success { data },
            Outcome::Failure { error } => Outcome::Failure { error },
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success { data } => Outcome::Success { data: f(data) },
            Outcome::Failure { error } => Outcome::Failure { error },
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success { data } => Outcome::Success { data },
            Outcome::Failure { error } => Outcome::Failure { error: f(error) },
        }
    }

    /// Extract the value, or compute a fallback from the cause
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success { data } => data,
            Outcome::Failure { error } => f(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success { data },
            Err(error) => Outcome::Failure { error },
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
