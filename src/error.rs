use std::sync::Arc;

/// An error that can occur in this crate.
///
/// Most errors are a result of a value being out of range for a particular
/// calendar: a year outside the calendar's supported span, a day that
/// doesn't exist in the requested month, or a day number before the
/// calendar's first representable date. The remaining errors come from era
/// lookups with the wrong era, from month arithmetic overflowing a
/// calendar's year range, and from calendar ID lookups with an unknown ID.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait, the
/// [`core::fmt::Debug`] trait and the [`core::fmt::Display`] trait, this
/// error type currently provides very limited introspection capabilities.
/// Simple predicates like [`Error::is_range`] are provided, but nothing
/// more fine grained.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Finer grained
/// error types proved difficult in the face of composition.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable while keeping its
    /// size equal to one word. Errors are only ever constructed on failure
    /// paths, so the allocation is off the happy path.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

impl Error {
    /// Returns true when this error is a result of a value being out of
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac::CalendarSystem;
    ///
    /// let err = CalendarSystem::gregorian().date(2100, 2, 29).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Range(_))
    }

    /// Returns true when this error is a result of asking a calendar about
    /// an era it does not use.
    pub fn is_unsupported_era(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::UnsupportedEra(_))
    }

    /// Returns true when this error is a result of month arithmetic moving
    /// a date outside a calendar's supported span.
    pub fn is_overflow(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Overflow(_))
    }

    /// Returns true when this error is a result of looking up a calendar by
    /// an ID that doesn't name one.
    pub fn is_unknown_id(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::UnknownId(_))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "year")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Creates a new error indicating that the era `given` is not used by
    /// the calendar being asked. The `supported` label lists the eras the
    /// calendar does use. (e.g., "CE, BCE")
    #[inline(never)]
    #[cold]
    pub(crate) fn unsupported_era(
        given: &'static str,
        supported: &'static str,
    ) -> Error {
        Error::from(ErrorKind::UnsupportedEra(UnsupportedEraError {
            given,
            supported,
        }))
    }

    /// Creates a new error indicating that the operation described by
    /// `what` left the calendar's supported span.
    #[inline(never)]
    #[cold]
    pub(crate) fn overflow(what: &'static str) -> Error {
        Error::from(ErrorKind::Overflow(OverflowError { what }))
    }

    /// Creates a new error indicating that `given` does not name any
    /// calendar system.
    #[inline(never)]
    #[cold]
    pub(crate) fn unknown_id(given: &str) -> Error {
        Error::from(ErrorKind::UnknownId(UnknownIdError {
            given: given.into(),
        }))
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner.kind, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner.kind).finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind }) }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Range(RangeError),
    UnsupportedEra(UnsupportedEraError),
    Overflow(OverflowError),
    UnknownId(UnknownIdError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Range(ref err) => err.fmt(f),
            UnsupportedEra(ref err) => err.fmt(f),
            Overflow(ref err) => err.fmt(f),
            UnknownId(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and
/// maximum allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

#[derive(Debug)]
struct UnsupportedEraError {
    given: &'static str,
    supported: &'static str,
}

impl core::fmt::Display for UnsupportedEraError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let UnsupportedEraError { given, supported } = *self;
        write!(
            f,
            "era '{given}' is not used by this calendar \
             (supported eras: {supported})",
        )
    }
}

#[derive(Debug)]
struct OverflowError {
    what: &'static str,
}

impl core::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let OverflowError { what } = *self;
        write!(f, "{what} overflowed the calendar's supported span")
    }
}

#[derive(Debug)]
struct UnknownIdError {
    given: Box<str>,
}

impl core::fmt::Display for UnknownIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "'{}' does not name a calendar system", self.given)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // This isn't an API guarantee, but if the size increases, we really
    // want to make sure we decide to do that intentionally. So this should
    // be a speed bump.
    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn range_message() {
        let err = Error::range("month", 14, 1, 12);
        assert_eq!(
            err.to_string(),
            "parameter 'month' with value 14 \
             is not in the required range of 1..=12",
        );
        assert!(err.is_range());
        assert!(!err.is_overflow());
    }
}
