use core::fmt;

/// The error type returned by the fallible constructors and allocation paths
/// of [`RobinTable`][crate::RobinTable].
///
/// This only ever represents allocation failure; a lookup miss is not an
/// error and is represented with `None` instead.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub(crate) const fn layout() -> Self {
        Self::new(ErrorKind::InvalidLayout)
    }

    #[inline]
    pub(crate) const fn alloc_failed(requested: usize) -> Self {
        Self::new(ErrorKind::AllocFailed { requested })
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// The bucket layout for `T` combined with the requested capacity
    /// overflows what the platform's allocator can describe.
    InvalidLayout,
    /// The allocator returned a null pointer for the requested size.
    AllocFailed { requested: usize },
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidLayout => {
                write!(f, "requested bucket array layout is invalid for this platform")
            }
            ErrorKind::AllocFailed { requested } => {
                write!(f, "failed to allocate {requested} bytes for the bucket array")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
