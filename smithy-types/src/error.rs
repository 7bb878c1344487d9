/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors and the error-code registry used by service clients

use std::fmt;

/// Generic Error type
///
/// Every error response carries this metadata: the `code` used to select a modeled error
/// kind, a human readable `message`, and the request id assigned by the service.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// A fixed registry of the error codes a service declares.
///
/// Implementations are generated with [`error_registry!`](crate::error_registry); lookup is an
/// exact, case-sensitive comparison against the canonical code.
pub trait ErrorRegistry: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every registered kind, in declaration order.
    const ALL: &'static [Self];

    /// The canonical code of this kind.
    fn code(&self) -> &'static str;

    /// Selects the kind registered under exactly `code`.
    fn from_code(code: &str) -> Option<Self>;
}

/// The kind of a [`ServiceError`]: either a registered kind or a code the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind<K> {
    Modeled(K),
    Unhandled,
}

/// An error response from a service, classified against the service's [`ErrorRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError<K> {
    kind: ServiceErrorKind<K>,
    meta: Error,
}

impl<K: ErrorRegistry> ServiceError<K> {
    /// Classifies error metadata. A registered code is re-tagged with its canonical code; any
    /// other code (or no code at all) produces [`ServiceErrorKind::Unhandled`] with the raw
    /// metadata preserved.
    pub fn from_meta(meta: Error) -> Self {
        match meta.code().and_then(K::from_code) {
            Some(kind) => ServiceError {
                kind: ServiceErrorKind::Modeled(kind),
                meta: meta.into_builder().code(kind.code()).build(),
            },
            None => ServiceError {
                kind: ServiceErrorKind::Unhandled,
                meta,
            },
        }
    }

    pub fn kind(&self) -> &ServiceErrorKind<K> {
        &self.kind
    }

    /// The modeled kind, or `None` when the code was not registered.
    pub fn modeled(&self) -> Option<K> {
        match self.kind {
            ServiceErrorKind::Modeled(kind) => Some(kind),
            ServiceErrorKind::Unhandled => None,
        }
    }

    pub fn is(&self, kind: K) -> bool {
        self.modeled() == Some(kind)
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Unhandled)
    }

    pub fn meta(&self) -> &Error {
        &self.meta
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }
}

impl<K: ErrorRegistry> fmt::Display for ServiceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.meta.code()) {
            (ServiceErrorKind::Modeled(kind), _) => write!(f, "{}", kind.code())?,
            (ServiceErrorKind::Unhandled, Some(code)) => write!(f, "unhandled error ({})", code)?,
            (ServiceErrorKind::Unhandled, None) => write!(f, "unhandled error")?,
        }
        if let Some(message) = self.meta.message() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl<K: ErrorRegistry> std::error::Error for ServiceError<K> {}

/// Declares a service's error registry: a fieldless enum with one variant per error code,
/// implementing [`ErrorRegistry`](crate::error::ErrorRegistry).
///
/// ```rust
/// smithy_types::error_registry! {
///     /// Errors returned by the example service.
///     pub enum ExampleErrorKind {
///         NotFound => "NotFoundException",
///         Throttled => "ThrottlingException",
///     }
/// }
/// use smithy_types::error::ErrorRegistry;
/// assert_eq!(ExampleErrorKind::from_code("NotFoundException"), Some(ExampleErrorKind::NotFound));
/// assert_eq!(ExampleErrorKind::from_code("notfoundexception"), None);
/// ```
#[macro_export]
macro_rules! error_registry {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                #[doc = concat!("`", $code, "`")]
                $variant,
            )+
        }

        impl $crate::error::ErrorRegistry for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorRegistry, ServiceError, ServiceErrorKind};

    crate::error_registry! {
        enum TestKind {
            InvalidPath => "InvalidPathException",
            Conflict => "ConflictException",
        }
    }

    #[test]
    fn registered_code_is_matched_exactly() {
        let err = ServiceError::<TestKind>::from_meta(
            Error::builder()
                .code("InvalidPathException")
                .message("bad path")
                .build(),
        );
        assert_eq!(err.kind(), &ServiceErrorKind::Modeled(TestKind::InvalidPath));
        assert_eq!(err.code(), Some("InvalidPathException"));
        assert_eq!(err.message(), Some("bad path"));
        assert!(err.is(TestKind::InvalidPath));
        assert_eq!(err.to_string(), "InvalidPathException: bad path");
    }

    #[test]
    fn unknown_code_falls_back_with_raw_metadata() {
        let err = ServiceError::<TestKind>::from_meta(
            Error::builder()
                .code("SomeUnknownError")
                .message("hmm")
                .request_id("1234")
                .build(),
        );
        assert!(err.is_unhandled());
        assert_eq!(err.modeled(), None);
        assert_eq!(err.code(), Some("SomeUnknownError"));
        assert_eq!(err.message(), Some("hmm"));
        assert_eq!(err.request_id(), Some("1234"));
        assert_eq!(err.to_string(), "unhandled error (SomeUnknownError): hmm");
    }

    #[test]
    fn no_prefix_or_case_insensitive_matching() {
        for code in ["InvalidPath", "invalidpathexception", "InvalidPathExceptionX", ""] {
            assert_eq!(TestKind::from_code(code), None, "{}", code);
        }
    }

    #[test]
    fn every_kind_round_trips_through_its_code() {
        for kind in TestKind::ALL {
            assert_eq!(TestKind::from_code(kind.code()), Some(*kind));
        }
    }

    #[test]
    fn missing_code_is_unhandled() {
        let err = ServiceError::<TestKind>::from_meta(Error::builder().message("no code").build());
        assert!(err.is_unhandled());
        assert_eq!(err.to_string(), "unhandled error: no code");
    }
}
