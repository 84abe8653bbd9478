//! Service API errors (1000-1999): a query request cannot be fulfilled.

use std::fmt::Display;

use crate::{BoxError, Error, ErrorKind};

impl Error {
    /// A write statement was sent to a read-only server or request.
    #[track_caller]
    pub fn service_readonly() -> Self {
        Self::new(ErrorKind::ServiceReadonly, &[])
    }

    #[track_caller]
    pub fn service_unsupported_http(method: impl Display) -> Self {
        Self::new(ErrorKind::ServiceUnsupportedHttp, &[&method])
    }

    /// e.g. `service_not_implemented("compression", "ZIP")`
    #[track_caller]
    pub fn service_not_implemented(feature: impl Display, value: impl Display) -> Self {
        Self::new(ErrorKind::ServiceNotImplemented, &[&feature, &value])
    }

    /// e.g. `service_unrecognized_value("scan_consistency", "foo")`
    #[track_caller]
    pub fn service_unrecognized_value(feature: impl Display, value: impl Display) -> Self {
        Self::new(ErrorKind::ServiceUnrecognizedValue, &[&feature, &value])
    }

    #[track_caller]
    pub fn service_bad_value(cause: impl Into<BoxError>, feature: impl Display) -> Self {
        Self::new(ErrorKind::ServiceBadValue, &[&feature]).set_source(cause)
    }

    #[track_caller]
    pub fn service_missing_value(feature: impl Display) -> Self {
        Self::new(ErrorKind::ServiceMissingValue, &[&feature])
    }

    #[track_caller]
    pub fn service_multiple_values(feature: impl Display) -> Self {
        Self::new(ErrorKind::ServiceMultipleValues, &[&feature])
    }

    /// e.g. `service_type_mismatch("pretty", "boolean")`
    #[track_caller]
    pub fn service_type_mismatch(feature: impl Display, expected: impl Display) -> Self {
        Self::new(ErrorKind::ServiceTypeMismatch, &[&feature, &expected])
    }

    /// Results contained a value that could not be encoded.
    #[track_caller]
    pub fn service_invalid_json(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::ServiceInvalidJson, &[]).set_source(cause)
    }

    #[track_caller]
    pub fn service_client_id() -> Self {
        Self::new(ErrorKind::ServiceClientId, &[])
    }

    #[track_caller]
    pub fn service_media_type(media_type: impl Display) -> Self {
        Self::new(ErrorKind::ServiceMediaType, &[&media_type])
    }
}
