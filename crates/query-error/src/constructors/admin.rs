//! Admin errors (2000-2999), raised by the clustering and accounting APIs.

use std::fmt::Display;

use super::cause_constructors;
use crate::{BoxError, Error, ErrorKind};

cause_constructors! {
    /// Connecting to a third-party component failed.
    AdminConnection,
    AdminGetCluster,
    AdminAddCluster,
    AdminRemoveCluster,
    AdminGetNode,
    AdminAddNode,
    AdminRemoveNode,
    AdminMakeMetric,
    AdminAuth,
    AdminEndpoint,
}

impl Error {
    /// e.g. `admin_invalid_url("datastore", "htttp://hostname:8091")`
    #[track_caller]
    pub fn admin_invalid_url(component: impl Display, url: impl Display) -> Self {
        Self::new(ErrorKind::AdminInvalidUrl, &[&component, &url])
    }

    #[track_caller]
    pub fn admin_json_decoding(cause: impl Into<BoxError>) -> Self {
        Self::with_cause_text(ErrorKind::AdminJsonDecoding, cause.into())
    }

    #[track_caller]
    pub fn admin_json_encoding(cause: impl Into<BoxError>) -> Self {
        Self::with_cause_text(ErrorKind::AdminJsonEncoding, cause.into())
    }

    /// Configuration was requested for a query node that does not exist.
    #[track_caller]
    pub fn admin_no_such_node(node: impl Display) -> Self {
        Self::new(ErrorKind::AdminNoSuchNode, &[&node])
    }

    #[track_caller]
    fn with_cause_text(kind: ErrorKind, cause: BoxError) -> Self {
        let text = cause.to_string();
        Self::new(kind, &[&text]).set_source(cause)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Band, Error};

    #[test]
    fn test_no_such_node() {
        let err = Error::admin_no_such_node("node-7");
        assert_eq!(err.code(), 2080);
        assert_eq!(err.key(), "admin.clustering.no_such_node");
        assert_eq!(err.message(), "No such node node-7");
        assert!(err.source_ref().is_none());
    }

    #[test]
    fn test_invalid_url_renders_both_arguments() {
        let err = Error::admin_invalid_url("datastore", "http://bad");
        assert_eq!(err.code(), 2010);
        assert_eq!(err.message(), "Invalid datastore url: http://bad");
    }

    #[test]
    fn test_json_errors_render_cause_text() {
        let err = Error::admin_json_decoding("unexpected end of input");
        assert_eq!(err.key(), "admin.json_decoding_error");
        assert_eq!(err.message(), "Error in JSON decoding: unexpected end of input");
        assert!(err.source_ref().is_some());

        let err = Error::admin_json_encoding("unsupported type");
        assert_eq!(err.code(), 2030);
        assert_eq!(err.message(), "Error in JSON encoding: unsupported type");
    }

    #[test]
    fn test_generated_constructors() {
        let err = Error::admin_connection("refused", "datastore");
        assert_eq!(err.code(), 2000);
        assert_eq!(err.message(), "Error connecting to datastore");
        assert_eq!(err.to_string(), "Error connecting to datastore - cause: refused");

        let err = Error::admin_make_metric("exists", "request_rate");
        assert_eq!(err.key(), "admin.accounting.metric.create");
        assert_eq!(err.message(), "Error creating metric: request_rate");

        let codes: Vec<u32> = [
            Error::admin_get_cluster("x", "c"),
            Error::admin_add_cluster("x", "c"),
            Error::admin_remove_cluster("x", "c"),
            Error::admin_get_node("x", "n"),
            Error::admin_add_node("x", "n"),
            Error::admin_remove_node("x", "n"),
            Error::admin_auth("x", "c"),
            Error::admin_endpoint("x", "e"),
        ]
        .iter()
        .inspect(|err| assert_eq!(err.band(), Band::Admin))
        .map(Error::code)
        .collect();
        assert_eq!(codes, vec![2040, 2050, 2060, 2070, 2090, 2100, 2120, 2130]);
    }
}
