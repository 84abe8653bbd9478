//! Error kinds and the canonical code table.

use std::fmt;

use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::band::Band;
use crate::level::ErrorLevel;
use crate::registry::{self, ErrorDescriptor};
use crate::render::render;

/// Declares every error kind together with its code, band, key and template.
///
/// Each row expands into a variant of [`ErrorKind`] and one arm in each of the
/// lookup functions, so a kind cannot exist without all of its metadata.
macro_rules! define_error_kinds {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $code:literal, $band:ident, $key:literal, $template:literal;
        )*
    ) => {
        /// The kind of error that occurred.
        ///
        /// Codes and keys are permanent: a retired kind keeps its code and new
        /// kinds always get a fresh one.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter, EnumCount,
        )]
        #[non_exhaustive]
        pub enum ErrorKind {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl ErrorKind {
            /// Stable numeric code.
            pub const fn code(self) -> u32 {
                match self {
                    $( ErrorKind::$variant => $code, )*
                }
            }

            /// Dotted symbolic key, for matching independently of the code.
            pub const fn key(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $key, )*
                }
            }

            /// Message template with `{}` placeholders.
            pub const fn template(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $template, )*
                }
            }

            pub const fn band(self) -> Band {
                match self {
                    $( ErrorKind::$variant => Band::$band, )*
                }
            }
        }
    };
}

define_error_kinds! {
    // =========================================================================
    // Service: request handling
    // =========================================================================
    /// A write statement reached a read-only server or request
    ServiceReadonly = 1000, Service, "service.io.readonly",
        "The server or request is read-only and cannot accept this write statement.";
    ServiceUnsupportedHttp = 1010, Service, "service.io.http.unsupported_method",
        "Unsupported http method: {}";
    /// A recognized parameter value that is not supported yet
    ServiceNotImplemented = 1020, Service, "service.io.request.unimplemented",
        "{} {} not yet implemented";
    ServiceUnrecognizedValue = 1030, Service, "service.io.request.unrecognized_value",
        "Unknown {} value: {}";
    ServiceBadValue = 1040, Service, "service.io.request.bad_value",
        "Error processing {}";
    ServiceMissingValue = 1050, Service, "service.io.request.missing_value",
        "No {} value";
    ServiceMultipleValues = 1060, Service, "service.io.request.multiple_values",
        "Multiple values for {}.";
    ServiceTypeMismatch = 1070, Service, "service.io.request.type_mismatch",
        "{} has to be of type {}";
    /// Results contained a value that cannot be encoded as JSON
    ServiceInvalidJson = 1100, Service, "service.io.response.invalid_json",
        "Invalid JSON in results";
    ServiceClientId = 1110, Service, "service.io.request.client_id",
        "forbidden character (\\ or \") in client_context_id";
    ServiceMediaType = 1120, Service, "service.io.request.media_type",
        "Unsupported media type: {}";

    // =========================================================================
    // Admin: clustering and accounting
    // =========================================================================
    AdminConnection = 2000, Admin, "admin.clustering.connection_error",
        "Error connecting to {}";
    AdminInvalidUrl = 2010, Admin, "admin.invalid_url",
        "Invalid {} url: {}";
    AdminJsonDecoding = 2020, Admin, "admin.json_decoding_error",
        "Error in JSON decoding: {}";
    AdminJsonEncoding = 2030, Admin, "admin.json_encoding_error",
        "Error in JSON encoding: {}";
    AdminGetCluster = 2040, Admin, "admin.clustering.get_cluster_error",
        "Error retrieving cluster: {}";
    AdminAddCluster = 2050, Admin, "admin.clustering.add_cluster_error",
        "Error adding cluster: {}";
    AdminRemoveCluster = 2060, Admin, "admin.clustering.remove_cluster_error",
        "Error removing cluster: {}";
    AdminGetNode = 2070, Admin, "admin.clustering.get_node_error",
        "Error retrieving node: {}";
    /// Configuration requested for a query node that does not exist
    AdminNoSuchNode = 2080, Admin, "admin.clustering.no_such_node",
        "No such node {}";
    AdminAddNode = 2090, Admin, "admin.clustering.add_node_error",
        "Error adding node: {}";
    AdminRemoveNode = 2100, Admin, "admin.clustering.remove_node_error",
        "Error removing node: {}";
    AdminMakeMetric = 2110, Admin, "admin.accounting.metric.create",
        "Error creating metric: {}";
    AdminAuth = 2120, Admin, "admin.accounting.unauthorized",
        "Error authorizing against cluster: {}";
    AdminEndpoint = 2130, Admin, "admin.service.http_endpoint",
        "Error loading endpoint: {}";

    // =========================================================================
    // Parse and plan
    // =========================================================================
    ParseSyntax = 3000, Parse, "parse.syntax_error",
        "Syntax error: {}";
    Plan = 4000, Plan, "plan.error",
        "Plan error: {}";
    PlanNoTermName = 4010, Plan, "plan.build_select.no_term_name",
        "{} term must have a name or alias";
    PlanDuplicateAlias = 4020, Plan, "plan.build_select.duplicate_alias",
        "Duplicate {} alias {}";

    // =========================================================================
    // Datastore: authorization
    // =========================================================================
    DatastoreAuthorization = 10000, Authorization, "datastore.couchbase.insufficient_credentials",
        "Unable to authorize user: {}";

    // =========================================================================
    // Datastore: system keyspaces
    // =========================================================================
    SystemDatastore = 11000, SystemDatastore, "datastore.system.generic_error",
        "System datastore error: {}";
    SystemKeyspaceNotFound = 11002, SystemDatastore, "datastore.system.keyspace_not_found",
        "Keyspace not found: {}";
    SystemNotImplemented = 11003, SystemDatastore, "datastore.system.not_implemented",
        "System datastore: not implemented: {}";
    SystemNotSupported = 11004, SystemDatastore, "datastore.system.not_supported",
        "System datastore: not supported: {}";
    SystemIdxNotFound = 11005, SystemDatastore, "datastore.system.idx_not_found",
        "System datastore: index not found: {}";
    SystemIdxNoDrop = 11006, SystemDatastore, "datastore.system.idx_no_drop",
        "System datastore: this index cannot be dropped: {}";
    SystemStmtNotFound = 11007, SystemDatastore, "datastore.system.stmt_not_found",
        "System datastore: statement not found: {}";

    // =========================================================================
    // Datastore: couchbase
    // =========================================================================
    CbConnection = 12000, CouchbaseDatastore, "datastore.couchbase.connection_error",
        "Cannot connect: {}";
    CbUrlParse = 12001, CouchbaseDatastore, "datastore.couchbase.url_parse",
        "Cannot parse url: {}";
    CbNamespaceNotFound = 12002, CouchbaseDatastore, "datastore.couchbase.namespace_not_found",
        "Namespace not found in CB datastore: {}";
    CbKeyspaceNotFound = 12003, CouchbaseDatastore, "datastore.couchbase.keyspace_not_found",
        "Keyspace not found in CB datastore: {}";
    CbPrimaryIndexNotFound = 12004, CouchbaseDatastore, "datastore.couchbase.primary_idx_not_found",
        "Primary index not found: {}";
    CbIndexerNotImplemented = 12005, CouchbaseDatastore, "datastore.couchbase.indexer_not_implemented",
        "Indexer not implemented: {}";
    CbKeyspaceCount = 12006, CouchbaseDatastore, "datastore.couchbase.keyspace_count_error",
        "Failed to get count for keyspace: {}";
    CbNoKeysFetch = 12007, CouchbaseDatastore, "datastore.couchbase.no_keys_fetch",
        "No keys to fetch: {}";
    CbBulkGet = 12008, CouchbaseDatastore, "datastore.couchbase.bulk_get_error",
        "Error performing bulk get operation: {}";
    /// Mutation rejected, usually a CAS mismatch or concurrent modification
    CbDml = 12009, CouchbaseDatastore, "datastore.couchbase.dml_error",
        "DML error, possible causes include CAS mismatch or concurrent modification: {}";
    CbNoKeysInsert = 12010, CouchbaseDatastore, "datastore.couchbase.no_keys_insert",
        "No keys to insert: {}";
    CbDeleteFailed = 12011, CouchbaseDatastore, "datastore.couchbase.delete_failed",
        "Failed to perform delete: {}";
    CbLoadIndexes = 12012, CouchbaseDatastore, "datastore.couchbase.load_index_failed",
        "Failed to load indexes: {}";
    CbBucketTypeNotSupported = 12013, CouchbaseDatastore, "datastore.couchbase.bucket_type_not_supported",
        "This bucket type is not supported: {}";
    CbIndexState = 12014, CouchbaseDatastore, "datastore.couchbase.index_state_error",
        "Failed to get index state: {}";
    CbIndexScanTimeout = 12015, CouchbaseDatastore, "datastore.couchbase.index_scan_timeout",
        "Index scan timed out: {}";

    // =========================================================================
    // Datastore: couchbase view indexes
    // =========================================================================
    CbViewCreate = 13000, CouchbaseViewIndex, "datastore.couchbase.view.create_failed",
        "Failed to create view: {}";
    CbViewNotFound = 13001, CouchbaseViewIndex, "datastore.couchbase.view.not_found",
        "View index not found: {}";
    CbViewExists = 13003, CouchbaseViewIndex, "datastore.couchbase.view.exists",
        "View index exists: {}";
    CbViewsWithNotAllowed = 13004, CouchbaseViewIndex, "datastore.couchbase.view.with_not_allowed",
        "Views not allowed for WITH keyword: {}";
    CbViewsNotSupported = 13005, CouchbaseViewIndex, "datastore.couchbase.view.not_supported",
        "View indexes not supported: {}";
    CbViewsDropIndex = 13006, CouchbaseViewIndex, "datastore.couchbase.view.drop_index_error",
        "Failed to drop index: {}";
    CbViewsAccess = 13007, CouchbaseViewIndex, "datastore.couchbase.view.access_error",
        "Failed to access view: {}";
    CbViewIndexesLoading = 13008, CouchbaseViewIndex, "datastore.couchbase.view.indexes_loading",
        "Failed to load indexes for keyspace: {}";
    CbViewDef = 13009, CouchbaseViewIndex, "datastore.couchbase.view.def_error",
        "Unable to store the view definition, not all index nodes were reachable: {}";

    // =========================================================================
    // Datastore: file
    // =========================================================================
    FileDatastore = 15000, FileDatastore, "datastore.file.generic_file_error",
        "Error in file datastore: {}";
    FileNamespaceNotFound = 15001, FileDatastore, "datastore.file.namespace_not_found",
        "Namespace not found: {}";
    FileKeyspaceNotFound = 15002, FileDatastore, "datastore.file.keyspace_not_found",
        "Keyspace not found: {}";
    FileDuplicateNamespace = 15003, FileDatastore, "datastore.file.duplicate_namespace",
        "Duplicate namespace: {}";
    FileDuplicateKeyspace = 15004, FileDatastore, "datastore.file.duplicate_keyspace",
        "Duplicate keyspace: {}";
    FileNoKeysInsert = 15005, FileDatastore, "datastore.file.no_keys_insert",
        "No keys to insert: {}";
    FileKeyExists = 15006, FileDatastore, "datastore.file.key_exists",
        "Key exists: {}";
    FileDml = 15007, FileDatastore, "datastore.file.dml_error",
        "DML error: {}";
    FileKeyspaceNotDir = 15008, FileDatastore, "datastore.file.keyspace_not_dir",
        "Keyspace path must be a directory: {}";
    FileIdxNotFound = 15009, FileDatastore, "datastore.file.idx_not_found",
        "Index not found: {}";
    FileNotSupported = 15010, FileDatastore, "datastore.file.not_supported",
        "Operation not supported: {}";
    FilePrimaryIdxNoDrop = 15011, FileDatastore, "datastore.file.primary_idx_no_drop",
        "Primary index cannot be dropped: {}";

    // =========================================================================
    // Datastore: everything else, including the mock store
    // =========================================================================
    OtherDatastore = 16000, OtherDatastore, "datastore.other.datastore_generic_error",
        "Error in datastore: {}";
    OtherNamespaceNotFound = 16001, OtherDatastore, "datastore.other.namespace_not_found",
        "Namespace not found: {}";
    OtherKeyspaceNotFound = 16002, OtherDatastore, "datastore.other.keyspace_not_found",
        "Keyspace not found: {}";
    OtherNotImplemented = 16003, OtherDatastore, "datastore.other.not_implemented",
        "Not implemented: {}";
    OtherIdxNotFound = 16004, OtherDatastore, "datastore.other.idx_not_found",
        "Index not found: {}";
    OtherIdxNoDrop = 16005, OtherDatastore, "datastore.other.idx_no_drop",
        "Index cannot be dropped: {}";
    OtherNotSupported = 16006, OtherDatastore, "datastore.other.not_supported",
        "Not supported for this datastore: {}";
    OtherKeyNotFound = 16007, OtherDatastore, "datastore.other.key_not_found",
        "Key not found: {}";
}

impl ErrorKind {
    /// Returns the variant name as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Level the kind is raised at. Every current kind is an exception.
    pub const fn level(self) -> ErrorLevel {
        ErrorLevel::Exception
    }

    pub const fn descriptor(self) -> ErrorDescriptor {
        ErrorDescriptor {
            kind: self,
            code: self.code(),
            key: self.key(),
            template: self.template(),
            band: self.band(),
            level: self.level(),
        }
    }

    /// Render this kind's template against `args`.
    pub fn render(self, args: &[&dyn fmt::Display]) -> String {
        render(self.template(), args)
    }

    pub fn from_code(code: u32) -> Option<ErrorKind> {
        registry::lookup_code(code).map(|descriptor| descriptor.kind)
    }

    pub fn from_key(key: &str) -> Option<ErrorKind> {
        registry::lookup_key(key).map(|descriptor| descriptor.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::AdminNoSuchNode.to_string(), "AdminNoSuchNode");
        assert_eq!(ErrorKind::CbConnection.as_str(), "CbConnection");
    }

    #[test]
    fn test_fixed_metadata() {
        assert_eq!(ErrorKind::ServiceReadonly.code(), 1000);
        assert_eq!(ErrorKind::FileKeyExists.key(), "datastore.file.key_exists");
        assert_eq!(ErrorKind::AdminInvalidUrl.template(), "Invalid {} url: {}");
        assert_eq!(ErrorKind::CbViewDef.band(), Band::CouchbaseViewIndex);
    }

    #[test]
    fn test_every_kind_is_an_exception() {
        assert!(ErrorKind::iter().all(|kind| kind.level() == ErrorLevel::Exception));
    }

    #[test]
    fn test_descriptor_mirrors_kind() {
        let descriptor = ErrorKind::PlanDuplicateAlias.descriptor();
        assert_eq!(descriptor.kind, ErrorKind::PlanDuplicateAlias);
        assert_eq!(descriptor.code, 4020);
        assert_eq!(descriptor.key, "plan.build_select.duplicate_alias");
        assert_eq!(descriptor.band, Band::Plan);
    }

    #[test]
    fn test_render() {
        let message = ErrorKind::AdminInvalidUrl.render(&[&"datastore", &"http://bad"]);
        assert_eq!(message, "Invalid datastore url: http://bad");
    }

    #[test]
    fn test_lookup_round_trip() {
        assert_eq!(ErrorKind::from_code(12000), Some(ErrorKind::CbConnection));
        assert_eq!(
            ErrorKind::from_key("admin.clustering.no_such_node"),
            Some(ErrorKind::AdminNoSuchNode)
        );
        assert_eq!(ErrorKind::from_code(12), None);
        assert_eq!(ErrorKind::from_key("admin.nope"), None);
        assert_eq!(ErrorKind::iter().count(), ErrorKind::COUNT);
    }
}
