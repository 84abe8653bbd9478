//! Datastore errors (10000 and up), one sub-band per backend.
//!
//! Every datastore constructor takes the underlying cause and a free-text detail.

use super::cause_constructors;

// Authorization
cause_constructors! {
    /// The credentials supplied do not grant access to the keyspace.
    DatastoreAuthorization,
}

// System keyspaces
cause_constructors! {
    SystemDatastore,
    SystemKeyspaceNotFound,
    SystemNotImplemented,
    SystemNotSupported,
    SystemIdxNotFound,
    SystemIdxNoDrop,
    SystemStmtNotFound,
}

// Couchbase
cause_constructors! {
    /// The couchbase cluster could not be reached.
    CbConnection,
    CbUrlParse,
    CbNamespaceNotFound,
    CbKeyspaceNotFound,
    CbPrimaryIndexNotFound,
    CbIndexerNotImplemented,
    CbKeyspaceCount,
    CbNoKeysFetch,
    CbBulkGet,
    CbDml,
    CbNoKeysInsert,
    CbDeleteFailed,
    CbLoadIndexes,
    CbBucketTypeNotSupported,
    CbIndexState,
    CbIndexScanTimeout,
}

// Couchbase view indexes
cause_constructors! {
    CbViewCreate,
    CbViewNotFound,
    CbViewExists,
    CbViewsWithNotAllowed,
    CbViewsNotSupported,
    CbViewsDropIndex,
    CbViewsAccess,
    CbViewIndexesLoading,
    CbViewDef,
}

// File
cause_constructors! {
    FileDatastore,
    FileNamespaceNotFound,
    FileKeyspaceNotFound,
    FileDuplicateNamespace,
    FileDuplicateKeyspace,
    FileNoKeysInsert,
    /// Insert of a key that is already present.
    FileKeyExists,
    FileDml,
    FileKeyspaceNotDir,
    FileIdxNotFound,
    FileNotSupported,
    FilePrimaryIdxNoDrop,
}

// Everything else, including the mock store
cause_constructors! {
    OtherDatastore,
    OtherNamespaceNotFound,
    OtherKeyspaceNotFound,
    OtherNotImplemented,
    OtherIdxNotFound,
    OtherIdxNoDrop,
    OtherNotSupported,
    OtherKeyNotFound,
}
