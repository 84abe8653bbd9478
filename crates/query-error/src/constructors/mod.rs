//! One constructor per error kind, grouped by subsystem.

/// Generates `Error::<kind in snake case>(cause, msg)` for kinds whose template
/// takes a single free-text detail and which always wrap an underlying error.
macro_rules! cause_constructors {
    ($( $(#[$meta:meta])* $variant:ident ),* $(,)?) => {
        impl crate::Error {
            $(
                paste::paste! {
                    $(#[$meta])*
                    #[track_caller]
                    pub fn [<$variant:snake>](
                        cause: impl Into<crate::BoxError>,
                        msg: impl std::fmt::Display,
                    ) -> Self {
                        crate::Error::new(crate::ErrorKind::$variant, &[&msg]).set_source(cause)
                    }
                }
            )*
        }
    };
}

pub(crate) use cause_constructors;

mod admin;
mod datastore;
mod query;
mod service;
