//! Process-wide descriptor table.
//!
//! Built once on first use and never mutated afterwards, so lookups from any
//! thread need no synchronization beyond the initial `OnceLock`.

use std::collections::HashMap;
use std::sync::OnceLock;

use strum::IntoEnumIterator;

use crate::band::Band;
use crate::kind::ErrorKind;
use crate::level::ErrorLevel;

/// Everything the table knows about one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub code: u32,
    pub key: &'static str,
    pub template: &'static str,
    pub band: Band,
    pub level: ErrorLevel,
}

struct Registry {
    descriptors: Vec<ErrorDescriptor>,
    by_code: HashMap<u32, usize>,
    by_key: HashMap<&'static str, usize>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn get_registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let mut descriptors: Vec<ErrorDescriptor> =
            ErrorKind::iter().map(ErrorKind::descriptor).collect();
        descriptors.sort_by_key(|descriptor| descriptor.code);

        let mut by_code = HashMap::with_capacity(descriptors.len());
        let mut by_key = HashMap::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            by_code.insert(descriptor.code, index);
            by_key.insert(descriptor.key, index);
        }

        tracing::trace!(kinds = descriptors.len(), "error registry initialized");

        Registry {
            descriptors,
            by_code,
            by_key,
        }
    })
}

/// All descriptors, sorted by code.
pub fn descriptors() -> &'static [ErrorDescriptor] {
    &get_registry().descriptors
}

pub fn lookup_code(code: u32) -> Option<&'static ErrorDescriptor> {
    let registry = get_registry();
    registry.by_code.get(&code).map(|&index| &registry.descriptors[index])
}

pub fn lookup_key(key: &str) -> Option<&'static ErrorDescriptor> {
    let registry = get_registry();
    registry.by_key.get(key).map(|&index| &registry.descriptors[index])
}

/// Descriptors whose code falls in `band`, in code order.
pub fn in_band(band: Band) -> impl Iterator<Item = &'static ErrorDescriptor> {
    descriptors().iter().filter(move |descriptor| descriptor.band == band)
}
