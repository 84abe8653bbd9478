//! Plain-text rendering of registry entries.

use std::fmt::Write;

use query_error::registry;
use query_error::{Band, ErrorDescriptor};
use strum::IntoEnumIterator;

/// One line per descriptor: code, key, template.
pub fn render_list<'a>(descriptors: impl IntoIterator<Item = &'a ErrorDescriptor>) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        let _ = writeln!(
            out,
            "{:<6} {:<48} {}",
            descriptor.code, descriptor.key, descriptor.template
        );
    }
    out
}

pub fn render_descriptor(descriptor: &ErrorDescriptor) -> String {
    let (start, end) = descriptor.band.range();
    let mut out = String::new();
    let _ = writeln!(out, "code:     {}", descriptor.code);
    let _ = writeln!(out, "key:      {}", descriptor.key);
    let _ = writeln!(out, "band:     {} ({}-{})", descriptor.band, start, end);
    let _ = writeln!(out, "level:    {}", descriptor.level);
    let _ = writeln!(out, "kind:     {}", descriptor.kind);
    let _ = writeln!(out, "template: {}", descriptor.template);
    out
}

pub fn render_bands() -> String {
    let mut out = String::new();
    for band in Band::iter() {
        let (start, end) = band.range();
        let _ = writeln!(
            out,
            "{:<22} {:>5}-{:<5} {:>3}  {}",
            band.to_string(),
            start,
            end,
            registry::in_band(band).count(),
            band.description()
        );
    }
    out
}
