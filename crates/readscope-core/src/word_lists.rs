//! Fixed word lists used by the analyzers.
//!
//! Both lists are compiled into the binary and never change at runtime.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Verbose words and phrases paired with plainer equivalents.
///
/// Order is significant: substitutions run top to bottom over one working
/// copy, so a later entry sees the output of earlier ones.
pub const SIMPLE_REPLACEMENTS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("leverage", "use"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("approximately", "about"),
    ("numerous", "many"),
    ("additional", "extra"),
    ("commence", "start"),
    ("terminate", "end"),
    ("obtain", "get"),
    ("required", "needed"),
    ("sufficient", "enough"),
    ("prior to", "before"),
    ("subsequent", "later"),
    ("in order to", "to"),
];

/// Words that usually open a subordinate clause or a hedged aside.
pub static CLAUSE_CONNECTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "which",
        "that",
        "because",
        "however",
        "therefore",
        "although",
        "whereas",
    ]
    .into_iter()
    .collect()
});
