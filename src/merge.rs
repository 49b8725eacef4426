//! Reconciliation of a freshly generated tree with the persisted one
//!
//! Merging is total over well-formed trees: a missing identity match is
//! not an error, it just means nothing is relocated.

use std::collections::{HashMap, HashSet};

use crate::ast::{Ast, Section};

/// Entry key identifying one physical device across renamed sections.
pub const IDENTITY_KEY: &str = "imei";

/// Merges `target` (the desired state) into `existing` (the persisted
/// state).
///
/// Both lookups are indexes built once from `target`, so the pass over
/// `existing` is linear and every distinct name produces exactly one
/// output section:
/// - a section whose name also appears in `target` is replaced by the
///   `target` section of that name;
/// - a section carrying an identity entry that some `target` section holds
///   under a different name is replaced by that `target` section (the
///   device moved; the stale name is dropped);
/// - everything else is carried through verbatim, in `existing` order.
///
/// Target sections not placed by either rule are appended after, in
/// `target` order. A target section is never placed twice.
pub fn merge(existing: &Ast, target: &Ast) -> Ast {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    let mut by_identity: HashMap<&str, usize> = HashMap::new();
    for (at, section) in target.sections.iter().enumerate() {
        by_name.entry(section.name.as_str()).or_insert(at);
        for entry in &section.entries {
            if entry.key == IDENTITY_KEY {
                by_identity.entry(entry.value.as_str()).or_insert(at);
            }
        }
    }

    let mut placed = vec![false; target.sections.len()];
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Ast::new();

    for section in &existing.sections {
        if seen.contains(section.name.as_str()) {
            continue;
        }
        let mut pick: &Section = section;
        if let Some(&at) = by_name.get(section.name.as_str()) {
            pick = &target.sections[at];
            placed[at] = true;
        }
        if let Some(identity) = pick.get(IDENTITY_KEY) {
            if let Some(&at) = by_identity.get(identity) {
                if !placed[at] && target.sections[at].name != pick.name {
                    pick = &target.sections[at];
                    placed[at] = true;
                }
            }
        }
        seen.insert(section.name.as_str());
        seen.insert(pick.name.as_str());
        merged.sections.push(pick.clone());
    }

    for (at, section) in target.sections.iter().enumerate() {
        if placed[at] || seen.contains(section.name.as_str()) {
            continue;
        }
        seen.insert(section.name.as_str());
        merged.sections.push(section.clone());
    }

    merged
}
