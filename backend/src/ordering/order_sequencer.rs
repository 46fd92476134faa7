//! Display order of facets.

use std::collections::HashSet;

use common::facet::Facet;

use crate::config::OrderSpec;


/// Arranges facet keys for display.
///
/// Keys listed in `firsts_order` lead, each present slave follows its master,
/// keys not mentioned anywhere keep their build order, and `lasts_order`
/// closes the list. `marks` are expected to be unique; the result is always a
/// permutation of them.
pub fn ordered_sequence(marks: &[String], spec: &OrderSpec) -> Vec<String> {
    let present: HashSet<&str> = marks.iter().map(String::as_str).collect();
    let mut consumed: HashSet<&str> = HashSet::with_capacity(marks.len());
    let mut sequence: Vec<&str> = Vec::with_capacity(marks.len());

    for key in &spec.firsts_order {
        let key = key.as_str();
        if present.contains(key) && consumed.insert(key) {
            sequence.push(key);
        }
    }

    for dependency in &spec.dependencies {
        let master = dependency.master.as_str();
        if !sequence.contains(&master) {
            continue;
        }
        let mut slaves = Vec::with_capacity(dependency.slaves.len());
        for slave in &dependency.slaves {
            let slave = slave.as_str();
            if present.contains(slave) && consumed.insert(slave) {
                slaves.push(slave);
            }
        }
        if slaves.is_empty() {
            continue;
        }
        let mut next = Vec::with_capacity(sequence.len() + slaves.len());
        for key in sequence {
            next.push(key);
            if key == master {
                next.extend(slaves.iter().copied());
            }
        }
        sequence = next;
    }

    for key in marks {
        let key = key.as_str();
        if !spec.is_last(key) && consumed.insert(key) {
            sequence.push(key);
        }
    }

    for key in &spec.lasts_order {
        let key = key.as_str();
        if present.contains(key) && consumed.insert(key) {
            sequence.push(key);
        }
    }

    sequence.into_iter().map(String::from).collect()
}

/// Sets each facet's `order` to its position in `sequence`.
pub fn mark_filters_order(facets: &mut [Facet], sequence: &[String]) {
    for facet in facets.iter_mut() {
        facet.order = sequence.iter().position(|key| *key == facet.option_name);
    }
}
