use crate::models::{DisplayGroup, ProjectRecord, Role};
use std::collections::{HashMap, HashSet, VecDeque};

/// Partition records into display groups.
///
/// Records are visited in input order. A frontend or backend record is paired
/// with the earliest not-yet-consumed record of the opposite role sharing its
/// base name, searching the whole list rather than only what follows it.
/// Everything else becomes a single. Each record lands in exactly one group and
/// groups are ordered by the position of their first member.
pub fn group(records: Vec<ProjectRecord>) -> Vec<DisplayGroup> {
    // (base name, role) -> indices in input order
    let mut candidates: HashMap<(String, Role), VecDeque<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        if record.role != Role::None {
            candidates
                .entry((record.base_name.clone(), record.role))
                .or_default()
                .push_back(idx);
        }
    }

    let mut consumed: HashSet<usize> = HashSet::with_capacity(records.len());
    let mut layout: Vec<(usize, Option<usize>)> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        if !consumed.insert(idx) {
            continue;
        }

        let partner = record.role.counterpart().and_then(|wanted| {
            let queue = candidates.get_mut(&(record.base_name.clone(), wanted))?;
            while let Some(&front) = queue.front() {
                if consumed.contains(&front) {
                    queue.pop_front();
                } else {
                    break;
                }
            }
            queue.pop_front()
        });

        if let Some(partner) = partner {
            consumed.insert(partner);
        }
        layout.push((idx, partner));
    }

    let mut slots: Vec<Option<ProjectRecord>> = records.into_iter().map(Some).collect();
    layout
        .into_iter()
        .filter_map(|(first, second)| {
            let first = slots[first].take()?;
            Some(match second.and_then(|idx| slots[idx].take()) {
                Some(second) => DisplayGroup::Pair(first, second),
                None => DisplayGroup::Single(first),
            })
        })
        .collect()
}

/// Records in display order, pairs kept adjacent
pub fn flatten(groups: Vec<DisplayGroup>) -> Vec<ProjectRecord> {
    groups.into_iter().flat_map(DisplayGroup::into_records).collect()
}
