//! Drift Filter
//!
//! Detects stale identifiers while replaying one batch ("pass") of incoming
//! version records. The first record seen for a name fixes that name's tag for
//! the rest of the pass; later records whose embedded id disagrees with what
//! that tag hashes to are remapped, and members of a remapped parent follow it.
//!
//! A filter is valid for exactly one pass. Records must arrive parents before
//! children: a member seen before its parent is remapped keeps its old id.
//! Such ordering violations are reported, not repaired.

use crate::config::DriftConfig;
use crate::identity::member::hash_member;
use crate::identity::KindDescriptor;
use crate::types::{ObjectId, ObjectKind, Tag};
use crate::version::{find_tag, VersionRecord};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Per-pass id validation of version records
pub trait IdentityFilter {
    /// Id the record should carry after reconciliation.
    fn check(&mut self, record: &dyn VersionRecord) -> ObjectId;
}

/// Counters for one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftStats {
    pub checked: usize,
    pub remapped_structs: usize,
    pub remapped_local_types: usize,
    pub remapped_members: usize,
    /// Parents remapped after one of their members was already checked
    pub ordering_violations: usize,
}

/// First-seen tags per name within one namespace
struct PassMemo {
    kind: KindDescriptor,
    tags: HashMap<String, Tag>,
    ids: Option<HashMap<String, ObjectId>>,
}

impl PassMemo {
    fn new(kind: KindDescriptor, cache_ids: bool) -> Self {
        Self {
            kind,
            tags: HashMap::new(),
            ids: cache_ids.then(HashMap::new),
        }
    }

    /// Expected id for `record`, or `None` if the record is its name's first sighting.
    fn expected(&mut self, name: &str, observed: Tag) -> Option<ObjectId> {
        if !self.tags.contains_key(name) {
            self.tags.insert(name.to_string(), observed);
            return None;
        }
        let tag = &self.tags[name];
        let kind = self.kind;
        let id = match self.ids.as_mut() {
            Some(ids) => *ids
                .entry(name.to_string())
                .or_insert_with(|| kind.hash_tag(tag)),
            None => kind.hash_tag(tag),
        };
        Some(id)
    }
}

/// Reconciliation-pass drift detector
pub struct DriftFilter {
    structs: PassMemo,
    locals: PassMemo,
    remap: HashMap<ObjectId, ObjectId>,
    // parents of members checked so far that had no remap entry at the time
    unmapped_parents: HashSet<ObjectId>,
    stats: DriftStats,
}

impl Default for DriftFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DriftFilter {
    pub fn new() -> Self {
        Self::with_config(&DriftConfig::default())
    }

    pub fn with_config(config: &DriftConfig) -> Self {
        Self {
            structs: PassMemo::new(KindDescriptor::STRUCT, config.cache_ids),
            locals: PassMemo::new(KindDescriptor::LOCAL_TYPE, config.cache_ids),
            remap: HashMap::new(),
            unmapped_parents: HashSet::new(),
            stats: DriftStats::default(),
        }
    }

    pub fn stats(&self) -> &DriftStats {
        &self.stats
    }

    /// New id for a parent remapped in this pass
    pub fn remapped(&self, old: ObjectId) -> Option<ObjectId> {
        self.remap.get(&old).copied()
    }

    /// Id the record should carry after reconciliation.
    pub fn check(&mut self, record: &dyn VersionRecord) -> ObjectId {
        self.stats.checked += 1;
        match record.kind() {
            ObjectKind::Struct => {
                let id = self.check_tagged(ObjectKind::Struct, record);
                if id != record.id() {
                    self.stats.remapped_structs += 1;
                }
                id
            }
            ObjectKind::LocalType => {
                let id = self.check_tagged(ObjectKind::LocalType, record);
                if id != record.id() {
                    self.stats.remapped_local_types += 1;
                }
                id
            }
            ObjectKind::StructMember => self.check_member(record),
            _ => record.id(),
        }
    }

    fn check_tagged(&mut self, kind: ObjectKind, record: &dyn VersionRecord) -> ObjectId {
        let old = record.id();
        let Some(observed) = find_tag(record) else {
            return old;
        };

        let memo = match kind {
            ObjectKind::LocalType => &mut self.locals,
            _ => &mut self.structs,
        };
        let name = record.username();
        let Some(current) = memo.expected(name, observed) else {
            return old;
        };
        if current == old {
            return old;
        }

        debug!(?kind, name, %old, new = %current, "Stale identifier remapped");
        self.remap.insert(old, current);
        if self.unmapped_parents.contains(&old) {
            self.stats.ordering_violations += 1;
            warn!(
                ?kind,
                name,
                %old,
                "Parent remapped after its members were checked; members keep stale ids"
            );
        }
        current
    }

    fn check_member(&mut self, record: &dyn VersionRecord) -> ObjectId {
        let parent = record.parent_id();
        match self.remap.get(&parent) {
            Some(&new_parent) => {
                self.stats.remapped_members += 1;
                hash_member(new_parent, record.address())
            }
            None => {
                self.unmapped_parents.insert(parent);
                record.id()
            }
        }
    }
}

impl IdentityFilter for DriftFilter {
    fn check(&mut self, record: &dyn VersionRecord) -> ObjectId {
        DriftFilter::check(self, record)
    }
}

/// Fresh filter for one reconciliation pass
pub fn make_filter() -> Box<dyn IdentityFilter> {
    Box::new(DriftFilter::new())
}

/// Run one complete pass over `records`, returning the reconciled id of each.
pub fn filter_pass<'r, R>(records: impl IntoIterator<Item = &'r R>, config: &DriftConfig) -> (Vec<ObjectId>, DriftStats)
where
    R: VersionRecord + 'r,
{
    let mut filter = DriftFilter::with_config(config);
    let ids = records.into_iter().map(|r| filter.check(r)).collect();
    (ids, filter.stats)
}
