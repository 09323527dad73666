use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::RouteError;
use crate::node::RouteNode;

/// One path segment of a flattened route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Self::Param(name.to_string()),
            None => Self::Static(raw.to_string()),
        }
    }
}

/// A flattened, matchable route: the full pattern composed from the node's
/// ancestors plus the node's own path.
#[derive(Debug, Clone)]
pub struct RouteRecord<C> {
    pub pattern: String,
    pub component: C,
    pub name: Option<String>,
    segments: Vec<Segment>,
}

/// A matched route: the record that won plus the URL parameters bound from
/// the concrete path (e.g. `:vessel_id` -> `"17"`).
#[derive(Debug)]
pub struct ResolvedRoute<'a, C> {
    pub record: &'a RouteRecord<C>,
    pub params: BTreeMap<String, String>,
}

impl<C> ResolvedRoute<'_, C> {
    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table flattened from a forest of [`RouteNode`]s.
///
/// Records keep declaration order; `resolve` returns the first record whose
/// pattern matches, and the table never reorders entries. Callers declare a
/// static sibling before a parameter sibling wherever both could match the
/// same concrete URL.
#[derive(Debug)]
pub struct RouteTable<C> {
    records: Vec<RouteRecord<C>>,
    name_index: HashMap<String, usize>,
}

impl<C> RouteTable<C> {
    /// Flatten a route forest into a matchable table.
    ///
    /// Disabled nodes and their subtrees are left out entirely. Construction
    /// is pure data assembly and never fails; structural problems are caught
    /// by [`RouteTable::verify`].
    pub fn build(roots: Vec<RouteNode<C>>) -> Self {
        let mut records = Vec::new();
        for root in roots {
            flatten(root, &[], &mut records);
        }
        let mut name_index = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if let Some(name) = &record.name {
                // First declaration wins; duplicates are reported by verify().
                name_index.entry(name.clone()).or_insert(idx);
            }
        }
        Self {
            records,
            name_index,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &RouteRecord<C>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Match a concrete URL path against the table, first declared wins.
    ///
    /// Trailing slashes are ignored: `/external/vessels/` and
    /// `/external/vessels` resolve identically.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_, C>> {
        let segments: Vec<&str> = split_path(path);
        self.records.iter().find_map(|record| {
            bind_params(&record.segments, &segments).map(|params| ResolvedRoute { record, params })
        })
    }

    pub fn record_by_name(&self, name: &str) -> Option<&RouteRecord<C>> {
        self.name_index.get(name).map(|&idx| &self.records[idx])
    }

    /// Build the concrete path for a named route, substituting `:param`
    /// segments from `params`. Extra entries in `params` are ignored.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let record = self
            .record_by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        let mut out = String::new();
        for segment in &record.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(p) => {
                    let value = params
                        .iter()
                        .find(|(k, _)| k == p)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| RouteError::MissingParam {
                            param: p.clone(),
                            pattern: record.pattern.clone(),
                        })?;
                    out.push_str(value);
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }

    /// Structural checks run at build/test time, not on the navigation path:
    /// route names must be unique, and no record may be shadowed into
    /// unreachability by an earlier record.
    pub fn verify(&self) -> Result<(), RouteError> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if let Some(name) = &record.name
                && !seen.insert(name.as_str())
            {
                return Err(RouteError::DuplicateName(name.clone()));
            }
        }
        for (j, later) in self.records.iter().enumerate() {
            for earlier in &self.records[..j] {
                if shadows(&earlier.segments, &later.segments) {
                    return Err(RouteError::Shadowed {
                        pattern: later.pattern.clone(),
                        by: earlier.pattern.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn flatten<C>(node: RouteNode<C>, prefix: &[Segment], records: &mut Vec<RouteRecord<C>>) {
    if !node.enabled {
        return;
    }
    let mut segments = prefix.to_vec();
    segments.extend(split_path(&node.path).into_iter().map(Segment::parse));

    if node.children.is_empty() {
        let pattern = pattern_string(&segments);
        records.push(RouteRecord {
            pattern,
            component: node.component,
            name: node.name,
            segments,
        });
    } else {
        // Container node: contributes its prefix only, content lives on the leaves.
        for child in node.children {
            flatten(child, &segments, records);
        }
    }
}

fn pattern_string(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        match segment {
            Segment::Static(s) => out.push_str(s),
            Segment::Param(p) => {
                out.push(':');
                out.push_str(p);
            }
        }
    }
    out
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn bind_params(pattern: &[Segment], path: &[&str]) -> Option<BTreeMap<String, String>> {
    if pattern.len() != path.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (segment, concrete) in pattern.iter().zip(path) {
        match segment {
            Segment::Static(s) if s == concrete => {}
            Segment::Static(_) => return None,
            Segment::Param(p) => {
                params.insert(p.clone(), (*concrete).to_string());
            }
        }
    }
    Some(params)
}

// `earlier` shadows `later` when every URL matching `later` also matches
// `earlier`: equal length, and each earlier segment is either a parameter or
// the identical static segment.
fn shadows(earlier: &[Segment], later: &[Segment]) -> bool {
    earlier.len() == later.len()
        && earlier.iter().zip(later).all(|(e, l)| match (e, l) {
            (Segment::Param(_), _) => true,
            (Segment::Static(a), Segment::Static(b)) => a == b,
            (Segment::Static(_), Segment::Param(_)) => false,
        })
}
