//! Query compilation and the shared query buffer.
//!
//! A query asks "which archetypes contain at least this set of components,
//! and at which column indices". Compiling one scans every registered
//! archetype and emits, for each full match, a fixed-stride index record into
//! the append-only [`QueryBuffer`]:
//!
//! ```text
//! [archetype_index, col(request[0]), col(request[1]), ...]   stride = 1 + n
//! ```
//!
//! The downstream execution engine reads these records by offset to address
//! the correct columns of each matching archetype's table when dispatching
//! per-archetype work.
//!
//! ## Semantics
//! * Matching is a superset test: an archetype matches iff its column lookup
//!   contains every requested component. The containment check short-circuits
//!   on the first miss; there is no partial credit.
//! * Request order determines emitted column order, not matching.
//! * Results are **snapshots**: a compiled run never reflects archetypes
//!   registered after the call. Re-issue the query to observe them.
//! * No memoisation: identical requests re-scan and re-append, permanently
//!   growing the buffer. Acceptable for a bounded setup-time query count.
//!
//! ## Validation
//! The request list is validated once up front; a rejected request emits
//! nothing, so the buffer never holds a partial run.

use log::debug;

use crate::state::archetype::ArchetypeRegistry;
use crate::state::component::ComponentRegistry;
use crate::state::error::QueryError;
use crate::state::types::ComponentID;

/// Handle to one compiled query's run within the [`QueryBuffer`].
///
/// ## Notes
/// The handle is plain data; it stays valid for the lifetime of the owning
/// state manager regardless of later queries or registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryRef {
    /// Element offset of the run within the query buffer.
    pub offset: u32,

    /// Number of archetypes that matched the request.
    pub num_matches: u32,

    /// Number of components in the request; the record stride is
    /// `1 + num_components`.
    pub num_components: u32,
}

impl QueryRef {
    /// Total number of buffer elements in this run.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_matches as usize * (1 + self.num_components as usize)
    }

    /// Returns `true` if no archetype matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_matches == 0
    }
}

/// One decoded match record: an archetype index and the column index of each
/// requested component, in request order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryMatch<'a> {
    /// Index of the matching archetype (its raw `ArchetypeID` value).
    pub archetype_index: u32,

    /// Column indices of the requested components within that archetype's
    /// table, in request order.
    pub columns: &'a [u32],
}

/// Append-only element buffer holding every compiled query run.
///
/// ## Invariants
/// - Never shrunk or compacted; offsets handed out in a [`QueryRef`] are
///   logical element indices and remain valid for the buffer's lifetime.
#[derive(Default)]
pub struct QueryBuffer {
    data: Vec<u32>,
}

impl QueryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Element at `offset`.
    ///
    /// ## Panics
    /// Panics if `offset` is past the end of the buffer.
    #[inline]
    pub fn at(&self, offset: u32) -> u32 {
        self.data[offset as usize]
    }

    /// Slice view over one compiled run.
    ///
    /// ## Panics
    /// Panics if `query` does not describe a run within this buffer.
    #[inline]
    pub fn slice(&self, query: &QueryRef) -> &[u32] {
        let start = query.offset as usize;
        &self.data[start..start + query.len()]
    }

    /// Decoded iterator over one run's match records.
    pub fn matches<'a>(&'a self, query: &QueryRef) -> impl Iterator<Item = QueryMatch<'a>> {
        let stride = 1 + query.num_components as usize;
        self.slice(query).chunks_exact(stride).map(|record| QueryMatch {
            archetype_index: record[0],
            columns: &record[1..],
        })
    }

    /// Total number of elements ever emitted.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no query has emitted anything yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Compiles `request` against the current archetype registry, appending the
/// result run to `buffer`.
///
/// ## Algorithm
/// Validates the request, then scans registered archetypes in ascending
/// identifier order (identifier gaps are skipped). For each archetype whose
/// column lookup contains every requested component, appends the archetype
/// index followed by each requested component's column index.
///
/// ## Errors
/// * [`QueryError::EmptyRequest`] if `request` is empty.
/// * [`QueryError::UnknownComponent`] if any requested identifier was never
///   registered.
///
/// Nothing is emitted on error.
pub(crate) fn compile(
    request: &[ComponentID],
    archetypes: &ArchetypeRegistry,
    components: &ComponentRegistry,
    buffer: &mut QueryBuffer,
) -> Result<QueryRef, QueryError> {
    if request.is_empty() {
        return Err(QueryError::EmptyRequest);
    }
    for &component in request {
        if !components.is_registered(component) {
            return Err(QueryError::UnknownComponent { component });
        }
    }

    let offset = buffer.data.len() as u32;
    let mut num_matches = 0u32;

    for (id, store) in archetypes.iter() {
        let lookup = store.column_lookup();

        if !request.iter().all(|component| lookup.contains(component.0)) {
            continue;
        }

        num_matches += 1;
        buffer.data.push(id.0);
        for &component in request {
            // Containment established just above.
            buffer.data.push(lookup.get_unchecked(component.0));
        }
    }

    debug!(
        "compiled query over {} components: {} matching archetypes at offset {}",
        request.len(),
        num_matches,
        offset
    );

    Ok(QueryRef {
        offset,
        num_matches,
        num_components: request.len() as u32,
    })
}
