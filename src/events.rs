// Events that flow from the loader task to the TUI
//
// The loader fetches template resources one at a time and reports each
// completion over an mpsc channel. Card skeletons exist before any of
// these arrive, so a result only ever fills in an already-rendered card.

/// Completion of one resource load, successful or not.
/// The error side carries the rendered failure detail; the TUI only
/// ever displays it.
#[derive(Debug)]
pub struct LoadResult {
    /// Position of the resource in the catalog (and of its card)
    pub index: usize,
    /// Full template text on success, failure detail on error
    pub outcome: Result<String, String>,
}
