//! Secondary skill-tree view: another person's graph presented above the
//! primary page, fetched on demand.
//!
//! The controller only opens once its fetch resolves successfully, suppresses
//! background scroll for exactly as long as the view is open (restored on
//! every exit path via an RAII guard), and discards all hover state when the
//! view closes or is replaced by a different person's data.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    error::SkillGraphResult,
    fetch::SkillSetSource,
    focus::FocusTracker,
    model::SkillSet,
};

/// Host capability for suppressing and restoring background scroll.
pub trait ScrollHost {
    fn suppress_scroll(&self);
    fn restore_scroll(&self);
}

/// Reference `ScrollHost` tracking suppression depth; also serves as a test
/// double for guard discipline.
#[derive(Debug, Default)]
pub struct ScrollFlag {
    depth: AtomicUsize,
}

impl ScrollFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 0
    }
}

impl ScrollHost for ScrollFlag {
    fn suppress_scroll(&self) {
        self.depth.fetch_add(1, Ordering::SeqCst);
    }

    fn restore_scroll(&self) {
        self.depth.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Suppresses scroll on acquisition, restores on drop. Dropping is the only
/// release path, so every modal exit (close, backdrop dismiss, controller
/// teardown) restores scroll.
pub struct ScrollGuard {
    host: Arc<dyn ScrollHost>,
}

impl ScrollGuard {
    pub fn acquire(host: Arc<dyn ScrollHost>) -> Self {
        host.suppress_scroll();
        Self { host }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.host.restore_scroll();
    }
}

impl std::fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollGuard").finish_non_exhaustive()
    }
}

/// Ticket tying an in-flight fetch to the controller state it was issued
/// against. Resolutions carrying a stale ticket are discarded, which is how a
/// fetch that lands after close produces no observable effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct OpenModal {
    set: SkillSet,
    focus: FocusTracker,
    _scroll: ScrollGuard,
}

impl OpenModal {
    pub fn skill_set(&self) -> &SkillSet {
        &self.set
    }

    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusTracker {
        &mut self.focus
    }
}

pub struct ModalController<S: SkillSetSource> {
    source: S,
    scroll_host: Arc<dyn ScrollHost>,
    generation: u64,
    open: Option<OpenModal>,
}

impl<S: SkillSetSource> ModalController<S> {
    pub fn new(source: S, scroll_host: Arc<dyn ScrollHost>) -> Self {
        Self {
            source,
            scroll_host,
            generation: 0,
            open: None,
        }
    }

    /// Fetch `reference` and open the view on success. On fetch failure the
    /// view stays closed, the failure is reported, and no retry is attempted.
    pub fn open_for(&mut self, reference: &str) -> SkillGraphResult<()> {
        let ticket = self.begin_open();
        let result = self.source.fetch(reference);
        self.complete_open(ticket, result).map(|_| ())
    }

    /// Issue a ticket for a fetch about to start. Rapid repeated requests get
    /// distinct tickets against the same generation; duplicate in-flight
    /// fetches are wasteful but permitted, and the last resolution wins.
    pub fn begin_open(&mut self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Deliver a fetch resolution. Returns `true` if the view opened, `false`
    /// if the resolution was stale and discarded.
    pub fn complete_open(
        &mut self,
        ticket: FetchTicket,
        result: SkillGraphResult<SkillSet>,
    ) -> SkillGraphResult<bool> {
        if ticket.generation != self.generation {
            tracing::debug!("discarding skill set fetch that resolved after close");
            return Ok(false);
        }

        let set = match result {
            Ok(set) => set,
            Err(e) => {
                tracing::error!(error = %e, "skill set fetch failed; view stays closed");
                return Err(e);
            }
        };

        // Replace-before-acquire: drop any previous view (restoring scroll)
        // before the new guard suppresses it again.
        self.open = None;
        self.open = Some(OpenModal {
            set,
            focus: FocusTracker::new(),
            _scroll: ScrollGuard::acquire(Arc::clone(&self.scroll_host)),
        });
        Ok(true)
    }

    /// Close the view from any exit path. Hover state is discarded with it and
    /// any still-in-flight fetch ticket becomes stale.
    pub fn close(&mut self) {
        self.open = None;
        self.generation += 1;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&self) -> Option<&OpenModal> {
        self.open.as_ref()
    }

    pub fn open_mut(&mut self) -> Option<&mut OpenModal> {
        self.open.as_mut()
    }
}

impl<S: SkillSetSource> std::fmt::Debug for ModalController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("generation", &self.generation)
            .field("open", &self.open.is_some())
            .finish_non_exhaustive()
    }
}
