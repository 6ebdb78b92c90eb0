//! Display state machine for a single catalog row

use marquee_model::{FetchState, GenreRow, Movie};

/// What a row shows at a given moment
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowState {
    /// Not mounted yet
    #[default]
    Empty,

    /// Fetch in flight; rendered as a skeleton
    Loading,

    /// Titles available
    Populated(Vec<Movie>),

    /// Fetch failed or came back empty; the row is hidden
    FailedEmpty,
}

/// Events that drive [`RowState`]
#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    /// The row became visible and should fetch
    Mount,

    /// The fetch finished with these titles
    Loaded(Vec<Movie>),

    /// The fetch failed
    Failed,
}

/// Outcome of feeding an event to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The event does not apply to the current state and was dropped
    Ignored,
}

impl RowState {
    /// A row that starts with pre-loaded titles and never fetches.
    pub fn with_static(movies: Vec<Movie>) -> Self {
        if movies.is_empty() {
            RowState::FailedEmpty
        } else {
            RowState::Populated(movies)
        }
    }

    pub fn transition(&mut self, event: RowEvent) -> Transition {
        let next = match (&*self, event) {
            (RowState::Empty, RowEvent::Mount) => RowState::Loading,
            (RowState::Loading, RowEvent::Loaded(movies)) => {
                RowState::with_static(movies)
            }
            (RowState::Loading, RowEvent::Failed) => RowState::FailedEmpty,
            // Late results for a row that is no longer loading are discarded
            _ => return Transition::Ignored,
        };
        *self = next;
        Transition::Applied
    }

    pub fn fetch_state(&self) -> FetchState {
        match self {
            RowState::Empty => FetchState::Idle,
            RowState::Loading => FetchState::Loading,
            RowState::Populated(_) => FetchState::Success,
            RowState::FailedEmpty => FetchState::Error,
        }
    }

    /// Whether anything (skeleton or titles) is drawn for the row.
    pub fn is_visible(&self) -> bool {
        matches!(self, RowState::Loading | RowState::Populated(_))
    }

    pub fn movies(&self) -> &[Movie] {
        match self {
            RowState::Populated(movies) => movies,
            _ => &[],
        }
    }
}

/// A titled row together with its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub title: String,
    pub state: RowState,
}

impl CatalogRow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: RowState::Empty,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        self.state.movies()
    }

    /// The row as plain data, or `None` when there is nothing to show.
    pub fn into_genre_row(self) -> Option<GenreRow> {
        match self.state {
            RowState::Populated(movies) => Some(GenreRow::new(self.title, movies)),
            _ => None,
        }
    }
}
