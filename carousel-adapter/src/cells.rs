/// The images a carousel shows: either already decoded images or remote URLs, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSources<I> {
    Images(Vec<I>),
    Urls(Vec<String>),
}

impl<I> ImageSources<I> {
    pub fn len(&self) -> usize {
        match self {
            Self::Images(images) => images.len(),
            Self::Urls(urls) => urls.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Urls(_))
    }
}

impl<I> Default for ImageSources<I> {
    fn default() -> Self {
        Self::Images(Vec::new())
    }
}

pub type RequestId = u64;

/// A remote image the adapter should fetch for a logical item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: RequestId,
    pub index: usize,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to load image {url}: {reason}")]
pub struct LoadError {
    pub url: String,
    pub reason: String,
}

/// What a cell currently displays.
#[derive(Clone, Debug, PartialEq)]
pub enum CellState<I> {
    Placeholder,
    Loading(RequestId),
    Ready(I),
    /// The load failed; the cell keeps showing its placeholder. Loads are not retried.
    Failed(LoadError),
}

impl<I> CellState<I> {
    pub fn image(&self) -> Option<&I> {
        match self {
            Self::Ready(image) => Some(image),
            _ => None,
        }
    }

    /// Whether the cell shows the placeholder fill.
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self, Self::Ready(_))
    }
}

/// Per-item image state, indexed by logical item.
///
/// Remote loads complete in any order. Each completion carries the request id it answers,
/// and only updates its own cell if that cell is still waiting for that exact request.
#[derive(Clone, Debug)]
pub struct ImageCells<I> {
    states: Vec<CellState<I>>,
    urls: Vec<String>,
    next_request: RequestId,
}

impl<I> ImageCells<I> {
    pub fn new(sources: ImageSources<I>) -> Self {
        match sources {
            ImageSources::Images(images) => Self {
                states: images.into_iter().map(CellState::Ready).collect(),
                urls: Vec::new(),
                next_request: 0,
            },
            ImageSources::Urls(urls) => Self {
                states: urls.iter().map(|_| CellState::Placeholder).collect(),
                urls,
                next_request: 0,
            },
        }
    }

    /// Continues request ids from a previous cell set, so completions addressed to the old
    /// sources can never match the new ones.
    pub fn with_first_request_id(mut self, id: RequestId) -> Self {
        self.next_request = id;
        self
    }

    pub fn next_request_id(&self) -> RequestId {
        self.next_request
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<&CellState<I>> {
        self.states.get(index)
    }

    pub fn image(&self, index: usize) -> Option<&I> {
        self.states.get(index).and_then(CellState::image)
    }

    /// Starts loading `index` if it is a remote item that has not been requested yet.
    pub fn begin_load(&mut self, index: usize) -> Option<LoadRequest> {
        let url = self.urls.get(index)?;
        let state = self.states.get_mut(index)?;
        if !matches!(state, CellState::Placeholder) {
            return None;
        }
        let id = self.next_request;
        self.next_request = self.next_request.wrapping_add(1);
        *state = CellState::Loading(id);
        ctrace!(index, id, "begin_load");
        Some(LoadRequest {
            id,
            index,
            url: url.clone(),
        })
    }

    /// Records the outcome of a load. Returns `false` for completions that no longer match
    /// the cell (stale or unknown requests), which are dropped.
    pub fn complete(&mut self, request: &LoadRequest, result: Result<I, LoadError>) -> bool {
        let Some(state) = self.states.get_mut(request.index) else {
            cwarn!(index = request.index, "complete: unknown cell");
            return false;
        };
        if !matches!(state, CellState::Loading(id) if *id == request.id) {
            cwarn!(
                index = request.index,
                id = request.id,
                "complete: dropping stale load completion"
            );
            return false;
        }
        *state = match result {
            Ok(image) => CellState::Ready(image),
            Err(err) => {
                cdebug!(error = %err, "image load failed");
                CellState::Failed(err)
            }
        };
        true
    }
}
