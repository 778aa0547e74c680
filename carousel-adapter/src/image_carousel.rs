use carousel::{CarouselOptions, PhysicalCell};

use crate::{CarouselController, CellState, ImageCells, ImageSources, LoadError, LoadRequest};

/// A carousel bound to its image sources.
///
/// Pairs a [`CarouselController`] with per-item image state and tells the adapter which
/// remote images the cells around the viewport still need.
#[derive(Debug)]
pub struct ImageCarousel<I> {
    controller: CarouselController,
    cells: ImageCells<I>,
}

impl<I> ImageCarousel<I> {
    /// `options.count` is replaced by the number of sources.
    pub fn new(sources: ImageSources<I>, options: CarouselOptions) -> Self {
        let options = CarouselOptions {
            count: sources.len(),
            ..options
        };
        Self {
            controller: CarouselController::new(options),
            cells: ImageCells::new(sources),
        }
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController {
        &mut self.controller
    }

    pub fn cells(&self) -> &ImageCells<I> {
        &self.cells
    }

    /// Swaps in a new source list, rebuilding the layout around it.
    pub fn replace_sources(&mut self, sources: ImageSources<I>) {
        let count = sources.len();
        let next_id = self.cells.next_request_id();
        self.cells = ImageCells::new(sources).with_first_request_id(next_id);
        self.controller.update_options(|o| o.count = count);
    }

    /// Physical cells around the viewport, with overscan.
    pub fn visible_cells(&self) -> Vec<PhysicalCell> {
        self.controller.layout().visible_cells(
            self.controller.offset(),
            self.controller.options().overscan,
        )
    }

    /// What a physical cell should display.
    pub fn cell(&self, physical_index: usize) -> Option<&CellState<I>> {
        if physical_index >= self.controller.layout().physical_count() {
            return None;
        }
        let logical = self.controller.layout().logical_index_of(physical_index)?;
        self.cells.state(logical)
    }

    /// Starts loads for every visible remote item that has not been requested yet.
    pub fn pending_loads(&mut self) -> Vec<LoadRequest> {
        let mut out = Vec::new();
        for cell in self.visible_cells() {
            if let Some(request) = self.cells.begin_load(cell.logical_index) {
                out.push(request);
            }
        }
        out
    }

    /// Records a finished load. Failures leave the placeholder in place and never affect
    /// paging.
    pub fn complete_load(&mut self, request: &LoadRequest, result: Result<I, LoadError>) -> bool {
        self.cells.complete(request, result)
    }
}
