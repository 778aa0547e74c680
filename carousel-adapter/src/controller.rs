use carousel::{
    AutoAdvanceConfig, AutoAdvanceTimer, CarouselError, CarouselEvent, CarouselOptions,
    ContextMenuAction, PageIndicator, PageIndicatorState, PageModel, TripleBufferLayout,
    ViewportState, correct_offset,
};

use crate::{Easing, Tween};

/// Lifecycle phase of a [`CarouselController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No items, nothing rendered.
    Idle,
    /// At rest on a page.
    Ready,
    /// A drag or a page animation is in progress.
    Scrolling,
}

const HOLD_INTERACTION: u8 = 1 << 0;
const HOLD_CONTEXT_MENU: u8 = 1 << 1;
const HOLD_EXTERNAL: u8 = 1 << 2;

/// A framework-neutral controller for a looping carousel.
///
/// It owns the scroll offset (in page units), the page indicator and the auto-advance timer,
/// and holds no UI objects. Adapters drive it by calling:
/// - `on_scroll_position_changed` whenever the scroll container reports a new offset, and
///   writing the returned offset back without animation
/// - `on_user_interaction_begin/end` around drags
/// - `tick(now_ms)` on every frame/timer tick, applying the returned offset if any
///
/// An empty carousel is a valid state: every command is a silent no-op.
#[derive(Debug)]
pub struct CarouselController {
    options: CarouselOptions,
    model: PageModel,
    layout: TripleBufferLayout,
    offset: f64,
    indicator: PageIndicator,
    timer: Option<AutoAdvanceTimer>,
    tween: Option<Tween>,
    easing: Easing,
    interacting: bool,
    holds: u8,
}

impl CarouselController {
    pub fn new(options: CarouselOptions) -> Self {
        let model = options.page_model();
        let layout = TripleBufferLayout::for_model(&model);
        cdebug!(
            count = model.count(),
            loop_enabled = model.loop_enabled(),
            "CarouselController::new"
        );
        let mut c = Self {
            options,
            model,
            layout,
            offset: 0.0,
            indicator: PageIndicator::new(),
            timer: None,
            tween: None,
            easing: Easing::default(),
            interacting: false,
            holds: 0,
        };
        c.offset = c.resting_offset_for_current_page();
        c.indicator.sync(&c.layout, c.offset);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options, rebuilding the layout. The current page is kept (clamped).
    pub fn set_options(&mut self, options: CarouselOptions) {
        let page = self.model.current_page().unwrap_or(0);
        self.tween = None;
        self.options = options;

        self.model = PageModel::configure(self.options.count, self.options.loop_enabled);
        self.model.set_current_page(page);
        self.layout = TripleBufferLayout::for_model(&self.model);
        self.offset = self.resting_offset_for_current_page();
        cdebug!(
            count = self.model.count(),
            loop_enabled = self.model.loop_enabled(),
            "CarouselController::set_options"
        );

        if self.model.count() <= 1 {
            self.stop_auto_move();
        }
        self.sync_indicator();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn layout(&self) -> &TripleBufferLayout {
        &self.layout
    }

    pub fn count(&self) -> usize {
        self.model.count()
    }

    /// Physical scroll offset in page units.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Physical scroll offset in pixels for pages `page_extent` pixels wide.
    pub fn offset_px(&self, page_extent: f64) -> f64 {
        self.offset * page_extent
    }

    /// Total scrollable content length in page units.
    pub fn content_pages(&self) -> usize {
        self.layout.physical_count()
    }

    pub fn phase(&self) -> Phase {
        if self.model.is_empty() {
            Phase::Idle
        } else if self.interacting || self.tween.is_some() {
            Phase::Scrolling
        } else {
            Phase::Ready
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        self.indicator.state().map(|s| s.page)
    }

    /// The value both the page dots and the tracker label render.
    pub fn indicator_state(&self) -> Option<PageIndicatorState> {
        self.indicator.state()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn auto_advance_timer(&self) -> Option<&AutoAdvanceTimer> {
        self.timer.as_ref()
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            offset_pages: self.offset,
            is_scrolling: self.phase() == Phase::Scrolling,
        }
    }

    pub fn restore_viewport_state(&mut self, state: ViewportState) -> f64 {
        self.tween = None;
        self.apply_offset(state.offset_pages)
    }

    /// Call this when the scroll container reports a new offset (drag, fling, programmatic
    /// scroll). Cancels any active page animation.
    ///
    /// Returns the offset the container must show. It differs from `offset` only when the
    /// viewport was corrected into the middle replica; the adapter must apply it without
    /// animation before the next frame is drawn.
    pub fn on_scroll_position_changed(&mut self, offset: f64) -> f64 {
        ctrace!(offset, "on_scroll_position_changed");
        self.tween = None;
        self.apply_offset(offset)
    }

    /// Pixel variant of [`Self::on_scroll_position_changed`]. Returns pixels.
    pub fn on_scroll_px(&mut self, offset_px: f64, page_extent: f64) -> f64 {
        if page_extent <= 0.0 || !page_extent.is_finite() {
            return offset_px;
        }
        self.on_scroll_position_changed(offset_px / page_extent) * page_extent
    }

    /// A drag started: auto-advance holds until [`Self::on_user_interaction_end`].
    pub fn on_user_interaction_begin(&mut self) {
        if self.model.is_empty() {
            return;
        }
        self.interacting = true;
        self.tween = None;
        self.add_hold(HOLD_INTERACTION);
    }

    pub fn on_user_interaction_end(&mut self, now_ms: u64) {
        self.interacting = false;
        self.release_hold(HOLD_INTERACTION, now_ms);
    }

    /// An item cell was tapped.
    pub fn on_item_tapped(&mut self, physical_index: usize) {
        let Some(index) = self.logical_index_of(physical_index) else {
            return;
        };
        self.emit(CarouselEvent::ItemSelected { index });
    }

    /// An item cell was long-pressed: requests the context menu and holds auto-advance until
    /// [`Self::on_context_menu_closed`].
    pub fn on_item_long_pressed(&mut self, physical_index: usize) {
        let Some(index) = self.logical_index_of(physical_index) else {
            return;
        };
        self.add_hold(HOLD_CONTEXT_MENU);
        self.emit(CarouselEvent::ContextMenuRequested {
            index,
            action: ContextMenuAction::Expand,
        });
    }

    pub fn on_context_menu_closed(&mut self, now_ms: u64) {
        self.release_hold(HOLD_CONTEXT_MENU, now_ms);
    }

    /// Moves to a logical page, via the nearest replica copy in loop mode.
    ///
    /// Out-of-range pages are clamped. Returns the target offset, or `None` for an empty
    /// carousel.
    pub fn goto_page(&mut self, page: usize, animated: bool, now_ms: u64) -> Option<f64> {
        let page = self.model.clamp_page(page)?;
        let target = self.nearest_offset_of(page);
        let duration_ms = self.options.page_animation_ms;
        Some(self.move_to(target, animated, duration_ms, now_ms))
    }

    /// Moves one page forward. Loop mode continues into the next replica (and is corrected on
    /// arrival); otherwise the last page rewinds to the first.
    pub fn advance(&mut self, animated: bool, now_ms: u64) -> Option<f64> {
        let duration_ms = self.options.page_animation_ms;
        self.advance_with(animated, duration_ms, now_ms)
    }

    /// Starts auto-advancing, replacing any running schedule.
    ///
    /// Returns `false` (and does nothing) with fewer than two items or a zero interval.
    pub fn auto_move(&mut self, config: AutoAdvanceConfig, now_ms: u64) -> bool {
        match self.try_auto_move(config, now_ms) {
            Ok(()) => true,
            Err(_err) => {
                cwarn!(error = %_err, "auto_move ignored");
                false
            }
        }
    }

    fn try_auto_move(
        &mut self,
        config: AutoAdvanceConfig,
        now_ms: u64,
    ) -> Result<(), CarouselError> {
        let count = self.model.count();
        if count <= 1 {
            return Err(CarouselError::NothingToAdvance { count });
        }
        self.discard_timer();

        let mut timer = AutoAdvanceTimer::new();
        timer.start(config, now_ms)?;
        if self.holds != 0 {
            timer.pause();
        }
        self.timer = Some(timer);
        Ok(())
    }

    /// Stops auto-advance and clears a pending [`Self::pause_auto_move`], so the next
    /// [`Self::auto_move`] starts running unless a drag or context menu still holds it.
    pub fn stop_auto_move(&mut self) {
        self.discard_timer();
        self.holds &= !HOLD_EXTERNAL;
    }

    fn discard_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
        }
    }

    pub fn pause_auto_move(&mut self) {
        self.add_hold(HOLD_EXTERNAL);
    }

    pub fn resume_auto_move(&mut self, now_ms: u64) {
        self.release_hold(HOLD_EXTERNAL, now_ms);
    }

    /// Advances page animations and the auto-advance timer.
    ///
    /// Returns the offset the scroll container should show when it changed during this tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let mut changed = false;

        if let Some(mut tween) = self.tween {
            let sampled = tween.sample(now_ms);
            let applied = self.apply_offset(sampled);
            let delta = applied - sampled;
            if delta != 0.0 {
                tween.shift(delta);
            }
            self.tween = if tween.is_done(now_ms) {
                None
            } else {
                Some(tween)
            };
            changed = true;
        }

        let (fired, config, finished) = match self.timer.as_mut() {
            Some(timer) => {
                let config = timer.config();
                let fired = timer.poll(now_ms);
                (fired, config, timer.is_stopped())
            }
            None => (false, None, false),
        };
        if finished {
            self.timer = None;
        }
        if let Some(config) = config.filter(|_| fired) {
            ctrace!(now_ms, "auto-advance tick");
            self.advance_with(config.animated, config.animation_duration_ms, now_ms);
            changed = true;
        }

        changed.then_some(self.offset)
    }

    /// Stops the auto-advance timer and any animation. Call when the carousel's view is
    /// removed; dropping the controller does the same.
    pub fn teardown(&mut self) {
        self.stop_auto_move();
        self.tween = None;
        self.interacting = false;
        self.holds = 0;
    }

    fn advance_with(&mut self, animated: bool, duration_ms: u64, now_ms: u64) -> Option<f64> {
        if self.model.is_empty() {
            return None;
        }
        let base = self.tween.map_or(self.offset, |t| t.to);
        let next = round_half_up(base) + 1.0;
        let target = if self.layout.is_looped() {
            next
        } else if next > self.layout.max_offset() {
            0.0
        } else {
            next
        };
        Some(self.move_to(target, animated, duration_ms, now_ms))
    }

    fn move_to(&mut self, target: f64, animated: bool, duration_ms: u64, now_ms: u64) -> f64 {
        if animated && duration_ms > 0 && target != self.offset {
            self.tween = Some(Tween::new(
                self.offset,
                target,
                now_ms,
                duration_ms,
                self.easing,
            ));
            return target;
        }
        self.tween = None;
        self.apply_offset(target)
    }

    /// The single offset mutation path: correct, store, then sync the indicator.
    fn apply_offset(&mut self, raw: f64) -> f64 {
        if self.model.is_empty() {
            self.offset = 0.0;
            return self.offset;
        }
        self.offset = match correct_offset(&self.layout, raw) {
            Some(correction) => correction.to,
            None if self.layout.is_looped() => raw,
            None => self.layout.clamp_offset(raw),
        };
        self.sync_indicator();
        self.offset
    }

    fn sync_indicator(&mut self) {
        if let Some(state) = self.indicator.sync(&self.layout, self.offset) {
            self.model.set_current_page(state.page);
            self.emit(CarouselEvent::PageChanged {
                page: state.page,
                count: state.count,
            });
        }
    }

    fn resting_offset_for_current_page(&self) -> f64 {
        self.model
            .current_page()
            .and_then(|page| self.layout.middle_offset_of(page))
            .unwrap_or(0.0)
    }

    /// Offset of the replica copy of `page` closest to the current offset. Ties favor the
    /// middle replica.
    fn nearest_offset_of(&self, page: usize) -> f64 {
        if !self.layout.is_looped() {
            return page as f64;
        }
        let mut best = self.layout.middle_offset_of(page).unwrap_or(0.0);
        for replica in [0, 2] {
            let Some(physical) = self.layout.physical_index_of(page, replica) else {
                continue;
            };
            let candidate = physical as f64;
            if (candidate - self.offset).abs() < (best - self.offset).abs() {
                best = candidate;
            }
        }
        best
    }

    fn logical_index_of(&self, physical_index: usize) -> Option<usize> {
        if physical_index >= self.layout.physical_count() {
            return None;
        }
        self.layout.logical_index_of(physical_index)
    }

    fn add_hold(&mut self, hold: u8) {
        self.holds |= hold;
        if let Some(timer) = self.timer.as_mut() {
            timer.pause();
        }
    }

    fn release_hold(&mut self, hold: u8, now_ms: u64) {
        self.holds &= !hold;
        if self.holds != 0 {
            return;
        }
        if let Some(timer) = self.timer.as_mut() {
            timer.resume(now_ms);
        }
    }

    fn emit(&self, event: CarouselEvent) {
        if let Some(cb) = &self.options.on_event {
            cb(&event);
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
