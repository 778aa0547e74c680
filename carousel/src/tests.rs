use crate::*;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    /// Quarter-page steps, so offsets stay exactly representable.
    fn gen_offset(&mut self, min: i64, max: i64) -> f64 {
        let span = ((max - min) * 4) as u64;
        min as f64 + (self.next_u64() % span) as f64 / 4.0
    }
}

#[test]
fn page_model_disables_loop_for_degenerate_counts() {
    let empty = PageModel::configure(0, true);
    assert!(!empty.loop_enabled());
    assert_eq!(empty.current_page(), None);

    let single = PageModel::configure(1, true);
    assert!(!single.loop_enabled());
    assert_eq!(single.current_page(), Some(0));

    let layout = TripleBufferLayout::for_model(&single);
    assert_eq!(layout.replica_count(), 1);
    assert_eq!(layout.physical_count(), 1);

    assert!(PageModel::configure(2, true).loop_enabled());
    assert!(!PageModel::configure(2, false).loop_enabled());
}

#[test]
fn page_model_clamps_current_page() {
    let mut m = PageModel::configure(4, true);
    assert_eq!(m.set_current_page(2), Some(2));
    assert_eq!(m.set_current_page(17), Some(3));
    assert_eq!(m.current_page(), Some(3));

    let mut empty = PageModel::configure(0, false);
    assert_eq!(empty.set_current_page(5), None);
    assert_eq!(empty.current_page(), None);
}

#[test]
fn looped_layout_maps_physical_to_logical() {
    let layout = TripleBufferLayout::looped(4);
    assert!(layout.is_looped());
    assert_eq!(layout.physical_count(), 12);
    assert_eq!(layout.middle_replica_start(), 4);

    for replica in 0..LOOP_REPLICAS {
        for logical in 0..4 {
            let physical = layout.physical_index_of(logical, replica).unwrap();
            assert_eq!(physical, replica * 4 + logical);
            assert_eq!(layout.logical_index_of(physical), Some(logical));
            assert_eq!(layout.replica_of(physical), Some(replica));
        }
    }
    assert_eq!(layout.physical_index_of(4, 0), None);
    assert_eq!(layout.physical_index_of(0, 3), None);
    assert_eq!(layout.replica_of(12), None);
    assert_eq!(layout.middle_offset_of(3), Some(7.0));
}

#[test]
fn linear_layout_is_identity() {
    let layout = TripleBufferLayout::linear(4);
    assert!(!layout.is_looped());
    assert_eq!(layout.physical_count(), 4);
    assert_eq!(layout.middle_replica_start(), 0);
    assert_eq!(layout.physical_index_of(3, 0), Some(3));
    assert_eq!(layout.physical_index_of(0, 1), None);
    assert_eq!(layout.clamp_offset(5.0), 3.0);
    assert_eq!(layout.clamp_offset(-1.0), 0.0);

    // A looped request with a single item degrades.
    assert!(!TripleBufferLayout::looped(1).is_looped());
}

#[test]
fn visible_cells_cover_straddled_pages_plus_overscan() {
    let layout = TripleBufferLayout::looped(4);

    let at_rest = layout.visible_cells(4.0, 0);
    assert_eq!(
        at_rest,
        vec![PhysicalCell {
            physical_index: 4,
            logical_index: 0
        }]
    );

    let straddling: Vec<usize> = layout
        .visible_cells(7.5, 1)
        .iter()
        .map(|c| c.physical_index)
        .collect();
    assert_eq!(straddling, vec![6, 7, 8, 9]);

    let logical: Vec<usize> = layout
        .visible_cells(7.5, 1)
        .iter()
        .map(|c| c.logical_index)
        .collect();
    assert_eq!(logical, vec![2, 3, 0, 1]);

    // Clamped to the content at both ends.
    let edge: Vec<usize> = layout
        .visible_cells(0.0, 2)
        .iter()
        .map(|c| c.physical_index)
        .collect();
    assert_eq!(edge, vec![0, 1, 2]);

    assert!(TripleBufferLayout::linear(0).visible_cells(0.0, 1).is_empty());
    assert!(layout.visible_cells(f64::NAN, 1).is_empty());
}

#[test]
fn correction_moves_first_and_third_replica_into_middle() {
    let layout = TripleBufferLayout::looped(4);

    // Frame 0 lands on the middle replica start.
    assert_eq!(corrected(&layout, 0.0), 4.0);
    // Last page of the first replica.
    assert_eq!(corrected(&layout, 3.0), 7.0);
    // Start of the third replica.
    let c = correct_offset(&layout, 8.0).unwrap();
    assert_eq!(c.to, 4.0);
    assert_eq!(c.replicas, -1);
    assert_eq!(c.delta(), -4.0);
    // Last physical page keeps its logical page.
    assert_eq!(corrected(&layout, 11.0), 7.0);

    // Inside the middle band, including straddling positions, nothing happens.
    for off in [3.25, 4.0, 5.5, 7.0, 7.75] {
        assert_eq!(correct_offset(&layout, off), None, "off={off}");
    }
}

#[test]
fn correction_folds_out_of_band_offsets() {
    let layout = TripleBufferLayout::looped(4);
    assert_eq!(corrected(&layout, -1.0), 7.0);
    assert_eq!(corrected(&layout, 12.0), 4.0);
    assert_eq!(corrected(&layout, 40.0), 4.0);
    assert_eq!(corrected(&layout, -13.0), 7.0);
    assert_eq!(corrected(&layout, f64::INFINITY), 4.0);
    assert_eq!(corrected(&layout, f64::NAN), 4.0);
}

#[test]
fn correction_never_applies_without_loop() {
    let layout = TripleBufferLayout::linear(4);
    for off in [0.0, 3.0, 5.0, -2.0] {
        assert_eq!(correct_offset(&layout, off), None);
    }
}

#[test]
fn property_correction_is_idempotent_and_preserves_page() {
    let mut rng = Lcg::new(2024);
    for _ in 0..500 {
        let count = rng.gen_range_usize(2, 20);
        let layout = TripleBufferLayout::looped(count);
        let span = (count * LOOP_REPLICAS) as i64;
        let off = rng.gen_offset(-span, 2 * span);

        let once = corrected(&layout, off);
        assert!(is_in_middle_band(&layout, once), "count={count} off={off} once={once}");
        assert_eq!(corrected(&layout, once), once);
        assert_eq!(correct_offset(&layout, once), None);

        // Whole-replica shift: exact landing, same displayed page.
        let shift = (once - off) / count as f64;
        assert_eq!(shift, shift.trunc());
        assert_eq!(logical_page_for(&layout, once), logical_page_for(&layout, off));
    }
}

#[test]
fn indicator_reports_logical_page_from_middle_replica() {
    let layout = TripleBufferLayout::looped(4);
    assert_eq!(logical_page_for(&layout, 4.0), Some(0));
    assert_eq!(logical_page_for(&layout, 7.0), Some(3));
    assert_eq!(logical_page_for(&layout, 6.4), Some(2));
    assert_eq!(logical_page_for(&layout, 6.6), Some(3));
    // Straddling the boundary into the first replica shows its last item.
    assert_eq!(logical_page_for(&layout, 3.4), Some(3));
    assert_eq!(logical_page_for(&layout, 7.6), Some(0));

    let linear = TripleBufferLayout::linear(4);
    assert_eq!(logical_page_for(&linear, 3.0), Some(3));
    assert_eq!(logical_page_for(&linear, 9.0), Some(3));
    assert_eq!(logical_page_for(&linear, -2.0), Some(0));

    assert_eq!(logical_page_for(&TripleBufferLayout::linear(0), 0.0), None);
}

#[test]
fn indicator_reports_changes_once() {
    let layout = TripleBufferLayout::looped(3);
    let mut indicator = PageIndicator::new();

    let first = indicator.sync(&layout, 3.0).unwrap();
    assert_eq!(first, PageIndicatorState { page: 0, count: 3 });
    assert_eq!(indicator.sync(&layout, 3.2), None);

    let next = indicator.sync(&layout, 4.0).unwrap();
    assert_eq!(next.dot_index(), 1);
    assert_eq!(next.page_number(), 2);
    assert_eq!(next.to_string(), "2/3");
    assert_eq!(indicator.state(), Some(next));
}

#[test]
fn timer_ticks_once_per_interval() {
    let mut t = AutoAdvanceTimer::new();
    assert_eq!(t.state(), TimerState::Idle);
    t.start(AutoAdvanceConfig::new(100), 0).unwrap();

    let ticks = (0..=1000).step_by(10).filter(|&now| t.poll(now)).count();
    assert_eq!(ticks, 10);

    // A late poll fires once and realigns to the next boundary.
    assert!(t.poll(1350));
    assert_eq!(t.next_due_ms(), Some(1400));
    assert!(!t.poll(1399));
    assert!(t.poll(1400));
}

#[test]
fn timer_collapses_ticks_missed_during_a_long_stall() {
    let mut t = AutoAdvanceTimer::new();
    t.start(AutoAdvanceConfig::new(3_000), 0).unwrap();

    // An hour without a frame.
    assert!(t.poll(3_600_000));
    assert!(!t.poll(3_600_000));
    assert_eq!(t.next_due_ms(), Some(3_603_000));
    assert!(t.is_running());
}

#[test]
fn timer_restart_keeps_a_single_schedule() {
    let mut t = AutoAdvanceTimer::new();
    t.start(AutoAdvanceConfig::new(100), 0).unwrap();
    t.start(AutoAdvanceConfig::new(100), 0).unwrap();
    assert_eq!(t.generation(), 2);

    let ticks = (0..=1000).step_by(5).filter(|&now| t.poll(now)).count();
    assert_eq!(ticks, 1000 / 100);
}

#[test]
fn timer_pause_resume_preserves_config() {
    let config = AutoAdvanceConfig::new(200)
        .with_animated(false)
        .with_animation_duration_ms(50);
    let mut t = AutoAdvanceTimer::new();
    t.start(config, 0).unwrap();

    assert!(t.pause());
    assert!(!t.pause());
    assert!(t.is_paused());
    assert!(!t.poll(10_000));
    assert_eq!(t.config(), Some(config));

    assert!(t.resume(10_000));
    assert_eq!(t.next_due_ms(), Some(10_200));
    assert!(!t.poll(10_199));
    assert!(t.poll(10_200));
    assert!(!t.resume(10_300));
}

#[test]
fn timer_stop_is_terminal() {
    let mut t = AutoAdvanceTimer::new();
    t.start(AutoAdvanceConfig::new(100), 0).unwrap();
    t.stop();
    assert!(t.is_stopped());
    assert_eq!(t.config(), None);
    assert!(!t.poll(1_000));
    assert!(!t.resume(1_000));
    assert_eq!(
        t.start(AutoAdvanceConfig::new(100), 1_000),
        Err(CarouselError::TimerStopped)
    );
}

#[test]
fn timer_rejects_zero_interval_and_fires_once_when_not_repeating() {
    let mut t = AutoAdvanceTimer::new();
    assert_eq!(
        t.start(AutoAdvanceConfig::new(0), 0),
        Err(CarouselError::InvalidInterval)
    );
    assert_eq!(t.state(), TimerState::Idle);

    t.start(AutoAdvanceConfig::new(100).with_repeating(false), 0)
        .unwrap();
    assert!(t.poll(450));
    assert!(t.is_stopped());
    assert!(!t.poll(1_000));
}

#[test]
fn options_degrade_and_clamp() {
    let opts = CarouselOptions::new(1)
        .with_loop(true)
        .with_initial_page(3)
        .with_content_mode(ContentMode::AspectFill);
    let model = opts.page_model();
    assert!(!model.loop_enabled());
    assert_eq!(model.current_page(), Some(0));
    assert_eq!(opts.layout().physical_count(), 1);
    assert_eq!(opts.theme.content_mode, ContentMode::AspectFill);

    let opts = CarouselOptions::new(5).with_loop(true).with_initial_page(9);
    assert_eq!(opts.page_model().current_page(), Some(4));
    assert_eq!(opts.layout().physical_count(), 15);
}

#[test]
fn default_theme_uses_placeholder_fill() {
    let theme = CarouselTheme::default();
    assert_eq!(theme.placeholder, Color::PLACEHOLDER);
    assert_eq!(theme.placeholder.a, 0xff);
    assert_eq!(theme.content_mode, ContentMode::AspectFit);
    assert_eq!(theme.indicator, PageIndicatorStyle::default());
    assert_eq!(CarouselOptions::new(3).theme, theme);
}

#[test]
fn indicator_style_hides_single_page_dots() {
    let style = PageIndicatorStyle::default();
    assert!(!style.dots_visible(0));
    assert!(!style.dots_visible(1));
    assert!(style.dots_visible(2));

    let always = PageIndicatorStyle {
        hides_for_single_page: false,
        ..style
    };
    assert!(always.dots_visible(1));
}
