// Example: the triple-buffer mapping and silent corrections without any controller.
use carousel::{PageIndicator, PageModel, TripleBufferLayout, correct_offset};

fn main() {
    let model = PageModel::configure(4, true);
    let layout = TripleBufferLayout::for_model(&model);
    println!(
        "physical_count={} middle_start={}",
        layout.physical_count(),
        layout.middle_replica_start()
    );

    // Simulate a drag that runs backwards off the middle replica and one that overshoots it.
    let mut indicator = PageIndicator::new();
    for raw in [4.0, 3.5, 3.0, 7.0, 7.5, 8.0, 11.0] {
        let shown = correct_offset(&layout, raw).map_or(raw, |c| c.to);
        let changed = indicator.sync(&layout, shown);
        println!(
            "raw={raw:>4} shown={shown:>4} page={:?} changed={}",
            indicator.state().map(|s| s.to_string()),
            changed.is_some()
        );
    }
}
