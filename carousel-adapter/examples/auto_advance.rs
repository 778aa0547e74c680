use carousel::{AutoAdvanceConfig, CarouselEvent, CarouselOptions};
use carousel_adapter::CarouselController;

fn main() {
    // Example: an adapter frame loop driving auto-advance with animated page changes.
    //
    // An adapter would:
    // - forward scroll/drag events to the controller
    // - call tick(now_ms) every frame
    // - write the returned offset into its scroll container without animation
    let mut c = CarouselController::new(
        CarouselOptions::new(3)
            .with_loop(true)
            .with_on_event(|e| {
                if let CarouselEvent::PageChanged { page, count } = e {
                    println!("page {}/{}", page + 1, count);
                }
            }),
    );
    c.auto_move(
        AutoAdvanceConfig::new(500).with_animation_duration_ms(200),
        0,
    );

    let mut now_ms = 0u64;
    while now_ms < 3_000 {
        now_ms += 16;
        if now_ms == 1_200 {
            // A drag pauses auto-advance until it ends.
            c.on_user_interaction_begin();
        }
        if now_ms == 1_600 {
            c.on_user_interaction_end(now_ms);
        }
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 160 == 0 {
                println!("t={now_ms} off={off:.2} phase={:?}", c.phase());
            }
        }
    }

    c.teardown();
}
