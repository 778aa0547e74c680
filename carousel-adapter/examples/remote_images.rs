use carousel::CarouselOptions;
use carousel_adapter::{ImageCarousel, ImageSources, LoadError};

fn main() {
    // Example: scheduling remote image loads for the cells around the viewport.
    let urls = (0..6).map(|i| format!("https://example.invalid/{i}.jpg")).collect();
    let mut carousel: ImageCarousel<Vec<u8>> =
        ImageCarousel::new(ImageSources::Urls(urls), CarouselOptions::new(0).with_loop(true));

    for _ in 0..3 {
        let requests = carousel.pending_loads();
        // Completions may arrive in any order; answer them back to front.
        for request in requests.iter().rev() {
            let result = if request.index % 4 == 3 {
                Err(LoadError {
                    url: request.url.clone(),
                    reason: "404".into(),
                })
            } else {
                Ok(vec![0u8; 16])
            };
            carousel.complete_load(request, result);
        }
        println!(
            "page={:?} loaded={:?}",
            carousel.controller().current_page(),
            requests.iter().map(|r| r.index).collect::<Vec<_>>()
        );
        carousel.controller_mut().advance(false, 0);
    }
}
