use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    carousel::{Carousel, AUTO_ADVANCE},
    content::Certificate,
};

#[component]
pub fn Certificates(certificates: &'static [Certificate]) -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(certificates.len()));
    let (hovered, set_hovered) = signal(None::<usize>);

    // paused while the pointer is over a card
    use_interval_fn(
        move || {
            if hovered.get_untracked().is_none() {
                set_carousel.update(|c| *c = c.next());
            }
        },
        AUTO_ADVANCE.as_millis() as u64,
    );

    // positions past the list repeat its head so the last views stay full
    let track = Carousel::new(certificates.len());
    let slides = (0..track.track_len())
        .map(|i| (i, &certificates[track.slide_at(i)]))
        .map(|(i, cert)| {
            let is_hovered = move || hovered.get() == Some(i);
            view! {
                <div class="shrink-0 basis-full md:basis-1/2 lg:basis-1/3 pl-2 md:pl-4">
                    <div
                        class="relative group cursor-pointer transform transition-all duration-500"
                        class=("scale-105", is_hovered)
                        class=("z-10", is_hovered)
                        on:mouseenter=move |_| set_hovered.set(Some(i))
                        on:mouseleave=move |_| set_hovered.set(None)
                    >
                        <div class="overflow-hidden rounded-lg border border-white/20 bg-card/50 backdrop-blur-sm transition-all duration-300 hover:border-primary/30 hover:shadow-xl hover:shadow-primary/20">
                            <div class="aspect-[4/3] overflow-hidden">
                                <img
                                    src=cert.image.as_str()
                                    alt=cert.title.as_str()
                                    class="w-full h-full object-cover transition-all duration-500"
                                    class=("scale-110", is_hovered)
                                    on:error=move |_| log::warn!("Failed to load image: {}", cert.image)
                                />
                            </div>
                            <div class="p-4">
                                <h4 class="font-semibold text-lg mb-1 text-center">{cert.title.as_str()}</h4>
                            </div>
                        </div>
                        <div
                            class="absolute inset-0 bg-gradient-to-t from-primary/20 via-transparent to-transparent rounded-lg transition-opacity duration-300 opacity-0"
                            class=("opacity-100", is_hovered)
                        />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="mt-16">
            <div class="text-center mb-8">
                <h3 class="text-3xl font-bold mb-4">
                    <span class="gradient-text">"Certifications"</span>
                </h3>
                <p class="text-muted-foreground">"Professional certifications and achievements"</p>
                <div class="w-16 h-1 bg-primary mx-auto rounded-full mt-4" />
            </div>

            <div class="relative w-full max-w-6xl mx-auto">
                <div class="overflow-hidden">
                    <div
                        class="flex -ml-2 md:-ml-4 transition-transform duration-700 ease-out carousel-track"
                        style:--slide=move || carousel.get().index().to_string()
                    >
                        {slides}
                    </div>
                </div>
                <button
                    class="absolute left-0 top-1/2 -translate-x-1/2 -translate-y-1/2 w-8 h-8 rounded-full glass border border-white/20 hover:border-primary/30"
                    aria-label="Previous certificate"
                    on:click=move |_| set_carousel.update(|c| *c = c.prev())
                >
                    "‹"
                </button>
                <button
                    class="absolute right-0 top-1/2 translate-x-1/2 -translate-y-1/2 w-8 h-8 rounded-full glass border border-white/20 hover:border-primary/30"
                    aria-label="Next certificate"
                    on:click=move |_| set_carousel.update(|c| *c = c.next())
                >
                    "›"
                </button>
            </div>

            <div class="text-center mt-4">
                <p class="text-xs text-muted-foreground">
                    {move || if hovered.get().is_some() { "⏸️ Paused" } else { "▶️ Auto-scrolling" }}
                    " • Hover to pause"
                </p>
            </div>
        </div>
    }
}
