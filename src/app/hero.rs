use std::time::Duration;

use leptos::prelude::*;

use super::navbar::scroll_to;
use crate::{
    content::HeroContent,
    sections::SectionId,
    typewriter::{Runner, Scheduler, Timing, Typewriter},
};

/// `setTimeout`-backed timers for the typing animation.
#[derive(Debug, Clone, Copy)]
struct BrowserTimer;

impl Scheduler for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(tick, delay)
            .map_err(|e| log::warn!("Couldn't arm typing timer: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
pub fn Hero(name: &'static str, hero: &'static HeroContent) -> impl IntoView {
    let (typed, set_typed) = signal(String::new());
    let runner = StoredValue::new_local(None::<Runner<BrowserTimer>>);

    Effect::new(move |_| {
        let typewriter = Typewriter::new(hero.phrases.iter().map(String::as_str), Timing::default());
        let started = Runner::start(BrowserTimer, typewriter, move |text| {
            set_typed.set(text.to_string())
        });
        runner.set_value(Some(started));
    });
    // dropping the runner cancels its pending timer
    on_cleanup(move || {
        runner.try_update_value(Option::take);
    });

    view! {
        <section
            id=SectionId::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 gradient-bg opacity-5" />

            <div class="container mx-auto px-4 text-center z-10">
                <div class="animate-fadeInUp">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        "Hi, I'm " <span class="gradient-text animate-pulse-slow">{name}</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-3xl mx-auto">
                        <span class="inline-block">"👨‍💻"</span>
                        " | "
                        <span class="gradient-text">{move || typed.get()}</span>
                        <span class="animate-blink ml-1">"|"</span>
                    </p>

                    <p class="text-lg text-muted-foreground mb-12 max-w-2xl mx-auto">
                        {hero.tagline.as_str()}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <button
                            class="gradient-bg text-white rounded-md hover:opacity-90 transition-opacity duration-300 px-8 py-3 text-lg animate-float"
                            on:click=move |_| scroll_to(SectionId::About)
                        >
                            "Explore My Work"
                        </button>
                        <a
                            href=hero.resume.href.as_str()
                            download=hero.resume.file_name.as_str()
                            class="px-8 py-3 text-lg rounded-md glass border border-white/20 hover:bg-white/10 group"
                        >
                            <span class="inline-block mr-2 group-hover:animate-bounce">"⬇"</span>
                            "Check Resume"
                        </a>
                        <button
                            class="px-8 py-3 text-lg rounded-md glass border border-white/20 hover:bg-white/10"
                            on:click=move |_| scroll_to(SectionId::Contact)
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>

                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-white/50 rounded-full mt-2 animate-pulse" />
                    </div>
                </div>
            </div>

            <div class="absolute top-20 left-10 w-20 h-20 bg-purple-400/10 rounded-full animate-float" />
            <div
                class="absolute top-40 right-20 w-16 h-16 bg-blue-400/10 rounded-full animate-float"
                style="animation-delay: 2s"
            />
            <div
                class="absolute bottom-40 left-20 w-12 h-12 bg-indigo-400/10 rounded-full animate-float"
                style="animation-delay: 4s"
            />
        </section>
    }
}
