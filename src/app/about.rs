use std::time::Duration;

use leptos::{html, prelude::*};

use super::reveal::{fade_up, slide_left, slide_right, use_reveal, REVEAL_THRESHOLD};
use crate::{content::About as AboutContent, sections::SectionId};

const SKILL_FILL_DELAY: Duration = Duration::from_millis(500);
const SKILL_STAGGER_MS: usize = 200;

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, REVEAL_THRESHOLD);
    let (filled, set_filled) = signal(false);

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                set_timeout(move || set_filled.set(true), SKILL_FILL_DELAY);
            }
        },
        false,
    );

    let skills = about
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let level = skill.level;
            view! {
                <div class="space-y-2 glassmorphism p-3 rounded-lg border border-white/10 hover:border-primary/30 transition-all duration-300 hover:shadow-md hover:shadow-primary/10">
                    <div class="flex justify-between items-center">
                        <span class="font-medium">{skill.name.as_str()}</span>
                        <span class="text-sm text-muted-foreground">{format!("{level}%")}</span>
                    </div>
                    <div class="w-full bg-muted rounded-full h-2 overflow-hidden">
                        <div
                            class=format!(
                                "h-full {} rounded-full transition-all duration-1000 ease-out relative",
                                skill.color,
                            )
                            style:width=move || if filled.get() { format!("{level}%") } else { "0%".to_string() }
                            style:transition-delay=format!("{}ms", i * SKILL_STAGGER_MS)
                        >
                            <div class="absolute top-0 right-0 bottom-0 w-4 bg-white/20 animate-pulse-slow" />
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let paragraphs = about
        .paragraphs
        .iter()
        .map(|p| {
            view! { <p class="text-lg text-muted-foreground mb-6 leading-relaxed">{p.as_str()}</p> }
        })
        .collect_view();

    view! {
        <section id=SectionId::About.id() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }>"About " <span class="gradient-text">"Me"</span></h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full" />
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || {
                        format!(
                            "flex justify-center lg:justify-start transition-all duration-1000 delay-300 {}",
                            slide_left(visible.get()),
                        )
                    }>
                        <div class="relative">
                            <div class="w-80 h-80 rounded-full overflow-hidden glass p-2 animate-float group hover:animate-glow cursor-pointer transition-all duration-500">
                                <img
                                    src=about.photo.as_str()
                                    alt="Profile photo"
                                    class="w-full h-full rounded-full object-cover group-hover:scale-105 transition-transform duration-500"
                                />
                            </div>
                            <div class="absolute -top-4 -right-4 w-20 h-20 bg-primary/20 rounded-full animate-pulse" />
                            <div
                                class="absolute -bottom-4 -left-4 w-16 h-16 bg-blue-500/20 rounded-full animate-pulse"
                                style="animation-delay: 1s"
                            />
                        </div>
                    </div>

                    <div class=move || {
                        format!("transition-all duration-1000 delay-500 {}", slide_right(visible.get()))
                    }>
                        <h3 class="text-2xl font-bold mb-6 flex items-center">
                            {about.greeting.as_str()}
                            <span class="ml-2 animate-wave inline-block">"👋"</span>
                        </h3>
                        {paragraphs}
                        <div class="space-y-4">
                            <h4 class="text-xl font-semibold mb-4">"Skills & Technologies"</h4>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{skills}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute top-1/4 right-10 w-40 h-40 rounded-full bg-blue-500/5 animate-pulse-slow" />
            <div
                class="absolute bottom-1/4 left-10 w-48 h-48 rounded-full bg-purple-500/5 animate-pulse-slow"
                style="animation-delay: 1.5s"
            />
        </section>
    }
}
