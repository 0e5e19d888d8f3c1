use leptos::{html, prelude::*};

use super::reveal::{fade_up, use_reveal, REVEAL_THRESHOLD};
use crate::{content::EducationEntry, sections::SectionId};

#[component]
pub fn Education(entries: &'static [EducationEntry]) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, REVEAL_THRESHOLD);

    let timeline = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            // alternate sides of the line on wide screens
            let side = if i % 2 == 0 { "md:mr-auto md:pr-8" } else { "md:ml-auto md:pl-8" };
            view! {
                <div
                    class=move || {
                        format!(
                            "relative flex items-center mb-12 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }
                    style:animation-delay=format!("{}ms", i * 300)
                >
                    <div class="absolute left-6 md:left-1/2 w-4 h-4 bg-primary rounded-full transform md:-translate-x-1/2 z-10 animate-pulse" />
                    <div class=format!("ml-16 md:ml-0 {side} md:w-1/2")>
                        <div class="glass p-6 rounded-lg border border-white/20 hover:border-primary/30 transition-all duration-300 hover:shadow-lg group">
                            <div class="flex items-center mb-3">
                                <span class="text-3xl mr-3 group-hover:scale-110 transition-transform duration-300">
                                    {entry.icon.as_str()}
                                </span>
                                <div>
                                    <h3 class="text-xl font-bold text-primary">{entry.degree.as_str()}</h3>
                                    <p class="text-muted-foreground font-medium">{entry.institution.as_str()}</p>
                                </div>
                            </div>
                            <div class="flex items-center mb-3">
                                <span class="text-sm bg-primary/10 text-primary px-3 py-1 rounded-full">
                                    {entry.duration.as_str()}
                                </span>
                                {entry
                                    .is_current()
                                    .then(|| {
                                        view! {
                                            <span class="ml-2 text-xs bg-green-500/10 text-green-500 px-2 py-1 rounded-full animate-pulse">
                                                "Current"
                                            </span>
                                        }
                                    })}
                            </div>
                            <p class="text-muted-foreground leading-relaxed">{entry.description.as_str()}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Education.id() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }>"My " <span class="gradient-text">"Education"</span></h2>
                    <p class=move || {
                        format!(
                            "text-lg text-muted-foreground max-w-2xl mx-auto transition-all duration-1000 delay-300 {}",
                            fade_up(visible.get()),
                        )
                    }>"My academic journey and continuous learning path"</p>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full mt-4" />
                </div>

                <div class="max-w-4xl mx-auto">
                    <div class="relative">
                        <div class="absolute left-8 md:left-1/2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary to-blue-500 transform md:-translate-x-1/2" />
                        {timeline}
                    </div>
                </div>
            </div>
        </section>
    }
}
