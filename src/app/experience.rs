use leptos::{html, prelude::*};

use super::reveal::{fade_up, use_reveal, REVEAL_THRESHOLD};
use crate::{content::ExperienceEntry, sections::SectionId};

#[component]
pub fn Experience(entries: &'static [ExperienceEntry]) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, REVEAL_THRESHOLD);

    let cards = entries
        .iter()
        .enumerate()
        .map(|(i, exp)| {
            let achievements = exp
                .achievements
                .iter()
                .map(|a| {
                    view! {
                        <li class="flex items-start text-muted-foreground">
                            <span class="text-primary mr-3 mt-0.5">"▸"</span>
                            <span class="leading-relaxed">{a.as_str()}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div
                    class=move || format!("mb-12 transition-all duration-1000 {}", fade_up(visible.get()))
                    style:animation-delay=format!("{}ms", i * 200)
                >
                    <div class="glass p-8 rounded-lg border border-white/20 hover:border-primary/30 transition-all duration-300 hover:shadow-lg group">
                        <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-6">
                            <div class="flex items-center mb-4 md:mb-0">
                                <div class=format!(
                                    "w-12 h-12 {} rounded-lg flex items-center justify-center text-white text-xl mr-4 group-hover:scale-110 transition-transform duration-300",
                                    exp.color,
                                )>{exp.icon.as_str()}</div>
                                <div>
                                    <h3 class="text-xl font-bold text-primary group-hover:text-primary/80 transition-colors duration-300">
                                        {exp.title.as_str()}
                                    </h3>
                                    <p class="text-muted-foreground font-medium">{exp.company.as_str()}</p>
                                </div>
                            </div>
                            <div class="flex flex-col md:items-end">
                                <span class="text-sm bg-primary/10 text-primary px-3 py-1 rounded-full mb-2">
                                    {exp.duration.as_str()}
                                </span>
                                <span class=format!(
                                    "text-xs px-2 py-1 rounded-full {}",
                                    exp.kind.badge_class(),
                                )>{exp.kind.label()}</span>
                            </div>
                        </div>
                        <p class="text-muted-foreground mb-6 leading-relaxed">{exp.description.as_str()}</p>
                        <div class="space-y-3">
                            <h4 class="font-semibold text-sm uppercase tracking-wide text-muted-foreground">
                                "Key Achievements"
                            </h4>
                            <ul class="space-y-2">{achievements}</ul>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Experience.id() node_ref=section class="py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50/50 to-purple-50/50 dark:from-blue-950/20 dark:to-purple-950/20" />
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }>"My " <span class="gradient-text">"Experience"</span></h2>
                    <p class=move || {
                        format!(
                            "text-lg text-muted-foreground max-w-2xl mx-auto transition-all duration-1000 delay-300 {}",
                            fade_up(visible.get()),
                        )
                    }>
                        "Professional experiences, internships, and achievements that have shaped my journey"
                    </p>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full mt-4" />
                </div>
                <div class="max-w-4xl mx-auto">{cards}</div>
            </div>
        </section>
    }
}
