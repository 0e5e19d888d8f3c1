use leptos::{html, prelude::*};

use super::reveal::{fade_up, use_reveal};
use crate::{content::Project, sections::SectionId};

/// Project cards are tall, so the grid reveals earlier than other sections.
const PROJECTS_THRESHOLD: f64 = 0.2;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, PROJECTS_THRESHOLD);

    let cards = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let tech = project
                .tech_stack
                .iter()
                .map(|t| {
                    view! {
                        <span class="px-3 py-1 bg-primary/10 text-primary rounded-full text-xs font-medium transition-all duration-300 hover:bg-primary/20 hover:scale-105">
                            {t.as_str()}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <div
                    class=move || {
                        format!(
                            "relative group rounded-lg hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 glass border border-white/20 hover:border-primary/30 overflow-hidden {}",
                            fade_up(visible.get()),
                        )
                    }
                    style:animation-delay=format!("{}ms", i * 200)
                >
                    <div class="absolute inset-0 bg-gradient-to-r from-purple-500/10 to-blue-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-0"></div>
                    <div class="p-6 text-center relative z-10">
                        <div class="text-6xl mb-4 transform group-hover:scale-110 group-hover:animate-float transition-all duration-300">
                            {project.icon.as_str()}
                        </div>
                        <h3 class="text-xl font-semibold group-hover:text-primary transition-colors duration-300">
                            {project.title.as_str()}
                        </h3>
                        <p class="text-sm text-muted-foreground mt-2">{project.description.as_str()}</p>
                    </div>
                    <div class="px-6 pb-4 relative z-10">
                        <div class="flex flex-wrap gap-2">{tech}</div>
                    </div>
                    <div class="flex gap-2 px-6 pb-6 relative z-10">
                        <a
                            href=project.github.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 flex items-center justify-center gap-2 px-3 py-2 text-sm rounded-md border border-border group-hover:border-primary/50 transition-colors duration-300"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=project.demo.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 flex items-center justify-center gap-2 px-3 py-2 text-sm rounded-md text-white gradient-bg hover:opacity-90"
                        >
                            "Live Demo"
                        </a>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Projects.id() node_ref=section class="py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-50/50 to-blue-50/50 dark:from-purple-950/20 dark:to-blue-950/20" />
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }>"My " <span class="gradient-text">"Projects"</span></h2>
                    <p class=move || {
                        format!(
                            "text-lg text-muted-foreground max-w-2xl mx-auto transition-all duration-1000 delay-300 {}",
                            fade_up(visible.get()),
                        )
                    }>
                        "Here are some of the projects I've worked on, showcasing my skills in various technologies"
                    </p>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full mt-4" />
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
