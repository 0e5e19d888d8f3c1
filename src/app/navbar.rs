use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    sections::{active_section, is_scrolled, SectionBounds, SectionId},
    theme::Theme,
};

/// Smooth-scroll the page to `section`, if it is rendered.
pub fn scroll_to(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn section_bounds() -> Vec<SectionBounds> {
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = document()
                .get_element_by_id(section.id())?
                .get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

#[component]
pub fn Navbar(
    brand: &'static str,
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let (active, set_active) = signal(SectionId::Home);
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        scroll_y.track();
        if let Some(current) = active_section(section_bounds()) {
            set_active.set(current);
        }
    });

    let go = move |section: SectionId| {
        scroll_to(section);
        set_menu_open.set(false);
    };
    let toggle_theme = move |_| set_theme.update(|t| *t = t.toggle());
    let theme_icon = move || {
        let theme = theme.get();
        view! {
            <div class=if theme.is_dark() {
                "transition-transform duration-300 rotate-180"
            } else {
                "transition-transform duration-300 rotate-0"
            }>{theme.icon()}</div>
        }
    };

    let desktop_items = SectionId::ALL
        .into_iter()
        .map(|section| {
            let is_active = move || active.get() == section;
            view! {
                <button
                    on:click=move |_| go(section)
                    class=move || {
                        if is_active() {
                            "relative px-3 py-2 text-sm font-medium transition-colors duration-200 hover:text-primary text-primary"
                        } else {
                            "relative px-3 py-2 text-sm font-medium transition-colors duration-200 hover:text-primary text-foreground/80"
                        }
                    }
                >
                    {section.label()}
                    <Show when=is_active>
                        <div class="absolute bottom-0 left-0 right-0 h-0.5 bg-primary rounded-full" />
                    </Show>
                </button>
            }
        })
        .collect_view();

    let mobile_items = move || {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        on:click=move |_| go(section)
                        class=move || {
                            if active.get() == section {
                                "flex items-center px-4 py-3 text-left rounded-lg transition-colors duration-200 hover:bg-accent bg-primary/10 text-primary border-l-4 border-primary"
                            } else {
                                "flex items-center px-4 py-3 text-left rounded-lg transition-colors duration-200 hover:bg-accent text-foreground/80"
                            }
                        }
                    >
                        <span class="text-lg font-medium">{section.label()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 glass shadow-lg py-2"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between">
                    <div
                        class="text-2xl font-bold gradient-text cursor-pointer"
                        on:click=move |_| go(SectionId::Home)
                    >
                        {brand}
                    </div>

                    <div class="hidden md:flex items-center space-x-8">{desktop_items}</div>

                    <div class="md:hidden flex items-center space-x-2">
                        <button
                            class="relative overflow-hidden px-3 py-2 rounded-md hover:bg-accent"
                            aria-label="Open navigation"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </div>

                    <div class="hidden md:block">
                        <button
                            class="relative overflow-hidden px-3 py-2 rounded-md hover:bg-accent"
                            aria-label="Toggle theme"
                            on:click=toggle_theme
                        >
                            {theme_icon}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-black/40 md:hidden"
                    on:click=move |_| set_menu_open.set(false)
                />
                <div class="fixed top-0 right-0 bottom-0 z-50 w-[300px] sm:w-[400px] bg-background p-6 shadow-xl md:hidden">
                    <div class="flex flex-col space-y-4 mt-8">
                        <div class="text-xl font-bold gradient-text mb-6">"Navigation"</div>
                        {mobile_items()}
                        <div class="pt-4 border-t border-border">
                            <button
                                class="flex items-center justify-between w-full px-4 py-3 text-left rounded-lg transition-colors duration-200 hover:bg-accent"
                                on:click=toggle_theme
                            >
                                <span class="text-lg font-medium">"Theme"</span>
                                {theme_icon}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
