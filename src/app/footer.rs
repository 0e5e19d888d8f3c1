use leptos::{ev::MouseEvent, prelude::*};

use super::navbar::scroll_to;
use crate::{content::Profile, sections::SectionId};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let links = SectionId::FOOTER
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class="text-white/80 hover:text-white transition-colors duration-300"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        scroll_to(section);
                    }
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="relative py-12 mt-20">
            <div class="absolute inset-0 gradient-bg" />
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center">
                    <div class="mb-8">
                        <h3 class="text-2xl font-bold text-white mb-2">{profile.full_name.as_str()}</h3>
                        <p class="text-white/80">{profile.footer_tagline.as_str()}</p>
                    </div>
                    <div class="flex justify-center space-x-6 mb-8">{links}</div>
                    <div class="border-t border-white/20 pt-8">
                        <p class="text-white/60">
                            {format!(
                                "© {} {}. Made with ❤️ and lots of ☕",
                                env!("BUILD_YEAR"),
                                profile.name,
                            )}
                        </p>
                    </div>
                </div>
            </div>
            <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-transparent via-white/30 to-transparent" />
        </footer>
    }
}
