mod about;
mod certificates;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod leetcode;
mod navbar;
mod projects;
mod reveal;

use std::time::Duration;

use codee::string::FromToStringCodec;
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::storage::use_local_storage;

use crate::{
    content::profile,
    theme::{Theme, DARK_CLASS, THEME_KEY},
};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use leetcode::LeetCode;
use navbar::Navbar;
use projects::Projects;

const LOADING_SPLASH: Duration = Duration::from_secs(2);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_KEY);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let toggled = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = toggled {
            log::warn!("Couldn't switch theme class: {e:?}");
        }
    });

    Effect::new(move |_| {
        match set_timeout_with_handle(move || set_loading.set(false), LOADING_SPLASH) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("Couldn't arm loading timer: {e:?}");
                set_loading.set(false);
            }
        }
    });

    let page = move || match profile() {
        Err(e) => Either::Left(view! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-red-500">{e.to_string()}</p>
            </div>
        }),
        Ok(p) => Either::Right(view! {
            <Title text=p.full_name.as_str() />
            <div class="min-h-screen bg-background text-foreground relative overflow-x-hidden">
                <Navbar brand=p.brand.as_str() theme=theme set_theme=set_theme />
                <main class="relative z-10">
                    <Hero name=p.name.as_str() hero=&p.hero />
                    <About about=&p.about />
                    <Projects projects=p.projects.as_slice() />
                    <Education entries=p.education.as_slice() />
                    <Experience entries=p.experience.as_slice() />
                    <LeetCode leetcode=&p.leetcode certificates=p.certificates.as_slice() />
                    <Contact contact=&p.contact socials=p.socials.as_slice() />
                </main>
                <Footer profile=p />
            </div>
        }),
    };

    view! {
        <Show when=move || !loading.get() fallback=LoadingSplash>
            {page}
        </Show>
    }
}

#[component]
fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-primary/30 border-t-primary rounded-full animate-spin mx-auto mb-4"></div>
                <h2 class="text-2xl font-bold gradient-text mb-2">"Loading..."</h2>
                <p class="text-muted-foreground">"Preparing something amazing"</p>
            </div>
        </div>
    }
}
