use leptos::{html, prelude::*, server_fn::codec::GetUrl, task::spawn_local};

use super::{
    certificates::Certificates,
    reveal::{fade_up, use_reveal, REVEAL_THRESHOLD},
};
use crate::{
    content::{Certificate, LeetCodeProfile},
    sections::SectionId,
    stats::{
        group_thousands, CountUp, Difficulty, LeetCodeStats, StatsReport, StatsSource,
        COUNT_UP_DELAY,
    },
};

#[server(input = GetUrl)]
pub async fn get_leetcode_stats(username: String) -> Result<StatsReport, ServerFnError> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(ServerFnError::new("Invalid LeetCode username"));
    }
    Ok(crate::stats::stats_report(&username).await)
}

#[component]
pub fn LeetCode(
    leetcode: &'static LeetCodeProfile,
    certificates: &'static [Certificate],
) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, REVEAL_THRESHOLD);
    let (report, set_report) = signal(None::<StatsReport>);
    let (stats, set_stats) = signal(LeetCodeStats::default());
    let counter = StoredValue::new(None::<CountUp>);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    let stop_ticker = move || {
        if let Some(Some(handle)) = ticker.try_update_value(Option::take) {
            handle.clear();
        }
    };

    let count_up = move |target: LeetCodeStats| {
        counter.set_value(Some(CountUp::new(target)));
        let step = move || {
            let Some(Some((frame, done))) = counter
                .try_update_value(|c| c.as_mut().map(|c| (c.advance(), c.is_done())))
            else {
                return;
            };
            set_stats.set(frame);
            if done {
                stop_ticker();
            }
        };
        match set_interval_with_handle(step, CountUp::interval()) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(e) => {
                log::warn!("Couldn't start stats count-up: {e:?}");
                set_stats.set(target);
            }
        }
    };

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if !*visible {
                return;
            }
            let username = leetcode.username.clone();
            spawn_local(async move {
                let fetched = get_leetcode_stats(username).await.unwrap_or_else(|e| {
                    log::warn!("LeetCode stats request failed: {e}");
                    StatsReport::fallback()
                });
                if fetched.source == StatsSource::Fallback {
                    log::info!("Showing fallback LeetCode stats");
                }
                set_report.set(Some(fetched));
                set_timeout(move || count_up(fetched.stats), COUNT_UP_DELAY);
            });
        },
        false,
    );
    on_cleanup(stop_ticker);

    let reveal_class = move |base: &'static str| {
        move || format!("{base} {}", fade_up(visible.get()))
    };

    let headline = move || {
        view! {
            <div class="grid md:grid-cols-3 gap-8 mb-12">
                <StatCard
                    title="Total Problems Solved"
                    note="Keep grinding! 💪"
                    delay_ms=0
                    visible=visible
                    value=Signal::derive(move || stats.get().total_solved.to_string())
                />
                <StatCard
                    title="Global Ranking"
                    note="Rising up! 📈"
                    delay_ms=200
                    visible=visible
                    value=Signal::derive(move || format!("#{}", group_thousands(stats.get().ranking)))
                />
                <StatCard
                    title="Acceptance Rate"
                    note="Good accuracy! 🎯"
                    delay_ms=400
                    visible=visible
                    value=Signal::derive(move || format!("{}%", stats.get().acceptance_rate))
                />
            </div>
        }
    };

    let breakdown = move || {
        Difficulty::ALL
            .into_iter()
            .enumerate()
            .map(|(i, difficulty)| {
                let delay = format!("{}ms", 600 + i * 200);
                let transition_delay = delay.clone();
                view! {
                    <div
                        class=reveal_class(
                            "glass rounded-lg p-6 border border-white/20 hover:border-primary/30 transition-all duration-500 hover:shadow-lg group",
                        )
                        style:animation-delay=delay
                    >
                        <div class="flex items-center justify-between mb-4 font-semibold">
                            <span>{difficulty.label()} " Problems"</span>
                            <span class=format!("w-3 h-3 rounded-full {}", difficulty.color()) />
                        </div>
                        <div class="space-y-4">
                            <div class="flex justify-between items-center">
                                <span class="text-2xl font-bold">
                                    {move || difficulty.solved(&stats.get())}
                                </span>
                                <span class="text-sm text-muted-foreground">
                                    {format!("/ {}", difficulty.total())}
                                </span>
                            </div>
                            <div class="w-full bg-muted rounded-full h-2 overflow-hidden">
                                <div
                                    class=format!(
                                        "h-full {} rounded-full transition-all duration-1000 ease-out",
                                        difficulty.color(),
                                    )
                                    style:width=move || format!("{}%", difficulty.bar_width(&stats.get()))
                                    style:transition-delay=transition_delay
                                />
                            </div>
                            <div class="text-sm text-muted-foreground">
                                {move || format!("{}% completed", difficulty.percent_completed(&stats.get()))}
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id=SectionId::LeetCode.id() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class=reveal_class(
                        "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000",
                    )>
                        <span class="gradient-text">"LeetCode"</span>
                        " Stats"
                    </h2>
                    <p class=reveal_class(
                        "text-lg text-muted-foreground max-w-2xl mx-auto transition-all duration-1000 delay-300",
                    )>"My problem-solving journey and competitive programming achievements"</p>
                    <div class="flex items-center justify-center gap-2 mt-4">
                        <div class="w-20 h-1 bg-primary rounded-full" />
                        <span class="text-sm text-muted-foreground px-2">
                            "@" {leetcode.username.as_str()}
                        </span>
                        <div class="w-20 h-1 bg-primary rounded-full" />
                    </div>
                </div>

                <div class="max-w-6xl mx-auto">
                    <Show
                        when=move || report.get().is_some()
                        fallback=|| {
                            view! {
                                <div class="text-center py-12">
                                    <div class="w-8 h-8 border-4 border-primary/30 border-t-primary rounded-full animate-spin mx-auto mb-4"></div>
                                    <p class="text-muted-foreground">"Loading LeetCode stats..."</p>
                                </div>
                            }
                        }
                    >
                        <Show when=move || {
                            report.get().is_some_and(|r| r.source == StatsSource::Fallback)
                        }>
                            <div class="text-center pb-8">
                                <p class="text-red-500 mb-2">"⚠️ Live stats are unavailable right now"</p>
                                <p class="text-sm text-muted-foreground">"Showing fallback data"</p>
                            </div>
                        </Show>
                        {headline}
                        <div class="grid md:grid-cols-3 gap-8">{breakdown}</div>
                        <div class="text-center mt-12">
                            <a
                                href=leetcode.profile_url()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-6 py-3 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition-all duration-300 hover:scale-105"
                            >
                                <span>"View Full Profile"</span>
                                <span aria-hidden="true">"↗"</span>
                            </a>
                        </div>
                        <Certificates certificates=certificates />
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    note: &'static str,
    delay_ms: u32,
    visible: Signal<bool>,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "text-center glass rounded-lg p-6 border border-white/20 hover:border-primary/30 transition-all duration-500 hover:shadow-lg group {}",
                    fade_up(visible.get()),
                )
            }
            style:animation-delay=format!("{delay_ms}ms")
        >
            <h3 class="text-lg text-muted-foreground mb-4">{title}</h3>
            <div class="text-4xl font-bold text-primary mb-2 group-hover:scale-110 transition-transform duration-300">
                {move || value.get()}
            </div>
            <p class="text-sm text-muted-foreground">{note}</p>
        </div>
    }
}
