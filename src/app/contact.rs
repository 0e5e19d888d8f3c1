use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};

use super::reveal::{fade_up, slide_left, slide_right, use_reveal, REVEAL_THRESHOLD};
use crate::{
    contact::{ContactForm, NoticeSlot, NOTICE_TIMEOUT},
    content::{ContactInfo, SocialLink},
    sections::SectionId,
};

#[server]
pub async fn send_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::{
        contact::{relay, RelayConfig},
        content::profile,
    };

    let form = ContactForm::new(name, email, message)
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let profile = profile().map_err(|e| ServerFnError::new(e.to_string()))?;
    let config = RelayConfig::from_env(&profile.contact.email).map_err(|e| {
        tracing::error!(error = %e, "contact relay unavailable");
        ServerFnError::new(e.to_string())
    })?;

    tracing::debug!(endpoint = %config.endpoint, "relaying contact message");
    relay(&crate::HTTP_CLIENT, &config, &form)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "contact relay failed");
            ServerFnError::new(e.to_string())
        })?;
    tracing::info!(from = %form.email, "contact message relayed");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Sent,
    Failed,
    Invalid(String),
}

#[component]
pub fn Contact(contact: &'static ContactInfo, socials: &'static [SocialLink]) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, REVEAL_THRESHOLD);
    let (form, set_form) = signal(ContactForm::default());
    let (notice, set_notice) = signal(NoticeSlot::<Notice>::default());
    let send = ServerAction::<SendMessage>::new();
    let pending = send.pending();

    let show_notice = move |next: Notice| {
        let Some(generation) = set_notice.try_update(|slot| slot.show(next)) else {
            return;
        };
        set_timeout(
            move || {
                set_notice.try_maybe_update(|slot| (slot.dismiss(generation), ()));
            },
            NOTICE_TIMEOUT,
        );
    };

    Effect::watch(
        move || send.value().get(),
        move |result, _, _| match result {
            Some(Ok(())) => {
                set_form.set(ContactForm::default());
                show_notice(Notice::Sent);
            }
            Some(Err(e)) => {
                log::error!("Failed to send message: {e}");
                show_notice(Notice::Failed);
            }
            None => {}
        },
        false,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().validate() {
            Ok(valid) => {
                send.dispatch(SendMessage {
                    name: valid.name,
                    email: valid.email,
                    message: valid.message,
                });
            }
            Err(e) => show_notice(Notice::Invalid(e.to_string())),
        }
    };

    let notice_view = move || {
        notice.get().current().cloned().map(|n| {
            let (title, body, tone) = match n {
                Notice::Sent => (
                    "Message Sent! 🎉",
                    "Thank you for reaching out. I'll get back to you soon!".to_string(),
                    "border-green-500/40 bg-green-500/10",
                ),
                Notice::Failed => (
                    "Failed to send message",
                    format!("Please try again or contact me directly at {}", contact.email),
                    "border-red-500/40 bg-red-500/10",
                ),
                Notice::Invalid(reason) => (
                    "Please check the form",
                    reason,
                    "border-yellow-500/40 bg-yellow-500/10",
                ),
            };
            view! {
                <div role="status" class=format!("rounded-lg border p-4 {tone}")>
                    <p class="font-semibold">{title}</p>
                    <p class="text-sm text-muted-foreground">{body}</p>
                </div>
            }
        })
    };

    let social_links = socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.url.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=format!(
                        "flex items-center justify-center px-4 py-3 rounded-md glass border border-white/20 hover:border-primary/30 transition-all duration-300 group {}",
                        social.hover_class,
                    )
                >
                    <span class="text-2xl mr-3 group-hover:scale-110 transition-transform duration-300">
                        {social.icon.as_str()}
                    </span>
                    {social.name.as_str()}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Contact.id() node_ref=section class="py-20 relative">
            <div class="absolute inset-0 gradient-bg opacity-5" />

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-4 transition-all duration-1000 {}",
                            fade_up(visible.get()),
                        )
                    }>"Get In " <span class="gradient-text">"Touch"</span></h2>
                    <p class=move || {
                        format!(
                            "text-lg text-muted-foreground max-w-2xl mx-auto transition-all duration-1000 delay-300 {}",
                            fade_up(visible.get()),
                        )
                    }>"Have a project in mind or just want to chat? I'd love to hear from you!"</p>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full mt-4" />
                </div>

                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12">
                    <div class=move || {
                        format!(
                            "glass rounded-lg p-8 border border-white/20 hover:border-primary/30 transition-all duration-500 {}",
                            slide_left(visible.get()),
                        )
                    }>
                        <h3 class="text-2xl font-semibold mb-6">"Send me a message"</h3>
                        <form on:submit=on_submit class="space-y-6">
                            <div class="space-y-2">
                                <label for="name" class="text-sm font-medium">"Name"</label>
                                <input
                                    id="name"
                                    name="name"
                                    required
                                    placeholder="Your name"
                                    class="w-full rounded-md px-3 py-2 glass border border-white/20 focus:border-primary/50 transition-all duration-300"
                                    prop:value=move || form.get().name
                                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="email" class="text-sm font-medium">"Email"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    required
                                    placeholder="your.email@example.com"
                                    class="w-full rounded-md px-3 py-2 glass border border-white/20 focus:border-primary/50 transition-all duration-300"
                                    prop:value=move || form.get().email
                                    on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="message" class="text-sm font-medium">"Message"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required
                                    rows="5"
                                    placeholder="Tell me about your project or just say hello!"
                                    class="w-full rounded-md px-3 py-2 glass border border-white/20 focus:border-primary/50 transition-all duration-300 resize-none"
                                    prop:value=move || form.get().message
                                    on:input=move |ev| set_form.update(|f| f.message = event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=move || pending.get()
                                class="w-full rounded-md px-6 py-3 text-white gradient-bg hover:opacity-90 transition-opacity duration-300 disabled:opacity-60"
                            >
                                {move || {
                                    if pending.get() {
                                        Either::Left(view! {
                                            <span class="flex items-center justify-center">
                                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin mr-2" />
                                                "Sending..."
                                            </span>
                                        })
                                    } else {
                                        Either::Right("Send Message 🚀")
                                    }
                                }}
                            </button>
                            {notice_view}
                        </form>
                    </div>

                    <div class=move || {
                        format!("space-y-8 transition-all duration-1000 delay-500 {}", slide_right(visible.get()))
                    }>
                        <div class="glass rounded-lg p-8 border border-white/20 hover:border-primary/30 transition-all duration-300">
                            <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
                            <div class="space-y-4">
                                <InfoRow icon="📧" label="Email" value=contact.email.as_str() />
                                <InfoRow icon="📱" label="Phone" value=contact.phone.as_str() />
                                <InfoRow icon="📍" label="Location" value=contact.location.as_str() />
                            </div>
                        </div>

                        <div class="glass rounded-lg p-8 border border-white/20 hover:border-primary/30 transition-all duration-300">
                            <h3 class="text-xl font-bold mb-6">"Follow Me"</h3>
                            <div class="grid grid-cols-2 gap-4">{social_links}</div>
                        </div>

                        <div class="glass rounded-lg p-8 border border-white/20 hover:border-primary/30 transition-all duration-300 group text-center">
                            <div class="text-4xl mb-4 group-hover:scale-110 transition-transform duration-300">"⚡"</div>
                            <h3 class="text-lg font-bold mb-2">"Quick Response"</h3>
                            <p class="text-muted-foreground">{contact.response_note.as_str()}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="text-2xl">{icon}</div>
            <div>
                <p class="font-medium">{label}</p>
                <p class="text-muted-foreground">{value}</p>
            </div>
        </div>
    }
}
