use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Reveal};
use crate::components::footer::SiteFooter;
use crate::components::nav::Nav;
use crate::config::{Section, SiteConfig};
use crate::coordinator::{active_section, Coordinator, PageAction};
use crate::listeners::ScrollSubscription;
use crate::pages::sections::{About, Contact, Destinations, Hero, Packages, Services};
use crate::smooth_scroll::SmoothScroller;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<SiteConfig>,
}

/// Reads the document-space top of each section, in page order, and returns
/// the one currently under the nav bar.
fn spy(ids: &[String], offset: f64, nav_offset: f64) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let tops: Vec<(&str, f64)> = ids
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            Some((id.as_str(), element.get_bounding_client_rect().top() + offset))
        })
        .collect();
    active_section(offset + nav_offset, &tops).map(str::to_string)
}

fn section_class(section: &Section) -> &'static str {
    match section {
        Section::Hero(_) => "",
        Section::About(_) => "section-about",
        Section::Services(_) => "section-services",
        Section::Packages(_) => "section-packages",
        Section::Destinations(_) => "section-destinations",
        Section::Contact(_) => "section-contact",
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = props.config.clone();
    let state = {
        let settings = config.scroll;
        use_reducer(move || Coordinator::new(&settings))
    };
    let scroller = use_mut_ref(SmoothScroller::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |config: &Rc<SiteConfig>| {
                let ids: Vec<String> = config.sections.iter().map(|s| s.id().to_string()).collect();
                let nav_offset = config.scroll.nav_offset_px;

                let subscription = ScrollSubscription::attach(move |offset| {
                    dispatcher.dispatch(PageAction::Scrolled {
                        offset,
                        active: spy(&ids, offset, nav_offset),
                    });
                });
                match &subscription {
                    Ok(subscription) => {
                        info!("Scroll tracking attached");
                        subscription.emit_current();
                    }
                    Err(e) => error!("Scroll tracking disabled: {}", e),
                }

                move || {
                    drop(subscription);
                    info!("Scroll tracking detached");
                }
            },
            config.clone(),
        );
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        let scroller = scroller.clone();
        let settings = config.scroll;
        Callback::from(move |target: String| {
            dispatcher.dispatch(PageAction::Navigated(target.clone()));
            scroller.borrow().scroll_to_section(&target, &settings);
        })
    };

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::CloseMenu))
    };

    let booking_target = config.cta.target.clone();

    // Card grids reveal on their own, later than the section around them.
    let grid = |section: &str| {
        let id = format!("{}-grid", section);
        Reveal {
            shown: state.has_been_shown(&id),
            id,
            threshold: config.scroll.grid_reveal_threshold,
            dispatcher: state.dispatcher(),
        }
    };

    html! {
        <div class="landing-page">
            <Nav
                brand={config.brand.clone()}
                links={config.nav_links.clone()}
                cta={config.cta.clone()}
                scrolled={state.scrolled_past_threshold()}
                menu_open={state.is_menu_open()}
                active={state.active_section().map(str::to_string)}
                {on_toggle}
                {on_close}
                on_navigate={on_navigate.clone()}
            />

            <main>
                { for config.sections.iter().map(|section| match section {
                    Section::Hero(hero) => html! {
                        <Hero key={hero.id.clone()} section={hero.clone()} on_navigate={on_navigate.clone()} />
                    },
                    _ => html! {
                        <AnimatedSection
                            key={section.id().to_string()}
                            id={section.id().to_string()}
                            class={section_class(section)}
                            threshold={config.reveal_threshold_for(section)}
                            shown={state.has_been_shown(section.id())}
                            dispatcher={state.dispatcher()}
                        >
                            {
                                match section {
                                    Section::About(s) => html! { <About section={s.clone()} /> },
                                    Section::Services(s) => html! { <Services section={s.clone()} grid={grid(&s.id)} /> },
                                    Section::Packages(s) => html! {
                                        <Packages
                                            section={s.clone()}
                                            grid={grid(&s.id)}
                                            on_navigate={on_navigate.clone()}
                                            booking_target={booking_target.clone()}
                                        />
                                    },
                                    Section::Destinations(s) => html! { <Destinations section={s.clone()} grid={grid(&s.id)} /> },
                                    Section::Contact(s) => html! { <Contact section={s.clone()} /> },
                                    Section::Hero(_) => html! {},
                                }
                            }
                        </AnimatedSection>
                    },
                }) }
            </main>

            <SiteFooter
                brand={config.brand.clone()}
                footer={config.footer.clone()}
                on_navigate={on_navigate.clone()}
            />

            <style>
                {r#"
                html {
                    scroll-padding-top: 80px;
                }

                .landing-page {
                    overflow-x: hidden;
                }

                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .gradient-text {
                    background-image: var(--gradient-primary);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    color: transparent;
                }

                .section-header {
                    text-align: center;
                }

                .section-header h2 {
                    font-size: clamp(2.5rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .section-intro {
                    font-size: 1.25rem;
                    color: var(--color-neutral);
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                    line-height: 1.6;
                }

                .animated-section {
                    padding: 5rem 0;
                    opacity: 0;
                    transform: translateY(60px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                        transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .animated-section.is-shown {
                    opacity: 1;
                    transform: translateY(0);
                }

                .reveal-item,
                .reveal-scale {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    transition-delay: calc(var(--stagger, 0) * 150ms + 100ms);
                }

                .reveal-item {
                    transform: translateY(60px);
                }

                .reveal-scale {
                    transform: scale(0.8);
                }

                .is-shown .reveal-item,
                .is-shown .reveal-scale {
                    opacity: 1;
                    transform: none;
                }

                .reveal-group:not(.is-shown) .reveal-scale {
                    opacity: 0;
                    transform: scale(0.8);
                }

                @media (min-width: 768px) {
                    .animated-section {
                        padding: 8rem 0;
                    }
                }

                .section-about {
                    background: linear-gradient(135deg, var(--color-neutral-light), #eff6ff);
                }

                .section-destinations {
                    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
                }

                .section-contact {
                    background: linear-gradient(135deg, #111827, #1e3a8a, #581c87);
                    color: #ffffff;
                }

                .section-contact .section-intro {
                    color: #d1d5db;
                }

                .section-contact .gradient-text {
                    background-image: linear-gradient(90deg, #facc15, #f472b6);
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .glass-card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: all 0.5s ease;
                }

                .glass-card:hover {
                    transform: translateY(-8px) scale(1.02);
                }

                .icon-tile {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #3b82f6, #9333ea);
                    color: #ffffff;
                    font-size: 1.75rem;
                    margin-bottom: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                }

                .icon-tile-small {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    font-size: 1.25rem;
                    margin-bottom: 0;
                    flex-shrink: 0;
                }

                .stat:hover .icon-tile,
                .glass-card:hover .icon-tile,
                .contact-detail:hover .icon-tile {
                    transform: scale(1.1);
                }
                "#}
            </style>
        </div>
    }
}
