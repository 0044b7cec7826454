use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::anchor::AnchorLink;
use crate::config::{Brand, NavLink};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub cta: NavLink,
    pub scrolled: bool,
    pub menu_open: bool,
    #[prop_or_default]
    pub active: Option<String>,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        brand,
        links,
        cta,
        scrolled,
        menu_open,
        active,
        on_toggle,
        on_close,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Tapping outside the drawer or pressing Escape dismisses it.
    let close_on_backdrop = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let close_on_escape = {
        let on_close = on_close.clone();
        let menu_open = *menu_open;
        Callback::from(move |e: KeyboardEvent| {
            if menu_open && e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    let home = links
        .first()
        .map(|link| link.target.clone())
        .unwrap_or_default();

    html! {
        <>
            if *menu_open {
                <div class="menu-backdrop" onclick={close_on_backdrop}></div>
            }

            <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))} onkeydown={close_on_escape}>
                <div class="nav-content">
                    <AnchorLink target={home} on_navigate={on_navigate.clone()} classes="nav-logo">
                        <span class="nav-logo-icon">{&brand.logo_icon}</span>
                        <span class="gradient-text">{&brand.name}</span>
                    </AnchorLink>

                    <div class="nav-links">
                        { for links.iter().map(|link| html! {
                            <AnchorLink
                                key={link.target.clone()}
                                target={link.target.clone()}
                                on_navigate={on_navigate.clone()}
                                classes={classes!("nav-link", (active.as_deref() == Some(link.target.as_str())).then(|| "active"))}
                            >
                                {&link.label}
                            </AnchorLink>
                        }) }
                    </div>

                    <AnchorLink target={cta.target.clone()} on_navigate={on_navigate.clone()} classes="nav-cta">
                        {&cta.label}
                    </AnchorLink>

                    <button
                        class={classes!("burger-menu", menu_open.then(|| "open"))}
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div class={classes!("mobile-menu", menu_open.then(|| "mobile-menu-open"))}>
                    { for links.iter().map(|link| html! {
                        <AnchorLink
                            key={link.target.clone()}
                            target={link.target.clone()}
                            on_navigate={on_navigate.clone()}
                            classes="mobile-link"
                        >
                            {&link.label}
                        </AnchorLink>
                    }) }
                    <AnchorLink target={cta.target.clone()} on_navigate={on_navigate.clone()} classes="nav-cta mobile-cta">
                        {&cta.label}
                    </AnchorLink>
                </div>

                <style>
                    {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.5s ease;
                        animation: navDrop 0.6s ease-out;
                    }

                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(24px);
                        -webkit-backdrop-filter: blur(24px);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    }

                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }

                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 80px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }

                    .nav-logo:hover {
                        transform: scale(1.05);
                    }

                    .nav-logo-icon {
                        font-size: 2rem;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #4b5563;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .top-nav:not(.scrolled) .nav-link {
                        color: rgba(255, 255, 255, 0.9);
                    }

                    .nav-link:hover,
                    .nav-link.active,
                    .top-nav:not(.scrolled) .nav-link.active {
                        color: var(--color-primary);
                    }

                    .nav-cta {
                        padding: 0.75rem 2rem;
                        background: var(--gradient-primary);
                        color: #ffffff;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease;
                    }

                    .nav-cta:hover {
                        transform: scale(1.05);
                    }

                    .nav-cta:active {
                        transform: scale(0.95);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: currentColor;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }

                    .top-nav:not(.scrolled) .burger-menu {
                        color: #ffffff;
                    }

                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }

                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }

                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }

                    .mobile-menu {
                        display: none;
                    }

                    .menu-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(17, 24, 39, 0.3);
                    }

                    @media (min-width: 769px) {
                        .menu-backdrop {
                            display: none;
                        }
                    }

                    @media (max-width: 768px) {
                        .nav-links,
                        .nav-content > .nav-cta {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }

                        .mobile-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 0 1.5rem;
                            max-height: 0;
                            opacity: 0;
                            overflow: hidden;
                            background: rgba(255, 255, 255, 0.9);
                            backdrop-filter: blur(24px);
                            border-top: 1px solid rgba(255, 255, 255, 0.2);
                            transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
                        }

                        .mobile-menu.mobile-menu-open {
                            max-height: 480px;
                            opacity: 1;
                            padding: 1rem 1.5rem;
                        }

                        .mobile-link {
                            color: #4b5563;
                            padding: 0.5rem 0;
                            text-decoration: none;
                        }

                        .mobile-link:hover {
                            color: var(--color-primary);
                        }

                        .mobile-cta {
                            text-align: center;
                            margin-top: 1rem;
                        }
                    }
                    "#}
                </style>
            </nav>
        </>
    }
}
