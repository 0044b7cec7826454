use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config::{Brand, Footer};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub footer: Footer,
    pub on_navigate: Callback<String>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &FooterProps) -> Html {
    let FooterProps { brand, footer, on_navigate } = props;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span>{&brand.logo_icon}</span>
                    <span>{&brand.name}</span>
                </div>

                <div class="footer-links">
                    { for footer.links.iter().map(|link| html! {
                        <AnchorLink
                            key={link.target.clone()}
                            target={link.target.clone()}
                            on_navigate={on_navigate.clone()}
                            classes="footer-link"
                        >
                            {&link.label}
                        </AnchorLink>
                    }) }
                    // Legal pages are not part of this site yet.
                    { for footer.legal.iter().map(|label| html! {
                        <a href="#" class="footer-link">{label}</a>
                    }) }
                </div>

                <p class="footer-copyright">
                    {format!("© {} {}. {}", year, brand.name, footer.rights)}
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 0 1.5rem 3rem;
                }

                .footer-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    align-items: center;
                    justify-content: space-between;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .footer-link,
                .footer-copyright {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    text-decoration: none;
                    margin: 0;
                }

                .footer-link:hover {
                    color: #ffffff;
                }
                "#}
            </style>
        </footer>
    }
}
