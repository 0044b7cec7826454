use log::debug;
use yew::prelude::*;

use crate::config::Newsletter;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    pub newsletter: Newsletter,
}

/// Signup card. There is no endpoint behind it: submitting only stops the
/// browser from reloading the page.
#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterProps) -> Html {
    let newsletter = &props.newsletter;

    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Newsletter form submitted; no endpoint configured");
    });

    html! {
        <div class="glass-card newsletter">
            <h3>{&newsletter.title}</h3>
            <p class="newsletter-body">{&newsletter.body}</p>

            <form class="newsletter-form" {onsubmit}>
                <div class="newsletter-names">
                    <input type="text" placeholder="First Name" />
                    <input type="text" placeholder="Last Name" />
                </div>
                <input type="email" placeholder="Email Address" />
                <button type="submit">{&newsletter.button}</button>
            </form>

            <p class="newsletter-disclaimer">{&newsletter.disclaimer}</p>

            <style>
                {r#"
                .newsletter {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .newsletter h3 {
                    font-size: 1.875rem;
                    margin: 0 0 1.5rem;
                }

                .newsletter-body {
                    color: #d1d5db;
                    margin: 0 0 2rem;
                }

                .newsletter-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .newsletter-names {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                    gap: 1rem;
                }

                .newsletter-form input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem 1.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.75rem;
                    color: #ffffff;
                    font-family: inherit;
                    font-size: 1rem;
                }

                .newsletter-form input::placeholder {
                    color: #9ca3af;
                }

                .newsletter-form input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px var(--color-primary);
                }

                .newsletter-form button {
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--gradient-primary);
                    color: #ffffff;
                    font-family: inherit;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease;
                }

                .newsletter-form button:hover {
                    transform: translateY(-2px) scale(1.02);
                }

                .newsletter-form button:active {
                    transform: scale(0.98);
                }

                .newsletter-disclaimer {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    text-align: center;
                    margin: 1rem 0 0;
                }
                "#}
            </style>
        </div>
    }
}
