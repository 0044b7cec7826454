//! Bodies of the landing page sections, one component per section kind.

use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::animated_section::{Reveal, RevealGroup};
use crate::components::newsletter::NewsletterForm;
use crate::config::{
    AboutSection, ContactSection, DestinationsSection, Heading, HeroSection, PackagesSection,
    ServicesSection,
};

fn heading(heading: &Heading) -> Html {
    html! {
        <div class="section-header">
            <h2>
                {&heading.prefix}
                <span class="gradient-text">{&heading.highlight}</span>
                {&heading.suffix}
            </h2>
        </div>
    }
}

/// Inline custom property used by the stagger rules in the page stylesheet.
fn stagger(index: usize) -> String {
    format!("--stagger: {}", index)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub section: HeroSection,
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { section, on_navigate } = props;

    html! {
        <section id={section.id.clone()} class="hero">
            <div class="hero-background">
                <img src={section.background_image.clone()} alt={section.background_alt.clone()} />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-float hero-float-left">{"📷"}</div>
            <div class="hero-float hero-float-right">{"❤"}</div>

            <div class="hero-content">
                <div class="hero-badges hero-enter" style="animation-delay: 0.2s">
                    { for section.badges.iter().map(|badge| html! {
                        <div class="hero-badge">
                            <span>{&badge.icon}</span>
                            <span>{&badge.text}</span>
                        </div>
                    }) }
                </div>

                <h1 class="hero-enter" style="animation-delay: 0.4s">
                    {&section.title}
                    <br />
                    <span class="gradient-text hero-highlight">{&section.highlight}</span>
                </h1>

                <p class="hero-subtitle hero-enter" style="animation-delay: 0.6s">
                    {&section.subtitle}
                </p>

                <div class="hero-actions hero-pop" style="animation-delay: 0.8s">
                    <AnchorLink
                        target={section.primary_cta.target.clone()}
                        on_navigate={on_navigate.clone()}
                        classes="hero-cta hero-cta-primary"
                    >
                        {&section.primary_cta.label}
                        <span class="arrow">{"→"}</span>
                    </AnchorLink>
                    <AnchorLink
                        target={section.secondary_cta.target.clone()}
                        on_navigate={on_navigate.clone()}
                        classes="hero-cta hero-cta-secondary"
                    >
                        {&section.secondary_cta.label}
                    </AnchorLink>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: var(--gradient-hero);
                }

                .hero-float {
                    position: absolute;
                    font-size: 2.5rem;
                    color: rgba(255, 255, 255, 0.2);
                    animation: float 3s ease-in-out infinite;
                }

                .hero-float-left {
                    top: 5rem;
                    left: 2.5rem;
                }

                .hero-float-right {
                    bottom: 8rem;
                    right: 4rem;
                    animation-delay: 1s;
                }

                .hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 72rem;
                }

                .hero-badges {
                    display: inline-flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                }

                .hero-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                    font-size: 0.875rem;
                }

                .hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    color: #ffffff;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                }

                .hero-highlight {
                    display: block;
                    background-image: linear-gradient(90deg, #facc15, #f472b6, #60a5fa);
                }

                .hero-subtitle {
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                }

                .hero-cta {
                    padding: 1rem 2.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: transform 0.3s ease, background 0.3s ease, color 0.3s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px) scale(1.05);
                }

                .hero-cta-primary {
                    background: #ffffff;
                    color: #111827;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                }

                .hero-cta-primary .arrow {
                    display: inline-block;
                    margin-left: 0.5rem;
                    transition: transform 0.3s ease;
                }

                .hero-cta-primary:hover .arrow {
                    transform: translateX(4px);
                }

                .hero-cta-secondary {
                    border: 2px solid #ffffff;
                    color: #ffffff;
                }

                .hero-cta-secondary:hover {
                    background: #ffffff;
                    color: #111827;
                }

                .hero-enter {
                    opacity: 0;
                    animation: heroEnter 1s ease forwards;
                }

                .hero-pop {
                    opacity: 0;
                    animation: heroPop 0.8s ease forwards;
                }

                @keyframes heroEnter {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes heroPop {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub section: AboutSection,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section = &props.section;

    html! {
        <div class="container">
            { heading(&section.heading) }
            <p class="section-intro reveal-item">{&section.intro}</p>

            <div class="about-grid">
                <div class="about-media reveal-scale">
                    <div class="about-image">
                        <img src={section.image.clone()} alt={section.image_alt.clone()} />
                    </div>
                    <div class="about-badge">
                        <div class="about-badge-icon">{"✓"}</div>
                        <div>
                            <p class="about-badge-title">{&section.badge_title}</p>
                            <p class="about-badge-caption">{&section.badge_caption}</p>
                        </div>
                    </div>
                </div>

                <div class="about-story">
                    <h3 class="reveal-item">{&section.story_title}</h3>
                    <p class="reveal-item">{&section.story}</p>
                    <div class="stats-grid">
                        { for section.stats.iter().enumerate().map(|(i, stat)| html! {
                            <div class="stat reveal-scale" style={stagger(i)}>
                                <div class="icon-tile">{&stat.icon}</div>
                                <p class="stat-value">{&stat.value}</p>
                                <p class="stat-label">{&stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 4rem;
                    align-items: center;
                }

                .about-media {
                    position: relative;
                }

                .about-image {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .about-image img {
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                    display: block;
                }

                .about-badge {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    animation: float 4s ease-in-out infinite;
                }

                .about-badge-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #4ade80, #3b82f6);
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .about-badge p {
                    margin: 0;
                }

                .about-badge-title {
                    font-weight: 700;
                }

                .about-badge-caption {
                    font-size: 0.875rem;
                    color: var(--color-neutral);
                }

                .about-story h3 {
                    font-size: 1.875rem;
                    margin: 0 0 1.5rem;
                }

                .about-story > p {
                    font-size: 1.125rem;
                    color: var(--color-neutral);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }

                .stat-label {
                    color: var(--color-neutral);
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub section: ServicesSection,
    pub grid: Reveal,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let section = &props.section;

    html! {
        <div class="container">
            { heading(&section.heading) }
            <p class="section-intro reveal-item">{&section.intro}</p>

            <RevealGroup reveal={props.grid.clone()} class="card-grid">
                { for section.items.iter().enumerate().map(|(i, service)| html! {
                    <div class="glass-card service-card reveal-scale" style={stagger(i)}>
                        <div class="icon-tile" style={format!("background: {}", service.color)}>
                            {&service.icon}
                        </div>
                        <h3>{&service.title}</h3>
                        <p>{&service.description}</p>
                    </div>
                }) }
            </RevealGroup>

            <style>
                {r#"
                .service-card {
                    background: #ffffff;
                    border: 2px solid transparent;
                }

                .service-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                    transition: color 0.3s ease;
                }

                .service-card:hover h3 {
                    color: var(--color-primary);
                }

                .service-card p {
                    color: var(--color-neutral);
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackagesProps {
    pub section: PackagesSection,
    pub grid: Reveal,
    pub on_navigate: Callback<String>,
    pub booking_target: String,
}

#[function_component(Packages)]
pub fn packages(props: &PackagesProps) -> Html {
    let section = &props.section;

    html! {
        <div class="container">
            { heading(&section.heading) }
            <p class="section-intro reveal-item">{&section.intro}</p>

            <RevealGroup reveal={props.grid.clone()} class="card-grid">
                { for section.packages.iter().enumerate().map(|(i, package)| html! {
                    <div
                        class={classes!("glass-card", "package-card", "reveal-scale", package.featured.then(|| "featured"))}
                        style={stagger(i)}
                    >
                        if package.featured {
                            <span class="package-flag">{"Most Popular"}</span>
                        }
                        <h3>{&package.name}</h3>
                        <p class="package-duration">{&package.duration}</p>
                        <p class="package-price">
                            <span class="price-from">{"From "}</span>
                            {format!("${}", package.price)}
                        </p>
                        <ul>
                            { for package.features.iter().map(|feature| html! {
                                <li>{"✓ "}{feature}</li>
                            }) }
                        </ul>
                        <AnchorLink
                            target={props.booking_target.clone()}
                            on_navigate={props.on_navigate.clone()}
                            classes="package-cta"
                        >
                            {"Book Now"}
                        </AnchorLink>
                    </div>
                }) }
            </RevealGroup>

            <style>
                {r#"
                .package-card {
                    background: #ffffff;
                    display: flex;
                    flex-direction: column;
                }

                .package-card.featured {
                    border: 2px solid var(--color-primary);
                    transform: scale(1.03);
                }

                .package-flag {
                    align-self: flex-start;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: var(--gradient-secondary);
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .package-card h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }

                .package-duration {
                    color: var(--color-neutral);
                }

                .package-price {
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--color-primary);
                    margin: 0.5rem 0 1.5rem;
                }

                .price-from {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--color-neutral);
                }

                .package-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex: 1;
                }

                .package-card li {
                    padding: 0.375rem 0;
                    color: var(--color-neutral);
                }

                .package-cta {
                    text-align: center;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: var(--gradient-primary);
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DestinationsProps {
    pub section: DestinationsSection,
    pub grid: Reveal,
}

#[function_component(Destinations)]
pub fn destinations(props: &DestinationsProps) -> Html {
    let section = &props.section;

    html! {
        <div class="container">
            { heading(&section.heading) }
            <p class="section-intro reveal-item">{&section.intro}</p>

            <RevealGroup reveal={props.grid.clone()} class="card-grid">
                { for section.destinations.iter().enumerate().map(|(i, destination)| html! {
                    <div class="destination-card reveal-scale" style={stagger(i)}>
                        <div class="destination-image">
                            <img src={destination.image.clone()} alt={destination.name.clone()} />
                            <div class="destination-shade"></div>
                            <div class="destination-rating">
                                <span class="star">{"★"}</span>
                                <span>{format!("{:.1}", destination.rating)}</span>
                            </div>
                            <div class="destination-price">
                                <span class="price-from">{"From "}</span>
                                <span class="price-value">{format!("${}", destination.price)}</span>
                            </div>
                        </div>
                        <div class="destination-body">
                            <h3>{&destination.name}</h3>
                            <p>{&destination.description}</p>
                            <button class="destination-explore">
                                {"Explore Now"}
                                <span class="arrow">{"→"}</span>
                            </button>
                        </div>
                    </div>
                }) }
            </RevealGroup>

            <style>
                {r#"
                .destination-card {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: transform 0.5s ease, box-shadow 0.5s ease, opacity 0.6s ease;
                }

                .destination-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .destination-image {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }

                .destination-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .destination-card:hover .destination-image img {
                    transform: scale(1.1);
                }

                .destination-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                }

                .destination-rating,
                .destination-price {
                    position: absolute;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                }

                .destination-rating {
                    top: 1rem;
                    right: 1rem;
                    padding: 0.5rem 0.75rem;
                    display: flex;
                    gap: 0.25rem;
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .destination-rating .star {
                    color: #facc15;
                }

                .destination-price {
                    bottom: 1rem;
                    left: 1rem;
                    padding: 0.5rem 1rem;
                }

                .price-value {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }

                .destination-body {
                    padding: 2rem;
                }

                .destination-body h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.75rem;
                    transition: color 0.3s ease;
                }

                .destination-card:hover h3 {
                    color: var(--color-primary);
                }

                .destination-body p {
                    color: var(--color-neutral);
                    margin: 0 0 1.5rem;
                }

                .destination-explore {
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--color-primary);
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .destination-explore .arrow {
                    display: inline-block;
                    margin-left: 0.5rem;
                    transition: transform 0.3s ease;
                }

                .destination-card:hover .destination-explore .arrow {
                    transform: translateX(4px);
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub section: ContactSection,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section = &props.section;

    html! {
        <div class="container">
            { heading(&section.heading) }
            <p class="section-intro reveal-item">{&section.intro}</p>

            <div class="contact-grid">
                <div>
                    <h3 class="contact-title">{&section.details_title}</h3>
                    <div class="contact-details">
                        { for section.details.iter().enumerate().map(|(i, detail)| html! {
                            <div class="contact-detail reveal-item" style={stagger(i)}>
                                <div class="icon-tile icon-tile-small">{&detail.icon}</div>
                                <div>
                                    <h4>{&detail.title}</h4>
                                    <p>{&detail.details}</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="contact-socials reveal-item">
                        <h4>{&section.socials_title}</h4>
                        <div class="social-row">
                            { for section.socials.iter().map(|social| html! {
                                <a
                                    href={social.href.clone()}
                                    class="social-link"
                                    aria-label={social.label.clone()}
                                    style={format!("background: {}", social.color)}
                                >
                                    {&social.icon}
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="reveal-scale">
                    <NewsletterForm newsletter={section.newsletter.clone()} />
                </div>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 4rem;
                    align-items: start;
                }

                .contact-title {
                    font-size: 1.875rem;
                    margin: 0 0 3rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .contact-detail {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .contact-detail h4,
                .contact-socials h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .contact-detail p {
                    color: #d1d5db;
                    margin: 0;
                }

                .contact-socials {
                    margin-top: 3rem;
                }

                .social-row {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }

                .social-link {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease;
                }

                .social-link:hover {
                    transform: translateY(-2px) scale(1.1);
                }
                "#}
            </style>
        </div>
    }
}
