use chrono::Datelike;
use yew::prelude::*;

use crate::contact::view::ContactFormView;
use crate::pages::content::{
    Package, PackageGroup, ABOUT_IMAGE, ABOUT_PARAGRAPHS, BRAND, CONTACT_EMAIL, HERO_VIDEO,
    PACKAGE_GROUPS, PORTFOLIO, SECTION_ABOUT, SECTION_CONTACT, SECTION_PORTFOLIO, SECTION_PRICING,
    SECTION_SERVICES, SERVICES, STATS, VIMEO_PROFILE,
};
use crate::scroll;

/// Click handler for in-page links: smooth scroll instead of jumping.
pub fn scroll_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(id);
    })
}

pub fn scroll_home() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    })
}

/// Anchored sections in page order. Each is rendered under the id it is listed with.
pub const PAGE_SECTIONS: &[(&str, fn(&'static str) -> Html)] = &[
    (SECTION_SERVICES, services),
    (SECTION_PORTFOLIO, portfolio),
    (SECTION_ABOUT, about),
    (SECTION_PRICING, pricing),
    (SECTION_CONTACT, contact),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Hero />
            { for PAGE_SECTIONS.iter().map(|&(id, render)| render(id)) }
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-background">
                <video autoplay=true muted=true loop=true playsinline=true>
                    <source src={HERO_VIDEO} type="video/mp4" />
                </video>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1>
                    {"Post-Production"}
                    <span class="hero-accent">{"Excellence"}</span>
                </h1>
                <p>{"Transforming raw footage into cinematic masterpieces through expert editing and storytelling"}</p>
                <a href={format!("#{}", SECTION_PORTFOLIO)} class="hero-cta" onclick={scroll_link(SECTION_PORTFOLIO)}>
                    {"VIEW OUR WORK"}
                </a>
            </div>
            <a href={format!("#{}", SECTION_SERVICES)} class="hero-scroll-hint" onclick={scroll_link(SECTION_SERVICES)}>{"⌄"}</a>
        </header>
    }
}

fn services(id: &'static str) -> Html {
    html! {
        <section {id} class="landing-section alternate">
            <div class="section-heading">
                <h2>{"Our Expertise"}</h2>
            </div>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <ul>
                            { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn portfolio(id: &'static str) -> Html {
    html! {
        <section {id} class="landing-section">
            <div class="section-heading">
                <h2>{"Featured Work"}</h2>
            </div>
            <div class="card-grid">
                { for PORTFOLIO.iter().map(|work| html! {
                    <a href={work.link} target="_blank" rel="noopener noreferrer" class="work-card">
                        <img src={work.image} alt={work.title} />
                        <div class="work-caption">
                            <h3>{work.title}</h3>
                            <p>{work.category}</p>
                        </div>
                    </a>
                }) }
            </div>
            <div class="see-more">
                <a href={VIMEO_PROFILE} target="_blank" rel="noopener noreferrer">{"See More"}</a>
            </div>
        </section>
    }
}

fn about(id: &'static str) -> Html {
    html! {
        <section {id} class="landing-section alternate">
            <div class="about-grid">
                <div>
                    <h2>{"The Art of Editing"}</h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    <div class="stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <img src={ABOUT_IMAGE} alt="Video editing workspace" />
            </div>
        </section>
    }
}

fn package_card(package: &Package) -> Html {
    html! {
        <div class="package-card">
            <h4>{package.name}</h4>
            <div class="package-price">
                <span>{"Starting at"}</span>
                {package.starting_at()}
            </div>
            <ul>
                { for package.features.iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>
        </div>
    }
}

fn package_group(group: &PackageGroup) -> Html {
    html! {
        <div class="package-group">
            <h3>
                <span>{group.title}</span>{" "}<span class="accent">{group.accent}</span>
            </h3>
            <div class="card-grid">
                { for group.packages.iter().map(package_card) }
            </div>
        </div>
    }
}

fn pricing(id: &'static str) -> Html {
    html! {
        <section {id} class="landing-section">
            <div class="section-heading">
                <h2>{"Our Packages"}</h2>
                <p>{"Professional videography packages tailored to your special moments"}</p>
            </div>
            { for PACKAGE_GROUPS.iter().map(package_group) }
        </section>
    }
}

fn contact(id: &'static str) -> Html {
    html! {
        <section {id} class="landing-section">
            <div class="section-heading">
                <h2>{"Start Your Project"}</h2>
            </div>
            <div class="contact-grid">
                <ContactFormView />
                <div class="contact-aside">
                    <div class="contact-card">
                        <h3>{"Contact Information"}</h3>
                        <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                    </div>
                    <div class="contact-card">
                        <h4>{"Follow Our Work"}</h4>
                        <div class="social-links">
                            <a href="#">{"Instagram"}</a>
                            <a href="#">{"Facebook"}</a>
                            <a href="#">{"LinkedIn"}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="landing-footer">
            <a href="/" class="brand" onclick={scroll_home()}>{BRAND}</a>
            <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #000;
        color: #fff;
        min-height: 100vh;
    }
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
    }
    .hero-background video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.4;
        filter: brightness(0.7);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0,0,0,0.7), rgba(0,0,0,0.5), #000);
    }
    .hero-content {
        position: relative;
        z-index: 1;
        padding: 0 1rem;
    }
    .hero-content h1 {
        font-size: 5rem;
        margin-bottom: 2rem;
    }
    .hero-accent {
        display: block;
        color: #f43f5e;
    }
    .hero-cta, .see-more a, .contact-submit {
        display: inline-block;
        background: #f43f5e;
        color: #fff;
        padding: 1rem 3rem;
        border: none;
        border-radius: 9999px;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .hero-scroll-hint {
        position: absolute;
        bottom: 3rem;
        color: #fff;
        font-size: 2rem;
        text-decoration: none;
    }
    .landing-section {
        padding: 8rem 4rem;
    }
    .landing-section.alternate {
        background: rgba(24, 24, 27, 0.5);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-heading h2 {
        font-size: 3rem;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
        max-width: 1280px;
        margin: 0 auto;
    }
    .service-card, .package-card, .contact-card {
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(63, 63, 70, 0.5);
        background: rgba(255, 255, 255, 0.03);
    }
    .work-card {
        position: relative;
        display: block;
        overflow: hidden;
        border-radius: 0.5rem;
        color: #fff;
    }
    .work-card img {
        width: 100%;
        aspect-ratio: 4/3;
        object-fit: cover;
    }
    .work-caption {
        position: absolute;
        bottom: 0;
        padding: 1.5rem;
    }
    .see-more {
        text-align: center;
        margin-top: 3rem;
    }
    .about-grid, .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        max-width: 1280px;
        margin: 0 auto;
        align-items: center;
    }
    .about-grid img {
        width: 100%;
        border-radius: 1rem;
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .stat-value, .package-price, .accent {
        color: #f43f5e;
        font-weight: bold;
    }
    .stat-value {
        font-size: 2.5rem;
    }
    .package-group {
        margin-bottom: 5rem;
    }
    .package-group h3 {
        text-align: center;
        font-size: 2rem;
    }
    .package-price {
        font-size: 2.25rem;
    }
    .package-price span {
        display: block;
        font-size: 1rem;
        font-weight: normal;
        color: #9ca3af;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .contact-field label {
        display: block;
        margin-bottom: 0.5rem;
        color: #d1d5db;
    }
    .contact-field input, .contact-field textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        background: rgba(24, 24, 27, 0.5);
        border: 1px solid #27272a;
        border-radius: 0.5rem;
        color: #fff;
    }
    .contact-submit {
        border-radius: 0.5rem;
    }
    .contact-submit:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .contact-banner {
        padding: 1rem;
        margin-bottom: 1.5rem;
        border-radius: 0.5rem;
    }
    .contact-banner.success {
        background: rgba(34, 197, 94, 0.1);
        border: 1px solid rgba(34, 197, 94, 0.2);
        color: #4ade80;
    }
    .contact-banner.error {
        background: rgba(239, 68, 68, 0.1);
        border: 1px solid rgba(239, 68, 68, 0.2);
        color: #f87171;
    }
    .contact-aside {
        display: flex;
        flex-direction: column;
        gap: 3rem;
    }
    .social-links {
        display: flex;
        gap: 1.5rem;
    }
    .social-links a, .contact-card a {
        color: #9ca3af;
    }
    .landing-footer {
        border-top: 1px solid #27272a;
        padding: 3rem 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        color: #9ca3af;
    }
    .brand {
        color: #fff;
        font-size: 1.5rem;
        font-weight: bold;
        letter-spacing: 0.05em;
        text-decoration: none;
    }
"#;
