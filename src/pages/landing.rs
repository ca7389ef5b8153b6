use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconView};
use crate::components::nav::Nav;
use crate::content::{HeroContent, IntroContent, OverviewContent, Service, SiteContent, StatsContent};
use crate::pages::interactive_detail::InteractiveDetail;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering landing page");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let content = &props.content;
    html! {
        <div class="landing-page">
            <Nav items={content.nav.clone()} />
            <Hero hero={content.hero.clone()} />
            <Intro intro={content.intro.clone()} />
            <ServicesGrid services={content.services.clone()} />
            <Stats stats={content.stats.clone()} />
            <InteractiveDetail detail={content.detail.clone()} />
            <Overview overview={content.overview.clone()} />
            <Footer footer={content.footer.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: HeroContent,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={hero.image.url()} alt={hero.image.alt.clone()} referrerpolicy="no-referrer" />
                <div class="hero-fade-vertical"></div>
                <div class="hero-fade-horizontal"></div>
            </div>
            <div class="hero-content section-inner">
                <div class="hero-copy">
                    <span class="eyebrow accent">{&hero.tagline}</span>
                    <h1>
                        {&hero.headline}{" "}
                        <span class="accent">{&hero.headline_accent}</span>
                        <br />
                        {&hero.headline_tail}
                    </h1>
                    <p class="hero-body">{&hero.body}</p>
                    <div class="hero-cta-group">
                        <button class="pill-button solid">
                            {&hero.primary_cta}
                            <IconView icon={Icon::ArrowUpRight} />
                        </button>
                        <button class="pill-button glass">{&hero.secondary_cta}</button>
                    </div>
                </div>
            </div>
            <div class="scroll-hint">
                <div class="scroll-hint-line"></div>
                <span>{"Scroll to explore"}</span>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        padding-top: 6rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.6;
                    }
                    .hero-fade-vertical {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--brand-dark), transparent, rgba(5, 8, 10, 0.4));
                    }
                    .hero-fade-horizontal {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(5, 8, 10, 0.8), transparent, transparent);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                    }
                    .hero-copy {
                        max-width: 42rem;
                        animation: heroSlide 0.8s ease-out;
                    }
                    @keyframes heroSlide {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .hero h1 {
                        font-size: clamp(3.75rem, 8vw, 6rem);
                        line-height: 0.9;
                        letter-spacing: -0.05em;
                        margin-bottom: 2rem;
                    }
                    .hero-body {
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.6);
                        margin-bottom: 2.5rem;
                        max-width: 32rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        right: 2.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.5em;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .scroll-hint-line {
                        width: 3rem;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.2);
                    }
                    @media (max-width: 1024px) {
                        .scroll-hint {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct IntroProps {
    intro: IntroContent,
}

#[function_component(Intro)]
fn intro(props: &IntroProps) -> Html {
    let intro = &props.intro;
    html! {
        <section id="about" class="light-section">
            <div class="section-inner intro-grid">
                <span class="eyebrow muted">{&intro.label}</span>
                <div>
                    <h2 class="intro-headline">{&intro.headline}</h2>
                    <div class="rule"></div>
                    <div class="two-columns">
                        { for intro.paragraphs.iter().map(|p| html! { <p class="lead">{p}</p> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesGridProps {
    services: Vec<Service>,
}

#[function_component(ServicesGrid)]
fn services_grid(props: &ServicesGridProps) -> Html {
    html! {
        <section id="services" class="services-grid">
            { for props.services.iter().map(|service| html! {
                <div key={service.number.clone()} class="service-card">
                    <img src={service.image.url()} alt={service.image.alt.clone()} referrerpolicy="no-referrer" />
                    <div class="service-fade"></div>
                    <div class="service-body">
                        <div class="service-top">
                            <span class="eyebrow muted">{&service.title}</span>
                            <span class="service-number">{&service.number}</span>
                        </div>
                        <div>
                            <h3>{&service.title}</h3>
                            <p class="service-description">{&service.description}</p>
                            <div class="round-icon">
                                <IconView icon={Icon::ChevronRight} />
                            </div>
                        </div>
                    </div>
                </div>
            }) }
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        height: 80vh;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        border-right: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .service-card:last-child {
                        border-right: none;
                    }
                    .service-card > img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.4;
                        transition: transform 1s, opacity 1s;
                    }
                    .service-card:hover > img {
                        transform: scale(1.1);
                        opacity: 0.6;
                    }
                    .service-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--brand-dark), rgba(5, 8, 10, 0.2), transparent);
                    }
                    .service-body {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        padding: 3rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }
                    .service-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .service-number {
                        font-family: var(--font-display);
                        font-size: 3.75rem;
                        font-weight: 700;
                        color: rgba(255, 255, 255, 0.1);
                    }
                    .service-card h3 {
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                    }
                    .service-card:hover h3 {
                        color: var(--brand-cyan);
                    }
                    .service-description {
                        color: rgba(255, 255, 255, 0.6);
                        line-height: 1.6;
                        margin-bottom: 2rem;
                        max-width: 20rem;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.5s;
                    }
                    .service-card:hover .service-description {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 768px) {
                        .services-grid {
                            grid-template-columns: 1fr;
                            height: auto;
                        }
                        .service-card {
                            height: 500px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatsProps {
    stats: StatsContent,
}

#[function_component(Stats)]
fn stats(props: &StatsProps) -> Html {
    let stats = &props.stats;
    html! {
        <section class="stats-section">
            <div class="stats-background">
                <img src={stats.background.url()} alt={stats.background.alt.clone()} referrerpolicy="no-referrer" />
                <div class="stats-overlay"></div>
            </div>
            <div class="section-inner stats-grid">
                <div class="video-teaser">
                    <img src={stats.teaser.url()} alt={stats.teaser.alt.clone()} referrerpolicy="no-referrer" />
                    <div class="video-teaser-overlay">
                        <button class="play-button">
                            <IconView icon={Icon::Play} />
                        </button>
                    </div>
                </div>
                <div>
                    <h2 class="stats-headline">{&stats.headline}</h2>
                    <p class="eyebrow muted stats-subtitle">{&stats.subtitle}</p>
                    <div class="stat-cards">
                        { for stats.items.iter().map(|stat| html! {
                            <div key={stat.label.clone()} class="stat-card">
                                <div class="stat-value">{&stat.value}</div>
                                <div class="stat-label">{&stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .stats-section {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }
                    .stats-background {
                        position: absolute;
                        inset: 0;
                    }
                    .stats-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.3;
                    }
                    .stats-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(5, 8, 10, 0.8);
                    }
                    .stats-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .video-teaser {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .video-teaser img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .video-teaser-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(5, 8, 10, 0.4);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .play-button {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.3s;
                    }
                    .play-button:hover {
                        transform: scale(1.1);
                    }
                    .stats-headline {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .stats-subtitle {
                        margin-bottom: 3rem;
                    }
                    .stat-cards {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stat-card {
                        border-left: 1px solid rgba(255, 255, 255, 0.1);
                        padding-left: 1.5rem;
                    }
                    .stat-value {
                        font-family: var(--font-display);
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .stat-label {
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    @media (max-width: 1024px) {
                        .stats-grid {
                            grid-template-columns: 1fr;
                        }
                        .stat-cards {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct OverviewProps {
    overview: OverviewContent,
}

#[function_component(Overview)]
fn overview(props: &OverviewProps) -> Html {
    let overview = &props.overview;
    html! {
        <section id="gallery" class="light-section">
            <div class="section-inner">
                <div class="two-columns wide">
                    <div>
                        <h2 class="overview-headline">
                            { for overview.headline.iter().map(|line| html! { <>{line}<br /></> }) }
                        </h2>
                        <span class="eyebrow muted italic">{&overview.label}</span>
                    </div>
                    <div>
                        <p class="lead overview-body">{&overview.body}</p>
                        <div class="feature-items">
                            { for overview.features.iter().map(|feature| html! {
                                <div key={feature.title.clone()} class="feature-item" title={feature.description.clone()}>
                                    <div class="feature-icon">
                                        <IconView icon={feature.icon} size={20} />
                                    </div>
                                    <div class="feature-text">
                                        <h4>{&feature.title}</h4>
                                        <div class="rule"></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="showcase">
                    { for overview.showcase.iter().map(|image| html! {
                        <div class="showcase-frame">
                            <img src={image.url()} alt={image.alt.clone()} referrerpolicy="no-referrer" />
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .overview-headline {
                        font-size: 3rem;
                        margin-bottom: 2rem;
                    }
                    .overview-body {
                        margin-bottom: 3rem;
                    }
                    .feature-items {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .feature-item {
                        display: flex;
                        gap: 1.5rem;
                        align-items: flex-start;
                    }
                    .feature-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 9999px;
                        background: var(--brand-dark);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s;
                    }
                    .feature-item:hover .feature-icon {
                        background: var(--brand-cyan);
                        color: var(--brand-dark);
                    }
                    .feature-text {
                        padding-top: 0.25rem;
                        flex: 1;
                    }
                    .feature-text h4 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .showcase {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 8rem;
                    }
                    .showcase-frame {
                        aspect-ratio: 4 / 5;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: rgba(5, 8, 10, 0.05);
                    }
                    .showcase-frame img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .showcase-frame img:hover {
                        transform: scale(1.05);
                    }
                    @media (max-width: 768px) {
                        .showcase {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
