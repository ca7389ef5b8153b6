use yew::prelude::*;

use crate::components::brand::Brand;
use crate::components::icon::{Icon, IconView};
use crate::content::{self, FooterContent};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer = &props.footer;
    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-banner">
                    <img src={footer.banner.url()} alt={footer.banner.alt.clone()} referrerpolicy="no-referrer" />
                    <div class="footer-banner-overlay">
                        <h2>{&footer.cta_headline}</h2>
                        <button class="pill-button glass">
                            {&footer.cta}
                            <IconView icon={Icon::ArrowUpRight} />
                        </button>
                    </div>
                </div>

                <div class="social-links">
                    { for footer.socials.iter().map(|social| html! {
                        <a key={social.label.clone()} href={social.href.clone()} class="social-link">
                            <div class="social-icon">
                                <IconView icon={social.icon} size={16} />
                            </div>
                            <span>{&social.label}</span>
                        </a>
                    }) }
                </div>

                <div class="footer-columns">
                    <div class="footer-brand">
                        <h3>
                            { for footer.tagline.iter().map(|line| html! { <>{line}<br /></> }) }
                        </h3>
                        <Brand muted={true} />
                    </div>

                    <div class="footer-details">
                        <div>
                            <h4 class="footer-heading">{"Location"}</h4>
                            <p>
                                { for footer.location.iter().map(|line| html! { <>{line}<br /></> }) }
                            </p>
                        </div>
                        <div>
                            <h4 class="footer-heading">{"Explore"}</h4>
                            <ul>
                                { for footer.explore.iter().map(|item| html! {
                                    <li key={item.clone()}><a href={content::anchor(item)}>{item}</a></li>
                                }) }
                            </ul>
                        </div>
                        <div>
                            <h4 class="footer-heading">{"Contact"}</h4>
                            <p><a href={format!("mailto:{}", footer.email)}>{&footer.email}</a></p>
                            <p><a href={format!("tel:{}", footer.phone.replace(' ', ""))}>{&footer.phone}</a></p>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{&footer.copyright}</p>
                    <div class="legal-links">
                        { for footer.legal.iter().map(|item| html! {
                            <a key={item.clone()} href="#">{item}</a>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: var(--brand-dark);
                        padding: 8rem 0 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .footer-banner {
                        position: relative;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        margin-bottom: 8rem;
                    }
                    .footer-banner img {
                        width: 100%;
                        height: 400px;
                        object-fit: cover;
                        opacity: 0.4;
                        transition: transform 1s;
                    }
                    .footer-banner:hover img {
                        transform: scale(1.05);
                    }
                    .footer-banner-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, var(--brand-dark), rgba(5, 8, 10, 0.4), transparent);
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 5rem;
                    }
                    .footer-banner-overlay h2 {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        max-width: 36rem;
                        line-height: 0.9;
                        margin-bottom: 2rem;
                    }
                    .footer-banner-overlay .pill-button {
                        width: fit-content;
                    }
                    .social-links {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 5rem;
                        padding-bottom: 3rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .social-link {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .social-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s;
                    }
                    .social-link:hover {
                        color: var(--brand-cyan);
                    }
                    .social-link:hover .social-icon {
                        background: var(--brand-cyan);
                        border-color: var(--brand-cyan);
                        color: var(--brand-dark);
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: 5fr 7fr;
                        gap: 4rem;
                        margin-bottom: 5rem;
                    }
                    .footer-brand h3 {
                        font-size: 1.875rem;
                        margin-bottom: 3rem;
                    }
                    .footer-details {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                        line-height: 1.6;
                    }
                    .footer-details ul {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .footer-details a:hover {
                        color: var(--brand-cyan);
                    }
                    .footer-heading {
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.4);
                        margin-bottom: 1.5rem;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                        padding-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .legal-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .legal-links a:hover {
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .social-links {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .footer-columns,
                        .footer-details {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                        }
                        .footer-banner-overlay {
                            padding: 3rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
