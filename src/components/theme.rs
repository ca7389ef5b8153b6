use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide colours, typography and the shared utility classes.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --brand-dark: #05080a;
                --brand-cyan: #22d3ee;
                --font-display: "Space Grotesk", sans-serif;
                --font-body: "Inter", sans-serif;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: var(--brand-dark);
                color: #fff;
                font-family: var(--font-body);
                -webkit-font-smoothing: antialiased;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            button {
                border: none;
                background: none;
                color: inherit;
                cursor: pointer;
                font: inherit;
            }
            h1, h2, h3, h4 {
                font-family: var(--font-display);
                font-weight: 700;
                margin: 0;
            }
            .section-inner {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }
            .accent {
                color: var(--brand-cyan);
            }
            .glass {
                background: rgba(255, 255, 255, 0.05);
                backdrop-filter: blur(12px);
                border: 1px solid rgba(255, 255, 255, 0.1);
            }
            .eyebrow {
                display: inline-block;
                font-size: 10px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.3em;
                margin-bottom: 1.5rem;
            }
            .eyebrow.muted {
                color: rgba(255, 255, 255, 0.4);
            }
            .light-section .eyebrow.muted {
                color: rgba(5, 8, 10, 0.4);
            }
            .italic {
                font-style: italic;
            }
            .pill-button {
                padding: 1.25rem 2.5rem;
                border-radius: 9999px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                display: flex;
                align-items: center;
                gap: 0.75rem;
                transition: all 0.3s;
            }
            .pill-button.small {
                padding: 1rem 2rem;
                font-size: 0.75rem;
                gap: 0.5rem;
            }
            .pill-button.solid {
                background: #fff;
                color: var(--brand-dark);
            }
            .pill-button.solid:hover {
                background: var(--brand-cyan);
            }
            .pill-button.glass:hover {
                background: rgba(255, 255, 255, 0.1);
            }
            .round-icon {
                width: 3rem;
                height: 3rem;
                border-radius: 9999px;
                border: 1px solid rgba(255, 255, 255, 0.2);
                display: flex;
                align-items: center;
                justify-content: center;
                transition: all 0.3s;
            }
            .service-card:hover .round-icon {
                background: var(--brand-cyan);
                border-color: var(--brand-cyan);
                color: var(--brand-dark);
            }
            .light-section {
                padding: 8rem 0;
                background: #fff;
                color: var(--brand-dark);
            }
            .intro-grid {
                display: grid;
                grid-template-columns: 3fr 9fr;
                gap: 4rem;
                align-items: start;
            }
            .intro-headline {
                font-size: clamp(2.25rem, 5vw, 3.75rem);
                line-height: 1.25;
                margin-bottom: 3rem;
            }
            .rule {
                width: 100%;
                height: 1px;
                background: rgba(5, 8, 10, 0.1);
                margin-bottom: 3rem;
            }
            .feature-text .rule {
                margin-bottom: 0;
            }
            .two-columns {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
            }
            .two-columns.wide {
                gap: 5rem;
            }
            .lead {
                font-size: 1.125rem;
                line-height: 1.6;
                color: rgba(5, 8, 10, 0.7);
            }
            .brand {
                display: flex;
                align-items: center;
                gap: 0.5rem;
            }
            .brand.muted {
                opacity: 0.6;
            }
            .brand-badge {
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 9999px;
                background: var(--brand-cyan);
                color: var(--brand-dark);
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .brand.muted .brand-badge {
                background: #fff;
            }
            .brand-name {
                font-family: var(--font-display);
                font-weight: 700;
                font-size: 1.25rem;
                letter-spacing: -0.05em;
                text-transform: uppercase;
            }
            @media (max-width: 1024px) {
                .intro-grid,
                .two-columns {
                    grid-template-columns: 1fr;
                }
            }
        "#)} />
    }
}
