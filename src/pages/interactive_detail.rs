use log::debug;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{DetailContent, Hotspot};
use crate::state::HotspotSelection;

#[derive(Properties, PartialEq)]
pub struct InteractiveDetailProps {
    pub detail: DetailContent,
}

/// Image explorer with clickable hotspot markers and a pager row.
#[function_component(InteractiveDetail)]
pub fn interactive_detail(props: &InteractiveDetailProps) -> Html {
    let hotspots = &props.detail.hotspots;
    let selection = use_state(|| HotspotSelection::new(hotspots));

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |id: u32| {
            if let Some(current) = (*selection).as_ref() {
                let mut next = current.clone();
                if next.select(id) {
                    debug!("Hotspot {} selected", next.active_id());
                    selection.set(Some(next));
                }
            }
        })
    };

    let Some(selection) = (*selection).clone() else {
        // Content validation rejects an empty hotspot list, so this is only the bare image.
        return html! { <section id="process" class="detail-section"></section> };
    };

    let marker = |spot: &Hotspot| {
        let active = selection.is_active(spot.id);
        let onclick = {
            let on_select = on_select.clone();
            let id = spot.id;
            Callback::from(move |_: MouseEvent| on_select.emit(id))
        };
        html! {
            <div
                key={spot.id}
                class="hotspot"
                style={format!("left: {}%; top: {}%;", spot.position.x, spot.position.y)}
                onclick={onclick}
            >
                <div class={classes!("hotspot-marker", active.then(|| "active"))}>
                    <div class="hotspot-dot"></div>
                </div>
                {
                    if active {
                        html! {
                            <div class="hotspot-card glass">
                                <div class="hotspot-card-icon">
                                    <IconView icon={Icon::Sparkles} size={20} />
                                </div>
                                <h4>{&spot.title}</h4>
                                <p>{&spot.description}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    let pager = |spot: &Hotspot| {
        let onclick = {
            let on_select = on_select.clone();
            let id = spot.id;
            Callback::from(move |_: MouseEvent| on_select.emit(id))
        };
        html! {
            <button
                key={spot.id}
                class={classes!("pager-indicator", selection.is_active(spot.id).then(|| "active"))}
                onclick={onclick}
            />
        }
    };

    let detail = &props.detail;
    html! {
        <section id="process" class="detail-section">
            <div class="section-inner">
                <div class="detail-header">
                    <h2>
                        { for detail.headline.iter().map(|line| html! { <>{line}<br /></> }) }
                    </h2>
                    <div class="detail-header-row">
                        <p>{&detail.body}</p>
                        <button class="glass pill-button small">
                            {&detail.cta}
                            <IconView icon={Icon::ArrowUpRight} size={14} />
                        </button>
                    </div>
                </div>

                <div class="detail-stage" aria-label={selection.active(hotspots).map(|spot| spot.title.clone())}>
                    <img
                        src={detail.image.url()}
                        alt={detail.image.alt.clone()}
                        referrerpolicy="no-referrer"
                    />
                    { for hotspots.iter().map(marker) }
                    <div class="pager">
                        { for hotspots.iter().map(pager) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .detail-section {
                        padding: 8rem 0;
                        background: var(--brand-dark);
                        position: relative;
                    }
                    .detail-header {
                        margin-bottom: 5rem;
                    }
                    .detail-header h2 {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .detail-header-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        gap: 2rem;
                    }
                    .detail-header-row p {
                        color: rgba(255, 255, 255, 0.4);
                        max-width: 28rem;
                        line-height: 1.6;
                    }
                    .detail-stage {
                        position: relative;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        aspect-ratio: 21 / 9;
                    }
                    .detail-stage > img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }
                    .hotspot {
                        position: absolute;
                        cursor: pointer;
                    }
                    .hotspot-marker {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(12px);
                        transition: all 0.5s ease;
                    }
                    .hotspot-marker:hover {
                        background: rgba(255, 255, 255, 0.4);
                    }
                    .hotspot-marker.active {
                        background: var(--brand-cyan);
                        transform: scale(1.25);
                    }
                    .hotspot-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #fff;
                    }
                    .hotspot-marker.active .hotspot-dot {
                        background: var(--brand-dark);
                    }
                    .hotspot-card {
                        position: absolute;
                        bottom: 100%;
                        left: 50%;
                        transform: translateX(-50%);
                        margin-bottom: 1rem;
                        width: 16rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        z-index: 20;
                        animation: cardRise 0.4s ease-out;
                    }
                    @keyframes cardRise {
                        from { opacity: 0; transform: translate(-50%, 10px) scale(0.9); }
                        to { opacity: 1; transform: translate(-50%, 0) scale(1); }
                    }
                    .hotspot-card-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: rgba(34, 211, 238, 0.2);
                        color: var(--brand-cyan);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                    }
                    .hotspot-card h4 {
                        margin-bottom: 0.5rem;
                    }
                    .hotspot-card p {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.6);
                        line-height: 1.6;
                    }
                    .pager {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.5rem;
                    }
                    .pager-indicator {
                        width: 3rem;
                        height: 0.25rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        transition: all 0.3s;
                    }
                    .pager-indicator.active {
                        background: var(--brand-cyan);
                    }
                "#}
            </style>
        </section>
    }
}
