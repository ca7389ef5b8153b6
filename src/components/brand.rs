use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct BrandProps {
    /// Renders the muted white badge used in the footer.
    #[prop_or_default]
    pub muted: bool,
}

#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    html! {
        <div class={classes!("brand", props.muted.then(|| "muted"))}>
            <div class="brand-badge">
                <IconView icon={Icon::Shield} class={classes!("brand-badge-icon")} />
            </div>
            <span class="brand-name">
                {config::BRAND_NAME}{" "}
                <span class="accent">{config::BRAND_SUFFIX}</span>
            </span>
        </div>
    }
}
