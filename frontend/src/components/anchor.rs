use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub target: String,
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link. Keeps a real `#id` href for middle-click and no-JS, but
/// routes the click through the page so it scrolls smoothly.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let target = props.target.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.clone());
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
