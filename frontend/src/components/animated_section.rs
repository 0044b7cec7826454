use log::error;
use web_sys::Element;
use yew::prelude::*;

use crate::coordinator::{reachable_threshold, Coordinator, PageAction};
use crate::listeners::VisibilitySubscription;

/// Registers `id` with the coordinator and observes `node` until it has been
/// shown. The threshold is capped to what the element can actually reach in
/// the current viewport.
#[hook]
fn use_reveal(
    node: &NodeRef,
    id: &str,
    threshold: f64,
    shown: bool,
    dispatcher: &UseReducerDispatcher<Coordinator>,
) {
    let node = node.clone();
    let dispatcher = dispatcher.clone();

    // The observer only lives until the element has been shown; once the
    // reveal lands this effect re-runs and its destructor disconnects it.
    use_effect_with_deps(
        move |(id, threshold, shown)| {
            let subscription = match node.cast::<Element>() {
                Some(element) if !*shown => {
                    let viewport_h = web_sys::window()
                        .and_then(|window| window.inner_height().ok())
                        .and_then(|height| height.as_f64())
                        .unwrap_or_default();
                    let element_h = element.get_bounding_client_rect().height();
                    let effective = reachable_threshold(*threshold, viewport_h, element_h);

                    dispatcher.dispatch(PageAction::SectionRegistered {
                        id: id.clone(),
                        threshold: effective,
                    });

                    let target = id.clone();
                    VisibilitySubscription::attach(&element, effective, move |ratio| {
                        dispatcher.dispatch(PageAction::SectionVisible {
                            id: target.clone(),
                            ratio,
                        });
                    })
                    .map_err(|e| error!("Entrance animation for #{} disabled: {}", id, e))
                    .ok()
                }
                _ => None,
            };
            move || drop(subscription)
        },
        (id.to_string(), threshold, shown),
    );
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub id: String,
    #[prop_or_default]
    pub class: Classes,
    pub threshold: f64,
    pub shown: bool,
    pub dispatcher: UseReducerDispatcher<Coordinator>,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that fades up the first time enough of it is on screen.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    use_reveal(&node, &props.id, props.threshold, props.shown, &props.dispatcher);

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("animated-section", props.class.clone(), props.shown.then(|| "is-shown"))}
        >
            { for props.children.iter() }
        </section>
    }
}

/// Reveal state for a block nested inside a section, such as a card grid.
#[derive(Clone, PartialEq)]
pub struct Reveal {
    pub id: String,
    pub threshold: f64,
    pub shown: bool,
    pub dispatcher: UseReducerDispatcher<Coordinator>,
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A block whose staggered children wait for the block itself to be on
/// screen, independently of the enclosing section.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let node = use_node_ref();
    let reveal = &props.reveal;
    use_reveal(&node, &reveal.id, reveal.threshold, reveal.shown, &reveal.dispatcher);

    html! {
        <div
            ref={node}
            class={classes!("reveal-group", props.class.clone(), reveal.shown.then(|| "is-shown"))}
        >
            { for props.children.iter() }
        </div>
    }
}
