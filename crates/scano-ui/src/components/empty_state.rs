//! Placeholder card for empty collections and failed loads.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("empty-state", props.error.then_some("error"))}>
            <p>{props.message.clone()}</p>
            { for props.children.iter() }
        </div>
    }
}
