//! Pager + page-size controls for client-side lists.

use crate::features::materials::logic::PAGE_SIZES;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    /// Current page, 1-indexed.
    pub page: usize,
    /// Total page count; zero renders a single disabled pager.
    pub pages: usize,
    /// Active page size.
    pub page_size: usize,
    /// Label in front of the size selector.
    pub size_label: AttrValue,
    #[prop_or_default]
    pub on_page: Callback<usize>,
    #[prop_or_default]
    pub on_page_size: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let pages = props.pages.max(1);
    let current = props.page.clamp(1, pages);

    let go_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if current > 1 {
                on_page.emit(current - 1);
            }
        })
    };
    let go_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if current < pages {
                on_page.emit(current + 1);
            }
        })
    };
    let on_size = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                on_page_size.emit(size);
            }
        })
    };

    html! {
        <div class="pagination">
            <label class="page-size">
                <small>{props.size_label.clone()}</small>
                <select onchange={on_size}>
                    {for PAGE_SIZES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == props.page_size}>
                            {size.to_string()}
                        </option>
                    })}
                </select>
            </label>
            <div class="pager">
                <button class="ghost" disabled={current <= 1} onclick={go_prev}>{"«"}</button>
                <span>{format!("{current} / {pages}")}</span>
                <button class="ghost" disabled={current >= pages} onclick={go_next}>{"»"}</button>
            </div>
        </div>
    }
}
