//! App root: router, shared contexts, route switch.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::app::session::SessionProvider;
use crate::components::shell::AppShell;
use crate::components::toast::{Toast, ToastCtx, ToastHost, ToastKind};
use crate::features::analytics::view::AnalyticsView;
use crate::features::auth::view::{LoginView, ProfileView};
use crate::features::materials::view::MaterialsView;
use crate::features::notifications::view::{NotificationFormView, NotificationsView};
use crate::features::subscriptions::view::{SubscriptionFormView, SubscriptionsView};
use crate::features::tags::view::TagsView;
use crate::features::themes::view::{ThemeFormView, ThemesView};
use crate::features::users::view::{UserFormView, UsersView};
use crate::i18n::TranslationBundle;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod routes;
pub(crate) mod session;

pub(crate) use routes::Route;

#[function_component(ScanoApp)]
pub(crate) fn scano_app() -> Html {
    html! {
        <BrowserRouter>
            <AppRoot />
        </BrowserRouter>
    }
}

#[function_component(AppRoot)]
fn app_root() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Login);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let bundle = {
        let locale = route.locale();
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let push_toast = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = *toast_id + 1;
            toast_id.set(id);
            let mut next = (*toasts).clone();
            next.push(Toast { id, kind, message });
            toasts.set(next);
        })
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
            );
        })
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
        <ContextProvider<ToastCtx> context={ToastCtx { push: push_toast }}>
            <Switch<Route> render={switch} />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
        </ContextProvider<ToastCtx>>
        </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let inner = match route.clone() {
        Route::Login => return html! { <LoginView /> },
        Route::NotFound => return html! { <h1>{"404"}</h1> },
        Route::Themes { locale } => html! { <ThemesView {locale} /> },
        Route::ThemeNew { locale } => html! { <ThemeFormView {locale} /> },
        Route::ThemeEdit { locale, id } => html! { <ThemeFormView {locale} id={Some(id)} /> },
        Route::Materials { id, .. } => html! { <MaterialsView theme_id={id} /> },
        Route::Analytics { id, .. } => html! { <AnalyticsView theme_id={id} /> },
        Route::Tags { id, .. } => html! { <TagsView theme_id={id} /> },
        Route::Notifications { locale } => html! { <NotificationsView {locale} /> },
        Route::NotificationNew { locale } => html! { <NotificationFormView {locale} /> },
        Route::NotificationEdit { locale, id } => {
            html! { <NotificationFormView {locale} id={Some(id)} /> }
        }
        Route::Subscriptions { locale } => html! { <SubscriptionsView {locale} /> },
        Route::SubscriptionNew { locale } => html! { <SubscriptionFormView {locale} /> },
        Route::SubscriptionEdit { locale, id } => {
            html! { <SubscriptionFormView {locale} id={Some(id)} /> }
        }
        Route::Users { locale } => html! { <UsersView {locale} /> },
        Route::UserNew { locale } => html! { <UserFormView {locale} /> },
        Route::UserEdit { locale, id } => html! { <UserFormView {locale} id={Some(id)} /> },
        Route::Profile { .. } => html! { <ProfileView /> },
    };

    html! {
        <SessionProvider>
            <AppShell route={route}>
                {inner}
            </AppShell>
        </SessionProvider>
    }
}

/// Mount the application onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<ScanoApp>::new().render();
}
