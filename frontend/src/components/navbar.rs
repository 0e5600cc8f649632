use shared::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let items = Route::NAV_ITEMS.iter().map(|&route| {
        let class = if route == props.current { "nav-item active" } else { "nav-item" };
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(route);
            })
        };
        html! {
            <a href={route.path()} class={class} {onclick}>{route.title()}</a>
        }
    });

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="container">
                <span class="brand">{"Classroom Admin"}</span>
                <div class="nav-items">
                    {for items}
                </div>
                <button class="logout-button" onclick={on_logout}>{"Log out"}</button>
            </div>
        </nav>
    }
}
