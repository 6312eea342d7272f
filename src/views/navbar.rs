use crate::utils::{ ThemeState };
use crate::theme;
use dioxus::prelude::*;
use crate:: {
    routes::Route,
};
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

fn mode_button_class(active: bool, dark: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-lg bg-blue-500 text-white transition-colors"
    } else if dark {
        "px-3 py-1 rounded-lg bg-gray-700 text-gray-300 hover:bg-gray-600 transition-colors"
    } else {
        "px-3 py-1 rounded-lg bg-gray-200 text-gray-700 hover:bg-gray-300 transition-colors"
    }
}

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme_state = use_context::<Signal<ThemeState>>();

    let state = *theme_state.read();
    let pinned_light = !state.follows_system && !state.is_dark;
    let pinned_dark = !state.follows_system && state.is_dark;

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if state.is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200"
                } else {
                    "bg-white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: if state.is_dark {
                                "text-white hover:text-primary transition-colors"
                            } else {
                                "text-gray-800 hover:text-primary transition-colors"
                            },
                            to: Route::Home,
                            "Home"
                        }
                        Link {
                            class: if state.is_dark {
                                "text-white hover:text-primary transition-colors"
                            } else {
                                "text-gray-800 hover:text-primary transition-colors"
                            },
                            to: Route::Catalog,
                            "Products"
                        }
                    }
                    div {
                        class: "flex items-center space-x-2",
                        button {
                            class: mode_button_class(pinned_light, state.is_dark),
                            onclick: move |_| {
                                theme::web::set_light_mode();
                                theme_state.set(ThemeState::user_defined(false));
                            },
                            "🌞 Light"
                        }
                        button {
                            class: mode_button_class(pinned_dark, state.is_dark),
                            onclick: move |_| {
                                theme::web::set_dark_mode();
                                theme_state.set(ThemeState::user_defined(true));
                            },
                            "🌙 Dark"
                        }
                        button {
                            class: mode_button_class(state.follows_system, state.is_dark),
                            onclick: move |_| {
                                theme::web::set_system_mode();
                                theme_state.set(ThemeState::current());
                            },
                            "🖥 System"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
