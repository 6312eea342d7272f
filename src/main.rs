use dioxus::prelude::*;
use product_catalog::theme;
use product_catalog::{ Route, ThemeState };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut theme_state = use_signal(ThemeState::default);
    use_context_provider(|| theme_state);

    use_effect(move || {
        theme::web::init();
        theme_state.set(ThemeState::current());
    });

    use_drop(|| {
        theme::web::teardown();
    });

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Router::<Route> {}
        }
    }
}
