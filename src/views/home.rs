use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Welcome to the Product Catalog"
            }
            p {
                class: "text-gray-600",
                "Browse the catalog from the navigation menu. Pick a theme in the top bar, or let it follow your system setting."
            }
        }
    }
}
