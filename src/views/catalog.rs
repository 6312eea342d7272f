use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::utils::ThemeState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub units_in_stock: u32,
    pub discontinued: bool,
}

impl Product {
    fn new(name: &str, category: &str, unit_price: f64, units_in_stock: u32, discontinued: bool) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            unit_price,
            units_in_stock,
            discontinued,
        }
    }
}

lazy_static::lazy_static! {
    // Static demo data, the theming never depends on it
    static ref PRODUCTS: Vec<Product> = vec![
        Product::new("Chai", "Beverages", 18.0, 39, false),
        Product::new("Chang", "Beverages", 19.0, 17, false),
        Product::new("Aniseed Syrup", "Condiments", 10.0, 13, false),
        Product::new("Chef Anton's Cajun Seasoning", "Condiments", 22.0, 53, false),
        Product::new("Chef Anton's Gumbo Mix", "Condiments", 21.35, 0, true),
        Product::new("Grandma's Boysenberry Spread", "Condiments", 25.0, 120, false),
        Product::new("Uncle Bob's Organic Dried Pears", "Produce", 30.0, 15, false),
        Product::new("Northwoods Cranberry Sauce", "Condiments", 40.0, 6, false),
        Product::new("Mishi Kobe Niku", "Meat/Poultry", 97.0, 29, true),
        Product::new("Ikura", "Seafood", 31.0, 31, false),
        Product::new("Queso Cabrales", "Dairy Products", 21.0, 22, false),
        Product::new("Konbu", "Seafood", 6.0, 24, false),
    ];
}

#[component]
pub fn StockIndicator(units_in_stock: u32, discontinued: bool) -> Element {
    rsx!(
        if discontinued {
            span {
                class: "text-red-500 font-medium",
                "Discontinued"
            }
        } else if units_in_stock == 0 {
            span {
                class: "text-yellow-500 font-medium",
                "Out of stock"
            }
        } else {
            span {
                class: "text-green-500 font-medium",
                "{units_in_stock} in stock"
            }
        }
    )
}

#[component]
fn Table(products: Vec<Product>) -> Element {
    let rows = products.iter().enumerate().map(|(idx, product)| {
        rsx!(
            tr {
                key: {idx},
                td { class: "px-6 py-4", {product.name.clone()} }
                td { class: "px-6 py-4", {product.category.clone()} }
                td { class: "px-6 py-4", {format!("${:.2}", product.unit_price)} }
                td { class: "px-6 py-4 text-center",
                    StockIndicator {
                        units_in_stock: product.units_in_stock,
                        discontinued: product.discontinued,
                    }
                }
            }
        )
    });

    rsx!(
        div {
            class: "overflow-hidden shadow ring-1 ring-black ring-opacity-5 sm:rounded-lg",
            table {
                class: "min-w-full divide-y divide-gray-300",
                thead {
                    class: "bg-gray-50",
                    tr {
                        th { class: "py-3.5 px-3 text-left text-sm font-semibold text-gray-900", "Product" }
                        th { class: "py-3.5 px-3 text-left text-sm font-semibold text-gray-900", "Category" }
                        th { class: "py-3.5 px-3 text-left text-sm font-semibold text-gray-900", "Price" }
                        th { class: "py-3.5 px-3 text-left text-sm font-semibold text-gray-900", "Availability" }
                    }
                }
                tbody {
                    class: "divide-y divide-gray-200 bg-white",
                    {rows}
                }
            }
        }
    )
}

#[component]
pub fn Catalog() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();

    let class = format!("container mx-auto p-4 {}", if theme_state.read().is_dark {
        "text-gray-100"
    } else {
        ""
    });

    rsx!(
        div {
            class: class.clone(),
            h1 {
                class: "text-2xl font-bold mb-4",
                "Products"
            }
            Table { products: PRODUCTS.to_vec() }
        }
    )
}
