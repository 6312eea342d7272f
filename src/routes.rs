use dioxus::prelude::*;
use crate::views::{ Catalog, Home, Navbar };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/catalog")]
    Catalog,
}
