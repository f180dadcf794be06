use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::articles_page::ArticlesPage;
use crate::pages::evaluations_page::EvaluationsPage;
use crate::pages::home_page::HomePage;
use crate::pages::schools_page::SchoolsPage;

// list filters travel in the query string, outside the route segments
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/schools")]
    SchoolsPage {},


    #[route("/articles")]
    ArticlesPage {},


    #[route("/evaluations")]
    EvaluationsPage {},

}
