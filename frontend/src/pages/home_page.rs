use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdAssessment, MdDescription};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Yayasan - Dashboard" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Yayasan Dashboard"
            }
            div {
                style: "color: #111827; font-size: 22px; line-height: 1.6; max-width: 620px;",
                "Every list keeps its search, sort and page in the address bar. Copy the link to share exactly what you see."
            }

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                ListCard { to: Route::SchoolsPage {}, icon: MdSchool, title: "Schools", text: "Schools managed by the foundation." }
                ListCard { to: Route::ArticlesPage {}, icon: MdDescription, title: "Articles", text: "News and articles on the public site." }
                ListCard { to: Route::EvaluationsPage {}, icon: MdAssessment, title: "Evaluations", text: "Teacher evaluations per period." }
            }
        }
    }
}

#[component]
fn ListCard<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, title: String, text: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 300px;
                    min-height: 160px;
                    border-radius: 22px;
                    padding: 22px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                Icon { icon: icon, style: "width: 36px; height: 36px;" }
                span { style: "font-size: 26px; font-weight: 600;", "{title}" }
                span { style: "font-size: 16px; opacity: 0.9;", "{text}" }
            }
        }
    }
}
