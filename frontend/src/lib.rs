//! Dashboard frontend library entry point.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub mod hooks;
pub(crate) mod routes;
pub(crate) mod pages;
pub(crate) mod components;
