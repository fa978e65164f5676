mod action;
mod builder;
mod model;

pub use {
    action::{MenuAction, OneShotCommand},
    builder::{build_menu, current_menu},
    model::{MenuEntry, MenuModel},
};
