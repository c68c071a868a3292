//! Step definitions for theme and focus

use crate::common::world::{parse_focus, BlogWorld};
use cosmicblog::Theme;
use cucumber::{then, when};

#[when("I toggle dark mode")]
async fn when_toggle_dark_mode(world: &mut BlogWorld) {
    world.press_key("Ctrl+T").expect("Failed to press Ctrl+T");
}

#[then(regex = r"^the theme should be (light|dark)$")]
async fn then_theme(world: &mut BlogWorld, theme: String) {
    let expected = if theme == "dark" {
        Theme::Dark
    } else {
        Theme::Light
    };
    assert_eq!(world.view_model().theme(), expected);
}

#[then(regex = r"^the focus should be on (search|title|body|posts|archive)$")]
async fn then_focus(world: &mut BlogWorld, component: String) {
    let expected = parse_focus(&component).expect("Unknown component");
    assert_eq!(world.view_model().focus(), expected);
}
