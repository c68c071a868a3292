//! Step definitions for the add-post form

use crate::common::world::BlogWorld;
use cosmicblog::Focus;
use cucumber::{then, when};

/// Fill both fields and submit with Enter from the body
#[when(regex = r#"^I add a post titled "([^"]*)" with body "([^"]*)"$"#)]
async fn when_add_post(world: &mut BlogWorld, title: String, body: String) {
    world.focus(Focus::Title).expect("Failed to focus title");
    world.type_text(&title).expect("Failed to type title");
    world.press_key("Enter").expect("Failed to press Enter");
    world.type_text(&body).expect("Failed to type body");
    world.press_key("Enter").expect("Failed to press Enter");
}

#[then(regex = r#"^the form title should be "([^"]*)"$"#)]
async fn then_form_title(world: &mut BlogWorld, title: String) {
    assert_eq!(world.view_model().form().title(), title);
}

#[then(regex = r#"^the form body should be "([^"]*)"$"#)]
async fn then_form_body(world: &mut BlogWorld, body: String) {
    assert_eq!(world.view_model().form().body(), body);
}
