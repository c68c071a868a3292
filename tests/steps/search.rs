//! Step definitions for the search box

use crate::common::world::BlogWorld;
use cosmicblog::Focus;
use cucumber::{then, when};

#[when(regex = r#"^I search for "([^"]*)"$"#)]
async fn when_search_for(world: &mut BlogWorld, query: String) {
    world.focus(Focus::Search).expect("Failed to focus search");
    world.type_text(&query).expect("Failed to type query");
}

#[when("I clear the search box")]
async fn when_clear_search(world: &mut BlogWorld) {
    world.focus(Focus::Search).expect("Failed to focus search");
    let length = world.view_model().search_query().chars().count();
    for _ in 0..length {
        world.press_key("Backspace").expect("Failed to press Backspace");
    }
}

#[then(regex = r"^(\d+) posts? should be found$")]
async fn then_posts_found(world: &mut BlogWorld, count: String) {
    let count: usize = count.parse().expect("Invalid count");
    assert_eq!(world.view_model().visible_posts().len(), count);

    let text = format!("🚀 {count} Cosmic posts found");
    let screen = world.screen();
    assert!(
        screen.contains(&text),
        "Expected '{text}' on screen, got: {screen}"
    );
}

#[then(regex = r#"^the search query should be "([^"]*)"$"#)]
async fn then_search_query(world: &mut BlogWorld, query: String) {
    assert_eq!(world.view_model().search_query(), query);
}

#[then(regex = r#"^the only visible post should be titled "([^"]+)"$"#)]
async fn then_only_visible_post(world: &mut BlogWorld, title: String) {
    let visible = world.view_model().visible_posts();
    assert_eq!(visible.len(), 1, "Expected exactly one visible post");
    assert_eq!(visible[0].title, title);
}
