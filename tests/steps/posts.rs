//! Step definitions for the post list

use crate::common::world::BlogWorld;
use cucumber::{then, when};

#[when("I clear all posts")]
async fn when_clear_posts(world: &mut BlogWorld) {
    world.press_key("Ctrl+X").expect("Failed to press Ctrl+X");
}

#[then(regex = r"^the blog should have (\d+) posts?$")]
async fn then_post_count(world: &mut BlogWorld, count: String) {
    let count: usize = count.parse().expect("Invalid count");
    assert_eq!(world.view_model().total_posts(), count);
}

#[then(regex = r#"^the first post should be titled "([^"]+)" with body "([^"]+)"$"#)]
async fn then_first_post(world: &mut BlogWorld, title: String, body: String) {
    let posts = world.view_model().all_posts();
    let first = posts.first().expect("The blog has no posts");
    assert_eq!(first.title, title);
    assert_eq!(first.body, body);
}
