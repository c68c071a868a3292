//! Step definitions for application lifecycle and setup
//!
//! This module contains step definitions for:
//! - Starting the blog with generated or listed posts
//! - Pressing keys and typing text
//! - Quitting

use crate::common::world::BlogWorld;
use cosmicblog::Post;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use tracing::info;

#[given(regex = r"^the blog is started with (\d+) generated posts$")]
async fn given_generated_posts(world: &mut BlogWorld, count: String) {
    let count: usize = count.parse().expect("Invalid post count");
    info!("Starting blog with {} generated posts", count);
    world
        .start_generated(count)
        .expect("Failed to start the blog");
}

/// Expects a table with a `title | body` header row
#[given("the blog is started with these posts:")]
async fn given_listed_posts(world: &mut BlogWorld, step: &Step) {
    let table = step.table.as_ref().expect("Missing posts table");
    let posts: Vec<Post> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| Post::new(row[0].as_str(), row[1].as_str()))
        .collect();
    info!("Starting blog with {} listed posts", posts.len());
    world
        .start_with_posts(&posts)
        .expect("Failed to start the blog");
}

#[when(regex = r#"^I press "([^"]+)"$"#)]
async fn when_press_key(world: &mut BlogWorld, key: String) {
    world.press_key(&key).expect("Failed to press key");
}

#[when(regex = r#"^I press "([^"]+)" (\d+) times$"#)]
async fn when_press_key_times(world: &mut BlogWorld, key: String, times: String) {
    let times: usize = times.parse().expect("Invalid count");
    for _ in 0..times {
        world.press_key(&key).expect("Failed to press key");
    }
}

#[when(regex = r#"^I type "([^"]*)"$"#)]
async fn when_type_text(world: &mut BlogWorld, text: String) {
    world.type_text(&text).expect("Failed to type text");
}

#[then("the application should quit")]
async fn then_should_quit(world: &mut BlogWorld) {
    assert!(world.controller().should_quit(), "Application is still running");
}

#[then("the application should still be running")]
async fn then_still_running(world: &mut BlogWorld) {
    assert!(!world.controller().should_quit(), "Application has quit");
}

#[then(regex = r#"^the screen should show "([^"]+)"$"#)]
async fn then_screen_shows(world: &mut BlogWorld, text: String) {
    let screen = world.screen();
    assert!(
        screen.contains(&text),
        "Expected screen to contain '{text}', got: {screen}"
    );
}
