//! Step definitions for the post archive

use crate::common::world::{BlogWorld, SCENARIO_ARCHIVE};
use cosmicblog::Focus;
use cucumber::{then, when};

#[when("I open the archive")]
async fn when_open_archive(world: &mut BlogWorld) {
    if !world.view_model().archive().is_visible() {
        world.press_key("Ctrl+A").expect("Failed to press Ctrl+A");
    }
    world.focus(Focus::Archive).expect("Failed to focus archive");
}

#[when("I add the selected archive post as new")]
async fn when_add_selected(world: &mut BlogWorld) {
    let selected = world
        .view_model()
        .archive()
        .selected()
        .cloned()
        .expect("No archive post selected");
    world.remembered_post = Some(selected);
    world.press_key("Enter").expect("Failed to press Enter");
}

#[then(regex = r"^the archive should be (visible|hidden)$")]
async fn then_archive_visibility(world: &mut BlogWorld, state: String) {
    let visible = world.view_model().archive().is_visible();
    assert_eq!(visible, state == "visible");
}

#[then("the selected archive post should be the first post")]
async fn then_selected_is_first(world: &mut BlogWorld) {
    let remembered = world
        .remembered_post
        .clone()
        .expect("No archive post was added");
    let posts = world.view_model().all_posts();
    assert_eq!(posts.first(), Some(&remembered));
}

#[then("the archive should keep all of its posts")]
async fn then_archive_unchanged(world: &mut BlogWorld) {
    assert_eq!(world.view_model().archive().len(), SCENARIO_ARCHIVE);
}

#[then(regex = r"^archive post (\d+) should be selected$")]
async fn then_archive_selection(world: &mut BlogWorld, index: String) {
    let index: usize = index.parse().expect("Invalid index");
    assert_eq!(world.view_model().archive().selected_index(), index);
}
