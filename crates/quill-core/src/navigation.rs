//! Navigation between the home and listing views.
//!
//! A staged edit travels with the navigation command itself, so the target
//! view receives it by value and consumes it exactly once.

use crate::domain::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The home view: create/edit form plus the most recent posts.
    Home { staged_edit: Option<Post> },
    /// The listing view: every post, searchable.
    Listing,
    Quit,
}

impl Navigation {
    pub fn home() -> Self {
        Navigation::Home { staged_edit: None }
    }

    /// Open the home view with `post` staged for editing.
    pub fn edit(post: Post) -> Self {
        Navigation::Home {
            staged_edit: Some(post),
        }
    }
}
