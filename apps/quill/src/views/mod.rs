//! Terminal views - the home page and the all-posts listing.
//!
//! Each view owns a fresh controller, so switching views reloads the posts.

mod home;
mod listing;

use quill_core::domain::Post;

pub use home::HomeView;
pub use listing::ListingView;

/// One post as printed in a list, numbered from 1.
fn render_card(number: usize, post: &Post) -> String {
    format!(
        "#{number} {title}\n   {content}\n   By {author} · {date}",
        title = post.title,
        content = post.content,
        author = post.author,
        date = post.created_at.format("%Y-%m-%d"),
    )
}

/// Split a command line into its verb and the rest.
fn parse_command(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

/// Resolve a 1-based card number against `posts`.
fn pick<'a, P>(posts: &'a [P], arg: &str) -> Option<&'a P> {
    let number: usize = arg.parse().ok()?;
    number.checked_sub(1).and_then(|i| posts.get(i))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use quill_core::domain::PostId;

    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("  Edit 2 "), ("edit".to_string(), "2"));
        assert_eq!(parse_command("search rust  tips"), ("search".to_string(), "rust  tips"));
        assert_eq!(parse_command("quit"), ("quit".to_string(), ""));
    }

    #[test]
    fn test_pick_is_one_based() {
        let posts = ["a", "b"];
        assert_eq!(pick(&posts, "1"), Some(&"a"));
        assert_eq!(pick(&posts, "2"), Some(&"b"));
        assert_eq!(pick(&posts, "0"), None);
        assert_eq!(pick(&posts, "3"), None);
        assert_eq!(pick(&posts, "x"), None);
    }

    #[test]
    fn test_render_card_shows_creation_date() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let post = Post {
            id: PostId::new("a"),
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "Ann".to_string(),
            created_at: at,
            updated_at: at,
        };
        assert_eq!(
            render_card(1, &post),
            "#1 Hello\n   World\n   By Ann · 2024-05-01"
        );
    }
}
