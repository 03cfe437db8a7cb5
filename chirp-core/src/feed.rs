use std::collections::BTreeMap;

use crate::{Error, FollowGraph, Post, UserName};

/// Every known user's timeline: the posts they see, in posting order
///
/// Iteration is alphabetical by user name, which is the display order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Feed {
    timelines: BTreeMap<UserName, Vec<Post>>,
}

impl Feed {
    /// Parses the full text of a post file and delivers every post to the
    /// timeline of each user following its author
    ///
    /// Users the graph knows but who see no post keep an empty timeline. A
    /// post from an author the graph does not know goes to nobody.
    pub fn build(graph: &FollowGraph, text: &str) -> Result<Feed, Error> {
        let mut feed = Feed::default();
        for user in graph.users() {
            feed.timelines.insert(user.clone(), Vec::new());
        }
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let post = Post::from_line(line)?;
            let followers = match graph.followers_of(post.author.as_str()) {
                Some(followers) => followers,
                None => {
                    tracing::debug!(author = ?post.author, "dropping post from unknown author");
                    continue;
                }
            };
            for follower in followers {
                feed.timelines
                    .entry(follower.clone())
                    .or_insert_with(Vec::new)
                    .push(post.clone());
            }
        }
        Ok(feed)
    }

    /// Timelines in display order
    pub fn iter(&self) -> impl Iterator<Item = (&UserName, &[Post])> {
        self.timelines
            .iter()
            .map(|(user, posts)| (user, posts.as_slice()))
    }

    pub fn timeline(&self, user: &str) -> Option<&[Post]> {
        self.timelines.get(user).map(|posts| posts.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPH: &str = "Ward follows Alan\nAlan follows Martin\nWard follows Martin, Alan";

    fn graph() -> FollowGraph {
        FollowGraph::parse(GRAPH).expect("parsing follow graph")
    }

    fn built(posts: &str) -> Feed {
        Feed::build(&graph(), posts).expect("building feed")
    }

    fn texts(feed: &Feed, user: &str) -> Vec<String> {
        feed.timeline(user)
            .unwrap_or_else(|| panic!("no timeline for user {}", user))
            .iter()
            .map(|post| format!("{}: {}", post.author, post.text))
            .collect()
    }

    #[test]
    fn delivers_in_posting_order() {
        let feed = built("Alan> hi\nWard> hello\nAlan> bye");
        assert_eq!(texts(&feed, "Alan"), ["Alan: hi", "Alan: bye"]);
        assert!(texts(&feed, "Martin").is_empty());
        assert_eq!(texts(&feed, "Ward"), ["Alan: hi", "Ward: hello", "Alan: bye"]);
    }

    #[test]
    fn every_known_user_has_a_timeline() {
        let feed = built("");
        let users: Vec<&str> = feed.iter().map(|(user, _)| user.as_str()).collect();
        assert_eq!(users, ["Alan", "Martin", "Ward"]);
        assert!(feed.iter().all(|(_, posts)| posts.is_empty()));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let feed = built("Alan> hi\n\n\n\n\n\n\nWard> hello\n");
        assert_eq!(texts(&feed, "Ward"), ["Alan: hi", "Ward: hello"]);
    }

    #[test]
    fn unknown_author_goes_to_nobody() {
        let feed = built("Zork> nobody reads this\nAlan> hi");
        assert!(feed.timeline("Zork").is_none());
        for user in ["Alan", "Ward"] {
            assert_eq!(texts(&feed, user), ["Alan: hi"]);
        }
        assert!(texts(&feed, "Martin").is_empty());
    }

    #[test]
    fn bad_post_line_aborts() {
        assert_eq!(
            Feed::build(&graph(), "Alan> hi\nAlan>"),
            Err(Error::BadPostLine("Alan>".to_string())),
        );
    }

    #[test]
    fn post_broken_across_lines_aborts() {
        let posts = "Alan> If you have a procedure with 10 \nparameters, you probably missed some.";
        assert_eq!(
            Feed::build(&graph(), posts),
            Err(Error::BadPostLine("parameters, you probably missed some.".to_string())),
        );
    }
}
