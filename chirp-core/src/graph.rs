use std::collections::{HashMap, HashSet};

use crate::{Error, UserName};

const FOLLOWS_KEYWORD: &str = "follows";

/// Maps each user to the set of users who follow them
///
/// Every user mentioned anywhere in the input ends up as a key, and every user
/// follows themselves.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FollowGraph {
    followers: HashMap<UserName, HashSet<UserName>>,
}

impl FollowGraph {
    /// Parses the full text of a follow-graph file
    ///
    /// One declaration per line, `<follower> follows <name>, <name>, ...`;
    /// blank lines are skipped. The space around the keyword may or may not be
    /// there.
    pub fn parse(text: &str) -> Result<FollowGraph, Error> {
        let mut graph = FollowGraph::default();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            graph.add_declaration(line)?;
        }
        Ok(graph)
    }

    fn add_declaration(&mut self, line: &str) -> Result<(), Error> {
        let (follower, followed) = match line.split_once(FOLLOWS_KEYWORD) {
            Some((follower, followed)) if !followed.trim().is_empty() => (follower, followed),
            _ => return Err(Error::BadFollowLine(line.to_string())),
        };
        let follower = UserName::new(follower.trim())?;
        let mut followed = followed
            .split(',')
            .map(|name| UserName::new(name.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        // A user always follows themselves
        followed.push(follower.clone());
        for user in followed {
            let fans = self
                .followers
                .entry(user.clone())
                .or_insert_with(HashSet::new);
            fans.insert(user);
            fans.insert(follower.clone());
        }
        Ok(())
    }

    /// The users following `user`, or `None` if the graph never saw them
    pub fn followers_of(&self, user: &str) -> Option<&HashSet<UserName>> {
        self.followers.get(user)
    }

    pub fn users(&self) -> impl Iterator<Item = &UserName> {
        self.followers.keys()
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }
}
