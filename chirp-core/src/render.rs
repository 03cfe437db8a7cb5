use crate::Feed;

/// Formats the whole feed as one text block
///
/// One `<name>:` header per user in alphabetical order, then one tab-indented
/// `@<author>: <text>` line per post on their timeline. No trailing newline.
pub fn render(feed: &Feed) -> String {
    let mut res = String::new();
    for (user, posts) in feed.iter() {
        res.push_str(user.as_str());
        res.push_str(":\n");
        for post in posts {
            res.push_str("\t@");
            res.push_str(post.author.as_str());
            res.push_str(": ");
            res.push_str(&post.text);
            res.push('\n');
        }
    }
    let end = res.trim_end().len();
    res.truncate(end);
    res
}
