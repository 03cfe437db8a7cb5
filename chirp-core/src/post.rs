use crate::{Error, UserName};

/// Longer post texts are cut down to this many characters
pub const MAX_POST_LEN: usize = 140;

const AUTHOR_SEPARATOR: &str = "> ";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    pub author: UserName,
    pub text: String,
}

impl Post {
    /// Builds a post, keeping only the first `MAX_POST_LEN` characters of `text`
    pub fn new(author: UserName, text: &str) -> Post {
        let text = match text.char_indices().nth(MAX_POST_LEN) {
            Some((end, _)) => &text[..end],
            None => text,
        };
        Post {
            author,
            text: text.to_string(),
        }
    }

    /// Parses one `<author>> <text>` post line
    ///
    /// Only the first `"> "` is the separator, so the text itself may contain
    /// `>`. Apart from truncation the text is kept as-is, whitespace included.
    pub fn from_line(line: &str) -> Result<Post, Error> {
        let (author, text) = line
            .split_once(AUTHOR_SEPARATOR)
            .ok_or_else(|| Error::BadPostLine(line.to_string()))?;
        if text.is_empty() {
            return Err(Error::BadPostLine(author.to_string()));
        }
        let author = UserName::new(author.trim())?;
        Ok(Post::new(author, text))
    }
}
