use std::collections::HashMap;
use crate::authors::domain::model::{AuthorBookRow, AuthorGroup};

/// Groups join rows by `author_name` in a single pass.
///
/// Groups come out in the order their author was first seen and each group keeps its books
/// in row order. A row without a book still opens the group for its author.
pub fn group_by_author<I>(rows: I) -> Vec<AuthorGroup>
    where I: IntoIterator<Item=AuthorBookRow> {
    let mut groups: Vec<AuthorGroup> = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let pos = match index.get(row.author_name.as_str()) {
            Some(pos) => *pos,
            None => {
                groups.push(AuthorGroup::new(row.author_name.as_str()));
                index.insert(row.author_name.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        if let Some(summary) = row.summary() {
            groups[pos].books.push(summary);
        }
    }
    groups
}

// Case-insensitive substring match on the author name.
pub fn filter_by_author_name(groups: Vec<AuthorGroup>, name: &str) -> Vec<AuthorGroup> {
    let name = name.to_lowercase();
    groups.into_iter()
        .filter(|g| g.author_name.to_lowercase().contains(&name))
        .collect()
}
