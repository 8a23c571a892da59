//! Детерминированные демо-данные

use contracts::domain::a001_user::User;
use contracts::domain::a002_post::Post;

const FIRST_NAMES: &[&str] = &[
    "George", "Janet", "Emma", "Eve", "Charles", "Tracey", "Michael", "Lindsay", "Tobias",
    "Byron", "Rachel", "Alicia",
];

const LAST_NAMES: &[&str] = &[
    "Bluth", "Weaver", "Wong", "Holt", "Morris", "Ramos", "Lawson", "Ferguson", "Funke",
    "Fields", "Edwards", "Marsh",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

/// Пользователи с id 1..=count. У каждого третьего нет аватара.
pub fn users(count: usize) -> Vec<User> {
    (1..=count as u64)
        .map(|id| {
            let i = (id - 1) as usize;
            let first_name = FIRST_NAMES[i % FIRST_NAMES.len()].to_string();
            let last_name = LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()].to_string();
            let email = format!(
                "{}.{}{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                id
            );
            let avatar = (id % 3 != 0).then(|| format!("https://i.pravatar.cc/64?img={}", id % 70));
            User {
                id,
                email,
                first_name,
                last_name,
                avatar,
            }
        })
        .collect()
}

/// Посты с id 1..=count, распределённые по `user_count` авторам
pub fn posts(count: usize, user_count: usize) -> Vec<Post> {
    let authors = user_count.max(1) as u64;
    (1..=count as u64)
        .map(|id| {
            let i = id as usize;
            let title = sentence(i, 4);
            let body = sentence(i * 7, 12);
            Post {
                user_id: (id - 1) % authors + 1,
                id,
                title,
                body,
            }
        })
        .collect()
}

fn sentence(start: usize, len: usize) -> String {
    (0..len)
        .map(|k| WORDS[(start + k * 3) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_have_sequential_unique_ids() {
        let users = users(25);
        assert_eq!(users.len(), 25);
        assert_eq!(users.first().unwrap().id, 1);
        assert_eq!(users.last().unwrap().id, 25);
        assert!(users[2].avatar.is_none());
        assert!(users[0].avatar.is_some());
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(users(5), users(5));
        assert_eq!(posts(10, 3), posts(10, 3));
    }

    #[test]
    fn test_posts_reference_existing_authors() {
        let posts = posts(100, 25);
        assert!(posts.iter().all(|p| (1..=25).contains(&p.user_id)));
        assert!(posts.iter().all(|p| !p.title.is_empty()));
    }
}
