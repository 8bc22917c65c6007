use tabula::SeqModel;

pub const USERS: &str = "create table users (
    id integer primary key autoincrement,
    name text not null,
    email text,
    active boolean,
    score real
)";

pub const USER_ACCOUNT: &str = "create table user_account (
    account_id integer primary key autoincrement,
    login varchar(64) not null,
    balance integer
)";

/// DDL for one `event` shard.
pub fn event_shard(suffix: &str) -> String {
    format!(
        "create table event{suffix} (
            id integer primary key autoincrement,
            kind text not null,
            payload text
        )"
    )
}

tabula::model! {
    #[derive(Debug)]
    pub struct User;

    #[derive(Debug)]
    pub struct UserAccount;

    /// Sharded by year: `event_2023`, `event_2024`, ...
    #[derive(Debug)]
    pub struct Event;

    /// Declares no suffix pattern.
    #[derive(Debug)]
    pub struct Draft;
}

impl SeqModel for Event {
    fn latest_suffix() -> String {
        "_2025".to_string()
    }

    fn suffix_pattern() -> String {
        r"_\d{4}".to_string()
    }
}

impl SeqModel for Draft {
    fn latest_suffix() -> String {
        "_v1".to_string()
    }

    fn suffix_pattern() -> String {
        String::new()
    }
}
