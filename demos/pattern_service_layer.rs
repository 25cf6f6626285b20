//! Service Layer Pattern
//!
//! Repository calls return domain failures as `Error` values; the service
//! layer validates and reshapes them without unpacking results by hand.

use easy_result::{Error, Result};

// Domain errors
mod user_errors {
    use easy_result::Error;

    pub const NOT_FOUND: Error = Error::from_static("User.NotFound", "No user has that id.");
    pub const INACTIVE: Error = Error::from_static("User.Inactive", "The account is disabled.");
}

#[derive(Debug, Clone)]
struct User {
    id: u64,
    name: String,
    active: bool,
}

// Repository layer: an absent row becomes Error::NULL_VALUE through the coercion
fn fetch_user_row(user_id: u64) -> Result<User> {
    let rows = [
        User { id: 1, name: "alice".into(), active: true },
        User { id: 2, name: "bob".into(), active: false },
    ];
    rows.into_iter().find(|u| u.id == user_id).into()
}

// Service layer
fn load_profile(user_id: u64) -> Result<String> {
    fetch_user_row(user_id)
        .map_error(|e| if e == Error::NULL_VALUE { user_errors::NOT_FOUND } else { e })
        .ensure(|u| u.active, user_errors::INACTIVE)
        .map(|u| format!("Profile: {} (#{})", u.name, u.id))
}

fn main() {
    for id in [1, 2, 3] {
        let line = load_profile(id).match_with(
            |profile| profile,
            |e| format!("Error: {} ({})", e.code(), e.message()),
        );
        println!("{}", line);
    }
    // Output:
    // Profile: alice (#1)
    // Error: User.Inactive (The account is disabled.)
    // Error: User.NotFound (No user has that id.)
}
