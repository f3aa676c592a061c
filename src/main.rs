use chrono::NaiveDate;
use log::info;
use projectable::{AttributeSource, Projectable, project_all, projectable};
use rand::seq::IndexedRandom;
use std::time::Instant;

#[derive(Debug, Clone, AttributeSource)]
struct User {
    id: u64,
    name: String,
    credit_card: String,
    secret_token: String,
    quote: String,
    joined_on: NaiveDate,
}

projectable! {
    User {
        id,
        name,
        "quote",
        joined_on,
        "random" => |_| [1, 2, 3].choose(&mut rand::rng()).copied(),
        two_times_two => |_| 2 * 2,
        encrypted_token => |user| format!("{} secret sauce", user.secret_token),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut user = User {
        id: 1,
        name: "pote".to_string(),
        credit_card: "1123123241241".to_string(),
        secret_token: "i2j34i2j34302843".to_string(),
        quote: "It's bigger on the inside!".to_string(),
        joined_on: NaiveDate::from_ymd_opt(2013, 11, 23).unwrap_or_default(),
    };

    info!("Declared keys: {:?}", User::declared_keys()?);
    info!("{}", serde_json::to_string_pretty(&user.to_map()?)?);

    user.secret_token = "NEW STUFF".to_string();
    info!("After rotating the token: {}", serde_json::to_string(&user.to_hash()?)?);
    info!("Credit card stays private: {} digits", user.credit_card.len());

    let users: Vec<User> = (0..10_000)
        .map(|id| User {
            id,
            ..user.clone()
        })
        .collect();
    let start = Instant::now();
    let projections = project_all(&users)?;
    info!(
        "Projected {} users in {:?}",
        projections.len(),
        start.elapsed()
    );

    Ok(())
}
