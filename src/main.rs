use std::env;
use std::sync::Arc;

use log::{error, info, warn};

use messenger_client::auth::{self, Identity};
use messenger_client::integration::{self, HttpChatApi};
use messenger_client::{Session, user};

#[tokio::main]
async fn main() -> messenger_client::Result<()> {
    let config = integration::Config::env()?;
    integration::init_logger()?;

    let client = integration::init_http_client(&config)?;
    let api = Arc::new(HttpChatApi::new(client, &config));

    let identity = Identity::new();
    match env::var("AUTH_USER_ID") {
        Ok(id) => {
            identity.set_auth_user(Some(auth::User::new(id, ""))).await;
        }
        Err(_) => warn!("AUTH_USER_ID is not set, contacts cannot be listed"),
    }
    if let Ok(ids) = env::var("ONLINE_USERS") {
        identity
            .set_online_users(ids.split(',').map(|id| user::Id::from(id.trim())))
            .await;
    }

    info!("fetching directory from {}", config.api_url());
    let session = Session::new(api, Arc::new(identity));
    if let Err(e) = session.refresh().await {
        error!("could not refresh directory: {e}");
    }

    let online_only = env::var("ONLINE_ONLY").is_ok_and(|v| v == "true");
    print_sidebar(&session, online_only).await?;

    session.close().await;
    Ok(())
}

async fn print_sidebar(session: &Session, online_only: bool) -> messenger_client::Result<()> {
    let groups = session.groups().await;
    if !groups.is_empty() {
        println!("GROUPS");
        for g in groups.iter() {
            println!("  {} ({} members)", g.name(), g.member_count());
        }
    }

    println!("CONTACTS ({} online)", session.online_count().await?);
    let contacts = session.visible_contacts(online_only).await?;
    if contacts.is_empty() {
        println!("  No users found");
    }
    for u in &contacts {
        let status = if session.is_online(u.id()).await {
            "Online"
        } else {
            "Offline"
        };
        println!("  {} [{status}] {}", u.full_name(), u.picture());
    }

    Ok(())
}
