//! Sign-in, registration, profile and location listing.

use crate::render;
use anyhow::Context;
use log::info;
use overhang_core::api::ApiClient;
use overhang_core::grade::Grade;
use overhang_core::models::{LoginCredentials, RegisterCredentials, UserUpdate};

pub async fn login(api: &ApiClient, username: String, password: String) -> anyhow::Result<()> {
    let credentials = LoginCredentials { username, password };
    api.login(&credentials)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Invalid credentials")))?;
    println!("signed in as {}", credentials.username);
    Ok(())
}

pub async fn register(
    api: &ApiClient,
    username: String,
    password: String,
    email: Option<String>,
    home_location_id: Option<i64>,
) -> anyhow::Result<()> {
    let credentials = RegisterCredentials {
        username,
        email,
        password,
        home_location_id,
    };
    api.register(&credentials)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Registration failed")))?;
    println!("registered and signed in as {}", credentials.username);
    Ok(())
}

pub fn logout(api: &ApiClient) {
    api.logout();
    println!("signed out");
}

pub async fn me(api: &ApiClient) -> anyhow::Result<()> {
    let user = api.current_user().await.context("Failed to load user")?;
    println!("{} (id {})", user.username, user.id);
    if let Some(email) = &user.email {
        println!("email:          {email}");
    }
    println!(
        "home location:  {}",
        user.home_location_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!(
        "default grade:  {}",
        user.default_grade
            .map(|g| g.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(())
}

pub async fn settings(
    api: &ApiClient,
    home_location_id: Option<i64>,
    default_grade: Option<&str>,
) -> anyhow::Result<()> {
    let default_grade = default_grade
        .map(str::parse::<Grade>)
        .transpose()
        .context("Invalid --default-grade")?;
    if home_location_id.is_none() && default_grade.is_none() {
        anyhow::bail!("nothing to update: pass --home-location-id and/or --default-grade");
    }
    let update = UserUpdate {
        home_location_id,
        default_grade,
    };
    let user = api
        .update_user(&update)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to update settings")))?;
    info!("settings updated for {}", user.username);
    println!("Settings updated successfully!");
    Ok(())
}

pub async fn locations(api: &ApiClient, csv: bool) -> anyhow::Result<()> {
    let locations = api
        .locations()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load locations")))?;
    if csv {
        render::locations_csv(std::io::stdout().lock(), &locations)?;
    } else {
        print!("{}", render::locations_text(&locations));
    }
    Ok(())
}
