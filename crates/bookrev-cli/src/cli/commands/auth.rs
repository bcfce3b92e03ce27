//! Login, logout and session status.

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use bookrev_core::api::Credentials;
use bookrev_core::session::mask_token;

use super::Context;

pub async fn login(ctx: &Context, user: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let auth = ctx.auth()?;
    auth.login(&Credentials::new(user, password))
        .await
        .with_context(|| format!("Login failed for '{user}'"))?;

    println!("Logged in as {user}");
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.auth()?.logout().context("Logout failed")?;
    println!("Logged out");
    Ok(())
}

pub fn status(ctx: &Context) {
    match ctx.session.get_token().filter(|token| !token.is_empty()) {
        Some(token) => println!("Logged in (token {})", mask_token(&token)),
        None => println!("Not logged in"),
    }
    println!("Backend: {}", ctx.base_url);
}

/// Reads one line from stdin. Input is echoed; prefer piping in scripts.
fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush().context("flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
