use anyhow::Result;

use crate::shared::AppContext;

pub async fn login(
    ctx: &mut AppContext,
    username: Option<String>,
    password: String,
) -> Result<()> {
    let username = username.unwrap_or_else(|| ctx.config.username.clone());

    let user = ctx
        .session
        .login(&ctx.db, &ctx.config, &username, &password)
        .await?
        .clone();
    ctx.session.store(&ctx.config.session_path())?;

    ctx.note("Logged in:");
    ctx.emit(&user)
}

pub fn logout(ctx: &mut AppContext) -> Result<()> {
    let previous = ctx.session.logout();
    ctx.session.store(&ctx.config.session_path())?;

    match previous {
        Some(user) => ctx.note(format!("Logged out {}", user.username)),
        None => ctx.note("Nobody was logged in"),
    }
    Ok(())
}
