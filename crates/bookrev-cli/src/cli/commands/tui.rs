//! Interactive client launcher.

use anyhow::{Context as _, Result};
use bookrev_tui::{Route, Services};

use super::Context;

pub fn run(ctx: &Context, route: Route) -> Result<()> {
    let services = Services {
        auth: ctx.auth()?,
        catalog: ctx.catalog()?,
    };
    bookrev_tui::run_tui(services, &ctx.base_url, route).context("interactive client failed")
}
