use rtrack_core::scoping::ReleaseFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    release: Option<&str>,
    unassigned: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = if unassigned {
        ReleaseFilter::Unassigned
    } else {
        ReleaseFilter::from_option(release)
    };
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let mut tickets = ctx.service.try_tickets_with_relations(&filter).await?;
    truncate_to(&mut tickets, limit);
    output(&tickets, flags.format)
}
