use rtrack_core::drafts::NewDeveloper;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    email: Option<&str>,
    modules: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = NewDeveloper {
        name: name.to_string(),
        email: email.map(str::to_string),
    };
    let developer = ctx
        .service
        .create_developer_with_modules(&draft, modules)
        .await?;
    output(&developer, flags.format)
}
